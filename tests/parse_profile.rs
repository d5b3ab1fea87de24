// tests/parse_profile.rs
//
// Description-text parsing and the page-level fallbacks.

use lol_ladder::data::AccountRecord;
use lol_ladder::specs::profile::{ fallback_record, parse_description, parse_profile };

const URL: &str = "https://www.op.gg/summoners/euw/Foo-EUW";

fn page(description: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
        <meta charset="utf-8">
        <meta name="description" content="{description}">
        <title>Foo#EUW - Summoner Stats - League of Legends</title>
        </head><body><div id="__next"></div></body></html>"#
    )
}

#[test]
fn ranked_summary_yields_all_fields() {
    let r = parse_description("Foo#EUW / Bronze 2 82LP / 17Win 10Lose Win rate 63%", URL);
    assert_eq!(r, AccountRecord {
        display_name: "Foo#EUW".into(),
        rank_label: "Bronze 2".into(),
        points_label: "82LP".into(),
        wins: "17".into(),
        losses: "10".into(),
        profile_url: URL.into(),
    });
}

#[test]
fn level_marker_means_unranked() {
    let r = parse_description("Bar#1123 / Lv. 312 / 17Win 10Lose", URL);
    assert_eq!(r.display_name, "Bar#1123");
    assert_eq!(r.rank_label, "Unranked");
    assert_eq!(r.points_label, "-");
    assert_eq!(r.wins, "-");
    assert_eq!(r.losses, "-");
    assert_eq!(r.profile_url, URL);
}

#[test]
fn no_separator_keeps_empty_rank() {
    let r = parse_description("Just a summary with 3Win 4Lose", URL);
    assert_eq!(r.display_name, "Just a summary with 3Win 4Lose");
    assert_eq!(r.rank_label, "");
    assert_eq!(r.points_label, "0 LP");
    assert_eq!(r.wins, "3");
    assert_eq!(r.losses, "4");
}

#[test]
fn rank_without_points_defaults_to_zero_lp() {
    let r = parse_description("Foo#EUW / Gold 4 / 1Win 0Lose", URL);
    assert_eq!(r.rank_label, "Gold 4");
    assert_eq!(r.points_label, "0 LP");
}

#[test]
fn single_token_rank_degrades() {
    let r = parse_description("Foo#EUW / Challenger", URL);
    assert_eq!(r.rank_label, "Challenger");
    assert_eq!(r.points_label, "0 LP");
    assert_eq!(r.wins, "-");
    assert_eq!(r.losses, "-");
}

#[test]
fn empty_rank_segment() {
    let r = parse_description("Foo#EUW / ", URL);
    assert_eq!(r.display_name, "Foo#EUW");
    assert_eq!(r.rank_label, "");
    assert_eq!(r.points_label, "0 LP");
}

#[test]
fn full_page_goes_through_meta_lookup() {
    let r = parse_profile(&page("Foo#EUW / Silver 1 99LP / 40Win 38Lose"), URL);
    assert_eq!(r.display_name, "Foo#EUW");
    assert_eq!(r.rank_label, "Silver 1");
    assert_eq!(r.points_label, "99LP");
    assert_eq!((r.wins.as_str(), r.losses.as_str()), ("40", "38"));
}

#[test]
fn page_without_description_falls_back_to_url() {
    let r = parse_profile("<html><head><title>Oops</title></head></html>", URL);
    assert_eq!(r, fallback_record(URL));
    assert_eq!(r.display_name, URL);
    assert_eq!(r.rank_label, "Unranked");
    assert_eq!(r.points_label, "-");
    assert_eq!(r.wins, "-");
    assert_eq!(r.losses, "-");
    assert_eq!(r.profile_url, URL);
}

#[test]
fn every_record_is_fully_populated() {
    let inputs = [
        "Foo#EUW / Bronze 2 82LP / 17Win 10Lose",
        "Foo#EUW / Lv. 30",
        "Foo#EUW",
        "",
        " / / / ",
    ];
    for text in inputs {
        let r = parse_description(text, URL);
        assert!(!r.points_label.is_empty(), "{text:?}");
        assert!(!r.wins.is_empty(), "{text:?}");
        assert!(!r.losses.is_empty(), "{text:?}");
        assert_eq!(r.profile_url, URL);
    }
}
