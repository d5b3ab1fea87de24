// tests/export.rs
use std::fs;
use std::path::PathBuf;

use lol_ladder::config::options::{ AppOptions, ExportFormat };
use lol_ladder::data::AccountRecord;
use lol_ladder::file::export_leaderboard;
use lol_ladder::ladder::score_and_sort;
use lol_ladder::render;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("lol_ladder_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> Vec<lol_ladder::data::ScoredRecord> {
    let rec = |name: &str, rank: &str, lp: &str, w: &str, l: &str| AccountRecord {
        display_name: name.into(),
        rank_label: rank.into(),
        points_label: lp.into(),
        wins: w.into(),
        losses: l.into(),
        profile_url: format!("https://www.op.gg/summoners/euw/{}", name.replace('#', "-")),
    };
    score_and_sort(vec![
        rec("RoidDesBronzes#EUW", "Bronze 2", "82LP", "17", "10"),
        AccountRecord::unranked("Errewyn#K C", "https://www.op.gg/summoners/euw/Errewyn-K%20C"),
        rec("Buldoshield#1123", "Gold 1", "10LP", "50", "40"),
        rec("Fourth#EUW", "Iron 4", "0 LP", "1", "9"),
    ])
}

#[test]
fn csv_has_rank_order_and_optional_headers() {
    let mut opts = AppOptions::default();
    opts.export.set_format(ExportFormat::Csv);
    opts.export.include_headers = true;
    let dir = tmp_dir("csv");
    opts.export.set_path(dir.join("ladder").to_str().unwrap());

    let written = export_leaderboard(&opts.export, &sample()).unwrap();
    assert!(written.to_string_lossy().ends_with("ladder.csv"));

    let s = fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines[0], "Rank,Summoner,Tier,LP,Wins,Losses,Score,Team,Profile");
    assert!(lines[1].starts_with("1,Buldoshield#1123,Gold 1,10LP,50,40,15.10,Team Bouclier,"));
    assert!(lines[2].starts_with("2,RoidDesBronzes#EUW,Bronze 2,82LP,17,10,6.82,Les Bronzés,"));
    assert!(lines[3].starts_with("3,Fourth#EUW,Iron 4,0 LP,1,9,0.00,"));
    assert!(lines[4].starts_with("4,Errewyn#K C,Unranked,-,-,-,-1.00,"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn tsv_without_headers() {
    let mut opts = AppOptions::default();
    opts.export.set_format(ExportFormat::Tsv);
    let dir = tmp_dir("tsv");
    opts.export.set_path(dir.join("out.txt").to_str().unwrap());

    // typed extension wins over the format's
    let written = export_leaderboard(&opts.export, &sample()).unwrap();
    assert!(written.to_string_lossy().ends_with("out.txt"));

    let s = fs::read_to_string(&written).unwrap();
    assert!(!s.contains("Summoner"));
    assert!(s.lines().next().unwrap().starts_with("1\tBuldoshield#1123\tGold 1\t10LP\t"));
}

#[test]
fn html_page_has_cards_in_order_with_medals() {
    let mut opts = AppOptions::default();
    let dir = tmp_dir("html");
    opts.export.set_path(dir.join("nested").join("index").to_str().unwrap());
    assert_eq!(opts.export.format, ExportFormat::Html);

    let written = export_leaderboard(&opts.export, &sample()).unwrap();
    assert!(written.to_string_lossy().ends_with("index.html"));

    let html = fs::read_to_string(&written).unwrap();
    assert!(html.contains("<title>Classement Elo LoL</title>"));

    let first = html.find("Buldoshield#1123").unwrap();
    let second = html.find("RoidDesBronzes#EUW").unwrap();
    let last = html.find("Errewyn#K C").unwrap();
    assert!(first < second && second < last);

    assert!(html.contains("🥇 Buldoshield#1123"));
    assert!(html.contains("🥈 RoidDesBronzes#EUW"));
    assert!(html.contains("🥉 Fourth#EUW"));
    assert!(html.contains("🎮 Errewyn#K C"));
    assert!(html.contains("#FFD700"));
    assert!(html.contains("#444444"));
    assert!(html.contains("Team Bouclier"));
    assert!(html.contains("Sans équipe"));
}

#[test]
fn html_escapes_page_text() {
    let ladder = score_and_sort(vec![AccountRecord::unranked("<b>x</b>", "https://op.gg/x")]);
    let html = render::to_html(&ladder).unwrap();
    assert!(!html.contains("<b>x</b>"));
    assert!(html.contains("&lt;b&gt;x"));
}

#[test]
fn text_table_lists_everyone() {
    let text = render::to_text(&sample());
    assert!(text.starts_with("Classement Elo LoL"));
    assert_eq!(text.lines().filter(|l| l.contains("W / ")).count(), 4);
    assert!(text.contains(" 1. 🥇 Buldoshield#1123"));
}

#[test]
fn default_path_follows_format() {
    let mut opts = AppOptions::default();
    assert!(opts.export.is_default_path());
    assert_eq!(opts.export.out_path(), PathBuf::from("out").join("leaderboard.html"));
    opts.export.set_format(ExportFormat::Csv);
    assert_eq!(opts.export.out_path(), PathBuf::from("out").join("leaderboard.csv"));
}
