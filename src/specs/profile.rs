// src/specs/profile.rs
//! Scraping *spec* for an op.gg summoner profile.
//!
//! Purpose:
//! - Read the page's `<meta name="description">` summary and turn it into an
//!   [`AccountRecord`].
//!
//! The summary looks like:
//! ```text
//! RoidDesBronzes#EUW / Bronze 2 82LP / 17Win 10Lose Win rate 63%
//! ```
//! Segment 0 is the name, segment 1 is tier + sub-tier + points, and the
//! win/loss pair can appear anywhere. Accounts without ranked games show
//! their level instead (`… / Lv. 312 / …`).
//!
//! Non-Responsibilities:
//! - **No networking.** Callers hand in page text (see `scrape`).
//! - **No scoring.** See `ladder`.
//!
//! Never fails: whatever is missing or unrecognized becomes a sentinel.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::consts::*;
use crate::core::html::meta_content;
use crate::data::AccountRecord;

fn win_loss_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WIN_LOSS_PATTERN).expect("WIN_LOSS_PATTERN is a valid regex"))
}

/// Parse a full profile page.
pub fn parse_profile(page_body: &str, originating_url: &str) -> AccountRecord {
    match meta_content(page_body, META_DESCRIPTION) {
        Some(text) => parse_description(&text, originating_url),
        None => {
            logd!("Parse: no description meta for {originating_url}, falling back to Unranked");
            fallback_record(originating_url)
        }
    }
}

/// Record for a page that gave us nothing: named after its URL, unranked.
pub fn fallback_record(originating_url: &str) -> AccountRecord {
    AccountRecord::unranked(originating_url, originating_url)
}

/// Parse the description summary text itself.
pub fn parse_description(text: &str, originating_url: &str) -> AccountRecord {
    let mut segments = text.split(SEGMENT_SEP);
    let display_name = segments.next().unwrap_or_default();

    if text.contains(UNRANKED_MARKER) {
        return AccountRecord::unranked(display_name, originating_url);
    }

    // No separator at all → no rank segment; rank stays "" (not "Unranked").
    let tier_points = segments.next().unwrap_or_default();
    let (wins, losses) = win_loss(text);

    AccountRecord {
        display_name: s!(display_name),
        rank_label: rank_label(tier_points),
        points_label: points_label(tier_points),
        wins,
        losses,
        profile_url: s!(originating_url),
    }
}

/* ---------- helpers ---------- */

/// First two tokens: `"Bronze 2 82LP"` → `"Bronze 2"`.
fn rank_label(tier_points: &str) -> String {
    tier_points
        .split_whitespace()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last token if it carries the LP suffix, else the zero-points label.
fn points_label(tier_points: &str) -> String {
    match tier_points.split_whitespace().last() {
        Some(tok) if tok.contains(POINTS_SUFFIX) => s!(tok),
        _ => s!(ZERO_POINTS),
    }
}

fn win_loss(text: &str) -> (String, String) {
    match win_loss_re().captures(text) {
        Some(caps) => (s!(&caps[1]), s!(&caps[2])),
        None => (s!(DASH), s!(DASH)),
    }
}
