// src/data.rs
//
// Record shapes that flow through the pipeline:
//   page text → AccountRecord → ScoredRecord → presentation

use crate::config::consts::{ DASH, UNRANKED };

/// One configured account as read from its profile page.
/// Every field is always populated; missing data uses sentinels (`"-"`, `"Unranked"`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountRecord {
    /// Name as shown on the page (`Name#TAG`), or the URL when the page gave nothing.
    pub display_name: String,
    /// Tier word + sub-tier (`"Bronze 2"`), `"Unranked"`, or `""` when the rank segment is missing.
    pub rank_label: String,
    /// `"82LP"`-style token, `"0 LP"` when ranked without one, `"-"` when unranked.
    pub points_label: String,
    pub wins: String,
    pub losses: String,
    /// Where the record came from. Not used for scoring.
    pub profile_url: String,
}

impl AccountRecord {
    /// The record used when a page yields no usable metadata.
    pub fn unranked(display_name: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            rank_label: s!(UNRANKED),
            points_label: s!(DASH),
            wins: s!(DASH),
            losses: s!(DASH),
            profile_url: profile_url.into(),
        }
    }

    pub fn is_unranked(&self) -> bool {
        self.rank_label == UNRANKED
    }
}

/// An `AccountRecord` with its comparison score. Built once by the scorer.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredRecord {
    pub record: AccountRecord,
    pub score: f64,
}
