// src/scrape.rs
//
// Drives the pipeline: fetch → parse per account, strictly in order,
// then score and sort once.

use crate::{
    core::Fetch,
    data::{ AccountRecord, ScoredRecord },
    ladder,
    progress::Progress,
    specs::profile,
};

/// Fetch and parse every account, one after another.
/// A failed fetch becomes the Unranked fallback record; the loop carries on.
pub fn collect_records(
    accounts: &[(&str, &str)],
    fetcher: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<AccountRecord> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(accounts.len());
    }

    let mut records = Vec::with_capacity(accounts.len());

    for &(label, url) in accounts {
        let record = match fetcher.fetch(url) {
            Ok(body) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(label);
                }
                profile::parse_profile(&body, url)
            }
            Err(e) => {
                loge!("Scrape: {label} ({url}): {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(label);
                }
                profile::fallback_record(url)
            }
        };
        logd!("Scrape: {label} → {:?} {:?}", record.rank_label, record.points_label);
        records.push(record);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    records
}

/// Full run: collect, then score and sort.
pub fn run(
    accounts: &[(&str, &str)],
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Vec<ScoredRecord> {
    logf!("Scrape: Begin accounts={}", accounts.len());
    let ladder = ladder::score_and_sort(collect_records(accounts, fetcher, progress));
    logf!(
        "Scrape: Done ranked={} unranked={}",
        ladder.iter().filter(|r| !r.record.is_unranked()).count(),
        ladder.iter().filter(|r| r.record.is_unranked()).count(),
    );
    ladder
}
