// src/render.rs
//
// Presentation of a finished ladder: browser page (tera) and terminal text.
// Both only read the sorted records.

use std::error::Error;

use serde::Serialize;
use tera::{ Context, Tera };

use crate::config::consts::{ MEDALS, OTHER_COLOR, OTHER_MEDAL, PAGE_TITLE, PODIUM_COLORS };
use crate::data::ScoredRecord;
use crate::teams::{ team_for, Team };

// Registered with an .html name so tera autoescapes it.
const TEMPLATE_NAME: &str = "leaderboard.html";
const TEMPLATE: &str = include_str!("../templates/leaderboard.html.j2");

/// One rendered leaderboard line.
#[derive(Debug, Serialize)]
pub struct Entry<'a> {
    pub position: usize,
    pub podium: bool,
    pub medal: &'static str,
    pub color: &'static str,
    pub display_name: &'a str,
    pub rank_label: &'a str,
    pub points_label: &'a str,
    pub wins: &'a str,
    pub losses: &'a str,
    pub profile_url: &'a str,
    pub score: f64,
    pub team: Team,
}

/// Decorate the sorted ladder with position, medal, color and team.
pub fn entries(ladder: &[ScoredRecord]) -> Vec<Entry<'_>> {
    ladder
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let r = &e.record;
            Entry {
                position: i + 1,
                podium: i < MEDALS.len(),
                medal: MEDALS.get(i).copied().unwrap_or(OTHER_MEDAL),
                color: PODIUM_COLORS.get(i).copied().unwrap_or(OTHER_COLOR),
                display_name: &r.display_name,
                rank_label: &r.rank_label,
                points_label: &r.points_label,
                wins: &r.wins,
                losses: &r.losses,
                profile_url: &r.profile_url,
                score: e.score,
                team: team_for(&r.display_name),
            }
        })
        .collect()
}

/// Standalone HTML page for the ladder.
pub fn to_html(ladder: &[ScoredRecord]) -> Result<String, Box<dyn Error>> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;

    let mut ctx = Context::new();
    ctx.insert("title", PAGE_TITLE);
    ctx.insert("entries", &entries(ladder));

    Ok(tera.render(TEMPLATE_NAME, &ctx)?)
}

/// Plain-text table for the terminal.
pub fn to_text(ladder: &[ScoredRecord]) -> String {
    let rows = entries(ladder);
    let name_w = rows.iter().map(|e| e.display_name.chars().count()).max().unwrap_or(0).max(8);
    let rank_w = rows.iter().map(|e| e.rank_label.chars().count()).max().unwrap_or(0).max(4);

    let mut out = format!("{PAGE_TITLE}\n\n");
    for e in &rows {
        out.push_str(&format!(
            "{:>2}. {} {:<name_w$}  {:<rank_w$}  {:>6}  {}W / {}L  ({:.2})\n",
            e.position, e.medal, e.display_name, e.rank_label, e.points_label, e.wins, e.losses, e.score,
        ));
    }
    out
}
