// src/teams.rs
//
// Static display name → team lookup, used to decorate leaderboard entries.

use serde::Serialize;

use crate::config::consts::{ PLACEHOLDER_LOGO, PLACEHOLDER_TEAM, TEAMS };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: &'static str,
    pub logo_url: &'static str,
}

pub const PLACEHOLDER: Team = Team { name: PLACEHOLDER_TEAM, logo_url: PLACEHOLDER_LOGO };

/// Team for a display name; the placeholder when the name isn't listed.
pub fn team_for(display_name: &str) -> Team {
    TEAMS
        .iter()
        .find(|(who, _, _)| *who == display_name)
        .map(|&(_, name, logo_url)| Team { name, logo_url })
        .unwrap_or(PLACEHOLDER)
}
