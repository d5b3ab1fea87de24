// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Accounts on the ladder: label → op.gg profile
pub const ACCOUNTS: &[(&str, &str)] = &[
    ("RoidDesBronzes-EUW", "https://www.op.gg/summoners/euw/RoidDesBronzes-EUW"),
    ("Buldoshield-1123",   "https://www.op.gg/summoners/euw/Buldoshield-1123"),
    ("Errewyn-K C",        "https://www.op.gg/summoners/euw/Errewyn-K%20C"),
];

// Page markup
pub const META_DESCRIPTION: &str = "description";
pub const SEGMENT_SEP: &str = " / ";
pub const UNRANKED_MARKER: &str = "Lv.";
pub const POINTS_SUFFIX: &str = "LP";
pub const WIN_LOSS_PATTERN: &str = r"(\d+)Win (\d+)Lose";

// Sentinels
pub const UNRANKED: &str = "Unranked";
pub const DASH: &str = "-";
pub const ZERO_POINTS: &str = "0 LP";

// Scoring
pub const UNRANKED_SCORE: f64 = -1.0;
pub const WORST_SUB_TIER: i64 = 4;
pub const TIER_BASES: &[(&str, i64)] = &[
    ("IRON", 0),
    ("BRONZE", 4),
    ("SILVER", 8),
    ("GOLD", 12),
    ("PLATINUM", 16),
    ("EMERALD", 20),
    ("DIAMOND", 24),
    ("MASTER", 28),
    ("GRANDMASTER", 32),
    ("CHALLENGER", 36),
];

// Teams: display name → (team, logo)
pub const TEAMS: &[(&str, &str, &str)] = &[
    ("RoidDesBronzes#EUW", "Les Bronzés", "https://ddragon.leagueoflegends.com/cdn/14.1.1/img/profileicon/7.png"),
    ("Buldoshield#1123",   "Team Bouclier", "https://ddragon.leagueoflegends.com/cdn/14.1.1/img/profileicon/12.png"),
];
pub const PLACEHOLDER_TEAM: &str = "Sans équipe";
pub const PLACEHOLDER_LOGO: &str = "https://ddragon.leagueoflegends.com/cdn/14.1.1/img/profileicon/0.png";

// Presentation
pub const PAGE_TITLE: &str = "Classement Elo LoL";
pub const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];
pub const OTHER_MEDAL: &str = "🎮";
pub const PODIUM_COLORS: [&str; 3] = ["#FFD700", "#C0C0C0", "#CD7F32"]; // gold, silver, bronze
pub const OTHER_COLOR: &str = "#444444";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "leaderboard";

// Logging
pub const LOG_FILE: &str = "out/debug.log";
