//! # Scraping “specs” module
//!
//! Page-specific parsing: each spec knows **where the ground truth lives** in
//! one remote page and how to read it into a fixed-shape record.
//!
//! ## What lives here
//! - **Pure parsing** of page text (`profile` reads an op.gg summoner page).
//! - **Fallback rules**: which sentinel goes where when the page is missing data.
//!
//! ## What does **not** live here
//! - **Networking** – `core::net` fetches, `scrape` decides when.
//! - **Scoring / ordering** – `ladder`.
//! - **Presentation** – `render`, `csv`, `gui`.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::run → core::net::Fetch::fetch
//!                        ↘ specs::profile::parse_profile → ladder::score_and_sort
//! ```
//!
//! ## Conventions & invariants
//! - Specs **never fail**; every record field is populated.
//! - Markup lookups go through `core::html`; string shapes are documented per spec.
//! - Specs are testable **offline** against literal page snippets.
pub mod profile;
