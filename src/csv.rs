// src/csv.rs
use std::io::{self, Write};

use crate::data::ScoredRecord;
use crate::teams::team_for;

pub const HEADERS: [&str; 9] = [
    "Rank", "Summoner", "Tier", "LP", "Wins", "Losses", "Score", "Team", "Profile",
];

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// One output row per ladder entry; `position` is 1-based.
pub fn ladder_row(position: usize, entry: &ScoredRecord) -> Vec<String> {
    let r = &entry.record;
    vec![
        position.to_string(),
        r.display_name.clone(),
        r.rank_label.clone(),
        r.points_label.clone(),
        r.wins.clone(),
        r.losses.clone(),
        format!("{:.2}", entry.score),
        s!(team_for(&r.display_name).name),
        r.profile_url.clone(),
    ]
}

/// Whole ladder as CSV/TSV text, best first.
pub fn to_export_string(ladder: &[ScoredRecord], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &HEADERS, sep);
    }
    for (i, entry) in ladder.iter().enumerate() {
        let _ = write_row(&mut buf, &ladder_row(i + 1, entry), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a", "b,c", "say \"hi\"", "K C"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b,c\",\"say \"\"hi\"\"\",K C\n");

        let mut buf = Vec::new();
        write_row(&mut buf, &["b,c", "x\ty"], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "b,c\t\"x\ty\"\n");
    }
}
