// src/cli.rs
use std::{ env, error::Error };

use crate::{
    config::{ consts::ACCOUNTS, options::{ AppOptions, ExportFormat } },
    core::HttpFetcher,
    file,
    progress::Progress,
    render,
    scrape,
};

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub options: AppOptions,
    pub print: bool,          // text table on stdout
    pub list_accounts: bool,  // list accounts then exit
    pub help: bool,
}

/// Progress lines on stderr.
struct CliProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done + self.failed, self.total, label);
    }
    fn item_failed(&mut self, label: &str) {
        self.failed += 1;
        eprintln!("[{}/{}] {} (fetch failed, shown as Unranked)", self.done + self.failed, self.total, label);
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    run_with(&params)
}

pub fn run_with(params: &Params) -> Result<(), Box<dyn Error>> {
    if params.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }
    if params.list_accounts {
        for (label, url) in ACCOUNTS {
            println!("{},{}", label, url);
        }
        return Ok(());
    }

    let fetcher = HttpFetcher::new()?;
    let mut progress = CliProgress { done: 0, failed: 0, total: 0 };
    let ladder = scrape::run(ACCOUNTS, &fetcher, Some(&mut progress));

    if params.print {
        print!("{}", render::to_text(&ladder));
    }

    let path = file::export_leaderboard(&params.options.export, &ladder)?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                let fmt = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?;
                params.options.export.set_format(fmt);
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                params.options.export.set_path(&v);
            }
            "--include-headers" => params.options.export.include_headers = true,
            "--print" => params.print = true,
            "--list-accounts" => params.list_accounts = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn defaults_to_html_in_out_dir() {
        let p = parse_args(args(&[])).unwrap();
        assert_eq!(p.options.export.format, ExportFormat::Html);
        assert!(p.options.export.out_path().ends_with("leaderboard.html"));
        assert!(!p.print && !p.list_accounts && !p.help);
    }

    #[test]
    fn format_drives_extension() {
        let p = parse_args(args(&["--format", "TSV", "--include-headers"])).unwrap();
        assert_eq!(p.options.export.format, ExportFormat::Tsv);
        assert!(p.options.export.out_path().ends_with("leaderboard.tsv"));
        assert!(p.options.export.include_headers);
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(parse_args(args(&["--format", "xml"])).is_err());
        assert!(parse_args(args(&["--format"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&["-o"])).is_err());
    }
}
