//! Plain-text usage diary parsing.
//!
//! A diary is a directory of `.log`/`.txt` files where each line records
//! one day's consumption as `key=value` pairs, optionally prefixed with
//! an ISO date:
//!
//! ```text
//! # classroom A
//! 2026-05-11 electricity=12 water=160 paper=20 waste=0.5
//! 2026-05-12 electricity=10 water=150 paper=50 waste=1
//! ```
//!
//! Blank lines and `#` comments are skipped. `Strict` mode requires every
//! entry to carry all four resources; `BestEffort` defaults missing
//! fields to 0.

use std::{fs::File, io::BufRead, io::BufReader, path::Path};

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use walkdir::WalkDir;

use crate::types::{Resource, ResourceConsumption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Strict,
    BestEffort,
}

/// One diary line: an optional date label plus the parsed consumption.
#[derive(Debug, Clone)]
pub struct DiaryEntry {
    pub date: Option<String>,
    pub consumption: ResourceConsumption,
}

/// All entries collected from a diary directory, in path order.
#[derive(Debug, Clone)]
pub struct ParsedDiary {
    pub mode: ParseMode,
    pub entries: Vec<DiaryEntry>,
    pub sources: Vec<String>,
}

static RE_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([0-9]{4}-[0-9]{2}-[0-9]{2})\b").expect("valid regex"));

static RE_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(electricity|water|paper|waste)\s*=\s*([0-9]+(?:\.[0-9]+)?)")
        .expect("valid regex")
});

pub fn parse_diary_log<R: BufRead>(r: &mut R, mode: ParseMode) -> anyhow::Result<Vec<DiaryEntry>> {
    let mut entries = Vec::new();

    let mut line = String::new();
    loop {
        line.clear();
        let n = r.read_line(&mut line).context("read_line")?;
        if n == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let date = RE_DATE
            .captures(trimmed)
            .map(|cap| cap.get(1).unwrap().as_str().to_string());

        let mut consumption = ResourceConsumption::ZERO;
        let mut seen = [false; 4];
        for cap in RE_FIELD.captures_iter(trimmed) {
            let key = cap.get(1).unwrap().as_str().to_ascii_lowercase();
            let value: f64 = cap.get(2).unwrap().as_str().parse().unwrap_or(0.0);

            let resource = match key.as_str() {
                "electricity" => Resource::Electricity,
                "water" => Resource::Water,
                "paper" => Resource::Paper,
                "waste" => Resource::Waste,
                _ => continue,
            };
            consumption.set(resource, value);
            seen[resource as usize] = true;
        }

        if seen.iter().all(|s| !s) {
            if mode == ParseMode::Strict {
                anyhow::bail!("unrecognized diary line: {trimmed:?}");
            }
            continue;
        }

        if mode == ParseMode::Strict && !seen.iter().all(|s| *s) {
            anyhow::bail!("diary entry is missing resources: {trimmed:?}");
        }

        entries.push(DiaryEntry { date, consumption });
    }

    Ok(entries)
}

pub fn parse_diary_dir(
    input: &Path,
    mode: ParseMode,
    max_total_bytes_scanned: u64,
) -> anyhow::Result<ParsedDiary> {
    let mut entries: Vec<DiaryEntry> = Vec::new();
    let mut sources: Vec<String> = Vec::new();

    let mut scanned: u64 = 0;

    let mut files: Vec<_> = Vec::new();
    for entry in WalkDir::new(input).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let ext = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext == "log" || ext == "txt" {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();

    for path in files {
        let meta = std::fs::metadata(&path)?;
        let len = meta.len();
        if scanned.saturating_add(len) > max_total_bytes_scanned {
            break;
        }
        scanned += len;

        let f = File::open(&path).with_context(|| format!("open {}", path.display()))?;
        let mut reader = BufReader::new(f);

        let parsed = parse_diary_log(&mut reader, mode)
            .with_context(|| format!("parse diary {}", path.display()))?;

        entries.extend(parsed);
        sources.push(path.display().to_string());
    }

    Ok(ParsedDiary {
        mode,
        entries,
        sources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_dated_entries_in_order() {
        let input = b"# header comment\n\
            2026-05-11 electricity=12 water=160 paper=20 waste=0.5\n\
            2026-05-12 electricity=10 water=150 paper=50 waste=1\n";
        let mut r = Cursor::new(&input[..]);
        let entries = parse_diary_log(&mut r, ParseMode::Strict).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date.as_deref(), Some("2026-05-11"));
        assert_eq!(entries[0].consumption.waste, 0.5);
        assert_eq!(entries[1].consumption.paper, 50.0);
    }

    #[test]
    fn best_effort_defaults_missing_fields_to_zero() {
        let input = b"water=90 paper=5\n";
        let mut r = Cursor::new(&input[..]);
        let entries = parse_diary_log(&mut r, ParseMode::BestEffort).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, None);
        assert_eq!(entries[0].consumption.electricity, 0.0);
        assert_eq!(entries[0].consumption.water, 90.0);
    }

    #[test]
    fn strict_rejects_partial_entries() {
        let input = b"2026-05-12 electricity=10\n";
        let mut r = Cursor::new(&input[..]);
        let err = parse_diary_log(&mut r, ParseMode::Strict).unwrap_err();
        assert!(format!("{err:#}").contains("missing resources"));
    }

    #[test]
    fn best_effort_skips_noise_lines() {
        let input = b"totally unrelated text\nelectricity=1 water=2 paper=3 waste=4\n";
        let mut r = Cursor::new(&input[..]);
        let entries = parse_diary_log(&mut r, ParseMode::BestEffort).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let input = b"ELECTRICITY=3 Water=4 paper=5 WASTE=6\n";
        let mut r = Cursor::new(&input[..]);
        let entries = parse_diary_log(&mut r, ParseMode::Strict).unwrap();
        assert_eq!(entries[0].consumption.electricity, 3.0);
        assert_eq!(entries[0].consumption.waste, 6.0);
    }
}
