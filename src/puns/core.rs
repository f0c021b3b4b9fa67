use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;

static DATA_DIR: Dir = include_dir!("src/puns/data");

pub const PUNS_FILE: &str = "puns.json";
pub const ANONYMOUS: &str = "anon";

/// One community-curated pun and who submitted it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PunRecord {
    pub content: String,
    pub attribution: String,
}

impl PunRecord {
    pub fn new(content: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            attribution: attribution.into(),
        }
    }
}

impl fmt::Display for PunRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}: {}", self.attribution, self.content)
    }
}

// On-disk shape of one line in the data file
#[derive(Deserialize)]
struct RawRecord {
    pun: String,
    #[serde(default)]
    github_username: Option<String>,
}

impl From<RawRecord> for PunRecord {
    fn from(raw: RawRecord) -> Self {
        Self {
            content: raw.pun,
            attribution: raw
                .github_username
                .unwrap_or_else(|| ANONYMOUS.to_string()),
        }
    }
}

/// Where curated puns are read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PunSource {
    /// The data file compiled into the binary
    #[default]
    Bundled,
    /// A JSONL file on disk
    File(PathBuf),
}

impl PunSource {
    /// Read every record from the source.
    ///
    /// A missing or unreadable source yields an empty list, and lines that
    /// do not parse are skipped. Callers treat an empty list as "no puns".
    pub fn load(&self) -> Vec<PunRecord> {
        match self {
            PunSource::Bundled => match DATA_DIR
                .get_file(PUNS_FILE)
                .and_then(|file| file.contents_utf8())
            {
                Some(text) => parse_records(text),
                None => {
                    tracing::warn!("bundled {} is missing or not UTF-8", PUNS_FILE);
                    Vec::new()
                }
            },
            PunSource::File(path) => match fs::read_to_string(path) {
                Ok(text) => parse_records(&text),
                Err(e) => {
                    tracing::warn!("could not read puns from {}: {}", path.display(), e);
                    Vec::new()
                }
            },
        }
    }
}

/// Parse JSONL text, skipping blank and malformed lines
pub fn parse_records(text: &str) -> Vec<PunRecord> {
    let mut records = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_record(line) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("skipping pun on line {}: {}", line_no + 1, e),
        }
    }
    tracing::debug!("loaded {} curated puns", records.len());
    records
}

pub fn parse_record(line: &str) -> Result<PunRecord> {
    let raw: RawRecord = from_str(line)?;
    Ok(raw.into())
}
