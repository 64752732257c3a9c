use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};

/// Checkpoint of a scrape, rewritten after every saved item.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressRecord {
    #[serde(default)]
    pub last_processed: Option<u64>,
    #[serde(default)]
    pub start_number: Option<u64>,
    #[serde(default)]
    pub end_number: Option<u64>,
}

impl ProgressRecord {
    pub fn new(last_processed: Option<u64>, start_number: u64, end_number: u64) -> Self {
        ProgressRecord {
            last_processed,
            start_number: Some(start_number),
            end_number: Some(end_number),
        }
    }

    /// Last processed id and end bound, when both are usable for a resume.
    /// An id of zero counts as "nothing processed yet".
    pub fn resume_point(&self) -> Option<(u64, u64)> {
        match (self.last_processed, self.end_number) {
            (Some(last), Some(end)) if last > 0 => Some((last, end)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedProgress {
    Absent,
    Corrupt(String),
    Present(ProgressRecord),
}

pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProgressStore { path: path.into() }
    }

    pub fn load(&self) -> LoadedProgress {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return LoadedProgress::Absent,
            Err(e) => return LoadedProgress::Corrupt(e.to_string()),
        };

        match serde_json::from_str::<ProgressRecord>(&contents) {
            Ok(record) => LoadedProgress::Present(record),
            Err(e) => LoadedProgress::Corrupt(e.to_string()),
        }
    }

    /// Replaces the checkpoint file with `record`.
    pub fn save(&self, record: &ProgressRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        fs::write(&self.path, json).map_err(|e| ScrapeError::io(&self.path, e))?;
        debug!("Checkpoint {:?} written to {}", record, self.path.display());
        Ok(())
    }
}
