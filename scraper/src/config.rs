use std::path::{Path, PathBuf};

use crate::driver::ScrapeRange;

pub const DEFAULT_BASE_URL: &str = "https://hblinks.pro/archives/";
pub const DEFAULT_OUTPUT_DIR: &str = "./json";
pub const DEFAULT_PROGRESS_FILE: &str = "temp_progress.json";

/// Where a run fetches from and where it keeps its files.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub progress_file: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            progress_file: PathBuf::from(DEFAULT_PROGRESS_FILE),
        }
    }
}

impl ScrapeConfig {
    /// Archive page URL for an id, zero-padded to five digits.
    pub fn archive_url(&self, id: u64) -> String {
        format!("{}{:05}", self.base_url, id)
    }

    pub fn result_path(&self, range: ScrapeRange) -> PathBuf {
        result_path_in(&self.output_dir, range)
    }
}

fn result_path_in(dir: &Path, range: ScrapeRange) -> PathBuf {
    dir.join(format!("{}-{}.json", range.start, range.end))
}
