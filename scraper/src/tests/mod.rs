use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::ScrapeConfig;
use crate::driver::ScrapeRange;
use crate::error::Result;
use crate::fetch::TitleSource;
use crate::operator::Operator;
use crate::title::{extract_title, PageTitle};

pub mod fixtures;

pub const BASE_URL: &str = "https://hblinks.test/archives/";

/// Config that keeps every file inside `dir`
pub fn test_config(dir: &Path) -> ScrapeConfig {
    ScrapeConfig {
        base_url: BASE_URL.to_string(),
        output_dir: dir.join("json"),
        progress_file: dir.join("temp_progress.json"),
    }
}

/// Title source answering from a fixed table of ids, recording every lookup
#[derive(Default)]
pub struct ScriptedSource {
    titles: HashMap<String, String>,
    pub requested: Vec<String>,
    stop_on: Option<(String, Arc<AtomicBool>)>,
}

impl ScriptedSource {
    pub fn with_titles(titles: &[(u64, &str)]) -> Self {
        ScriptedSource {
            titles: titles
                .iter()
                .map(|(id, title)| (format!("{}{:05}", BASE_URL, id), title.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    /// Raise `flag` while `id` is being looked up, like a Ctrl-C mid-request
    pub fn stop_on(mut self, id: u64, flag: Arc<AtomicBool>) -> Self {
        self.stop_on = Some((format!("{}{:05}", BASE_URL, id), flag));
        self
    }

    pub fn requested_ids(&self) -> Vec<u64> {
        self.requested
            .iter()
            .filter_map(|url| url.strip_prefix(BASE_URL))
            .filter_map(|id| id.parse().ok())
            .collect()
    }
}

impl TitleSource for ScriptedSource {
    fn lookup(&mut self, url: &str) -> Option<PageTitle> {
        self.requested.push(url.to_string());
        if let Some((stop_url, flag)) = &self.stop_on {
            if stop_url == url {
                flag.store(true, Ordering::SeqCst);
            }
        }
        extract_title(self.titles.get(url).map(String::as_str))
    }
}

/// Operator with canned answers
pub struct ScriptedOperator {
    pub range: Option<ScrapeRange>,
    pub resume: bool,
    pub asked_range: usize,
    pub asked_resume: Vec<u64>,
}

impl ScriptedOperator {
    pub fn new(range: Option<ScrapeRange>, resume: bool) -> Self {
        ScriptedOperator {
            range,
            resume,
            asked_range: 0,
            asked_resume: Vec::new(),
        }
    }
}

impl Operator for ScriptedOperator {
    fn ask_range(&mut self) -> Result<ScrapeRange> {
        self.asked_range += 1;
        self.range.ok_or(crate::error::ScrapeError::InputClosed)
    }

    fn confirm_resume(&mut self, last_processed: u64) -> Result<bool> {
        self.asked_resume.push(last_processed);
        Ok(self.resume)
    }
}
