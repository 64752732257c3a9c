use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use indicatif::ProgressBar;
use log::{debug, info, warn};

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use crate::fetch::TitleSource;
use crate::operator::Operator;
use crate::progress::{LoadedProgress, ProgressRecord, ProgressStore};
use crate::results::{ArchiveEntry, ResultWriter};

/// Inclusive span of archive ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeRange {
    pub start: u64,
    pub end: u64,
}

impl ScrapeRange {
    pub fn ids(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }

    pub fn len(&self) -> u64 {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start).saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeStatus {
    Completed,
    Interrupted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeOutcome {
    pub status: ScrapeStatus,
    pub range: ScrapeRange,
    pub output: PathBuf,
    pub saved: usize,
    pub skipped: usize,
    /// Id written to the checkpoint when the run ended.
    pub last_processed: Option<u64>,
}

/// Picks the range to scrape: a resume of the saved checkpoint if the
/// operator wants one, otherwise fresh bounds from the operator.
pub fn resolve_range<O: Operator + ?Sized>(
    store: &ProgressStore,
    operator: &mut O,
) -> Result<ScrapeRange> {
    let record = match store.load() {
        LoadedProgress::Absent => {
            info!("No saved progress. Starting a new task.");
            return operator.ask_range();
        }
        LoadedProgress::Corrupt(reason) => {
            warn!(
                "Progress file is corrupted or empty ({}). Starting a new task.",
                reason
            );
            return operator.ask_range();
        }
        LoadedProgress::Present(record) => record,
    };

    let Some((last_processed, end)) = record.resume_point() else {
        info!("Progress file is empty. Starting a new task.");
        return operator.ask_range();
    };

    if operator.confirm_resume(last_processed)? {
        let range = ScrapeRange {
            start: last_processed.saturating_add(1),
            end,
        };
        info!("Resuming at {} (ending at {})", range.start, range.end);
        Ok(range)
    } else {
        operator.ask_range()
    }
}

/// Sequential fetch-and-append loop over a range of archive ids.
pub struct Scraper<S> {
    config: ScrapeConfig,
    source: S,
    store: ProgressStore,
    stop: Arc<AtomicBool>,
    bar: ProgressBar,
}

impl<S: TitleSource> Scraper<S> {
    pub fn new(config: ScrapeConfig, source: S) -> Self {
        let store = ProgressStore::new(config.progress_file.clone());
        Scraper {
            config,
            source,
            store,
            stop: Arc::new(AtomicBool::new(false)),
            bar: ProgressBar::hidden(),
        }
    }

    pub fn with_progress_bar(mut self, bar: ProgressBar) -> Self {
        self.bar = bar;
        self
    }

    /// Setting `stop` ends the loop before the next id is fetched.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = stop;
        self
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Scrapes every id in `range`, checkpointing after each saved entry.
    ///
    /// The result array is closed whether the loop finishes or is stopped.
    /// On a stop the checkpoint holds the last id saved in this run, or the
    /// id just before `range.start` when nothing was saved.
    pub fn run(&mut self, range: ScrapeRange) -> Result<ScrapeOutcome> {
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| ScrapeError::io(&self.config.output_dir, e))?;

        let mut writer = ResultWriter::open(self.config.result_path(range))?;
        info!(
            "Fetching ids {} to {} into {}",
            range.start,
            range.end,
            writer.path().display()
        );

        self.bar.set_length(range.len());

        let mut status = ScrapeStatus::Completed;
        let mut last_saved = None;
        let mut skipped = 0;

        for id in range.ids() {
            if self.stop.load(Ordering::SeqCst) {
                status = ScrapeStatus::Interrupted;
                break;
            }

            let url = self.config.archive_url(id);
            match self.source.lookup(&url) {
                Some(title) => {
                    let entry = ArchiveEntry {
                        file_name: title.file_name,
                        url,
                        extension: title.extension,
                    };
                    writer.append(&entry)?;
                    self.store
                        .save(&ProgressRecord::new(Some(id), range.start, range.end))?;
                    last_saved = Some(id);
                    self.bar.suspend(|| info!("URL: {} saved.", entry.url));
                }
                None => {
                    debug!("No title for {}, skipping", url);
                    skipped += 1;
                }
            }

            self.bar.inc(1);
        }

        let saved = writer.appended();
        let output = writer.close()?;

        let last_processed = match status {
            ScrapeStatus::Completed => {
                self.bar.finish();
                last_saved
            }
            ScrapeStatus::Interrupted => {
                self.bar.abandon();
                let last = last_saved.or_else(|| range.start.checked_sub(1));
                self.store
                    .save(&ProgressRecord::new(last, range.start, range.end))?;
                last
            }
        };

        Ok(ScrapeOutcome {
            status,
            range,
            output,
            saved,
            skipped,
            last_processed,
        })
    }
}
