pub mod config;
pub mod driver;
pub mod error;
pub mod fetch;
pub mod operator;
pub mod progress;
pub mod results;
pub mod title;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::config::ScrapeConfig;
pub use crate::driver::{resolve_range, ScrapeOutcome, ScrapeRange, ScrapeStatus, Scraper};
pub use crate::error::{Result, ScrapeError};
pub use crate::fetch::{parse_page_title, HttpTitleSource, TitleSource};
pub use crate::operator::{Operator, PromptOperator};
pub use crate::progress::{LoadedProgress, ProgressRecord, ProgressStore};
pub use crate::results::{ArchiveEntry, ResultWriter};
pub use crate::title::{clean_file_name, classify, extract_title, MediaKind, PageTitle};
