use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};
use crate::title::MediaKind;

const ARRAY_OPEN: &str = "[\n";
const SEPARATOR: &str = ",\n";
const ARRAY_CLOSE: &str = "\n]";

/// One scraped archive page as it appears in the result file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ArchiveEntry {
    #[serde(rename = "FILE NAME")]
    pub file_name: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "EXTENSION")]
    pub extension: MediaKind,
}

/// Appends entries to a JSON array file that stays open until [`close`].
///
/// [`close`]: ResultWriter::close
pub struct ResultWriter {
    path: PathBuf,
    file: File,
    needs_separator: bool,
    appended: usize,
}

impl ResultWriter {
    /// Opens `path` for appending, creating the array opener if the file is new.
    ///
    /// An unterminated array is continued as is. A closed one has its
    /// closing bracket dropped so later entries land inside the same array.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let existing = match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(ScrapeError::io(&path, e)),
        };

        let needs_separator = match existing.as_deref() {
            None => {
                write_fresh(&path)?;
                false
            }
            Some(contents) => reopen(&path, contents)?,
        };

        let file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|e| ScrapeError::io(&path, e))?;

        Ok(ResultWriter {
            path,
            file,
            needs_separator,
            appended: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries written through this writer.
    pub fn appended(&self) -> usize {
        self.appended
    }

    pub fn append(&mut self, entry: &ArchiveEntry) -> Result<()> {
        let json = serde_json::to_string_pretty(entry)?;

        let mut chunk = String::with_capacity(json.len() + SEPARATOR.len());
        if self.needs_separator {
            chunk.push_str(SEPARATOR);
        }
        chunk.push_str(&json);

        self.file
            .write_all(chunk.as_bytes())
            .map_err(|e| ScrapeError::io(&self.path, e))?;

        self.needs_separator = true;
        self.appended += 1;
        Ok(())
    }

    /// Terminates the array, leaving valid JSON on disk.
    pub fn close(mut self) -> Result<PathBuf> {
        self.file
            .write_all(ARRAY_CLOSE.as_bytes())
            .and_then(|_| self.file.flush())
            .map_err(|e| ScrapeError::io(&self.path, e))?;
        Ok(self.path)
    }
}

fn write_fresh(path: &Path) -> Result<()> {
    fs::write(path, ARRAY_OPEN).map_err(|e| ScrapeError::io(path, e))
}

/// Prepares an existing file for appending. Returns whether it already holds entries.
fn reopen(path: &Path, contents: &str) -> Result<bool> {
    let body = contents.trim();
    if body.is_empty() {
        write_fresh(path)?;
        return Ok(false);
    }
    if !body.starts_with('[') {
        return Err(ScrapeError::CorruptResultFile(path.to_path_buf()));
    }

    match body.strip_suffix(']') {
        Some(unclosed) => {
            let unclosed = unclosed.trim_end();
            if unclosed == "[" {
                write_fresh(path)?;
                Ok(false)
            } else {
                fs::write(path, unclosed).map_err(|e| ScrapeError::io(path, e))?;
                Ok(true)
            }
        }
        None => Ok(body != "["),
    }
}
