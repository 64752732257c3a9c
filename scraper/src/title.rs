use serde::{Deserialize, Serialize};

/// Branding the archive appends to every page title.
const SITE_SUFFIX: &str = "– HUBLinks";

/// Titles mentioning one of these seasons are packed archives.
const SEASON_MARKERS: [&str; 13] = [
    "s01", "s02", "s03", "s04", "s05", "s06", "s07", "s08", "s09", "s10", "s11", "s12", "s13",
];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    #[serde(rename = ".zip")]
    Zip,
    #[serde(rename = ".mkv")]
    Mkv,
}

impl MediaKind {
    pub fn as_extension(&self) -> &'static str {
        match self {
            MediaKind::Zip => ".zip",
            MediaKind::Mkv => ".mkv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle {
    pub file_name: String,
    pub extension: MediaKind,
}

/// Turns a raw page title into a file name and media kind.
///
/// Returns `None` when the page had no title or nothing is left of it once
/// the branding and parentheses are gone.
pub fn extract_title(raw: Option<&str>) -> Option<PageTitle> {
    let stripped = strip_site_suffix(raw?);
    let extension = classify(&stripped);
    let file_name = clean_file_name(&stripped);

    if file_name.is_empty() {
        return None;
    }

    Some(PageTitle {
        file_name,
        extension,
    })
}

pub fn strip_site_suffix(title: &str) -> String {
    title.replace(SITE_SUFFIX, " ")
}

pub fn classify(title: &str) -> MediaKind {
    let lower = title.to_lowercase();
    if SEASON_MARKERS.iter().any(|season| lower.contains(season)) {
        MediaKind::Zip
    } else {
        MediaKind::Mkv
    }
}

pub fn clean_file_name(file_name: &str) -> String {
    file_name.replace(['(', ')'], "").trim().to_string()
}
