use std::fs;
use std::path::{Path, PathBuf};

pub const PAGES_DIR: &str = "src/tests/fixtures/pages";

/// Load test HTML fixture by name
pub fn load_html_fixture(fixture_name: &str) -> String {
    let path = Path::new("src/tests/fixtures").join(format!("{}.html", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}

/// Every archive page captured with `save_page_fixture`
pub fn page_fixtures() -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(PAGES_DIR) else {
        return Vec::new();
    };
    let mut pages: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "html"))
        .collect();
    pages.sort();
    pages
}
