use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use hblinks_scraper::config::DEFAULT_BASE_URL;
use hblinks_scraper::{extract_title, parse_page_title, HttpTitleSource, ScrapeConfig};
use std::fs;
use std::path::Path;

/// Saves one archive page as a test fixture and shows what gets extracted from it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Archive page id
    id: u64,

    /// Fixture name, saved as `<name>.html`
    name: String,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ScrapeConfig {
        base_url: cli.base_url,
        ..ScrapeConfig::default()
    };
    let url = config.archive_url(cli.id);

    println!("Fetching HTML from {}...", url);

    let html = HttpTitleSource::new()
        .fetch_html(&url)
        .with_context(|| format!("Could not fetch {}", url))?;

    let pages_dir = Path::new("src/tests/fixtures/pages");
    fs::create_dir_all(pages_dir).context("Failed to create fixture directory")?;

    let file_path = pages_dir.join(format!("{}.html", cli.name));
    fs::write(&file_path, &html).context("Failed to write HTML file")?;
    println!("Saved HTML to {}", file_path.display());

    let raw = parse_page_title(&html);
    println!("  - Raw title: {:?}", raw);

    match extract_title(raw.as_deref()) {
        Some(title) => {
            println!("  - File name: {}", title.file_name);
            println!("  - Extension: {}", title.extension.as_extension());
            println!("  - URL: {}", url);
        }
        None => {
            println!("No usable title on this page; the scraper would skip it.");
            println!("Delete {} if it should not be a fixture.", file_path.display());
        }
    }

    Ok(())
}
