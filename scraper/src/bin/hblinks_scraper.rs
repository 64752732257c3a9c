use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use env_logger::Env;
use hblinks_scraper::config::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR, DEFAULT_PROGRESS_FILE};
use hblinks_scraper::{
    resolve_range, HttpTitleSource, ProgressStore, PromptOperator, ScrapeConfig, ScrapeStatus,
    Scraper,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

/// Scrapes a range of numbered archive pages into a JSON file, resuming
/// from the last checkpoint when asked to.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Archive URL prefix; the zero-padded page id is appended to it
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory holding one `<start>-<end>.json` file per range
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Checkpoint file used to resume an interrupted run
    #[arg(long, default_value = DEFAULT_PROGRESS_FILE)]
    progress_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ScrapeConfig {
        base_url: cli.base_url,
        output_dir: cli.output_dir,
        progress_file: cli.progress_file,
    };

    let store = ProgressStore::new(&config.progress_file);
    let mut operator = PromptOperator::stdio();
    let range = resolve_range(&store, &mut operator).context("Failed to read the range to scrape")?;

    // Installed after the prompts so Ctrl-C there still just quits
    let stop = Arc::new(AtomicBool::new(false));
    ctrlc::set_handler({
        let stop = Arc::clone(&stop);
        move || {
            if stop.swap(true, Ordering::SeqCst) {
                std::process::exit(130);
            }
        }
    })
    .context("Failed to install Ctrl-C handler")?;

    let mut scraper = Scraper::new(config, HttpTitleSource::new())
        .with_stop_flag(stop)
        .with_progress_bar(progress_bar(range.len()));

    let started = Local::now();
    let outcome = scraper
        .run(range)
        .with_context(|| format!("Scrape of {} to {} failed", range.start, range.end))?;
    let elapsed = (Local::now() - started).num_seconds();

    match outcome.status {
        ScrapeStatus::Completed => {
            println!(
                "\nProcess complete. JSON saved to {}.",
                outcome.output.display()
            );
        }
        ScrapeStatus::Interrupted => {
            println!("Process stopped by user.");
            if let Some(last) = outcome.last_processed {
                println!("Progress saved. Last processed: {}", last);
            }
        }
    }

    info!(
        "{} saved, {} skipped in {}s",
        outcome.saved, outcome.skipped, elapsed
    );

    Ok(())
}

fn progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template(
        "Fetching URLs: [{elapsed_precise}] [{wide_bar}] {pos}/{len} ({percent:>3}%) ETA: {eta}",
    ) {
        bar.set_style(style);
    }
    bar
}
