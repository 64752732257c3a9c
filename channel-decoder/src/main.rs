mod decode;
use crate::decode::{decode_payload, report, DEFAULT_PAYLOAD};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::debug;

/// Decodes a base64 `channel-message` reference and prints both ids
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base64 payload to decode instead of the built-in one
    payload: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let payload = cli.payload.as_deref().unwrap_or(DEFAULT_PAYLOAD);
    debug!("Decoding {} base64 characters", payload.len());

    let decoded = decode_payload(payload).context("Failed to decode payload")?;
    for line in report(&decoded) {
        println!("{}", line);
    }

    Ok(())
}
