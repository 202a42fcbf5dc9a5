//! Command handlers.
//!
//! Each handler translates parsed arguments into calls on the core store and
//! renders the result. No business logic lives here.

pub mod backup;
pub mod clear;
pub mod completions;
pub mod config;
pub mod init;
pub mod item;
pub mod outfit;
pub mod stats;

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use ciuchoteka_adapters::FileMedium;
use ciuchoteka_core::{
    application::{StorageService, WardrobeStore},
    domain::RecordId,
};
use tracing::debug;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Open the wardrobe backed by the configured data directory.
pub fn open_store(config: &AppConfig) -> WardrobeStore {
    let data_dir = config.data_dir();
    let mut medium = FileMedium::new(&data_dir);
    if let Some(quota) = config.quota() {
        medium = medium.with_quota(quota);
    }
    debug!(data_dir = %data_dir.display(), quota = ?config.quota(), "Opening wardrobe");
    WardrobeStore::open(StorageService::new(Box::new(medium)))
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
pub fn confirm(question: &str) -> CliResult<bool> {
    confirm_from(question, io::stdin().lock())
}

fn confirm_from(question: &str, mut input: impl BufRead) -> CliResult<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(|e| CliError::IoError {
        message: "failed to read confirmation input".into(),
        source: e,
    })?;

    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// `--item` values as ids. Repeats are dropped; first occurrence keeps its place.
pub fn record_ids(raw: &[String]) -> Vec<RecordId> {
    let mut seen = HashSet::new();
    raw.iter()
        .filter(|id| seen.insert(id.as_str()))
        .map(|id| RecordId::new(id.as_str()))
        .collect()
}

/// `12.50` style money, or `-` when unknown.
pub fn money(amount: Option<f64>) -> String {
    amount.map_or_else(|| "-".into(), |v| format!("{v:.2}"))
}
