//! `ciuchoteka export` and `ciuchoteka import`.

use std::fs::{self, File};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    cli::{ExportArgs, GlobalArgs, ImportArgs},
    commands::{confirm, open_store},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// JSON result of `export` and `import`.
#[derive(Serialize)]
struct BackupSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    items: usize,
    outfits: usize,
}

/// Write a dated, pretty-printed backup.
#[instrument(skip_all)]
pub fn export(args: ExportArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store = open_store(&config);
    let backup = store.storage().export_to_file(store.data())?;

    let dir = args.output.unwrap_or_else(|| config.export_dir());
    let path = dir.join(&backup.file_name);
    fs::create_dir_all(&dir)
        .and_then(|()| fs::write(&path, &backup.contents))
        .map_err(|source| CliError::BackupWrite {
            path: path.clone(),
            source,
        })?;
    info!(path = %path.display(), bytes = backup.contents.len(), "Backup written");

    if output.is_json() {
        return output.json(&BackupSummary {
            path: Some(path.display().to_string()),
            items: store.clothing_items().len(),
            outfits: store.outfits().len(),
        });
    }

    output.success(&format!(
        "Exported {} item(s) and {} outfit(s)",
        store.clothing_items().len(),
        store.outfits().len()
    ))?;
    output.value(&path.display().to_string())?;
    Ok(())
}

/// Replace everything with the contents of a backup.
///
/// The file is fully parsed before anything is touched; a bad file leaves the
/// current data as it was.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn import(
    args: ImportArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut store = open_store(&config);

    let file = File::open(&args.file)
        .with_cli_context(|| format!("failed to open {}", args.file.display()))?;
    let data = store.storage().import_from_file(file)?;

    if !args.yes && !global.quiet {
        // A JSON caller cannot answer a prompt without corrupting stdout.
        if output.is_json() {
            return Err(needs_yes("import"));
        }
        output.warning(&format!(
            "This replaces {} item(s) and {} outfit(s) with {} item(s) and {} outfit(s) from the backup",
            store.clothing_items().len(),
            store.outfits().len(),
            data.clothing_items.len(),
            data.outfits.len()
        ))?;
        if !confirm("Continue?")? {
            return Err(CliError::Cancelled);
        }
    }

    let (items, outfits) = (data.clothing_items.len(), data.outfits.len());
    store.replace_all(data)?;
    if output.is_json() {
        return output.json(&BackupSummary {
            path: None,
            items,
            outfits,
        });
    }
    output.success(&format!("Imported {items} item(s) and {outfits} outfit(s)"))?;
    Ok(())
}

/// Error for a destructive command run non-interactively without `--yes`.
pub(crate) fn needs_yes(command: &str) -> CliError {
    CliError::InvalidInput {
        message: format!("'{command}' needs --yes when output format is json"),
        source: None,
    }
}
