//! `ciuchoteka config` - inspect configuration values.

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.value(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                return output.json(&config);
            }
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(global.config.as_deref());
            output.value(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `stats.ranking_limit`.
///
/// Unset optional values resolve to their effective default.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "storage.data_dir" => return Ok(config.data_dir().display().to_string()),
        "export.directory" => return Ok(config.export_dir().display().to_string()),
        _ => {}
    }

    let tree = serde_json::to_value(config)?;
    let found = key
        .split('.')
        .try_fold(&tree, |node, part| node.get(part))
        .filter(|node| !node.is_object());

    match found {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
