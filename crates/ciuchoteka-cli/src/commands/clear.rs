//! `ciuchoteka clear` - wipe all data.

use serde::Serialize;
use tracing::instrument;

use crate::{
    cli::{ClearArgs, GlobalArgs},
    commands::{backup::needs_yes, confirm, open_store},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Cleared {
    cleared_items: usize,
    cleared_outfits: usize,
}

#[instrument(skip_all)]
pub fn execute(
    args: ClearArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut store = open_store(&config);

    if !args.yes && !global.quiet {
        if output.is_json() {
            return Err(needs_yes("clear"));
        }
        output.warning(&format!(
            "This permanently deletes {} item(s) and {} outfit(s)",
            store.clothing_items().len(),
            store.outfits().len()
        ))?;
        if !confirm("Delete everything?")? {
            return Err(CliError::Cancelled);
        }
    }

    let (items, outfits) = (store.clothing_items().len(), store.outfits().len());
    store.clear()?;
    if output.is_json() {
        return output.json(&Cleared {
            cleared_items: items,
            cleared_outfits: outfits,
        });
    }
    output.success("All data cleared")?;
    Ok(())
}
