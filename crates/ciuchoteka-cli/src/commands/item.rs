//! `ciuchoteka item` - add, inspect, change and remove clothing items.

use std::path::Path;

use ciuchoteka_adapters::JpegCompressor;
use ciuchoteka_core::{
    application::{ApplicationError, ImageCompressor, WardrobeStore},
    domain::{
        ClothingItemPatch, ClothingItemStats, DomainValidator, NewClothingItem, PhotoProfile,
        RecordId, photo,
    },
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    cli::{ItemAddArgs, ItemCommands, ItemUpdateArgs},
    commands::{money, open_store},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct item subcommand.
pub fn execute(cmd: ItemCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut store = open_store(&config);
    match cmd {
        ItemCommands::Add(args) => add(args, &mut store, &output),
        ItemCommands::List { category } => {
            let stats: Vec<_> = store
                .all_item_stats()
                .into_iter()
                .filter(|s| category.is_none_or(|c| s.item.category == c))
                .collect();
            list(&stats, &output)
        }
        ItemCommands::Show { id } => show(&RecordId::new(id), &store, &output),
        ItemCommands::Update(args) => update(args, &mut store, &output),
        ItemCommands::Delete { id } => delete(&RecordId::new(id), &mut store, &output),
    }
}

#[instrument(skip_all, fields(name = %args.name))]
fn add(args: ItemAddArgs, store: &mut WardrobeStore, output: &OutputManager) -> CliResult<()> {
    let mut fields = NewClothingItem {
        name: args.name,
        category: args.category,
        item_type: args.item_type,
        cost: args.cost,
        photo: String::new(),
    };
    DomainValidator::validate_new_item(&fields)?;
    fields.photo = compress(&args.photo)?;

    let item = store.add_clothing_item(fields)?;
    info!(id = %item.id, "Clothing item added");

    if output.is_json() {
        return output.json(&item);
    }
    output.success(&format!("Added '{}'", item.name))?;
    output.value(item.id.as_str())?;
    Ok(())
}

fn list(stats: &[ClothingItemStats], output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(&stats);
    }
    if stats.is_empty() {
        output.info("No clothing items yet. Add one with 'ciuchoteka item add'.")?;
        return Ok(());
    }

    output.header(&format!("Clothing items ({})", stats.len()))?;
    for s in stats {
        output.print(&format!(
            "  {:<30} {:<24} {:<12} worn {:>3}x   {:>8}/wear",
            s.item.id,
            s.item.name,
            s.item.category,
            s.times_worn,
            money(s.cost_per_wear),
        ))?;
    }
    Ok(())
}

fn show(id: &RecordId, store: &WardrobeStore, output: &OutputManager) -> CliResult<()> {
    let stats = store.item_stats(id).ok_or_else(|| not_found(id))?;
    if output.is_json() {
        return output.json(&stats);
    }

    let item = &stats.item;
    output.header(&item.name)?;
    output.field("Id", item.id.as_str())?;
    output.field("Category", item.category.as_str())?;
    output.field("Type", &item.item_type)?;
    output.field("Cost", &money(item.cost))?;
    output.field("Added", &item.date_added.format("%Y-%m-%d").to_string())?;
    output.field("Times worn", &stats.times_worn.to_string())?;
    output.field("Cost per wear", &money(stats.cost_per_wear))?;
    output.field(
        "Last worn",
        &stats
            .last_worn_date
            .map_or_else(|| "never".into(), |d| d.format("%Y-%m-%d").to_string()),
    )?;
    output.field(
        "Photo",
        &photo::format_bytes(photo::encoded_payload_size(&item.photo)),
    )?;
    Ok(())
}

#[instrument(skip_all, fields(id = %args.id))]
fn update(args: ItemUpdateArgs, store: &mut WardrobeStore, output: &OutputManager) -> CliResult<()> {
    let id = RecordId::new(args.id);
    // Fail before spending time on the photo
    if store.clothing_item(&id).is_none() {
        return Err(not_found(&id));
    }

    let cost = if args.clear_cost {
        Some(None)
    } else {
        args.cost.map(Some)
    };
    let mut patch = ClothingItemPatch {
        name: args.name,
        category: args.category,
        item_type: args.item_type,
        cost,
        photo: None,
    };
    DomainValidator::validate_item_patch(&patch)?;
    if let Some(path) = &args.photo {
        patch.photo = Some(compress(path)?);
    }
    if patch.is_empty() {
        return Err(CliError::InvalidInput {
            message: "nothing to update; pass at least one field".into(),
            source: None,
        });
    }

    let item = store
        .update_clothing_item(&id, patch)?
        .ok_or_else(|| not_found(&id))?;

    if output.is_json() {
        return output.json(&item);
    }
    output.success(&format!("Updated '{}'", item.name))?;
    Ok(())
}

fn delete(id: &RecordId, store: &mut WardrobeStore, output: &OutputManager) -> CliResult<()> {
    let worn_in = store.outfits().iter().filter(|o| o.contains(id)).count();
    if !store.delete_clothing_item(id)? {
        return Err(not_found(id));
    }
    if output.is_json() {
        return output.json(&Deleted {
            deleted: id,
            removed_from_outfits: worn_in,
        });
    }
    output.success(&format!("Deleted {id}"))?;
    if worn_in > 0 {
        output.info(&format!("Removed from {worn_in} outfit(s)"))?;
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Deleted<'a> {
    deleted: &'a RecordId,
    removed_from_outfits: usize,
}

fn compress(path: &Path) -> CliResult<String> {
    Ok(JpegCompressor::new().compress(path, PhotoProfile::ClothingItem)?)
}

fn not_found(id: &RecordId) -> CliError {
    ApplicationError::RecordNotFound {
        kind: "clothing item",
        id: id.to_string(),
    }
    .into()
}
