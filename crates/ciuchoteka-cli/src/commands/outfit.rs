//! `ciuchoteka outfit` - record and manage outfits.

use std::path::Path;

use chrono::Utc;
use ciuchoteka_adapters::JpegCompressor;
use ciuchoteka_core::{
    application::{ApplicationError, ImageCompressor, WardrobeStore},
    domain::{DomainValidator, NewOutfit, Outfit, OutfitPatch, PhotoProfile, RecordId},
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    cli::{OutfitAddArgs, OutfitCommands, OutfitUpdateArgs},
    commands::{open_store, record_ids},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct outfit subcommand.
pub fn execute(cmd: OutfitCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut store = open_store(&config);
    match cmd {
        OutfitCommands::Add(args) => add(args, &mut store, &output),
        OutfitCommands::List => list(&store, &output),
        OutfitCommands::Update(args) => update(args, &mut store, &output),
        OutfitCommands::Delete { id } => {
            let id = RecordId::new(id);
            if !store.delete_outfit(&id)? {
                return Err(not_found(&id));
            }
            if output.is_json() {
                return output.json(&Deleted { deleted: &id });
            }
            output.success(&format!("Deleted outfit {id}"))?;
            Ok(())
        }
    }
}

#[instrument(skip_all, fields(items = args.items.len()))]
fn add(args: OutfitAddArgs, store: &mut WardrobeStore, output: &OutputManager) -> CliResult<()> {
    let date = match &args.date {
        Some(raw) => DomainValidator::parse_timestamp(raw)?,
        None => Utc::now(),
    };
    let clothing_item_ids = record_ids(&args.items);
    DomainValidator::validate_outfit_items(&clothing_item_ids, store.clothing_items())?;

    let outfit = store.add_outfit(NewOutfit {
        photo: compress(&args.photo)?,
        date,
        clothing_item_ids,
    })?;
    info!(id = %outfit.id, "Outfit added");

    if output.is_json() {
        return output.json(&outfit);
    }
    output.success(&format!(
        "Recorded outfit for {} with {} item(s)",
        outfit.date.format("%Y-%m-%d"),
        outfit.clothing_item_ids.len()
    ))?;
    output.value(outfit.id.as_str())?;
    Ok(())
}

fn list(store: &WardrobeStore, output: &OutputManager) -> CliResult<()> {
    let outfits = newest_first(store.outfits());
    if output.is_json() {
        return output.json(&outfits);
    }
    if outfits.is_empty() {
        output.info("No outfits yet. Record one with 'ciuchoteka outfit add'.")?;
        return Ok(());
    }

    output.header(&format!("Outfits ({})", outfits.len()))?;
    for outfit in outfits {
        let names: Vec<&str> = outfit
            .clothing_item_ids
            .iter()
            .map(|id| {
                store
                    .clothing_item(id)
                    .map_or("(deleted)", |item| item.name.as_str())
            })
            .collect();
        output.print(&format!(
            "  {:<30} {}  {}",
            outfit.id,
            outfit.date.format("%Y-%m-%d %H:%M"),
            if names.is_empty() {
                "-".to_string()
            } else {
                names.join(", ")
            }
        ))?;
    }
    Ok(())
}

#[instrument(skip_all, fields(id = %args.id))]
fn update(args: OutfitUpdateArgs, store: &mut WardrobeStore, output: &OutputManager) -> CliResult<()> {
    let id = RecordId::new(args.id);
    if store.outfit(&id).is_none() {
        return Err(not_found(&id));
    }

    let date = args
        .date
        .as_deref()
        .map(DomainValidator::parse_timestamp)
        .transpose()?;
    let clothing_item_ids = if args.clear_items {
        Some(Vec::new())
    } else if args.items.is_empty() {
        None
    } else {
        let ids = record_ids(&args.items);
        DomainValidator::validate_outfit_items(&ids, store.clothing_items())?;
        Some(ids)
    };
    let photo = args.photo.as_deref().map(compress).transpose()?;

    let patch = OutfitPatch {
        photo,
        date,
        clothing_item_ids,
    };
    if patch.is_empty() {
        return Err(CliError::InvalidInput {
            message: "nothing to update; pass at least one field".into(),
            source: None,
        });
    }

    let outfit = store
        .update_outfit(&id, patch)?
        .ok_or_else(|| not_found(&id))?;

    if output.is_json() {
        return output.json(&outfit);
    }
    output.success(&format!("Updated outfit {}", outfit.id))?;
    Ok(())
}

#[derive(Serialize)]
struct Deleted<'a> {
    deleted: &'a RecordId,
}

/// Outfits sorted by date, newest first. Equal dates keep insertion order.
fn newest_first(outfits: &[Outfit]) -> Vec<&Outfit> {
    let mut sorted: Vec<&Outfit> = outfits.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

fn compress(path: &Path) -> CliResult<String> {
    Ok(JpegCompressor::new().compress(path, PhotoProfile::Outfit)?)
}

fn not_found(id: &RecordId) -> CliError {
    ApplicationError::RecordNotFound {
        kind: "outfit",
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn outfit(id: &str, day: u32) -> Outfit {
        NewOutfit {
            photo: String::new(),
            date: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
            clothing_item_ids: vec![],
        }
        .into_outfit(RecordId::from(id))
    }

    #[test]
    fn newest_first_is_stable_on_ties() {
        let outfits = vec![outfit("a", 1), outfit("b", 3), outfit("c", 1), outfit("d", 2)];
        let order: Vec<&str> = newest_first(&outfits)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }
}
