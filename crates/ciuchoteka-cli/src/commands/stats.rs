//! `ciuchoteka stats` and `ciuchoteka storage`.

use ciuchoteka_core::domain::{ClothingItemStats, GeneralStats, photo};
use serde::Serialize;

use crate::{
    cli::StatsArgs,
    commands::{money, open_store},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: StatsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store = open_store(&config);
    let limit = args.limit.unwrap_or(config.stats.ranking_limit);
    let stats = store.general_stats(limit);
    let never_worn = never_worn(&stats);

    if output.is_json() {
        return output.json(&StatsReport {
            stats: &stats,
            never_worn_items: &never_worn,
        });
    }

    output.header("Wardrobe")?;
    output.field("Items", &stats.total_items.to_string())?;
    output.field("Outfits", &store.outfits().len().to_string())?;
    output.field("Total cost", &format!("{:.2}", stats.total_cost))?;

    if stats.total_items == 0 {
        return Ok(());
    }
    output.print("")?;
    ranking("Most worn", &stats.most_worn_items, &output)?;
    output.print("")?;
    ranking("Least worn", &stats.least_worn_items, &output)?;
    if !never_worn.is_empty() {
        output.print("")?;
        output.header("Never worn")?;
        for s in &never_worn {
            output.print(&format!("  - {} ({})", s.item.name, s.item.category))?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: &'a GeneralStats,
    never_worn_items: &'a [ClothingItemStats],
}

/// Entries of the least-worn ranking that have no outfit at all.
fn never_worn(stats: &GeneralStats) -> Vec<ClothingItemStats> {
    stats
        .least_worn_items
        .iter()
        .filter(|s| s.times_worn == 0)
        .cloned()
        .collect()
}

/// Usage above this share of the assumed capacity earns a warning.
const NEARLY_FULL_PERCENT: f64 = 80.0;

fn nearly_full(usage_percent: f64) -> bool {
    usage_percent > NEARLY_FULL_PERCENT
}

fn ranking(title: &str, entries: &[ClothingItemStats], output: &OutputManager) -> CliResult<()> {
    output.header(title)?;
    for (rank, s) in entries.iter().enumerate() {
        output.print(&format!(
            "  {:>2}. {:<24} worn {:>3}x   {:>8}/wear",
            rank + 1,
            s.item.name,
            s.times_worn,
            money(s.cost_per_wear)
        ))?;
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StorageReport {
    data_dir: String,
    usage_percent: f64,
    photo_bytes: usize,
}

/// Report how much of the assumed capacity is in use.
pub fn usage(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store = open_store(&config);
    let data = store.data();
    let photo_bytes: usize = data
        .clothing_items
        .iter()
        .map(|i| photo::encoded_payload_size(&i.photo))
        .chain(data.outfits.iter().map(|o| photo::encoded_payload_size(&o.photo)))
        .sum();

    let report = StorageReport {
        data_dir: config.data_dir().display().to_string(),
        usage_percent: store.storage_usage(),
        photo_bytes,
    };
    if output.is_json() {
        return output.json(&report);
    }

    output.header("Storage")?;
    output.field("Location", &report.data_dir)?;
    output.field("Used", &format!("{:.2}%", report.usage_percent))?;
    output.field("Photos", &photo::format_bytes(report.photo_bytes))?;
    if nearly_full(report.usage_percent) {
        output.warning("Storage is nearly full; export a backup and remove old photos")?;
    }
    Ok(())
}
