//! Derived wardrobe statistics.
//!
//! Pure functions over the current collections. Nothing here is cached or
//! persisted: every view is recomputed from the slices it is given.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    entities::{ClothingItem, Outfit},
    value_objects::RecordId,
};

/// Default N for most/least worn rankings.
pub const DEFAULT_RANKING_LIMIT: usize = 5;

/// Per-item usage view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItemStats {
    pub item: ClothingItem,
    pub times_worn: usize,
    /// Present only when the item has a cost and has been worn at least once.
    pub cost_per_wear: Option<f64>,
    pub last_worn_date: Option<DateTime<Utc>>,
}

/// Wardrobe-wide summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralStats {
    pub total_items: usize,
    pub total_cost: f64,
    pub most_worn_items: Vec<ClothingItemStats>,
    pub least_worn_items: Vec<ClothingItemStats>,
}

/// Ranking direction for [`rank_by_wear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WearOrder {
    MostWorn,
    LeastWorn,
}

fn wearing<'a>(item_id: &'a RecordId, outfits: &'a [Outfit]) -> impl Iterator<Item = &'a Outfit> {
    outfits.iter().filter(move |outfit| outfit.contains(item_id))
}

/// Number of outfits whose item set contains `item_id`.
pub fn times_worn(item_id: &RecordId, outfits: &[Outfit]) -> usize {
    wearing(item_id, outfits).count()
}

/// Latest `date` among outfits containing `item_id`.
pub fn last_worn_date(item_id: &RecordId, outfits: &[Outfit]) -> Option<DateTime<Utc>> {
    wearing(item_id, outfits).map(|outfit| outfit.date).max()
}

pub fn item_stats(item: &ClothingItem, outfits: &[Outfit]) -> ClothingItemStats {
    let times_worn = times_worn(&item.id, outfits);
    let cost_per_wear = match item.cost {
        Some(cost) if times_worn > 0 => Some(cost / times_worn as f64),
        _ => None,
    };

    ClothingItemStats {
        item: item.clone(),
        times_worn,
        cost_per_wear,
        last_worn_date: last_worn_date(&item.id, outfits),
    }
}

/// `item_stats` for every item, in input order.
pub fn all_item_stats(items: &[ClothingItem], outfits: &[Outfit]) -> Vec<ClothingItemStats> {
    items.iter().map(|item| item_stats(item, outfits)).collect()
}

/// First `n` items by wear count. Ties keep input order.
pub fn rank_by_wear(
    items: &[ClothingItem],
    outfits: &[Outfit],
    n: usize,
    order: WearOrder,
) -> Vec<ClothingItemStats> {
    let mut stats = all_item_stats(items, outfits);
    // `sort_by` is stable, which the tie rule depends on.
    match order {
        WearOrder::MostWorn => stats.sort_by(|a, b| b.times_worn.cmp(&a.times_worn)),
        WearOrder::LeastWorn => stats.sort_by(|a, b| a.times_worn.cmp(&b.times_worn)),
    }
    stats.truncate(n);
    stats
}

/// Sum of item costs; items without a cost count as 0.
pub fn total_cost(items: &[ClothingItem]) -> f64 {
    items.iter().filter_map(|item| item.cost).sum()
}

pub fn general_stats(items: &[ClothingItem], outfits: &[Outfit], limit: usize) -> GeneralStats {
    GeneralStats {
        total_items: items.len(),
        total_cost: total_cost(items),
        most_worn_items: rank_by_wear(items, outfits, limit, WearOrder::MostWorn),
        least_worn_items: rank_by_wear(items, outfits, limit, WearOrder::LeastWorn),
    }
}
