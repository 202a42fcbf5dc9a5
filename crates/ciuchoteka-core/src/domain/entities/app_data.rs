//! The persisted aggregate and the single state-transition function over it.
//!
//! Every change to the dataset is expressed as a [`Mutation`] and applied by
//! [`AppData::apply`]. Deleting a clothing item strips it from outfits inside
//! the same call, so no caller can observe the item gone but still referenced.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{
        clothing_item::{ClothingItem, ClothingItemPatch},
        outfit::{Outfit, OutfitPatch},
    },
    identity::CURRENT_VERSION,
    value_objects::RecordId,
};

/// The whole dataset, persisted and exported as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub clothing_items: Vec<ClothingItem>,
    pub outfits: Vec<Outfit>,
    pub version: String,
}

impl AppData {
    /// Empty collections tagged with the current format version.
    pub fn initial() -> Self {
        Self {
            clothing_items: Vec::new(),
            outfits: Vec::new(),
            version: CURRENT_VERSION.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clothing_items.is_empty() && self.outfits.is_empty()
    }

    pub fn clothing_item(&self, id: &RecordId) -> Option<&ClothingItem> {
        self.clothing_items.iter().find(|item| &item.id == id)
    }

    pub fn outfit(&self, id: &RecordId) -> Option<&Outfit> {
        self.outfits.iter().find(|outfit| &outfit.id == id)
    }

    pub fn contains_id(&self, id: &RecordId) -> bool {
        self.clothing_item(id).is_some() || self.outfit(id).is_some()
    }

    /// Apply one mutation. Returns `true` if the dataset changed.
    pub fn apply(&mut self, mutation: Mutation) -> bool {
        match mutation {
            Mutation::AddClothingItem(item) => {
                self.clothing_items.push(item);
                true
            }
            Mutation::UpdateClothingItem { id, patch } => {
                match self.clothing_items.iter_mut().find(|item| item.id == id) {
                    Some(item) => {
                        item.apply(patch);
                        true
                    }
                    None => false,
                }
            }
            Mutation::DeleteClothingItem(id) => {
                let before = self.clothing_items.len();
                self.clothing_items.retain(|item| item.id != id);
                let removed = self.clothing_items.len() != before;

                // Cascade regardless of `removed`: a dangling reference to an
                // id that is already gone must not survive either.
                let mut stripped = false;
                for outfit in &mut self.outfits {
                    stripped |= outfit.forget_item(&id);
                }
                removed || stripped
            }
            Mutation::AddOutfit(outfit) => {
                self.outfits.push(outfit);
                true
            }
            Mutation::UpdateOutfit { id, patch } => {
                match self.outfits.iter_mut().find(|outfit| outfit.id == id) {
                    Some(outfit) => {
                        outfit.apply(patch);
                        true
                    }
                    None => false,
                }
            }
            Mutation::DeleteOutfit(id) => {
                let before = self.outfits.len();
                self.outfits.retain(|outfit| outfit.id != id);
                self.outfits.len() != before
            }
            Mutation::ReplaceAll(data) => {
                *self = data;
                true
            }
        }
    }
}

impl Default for AppData {
    fn default() -> Self {
        Self::initial()
    }
}

/// One atomic change to [`AppData`].
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    AddClothingItem(ClothingItem),
    UpdateClothingItem {
        id: RecordId,
        patch: ClothingItemPatch,
    },
    DeleteClothingItem(RecordId),
    AddOutfit(Outfit),
    UpdateOutfit {
        id: RecordId,
        patch: OutfitPatch,
    },
    DeleteOutfit(RecordId),
    ReplaceAll(AppData),
}

impl Mutation {
    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddClothingItem(_) => "add_clothing_item",
            Self::UpdateClothingItem { .. } => "update_clothing_item",
            Self::DeleteClothingItem(_) => "delete_clothing_item",
            Self::AddOutfit(_) => "add_outfit",
            Self::UpdateOutfit { .. } => "update_outfit",
            Self::DeleteOutfit(_) => "delete_outfit",
            Self::ReplaceAll(_) => "replace_all",
        }
    }
}
