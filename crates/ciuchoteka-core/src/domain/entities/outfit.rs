//! The `Outfit` record: a dated photo plus the items worn in it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: RecordId,
    pub photo: String,
    /// When the outfit was worn. User-editable, unrelated to creation time.
    pub date: DateTime<Utc>,
    /// Order carries no meaning. Kept free of deleted item ids by the store.
    pub clothing_item_ids: Vec<RecordId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOutfit {
    pub photo: String,
    pub date: DateTime<Utc>,
    pub clothing_item_ids: Vec<RecordId>,
}

impl NewOutfit {
    pub fn into_outfit(self, id: RecordId) -> Outfit {
        Outfit {
            id,
            photo: self.photo,
            date: self.date,
            clothing_item_ids: self.clothing_item_ids,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutfitPatch {
    pub photo: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub clothing_item_ids: Option<Vec<RecordId>>,
}

impl OutfitPatch {
    pub fn is_empty(&self) -> bool {
        self.photo.is_none() && self.date.is_none() && self.clothing_item_ids.is_none()
    }
}

impl Outfit {
    pub fn apply(&mut self, patch: OutfitPatch) {
        if let Some(photo) = patch.photo {
            self.photo = photo;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(ids) = patch.clothing_item_ids {
            self.clothing_item_ids = ids;
        }
    }

    pub fn contains(&self, item_id: &RecordId) -> bool {
        self.clothing_item_ids.contains(item_id)
    }

    /// Drop every reference to `item_id`. Returns `true` if any was removed.
    pub fn forget_item(&mut self, item_id: &RecordId) -> bool {
        let before = self.clothing_item_ids.len();
        self.clothing_item_ids.retain(|id| id != item_id);
        self.clothing_item_ids.len() != before
    }
}
