//! The `ClothingItem` record, its creation fields, and its partial update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Category, RecordId};

/// A single garment or accessory in the wardrobe.
///
/// `id` and `date_added` are assigned once by the store and never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: RecordId,
    pub name: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Encoded image payload produced by the image compressor.
    pub photo: String,
    pub date_added: DateTime<Utc>,
}

/// Caller-supplied fields of a new clothing item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClothingItem {
    pub name: String,
    pub category: Category,
    pub item_type: String,
    pub cost: Option<f64>,
    pub photo: String,
}

impl NewClothingItem {
    /// Attach identity and creation time.
    pub fn into_item(self, id: RecordId, date_added: DateTime<Utc>) -> ClothingItem {
        ClothingItem {
            id,
            name: self.name,
            category: self.category,
            item_type: self.item_type,
            cost: self.cost,
            photo: self.photo,
            date_added,
        }
    }
}

/// Field-level partial update of a clothing item.
///
/// `None` leaves a field untouched. `cost` is doubly optional so a patch can
/// clear a cost (`Some(None)`) as well as set one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClothingItemPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub item_type: Option<String>,
    pub cost: Option<Option<f64>>,
    pub photo: Option<String>,
}

impl ClothingItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.item_type.is_none()
            && self.cost.is_none()
            && self.photo.is_none()
    }
}

impl ClothingItem {
    /// Merge a patch into this record.
    pub fn apply(&mut self, patch: ClothingItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(item_type) = patch.item_type {
            self.item_type = item_type;
        }
        if let Some(cost) = patch.cost {
            self.cost = cost;
        }
        if let Some(photo) = patch.photo {
            self.photo = photo;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn jacket() -> ClothingItem {
        NewClothingItem {
            name: "Rain jacket".into(),
            category: Category::Outerwear,
            item_type: "jacket".into(),
            cost: Some(120.0),
            photo: "data:image/jpeg;base64,AAAA".into(),
        }
        .into_item(
            RecordId::new("1"),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn patch_touches_only_given_fields() {
        let mut item = jacket();
        item.apply(ClothingItemPatch {
            name: Some("Shell jacket".into()),
            ..Default::default()
        });
        assert_eq!(item.name, "Shell jacket");
        assert_eq!(item.item_type, "jacket");
        assert_eq!(item.cost, Some(120.0));
    }

    #[test]
    fn patch_can_clear_cost() {
        let mut item = jacket();
        item.apply(ClothingItemPatch {
            cost: Some(None),
            ..Default::default()
        });
        assert_eq!(item.cost, None);
    }

    #[test]
    fn serialises_with_wire_names() {
        let json = serde_json::to_value(jacket()).unwrap();
        assert_eq!(json["type"], "jacket");
        assert_eq!(json["category"], "outerwear");
        assert!(json.get("dateAdded").is_some());
        assert!(json.get("item_type").is_none());
    }

    #[test]
    fn absent_cost_is_omitted_and_read_back_as_none() {
        let mut item = jacket();
        item.cost = None;
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("cost"));
        let back: ClothingItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cost, None);
    }

    #[test]
    fn reads_browser_style_timestamps() {
        let json = r#"{"id":"1","name":"Boots","category":"shoes","type":"boots",
            "photo":"","dateAdded":"2024-03-01T09:00:00.000Z"}"#;
        let item: ClothingItem = serde_json::from_str(json).unwrap();
        assert_eq!(
            item.date_added,
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
        );
    }
}
