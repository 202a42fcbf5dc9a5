//! Wardrobe Store - the single source of truth for both collections.
//!
//! All mutation flows through [`WardrobeStore::commit`]:
//! 1. Apply the [`Mutation`] to the in-memory dataset
//! 2. Persist the full dataset with exactly one storage write
//! 3. Refresh the storage usage figure
//!
//! Mutating methods take `&mut self`, so two mutations can never be in flight
//! against the same store. If the write in step 2 fails the in-memory change
//! stays; the error tells the caller it may not be durable.

use tracing::{info, instrument, warn};

use crate::{
    application::services::storage_service::StorageService,
    domain::{
        AppData, ClothingItem, ClothingItemPatch, ClothingItemStats, GeneralStats, Mutation,
        NewClothingItem, NewOutfit, Outfit, OutfitPatch, RecordId, generate_id, statistics,
    },
    error::CiuchotekaResult,
};

/// In-memory dataset bound to its persistence.
pub struct WardrobeStore {
    data: AppData,
    storage: StorageService,
    storage_usage: f64,
}

impl WardrobeStore {
    /// Hydrate from whatever `storage` currently holds.
    #[instrument(skip_all)]
    pub fn open(storage: StorageService) -> Self {
        let data = storage.load();
        let storage_usage = storage.usage_percent();
        info!(
            items = data.clothing_items.len(),
            outfits = data.outfits.len(),
            storage_usage,
            "Wardrobe loaded"
        );
        Self {
            data,
            storage,
            storage_usage,
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn clothing_items(&self) -> &[ClothingItem] {
        &self.data.clothing_items
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.data.outfits
    }

    pub fn clothing_item(&self, id: &RecordId) -> Option<&ClothingItem> {
        self.data.clothing_item(id)
    }

    pub fn outfit(&self, id: &RecordId) -> Option<&Outfit> {
        self.data.outfit(id)
    }

    /// Usage percentage as of the last load or mutation.
    pub fn storage_usage(&self) -> f64 {
        self.storage_usage
    }

    pub fn storage(&self) -> &StorageService {
        &self.storage
    }

    pub fn item_stats(&self, id: &RecordId) -> Option<ClothingItemStats> {
        self.clothing_item(id)
            .map(|item| statistics::item_stats(item, &self.data.outfits))
    }

    pub fn all_item_stats(&self) -> Vec<ClothingItemStats> {
        statistics::all_item_stats(&self.data.clothing_items, &self.data.outfits)
    }

    pub fn general_stats(&self, ranking_limit: usize) -> GeneralStats {
        statistics::general_stats(
            &self.data.clothing_items,
            &self.data.outfits,
            ranking_limit,
        )
    }

    // ── Clothing items ────────────────────────────────────────────────────

    /// Assign id and creation time, append, persist.
    pub fn add_clothing_item(&mut self, fields: NewClothingItem) -> CiuchotekaResult<ClothingItem> {
        let item = fields.into_item(self.fresh_id(), chrono::Utc::now());
        self.commit(Mutation::AddClothingItem(item.clone()))?;
        Ok(item)
    }

    /// Merge `patch` into the item. `Ok(None)` if no item has `id`.
    pub fn update_clothing_item(
        &mut self,
        id: &RecordId,
        patch: ClothingItemPatch,
    ) -> CiuchotekaResult<Option<ClothingItem>> {
        let changed = self.commit(Mutation::UpdateClothingItem {
            id: id.clone(),
            patch,
        })?;
        Ok(changed.then(|| self.clothing_item(id).cloned()).flatten())
    }

    /// Remove the item and every outfit reference to it, in one step.
    pub fn delete_clothing_item(&mut self, id: &RecordId) -> CiuchotekaResult<bool> {
        self.commit(Mutation::DeleteClothingItem(id.clone()))
    }

    // ── Outfits ───────────────────────────────────────────────────────────

    pub fn add_outfit(&mut self, fields: NewOutfit) -> CiuchotekaResult<Outfit> {
        let outfit = fields.into_outfit(self.fresh_id());
        self.commit(Mutation::AddOutfit(outfit.clone()))?;
        Ok(outfit)
    }

    pub fn update_outfit(
        &mut self,
        id: &RecordId,
        patch: OutfitPatch,
    ) -> CiuchotekaResult<Option<Outfit>> {
        let changed = self.commit(Mutation::UpdateOutfit {
            id: id.clone(),
            patch,
        })?;
        Ok(changed.then(|| self.outfit(id).cloned()).flatten())
    }

    pub fn delete_outfit(&mut self, id: &RecordId) -> CiuchotekaResult<bool> {
        self.commit(Mutation::DeleteOutfit(id.clone()))
    }

    // ── Whole dataset ─────────────────────────────────────────────────────

    /// Replace both collections and the version tag wholesale.
    pub fn replace_all(&mut self, data: AppData) -> CiuchotekaResult<()> {
        self.commit(Mutation::ReplaceAll(data)).map(|_| ())
    }

    /// Remove the persisted entry and reset to a fresh dataset.
    ///
    /// The in-memory reset happens even if removing the entry fails.
    #[instrument(skip_all)]
    pub fn clear(&mut self) -> CiuchotekaResult<()> {
        self.data = AppData::initial();
        let result = self.storage.clear();
        self.storage_usage = self.storage.usage_percent();
        info!("Wardrobe cleared");
        result
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Apply one mutation and persist it. Returns whether anything changed;
    /// no-ops skip the write.
    #[instrument(skip_all, fields(mutation = mutation.name()))]
    fn commit(&mut self, mutation: Mutation) -> CiuchotekaResult<bool> {
        if !self.data.apply(mutation) {
            info!("No matching record, nothing to persist");
            return Ok(false);
        }

        let saved = self.storage.save(&self.data);
        self.storage_usage = self.storage.usage_percent();
        if let Err(e) = &saved {
            warn!(error = %e, "Change applied in memory but not persisted");
        } else {
            info!(storage_usage = self.storage_usage, "Change committed");
        }
        saved.map(|()| true)
    }

    /// An id not used by any record in the dataset.
    fn fresh_id(&self) -> RecordId {
        loop {
            let id = generate_id();
            if !self.data.contains_id(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{ImageCompressor, MockImageCompressor, MockStorageMedium};
    use crate::domain::{Category, PhotoProfile};
    use crate::error::CiuchotekaError;
    use chrono::{TimeZone, Utc};
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    fn boots() -> NewClothingItem {
        NewClothingItem {
            name: "Boots".into(),
            category: Category::Shoes,
            item_type: "boots".into(),
            cost: Some(200.0),
            photo: String::new(),
        }
    }

    /// Mock medium that records every value written under any key.
    fn recording_medium(writes: Arc<Mutex<Vec<String>>>) -> MockStorageMedium {
        let mut medium = MockStorageMedium::new();
        medium.expect_get().returning(|_| Ok(None));
        medium.expect_used_bytes().returning(|| Ok(0));
        medium.expect_set().returning(move |_, value| {
            writes.lock().unwrap().push(value.to_string());
            Ok(())
        });
        medium
    }

    #[test]
    fn every_change_is_one_write() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let medium = recording_medium(writes.clone());
        let mut store = WardrobeStore::open(StorageService::new(Box::new(medium)));

        let item = store.add_clothing_item(boots()).unwrap();
        store
            .update_clothing_item(
                &item.id,
                ClothingItemPatch {
                    cost: Some(Some(180.0)),
                    ..Default::default()
                },
            )
            .unwrap();
        store
            .add_outfit(NewOutfit {
                photo: String::new(),
                date: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
                clothing_item_ids: vec![item.id.clone()],
            })
            .unwrap();
        store.delete_clothing_item(&item.id).unwrap();

        let writes = writes.lock().unwrap();
        assert_eq!(writes.len(), 4);
        let last: AppData = serde_json::from_str(writes.last().unwrap()).unwrap();
        assert_eq!(&last, store.data());
    }

    #[test]
    fn no_op_updates_do_not_write() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let medium = recording_medium(writes.clone());
        let mut store = WardrobeStore::open(StorageService::new(Box::new(medium)));

        let missing = RecordId::from("missing");
        assert_eq!(
            store
                .update_clothing_item(&missing, ClothingItemPatch::default())
                .unwrap(),
            None
        );
        assert_eq!(
            store.update_outfit(&missing, OutfitPatch::default()).unwrap(),
            None
        );
        assert!(!store.delete_outfit(&missing).unwrap());
        assert!(writes.lock().unwrap().is_empty());
    }

    #[test]
    fn failed_write_keeps_in_memory_change() {
        let mut medium = MockStorageMedium::new();
        medium.expect_get().returning(|_| Ok(None));
        medium.expect_used_bytes().returning(|| Ok(0));
        medium.expect_set().returning(|key, _| {
            Err(ApplicationError::StorageWrite {
                key: key.into(),
                reason: "quota exceeded".into(),
            }
            .into())
        });
        let mut store = WardrobeStore::open(StorageService::new(Box::new(medium)));

        let err: CiuchotekaError = store.add_clothing_item(boots()).unwrap_err();
        assert!(err.is_unsaved_change());
        assert_eq!(store.clothing_items().len(), 1);
        assert_eq!(store.clothing_items()[0].name, "Boots");
    }

    #[test]
    fn photo_failure_saves_nothing() {
        let mut compressor = MockImageCompressor::new();
        compressor.expect_compress().returning(|path, _| {
            Err(ApplicationError::ImageProcessing {
                path: path.to_path_buf(),
                reason: "corrupt".into(),
            }
            .into())
        });
        let mut medium = MockStorageMedium::new();
        medium.expect_get().returning(|_| Ok(None));
        medium.expect_used_bytes().returning(|| Ok(0));
        medium.expect_set().never();
        let mut store = WardrobeStore::open(StorageService::new(Box::new(medium)));

        let result = compressor
            .compress(Path::new("coat.jpg"), PhotoProfile::ClothingItem)
            .and_then(|photo| store.add_clothing_item(NewClothingItem { photo, ..boots() }));

        assert!(matches!(
            result,
            Err(CiuchotekaError::Application(
                ApplicationError::ImageProcessing { .. }
            ))
        ));
        assert!(store.clothing_items().is_empty());
    }

    #[test]
    fn open_hydrates_from_storage() {
        let mut stored = AppData::initial();
        stored.version = "1.0.0".into();
        stored
            .clothing_items
            .push(boots().into_item(RecordId::from("b"), Utc::now()));
        let json = serde_json::to_string(&stored).unwrap();

        let mut medium = MockStorageMedium::new();
        medium
            .expect_get()
            .returning(move |_| Ok(Some(json.clone())));
        medium.expect_used_bytes().returning(|| Ok(52_428));

        let store = WardrobeStore::open(StorageService::new(Box::new(medium)));
        assert_eq!(store.data(), &stored);
        assert!((store.storage_usage() - 1.0).abs() < 0.01);
    }

    #[test]
    fn added_ids_are_unique() {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let medium = recording_medium(writes);
        let mut store = WardrobeStore::open(StorageService::new(Box::new(medium)));

        for _ in 0..200 {
            store.add_clothing_item(boots()).unwrap();
        }
        let mut ids: Vec<_> = store.clothing_items().iter().map(|i| i.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn clear_removes_entry_without_writing() {
        let mut medium = MockStorageMedium::new();
        medium.expect_get().returning(|_| Ok(None));
        medium.expect_used_bytes().returning(|| Ok(0));
        medium.expect_set().times(1).returning(|_, _| Ok(()));
        medium.expect_remove().times(1).returning(|_| Ok(()));

        let mut store = WardrobeStore::open(StorageService::new(Box::new(medium)));
        store.add_clothing_item(boots()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.data(), &AppData::initial());
    }
}
