//! Storage Service - durable persistence of the whole dataset.
//!
//! The dataset lives as one JSON document under a single fixed key of the
//! injected [`StorageMedium`]. On top of that the service offers quota
//! introspection and file-based backup/restore.

use std::io::Read;

use chrono::{NaiveDate, Utc};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::StorageMedium},
    domain::{APP_NAME, AppData},
    error::CiuchotekaResult,
};

/// Key under which the dataset is stored.
pub const STORAGE_KEY: &str = "ciuchoteka_data";

/// Assumed capacity of the medium, in bytes (typical browser local storage).
pub const ASSUMED_CAPACITY_BYTES: u64 = 5_242_880;

const REQUIRED_FIELDS: [&str; 3] = ["clothingItems", "outfits", "version"];

/// A serialised backup ready to be saved by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    /// `ciuchoteka-backup-YYYY-MM-DD.json`
    pub file_name: String,
    /// Pretty-printed JSON.
    pub contents: Vec<u8>,
}

/// Persistence over a key-value medium.
pub struct StorageService {
    medium: Box<dyn StorageMedium>,
}

impl StorageService {
    pub fn new(medium: Box<dyn StorageMedium>) -> Self {
        Self { medium }
    }

    /// Load the persisted dataset.
    ///
    /// Missing or unreadable data degrades to [`AppData::initial`]; this never
    /// fails.
    #[instrument(skip_all)]
    pub fn load(&self) -> AppData {
        let raw = match self.medium.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored data, starting empty");
                return AppData::initial();
            }
            Err(e) => {
                warn!(error = %e, "Error loading from storage, starting empty");
                return AppData::initial();
            }
        };

        match serde_json::from_str::<AppData>(&raw) {
            Ok(data) => {
                debug!(
                    items = data.clothing_items.len(),
                    outfits = data.outfits.len(),
                    version = %data.version,
                    "Loaded stored data"
                );
                data
            }
            Err(e) => {
                let err = ApplicationError::StorageRead {
                    reason: e.to_string(),
                };
                warn!(error = %err, "Stored data is corrupt, starting empty");
                AppData::initial()
            }
        }
    }

    /// Serialise and write the full dataset.
    #[instrument(skip_all)]
    pub fn save(&self, data: &AppData) -> CiuchotekaResult<()> {
        let json = serde_json::to_string(data).map_err(|e| ApplicationError::StorageWrite {
            key: STORAGE_KEY.into(),
            reason: format!("serialisation failed: {e}"),
        })?;

        self.medium.set(STORAGE_KEY, &json).inspect_err(|e| {
            warn!(error = %e, bytes = json.len(), "Error saving to storage");
        })?;

        debug!(bytes = json.len(), "Dataset persisted");
        Ok(())
    }

    /// Percentage of [`ASSUMED_CAPACITY_BYTES`] used across the whole medium.
    ///
    /// Returns 0 if the medium cannot be introspected.
    pub fn usage_percent(&self) -> f64 {
        match self.medium.used_bytes() {
            Ok(bytes) => bytes as f64 / ASSUMED_CAPACITY_BYTES as f64 * 100.0,
            Err(e) => {
                warn!(error = %e, "Error calculating storage usage");
                0.0
            }
        }
    }

    /// Pretty-printed backup named after today's date.
    pub fn export_to_file(&self, data: &AppData) -> CiuchotekaResult<BackupFile> {
        export_backup(data, Utc::now().date_naive())
    }

    /// Parse a backup. The caller decides whether to apply it.
    #[instrument(skip_all)]
    pub fn import_from_file<R: Read>(&self, mut reader: R) -> CiuchotekaResult<AppData> {
        let mut raw = Vec::new();
        reader
            .read_to_end(&mut raw)
            .map_err(|e| ApplicationError::ImportFormat {
                reason: format!("failed to read file: {e}"),
            })?;
        let data = parse_backup(&raw)?;
        info!(
            items = data.clothing_items.len(),
            outfits = data.outfits.len(),
            version = %data.version,
            "Backup parsed"
        );
        Ok(data)
    }

    /// Remove the persisted entry entirely.
    #[instrument(skip_all)]
    pub fn clear(&self) -> CiuchotekaResult<()> {
        self.medium.remove(STORAGE_KEY)?;
        info!("Stored data removed");
        Ok(())
    }
}

/// `ciuchoteka-backup-YYYY-MM-DD.json`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("{APP_NAME}-backup-{}.json", date.format("%Y-%m-%d"))
}

pub fn export_backup(data: &AppData, date: NaiveDate) -> CiuchotekaResult<BackupFile> {
    let contents = serde_json::to_vec_pretty(data).map_err(|e| ApplicationError::Export {
        reason: e.to_string(),
    })?;
    Ok(BackupFile {
        file_name: backup_file_name(date),
        contents,
    })
}

/// Decode a backup. All-or-nothing: any failure yields `ImportFormat`.
pub fn parse_backup(raw: &[u8]) -> CiuchotekaResult<AppData> {
    let value: Value = serde_json::from_slice(raw).map_err(|e| ApplicationError::ImportFormat {
        reason: format!("not valid JSON: {e}"),
    })?;

    let object = value.as_object().ok_or_else(|| ApplicationError::ImportFormat {
        reason: "top level is not an object".into(),
    })?;
    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .find(|field| object.get(**field).is_none_or(Value::is_null))
    {
        return Err(ApplicationError::ImportFormat {
            reason: format!("missing field '{missing}'"),
        }
        .into());
    }

    serde_json::from_value(value).map_err(|e| {
        ApplicationError::ImportFormat {
            reason: format!("malformed records: {e}"),
        }
        .into()
    })
}
