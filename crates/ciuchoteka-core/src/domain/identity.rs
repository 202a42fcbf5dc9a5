//! Record identity and dataset versioning.
//!
//! Ids combine the creation time in epoch milliseconds with a random suffix
//! taken from a v4 UUID, e.g. `1715003401123-9f2c41d07a5e`. They only need to
//! be unique within one dataset; they are not secrets.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::value_objects::RecordId;

/// Format version written into every persisted and exported dataset.
///
/// Read back opaquely. No migration branches on it yet.
pub const CURRENT_VERSION: &str = "1.0.0";

/// Application name used for storage keys and backup file names.
pub const APP_NAME: &str = "ciuchoteka";

const SUFFIX_LEN: usize = 12;

/// Produce a fresh record id.
pub fn generate_id() -> RecordId {
    let millis = Utc::now().timestamp_millis();
    let random = Uuid::new_v4().simple().to_string();
    RecordId::new(format!("{millis}-{}", &random[..SUFFIX_LEN]))
}
