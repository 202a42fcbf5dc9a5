use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{
    entities::{ClothingItem, ClothingItemPatch, NewClothingItem},
    error::DomainError,
    value_objects::RecordId,
};

/// Centralized form-level validation.
///
/// Front ends call these before handing input to the store. The store itself
/// accepts whatever it is given.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_new_item(item: &NewClothingItem) -> Result<(), DomainError> {
        non_empty("name", &item.name)?;
        non_empty("type", &item.item_type)?;
        if let Some(cost) = item.cost {
            valid_cost(cost)?;
        }
        Ok(())
    }

    pub fn validate_item_patch(patch: &ClothingItemPatch) -> Result<(), DomainError> {
        if let Some(name) = &patch.name {
            non_empty("name", name)?;
        }
        if let Some(item_type) = &patch.item_type {
            non_empty("type", item_type)?;
        }
        if let Some(Some(cost)) = patch.cost {
            valid_cost(cost)?;
        }
        Ok(())
    }

    /// Every referenced id must name an existing clothing item.
    pub fn validate_outfit_items(
        ids: &[RecordId],
        items: &[ClothingItem],
    ) -> Result<(), DomainError> {
        match ids.iter().find(|id| !items.iter().any(|item| &item.id == *id)) {
            Some(missing) => Err(DomainError::UnknownItemReference {
                id: missing.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` taken as midnight UTC.
    pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DomainError> {
        let value = value.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
            return Ok(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| DomainError::InvalidTimestamp {
                value: value.to_string(),
                reason: "expected RFC 3339 or YYYY-MM-DD".into(),
            })
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(())
}

fn valid_cost(cost: f64) -> Result<(), DomainError> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(DomainError::InvalidCost { cost });
    }
    Ok(())
}
