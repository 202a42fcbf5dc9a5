// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Ciuchoteka.
//!
//! This module contains the wardrobe records, the dataset aggregate, and the
//! pure statistics over them. All I/O (storage media, image encoding) is
//! handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the application and CLI layers
//! - **Value semantics**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod identity;
pub mod photo;
pub mod statistics;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    AppData, ClothingItem, ClothingItemPatch, Mutation, NewClothingItem, NewOutfit, Outfit,
    OutfitPatch,
};

pub use error::DomainError;

pub use identity::{APP_NAME, CURRENT_VERSION, generate_id};

pub use statistics::{ClothingItemStats, GeneralStats, WearOrder};

pub use value_objects::{Category, PhotoProfile, RecordId};

pub use validation::DomainValidator;
