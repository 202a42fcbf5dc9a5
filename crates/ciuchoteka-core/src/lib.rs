//! Ciuchoteka Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Ciuchoteka
//! wardrobe tracker, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         ciuchoteka-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (WardrobeStore, StorageService)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: StorageMedium, Compressor)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   ciuchoteka-adapters (Infrastructure)  │
//! │  (FileMedium, MemoryMedium, Jpeg...)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ClothingItem, Outfit, AppData, stats) │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ciuchoteka_core::{
//!     application::{StorageService, WardrobeStore},
//!     domain::{Category, NewClothingItem},
//! };
//!
//! // 1. Open the store over an injected storage medium
//! let mut store = WardrobeStore::open(StorageService::new(medium));
//!
//! // 2. Mutate; every change is persisted before the call returns
//! let item = store.add_clothing_item(NewClothingItem {
//!     name: "Rain jacket".into(),
//!     category: Category::Outerwear,
//!     item_type: "jacket".into(),
//!     cost: Some(120.0),
//!     photo: photo_data_url,
//! })?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        StorageService, WardrobeStore,
        ports::{ImageCompressor, StorageMedium},
    };
    pub use crate::domain::{
        AppData, Category, ClothingItem, ClothingItemPatch, ClothingItemStats, GeneralStats,
        NewClothingItem, NewOutfit, Outfit, OutfitPatch, PhotoProfile, RecordId, WearOrder,
    };
    pub use crate::error::{CiuchotekaError, CiuchotekaResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
