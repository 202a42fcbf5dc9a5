pub mod app_data;
pub mod clothing_item;
pub mod outfit;

pub use app_data::{AppData, Mutation};
pub use clothing_item::{ClothingItem, ClothingItemPatch, NewClothingItem};
pub use outfit::{NewOutfit, Outfit, OutfitPatch};
