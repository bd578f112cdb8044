//! SeaORM entities for the catalog tables.

pub mod categories;
pub mod item_images;
pub mod item_tags;
pub mod items;
pub mod tags;
