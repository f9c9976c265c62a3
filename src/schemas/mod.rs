//! Schema types for priorauth

mod config;
mod item;

pub use config::Config;
pub use item::{Category, Item, CATEGORIES};
