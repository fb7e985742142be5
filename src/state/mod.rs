pub mod layout;
pub mod numerals;

pub use layout::{GridPosition, LayoutMode, TileMetrics};
pub use numerals::NumeralScript;
