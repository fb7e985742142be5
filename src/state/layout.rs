// Responsive layout: one derivation from viewport width, shared by grid generation and tile sizing.
use crate::config::{COMPACT_BREAKPOINT_PX, GRID_COLUMNS};
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Narrow viewports: 4 grid rows, smaller tiles.
    Compact,
    #[default]
    Standard,
}

impl LayoutMode {
    pub fn from_width(width_px: f64) -> Self {
        if width_px < COMPACT_BREAKPOINT_PX {
            LayoutMode::Compact
        } else {
            LayoutMode::Standard
        }
    }

    /// Reads `window.innerWidth`; falls back to Standard outside a browser.
    pub fn from_viewport() -> Self {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64());
        match width {
            Some(w) => Self::from_width(w),
            None => LayoutMode::Standard,
        }
    }

    pub fn rows(self) -> u32 {
        match self {
            LayoutMode::Compact => 4,
            LayoutMode::Standard => 2,
        }
    }

    pub fn metrics(self) -> TileMetrics {
        match self {
            LayoutMode::Compact => TileMetrics { size_px: 45, font_px: 18 },
            LayoutMode::Standard => TileMetrics { size_px: 60, font_px: 20 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileMetrics {
    pub size_px: u32,
    pub font_px: u32,
}

/// Top-left corner of a tile inside the board, in percent of the board size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridPosition {
    pub top: f64,
    pub left: f64,
}

impl GridPosition {
    pub fn style(&self) -> String {
        format!("top:{}%; left:{}%;", self.top, self.left)
    }
}

/// Every cell of the layout's grid, in row-major order, each inset from its cell corner.
pub fn grid_cells(mode: LayoutMode) -> Vec<GridPosition> {
    let rows = mode.rows();
    let cell_w = 100.0 / GRID_COLUMNS as f64;
    let cell_h = 100.0 / rows as f64;
    let mut cells = Vec::with_capacity((rows * GRID_COLUMNS) as usize);
    for row in 0..rows {
        for col in 0..GRID_COLUMNS {
            cells.push(GridPosition {
                top: row as f64 * cell_h + cell_h / 5.0,
                left: col as f64 * cell_w + cell_w / 10.0,
            });
        }
    }
    cells
}

/// Shuffled grid cells. The compact grid has twice as many cells as tiles;
/// callers consume only the first `tile_count`.
pub fn shuffled_positions(mode: LayoutMode, rng: &mut Pcg32) -> Vec<GridPosition> {
    let mut cells = grid_cells(mode);
    cells.shuffle(rng);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(LayoutMode::from_width(320.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(599.9), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(600.0), LayoutMode::Standard);
        assert_eq!(LayoutMode::from_width(1920.0), LayoutMode::Standard);
    }

    #[test]
    fn test_grid_cell_counts() {
        assert_eq!(grid_cells(LayoutMode::Standard).len(), 10);
        assert_eq!(grid_cells(LayoutMode::Compact).len(), 20);
    }

    #[test]
    fn test_grid_cell_coordinates() {
        let cells = grid_cells(LayoutMode::Standard);
        // cell 20% wide, 50% tall
        assert_eq!(cells[0], GridPosition { top: 10.0, left: 2.0 });
        assert_eq!(cells[1], GridPosition { top: 10.0, left: 22.0 });
        assert_eq!(cells[5], GridPosition { top: 60.0, left: 2.0 });
        let compact = grid_cells(LayoutMode::Compact);
        assert_eq!(compact[19], GridPosition { top: 80.0, left: 82.0 });
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut shuffled = shuffled_positions(LayoutMode::Compact, &mut rng);
        let mut cells = grid_cells(LayoutMode::Compact);
        let key = |p: &GridPosition| ((p.top * 100.0) as i64, (p.left * 100.0) as i64);
        shuffled.sort_by_key(key);
        cells.sort_by_key(key);
        assert_eq!(shuffled, cells);
    }

    #[test]
    fn test_metrics_scale_with_layout() {
        assert!(LayoutMode::Compact.metrics().size_px < LayoutMode::Standard.metrics().size_px);
        assert_eq!(LayoutMode::Standard.metrics().font_px, 20);
    }
}
