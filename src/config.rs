//! Game tuning constants and the per-level time budget.

/// Tiles per level; values run 1..=POOL_SIZE.
pub const POOL_SIZE: u8 = 10;
/// Time budget of level 1, in seconds.
pub const INITIAL_TIME_SECS: u32 = 30;
/// Seconds removed from the budget for every level past the first.
pub const TIME_DECREASE_PER_LEVEL: u32 = 3;
/// The budget never drops below this.
pub const MIN_TIME_SECS: u32 = 5;
pub const TOTAL_LIVES: u32 = 3;

/// Levels at or above this show Roman numerals.
pub const ROMAN_FROM_LEVEL: u32 = 3;

pub const MAX_LEADERBOARD: usize = 5;

// Animation sequencing, in milliseconds.
pub const SETTLE_DELAY_MS: i32 = 400;
pub const LEVEL_TRANSITION_DELAY_MS: i32 = 500;
pub const MISTAP_CLEAR_DELAY_MS: i32 = 400;
pub const TICK_INTERVAL_MS: i32 = 1000;

/// Viewports narrower than this use the compact layout.
pub const COMPACT_BREAKPOINT_PX: f64 = 600.0;
pub const GRID_COLUMNS: u32 = 5;

pub const LEADERBOARD_KEY: &str = "leaderboard";
pub const SETTINGS_KEY: &str = "number_order_settings";

pub const SUCCESS_SOUND: &str = "/sounds/success.mp3";
pub const ERROR_SOUND: &str = "/sounds/error.mp3";
pub const LEVEL_COMPLETE_SOUND: &str = "/sounds/level-complete.mp3";

/// Seconds available for `level`: 30, 27, 24, ... floored at 5.
pub fn level_budget(level: u32) -> u32 {
    let decrease = level.saturating_sub(1).saturating_mul(TIME_DECREASE_PER_LEVEL);
    INITIAL_TIME_SECS.saturating_sub(decrease).max(MIN_TIME_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_budget_steps_down() {
        assert_eq!(level_budget(1), 30);
        assert_eq!(level_budget(2), 27);
        assert_eq!(level_budget(3), 24);
        assert_eq!(level_budget(8), 9);
    }

    #[test]
    fn test_level_budget_floor() {
        assert_eq!(level_budget(9), 6);
        assert_eq!(level_budget(10), 5);
        assert_eq!(level_budget(11), 5);
        assert_eq!(level_budget(500), 5);
        assert_eq!(level_budget(u32::MAX), 5);
    }
}
