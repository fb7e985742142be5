//! Core game model for Number Order.
//! `GameState` is the single session record; every change goes through `GameAction`.
//! Actions scheduled for later carry the `epoch` they were issued under and are
//! dropped once a new level (or restart) has begun.

use crate::config::{POOL_SIZE, TOTAL_LIVES, INITIAL_TIME_SECS, level_budget};
use crate::state::layout::{GridPosition, LayoutMode, shuffled_positions};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Transient visual state of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileFx {
    #[default]
    None,
    /// Tapped correctly, shrinking out until settled.
    Fading,
    /// Just mistapped.
    Shaking,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub value: u8,
    pub position: GridPosition,
    pub fx: TileFx,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    OutOfLives,
    OutOfTime,
}

/// What a tap on `value` would do against the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Game over, unknown tile, or a tile already fading out.
    Ignored,
    Correct { completes_level: bool },
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Active tiles in shuffled order; each holds its own grid position.
    pub tiles: Vec<Tile>,
    /// Next value to tap; POOL_SIZE + 1 once the level is cleared.
    pub target: u8,
    pub time_left: u32,
    pub lives: u32,
    pub level: u32,
    pub score: u32,
    pub game_over: bool,
    pub over_reason: Option<GameOverReason>,
    /// Full-screen tint after a mistap.
    pub flash: bool,
    /// Set by the tap on the final tile; freezes the countdown until the next level starts.
    pub level_cleared: bool,
    /// Layout the current grid was generated for.
    pub layout: LayoutMode,
    /// Bumped on every level start; stale scheduled actions compare against it.
    pub epoch: u64,
}

impl GameState {
    /// A fresh run at level 1.
    pub fn new(layout: LayoutMode, seed: u64) -> Self {
        let mut state = Self {
            tiles: Vec::new(),
            target: 1,
            time_left: INITIAL_TIME_SECS,
            lives: TOTAL_LIVES,
            level: 1,
            score: 0,
            game_over: false,
            over_reason: None,
            flash: false,
            level_cleared: false,
            layout,
            epoch: 0,
        };
        state.start_level(1, INITIAL_TIME_SECS, layout, seed);
        state
    }

    /// Rebuilds the shuffled tile set and grid, and resets everything but the score.
    pub fn start_level(&mut self, level: u32, budget_secs: u32, layout: LayoutMode, seed: u64) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut values: Vec<u8> = (1..=POOL_SIZE).collect();
        values.shuffle(&mut rng);
        let positions = shuffled_positions(layout, &mut rng);
        self.tiles = values
            .into_iter()
            .zip(positions)
            .map(|(value, position)| Tile { value, position, fx: TileFx::None })
            .collect();
        self.target = 1;
        self.time_left = budget_secs;
        self.lives = TOTAL_LIVES;
        self.level = level;
        self.game_over = false;
        self.over_reason = None;
        self.flash = false;
        self.level_cleared = false;
        self.layout = layout;
        self.epoch = self.epoch.wrapping_add(1);
        log::info!("level {} started: {}s, epoch {}", level, budget_secs, self.epoch);
    }

    fn tile(&self, value: u8) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.value == value)
    }

    fn tile_mut(&mut self, value: u8) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| t.value == value)
    }

    pub fn classify_tap(&self, value: u8) -> TapOutcome {
        if self.game_over {
            return TapOutcome::Ignored;
        }
        match self.tile(value) {
            None => TapOutcome::Ignored,
            Some(t) if t.fx == TileFx::Fading => TapOutcome::Ignored,
            Some(_) if value == self.target => TapOutcome::Correct {
                completes_level: value == POOL_SIZE,
            },
            Some(_) => TapOutcome::Wrong,
        }
    }

    pub fn is_fresh(&self, epoch: u64) -> bool {
        epoch == self.epoch
    }

    fn end_game(&mut self, reason: GameOverReason) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        self.over_reason = Some(reason);
        log::info!("game over ({:?}) at level {} with score {}", reason, self.level, self.score);
    }

    fn tick(&mut self) {
        if self.game_over || self.level_cleared {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.end_game(GameOverReason::OutOfTime);
        }
    }

    fn tap(&mut self, value: u8) {
        match self.classify_tap(value) {
            TapOutcome::Ignored => {}
            TapOutcome::Correct { completes_level } => {
                if let Some(t) = self.tile_mut(value) {
                    t.fx = TileFx::Fading;
                }
                self.score = self.score.saturating_add(1);
                if completes_level {
                    self.level_cleared = true;
                }
            }
            TapOutcome::Wrong => {
                if let Some(t) = self.tile_mut(value) {
                    t.fx = TileFx::Shaking;
                }
                self.lives = self.lives.saturating_sub(1);
                self.flash = true;
                if self.lives == 0 {
                    self.end_game(GameOverReason::OutOfLives);
                }
            }
        }
    }

    fn settle_tap(&mut self, value: u8) {
        let before = self.tiles.len();
        self.tiles.retain(|t| t.value != value);
        if self.tiles.len() != before {
            self.target = value.saturating_add(1);
        }
    }

    fn clear_mistap(&mut self, value: u8) {
        if let Some(t) = self.tile_mut(value) {
            if t.fx == TileFx::Shaking {
                t.fx = TileFx::None;
            }
        }
        self.flash = false;
    }

    /// Applies one action in place. Epoch-tagged actions from an older level are ignored.
    pub fn apply(&mut self, action: GameAction) {
        use GameAction::*;
        match action {
            Tick { epoch } => {
                if self.is_fresh(epoch) {
                    self.tick();
                }
            }
            Tap { value } => self.tap(value),
            SettleTap { epoch, value } => {
                if self.is_fresh(epoch) {
                    self.settle_tap(value);
                }
            }
            ClearMistap { epoch, value } => {
                if self.is_fresh(epoch) {
                    self.clear_mistap(value);
                }
            }
            AdvanceLevel { epoch, layout, seed } => {
                if self.is_fresh(epoch) && self.level_cleared && !self.game_over {
                    let next = self.level.saturating_add(1);
                    self.start_level(next, level_budget(next), layout, seed);
                }
            }
            Restart { layout, seed } => {
                self.score = 0;
                self.start_level(1, INITIAL_TIME_SECS, layout, seed);
            }
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    /// One second of countdown.
    Tick { epoch: u64 },
    Tap { value: u8 },
    /// Removes a correctly tapped tile and advances the target.
    SettleTap { epoch: u64, value: u8 },
    /// Ends the shake and flash of a mistap.
    ClearMistap { epoch: u64, value: u8 },
    /// Starts the next level once the current one is cleared.
    AdvanceLevel { epoch: u64, layout: LayoutMode, seed: u64 },
    Restart { layout: LayoutMode, seed: u64 },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        new.apply(action);
        if new == *self {
            return self;
        }
        Rc::new(new)
    }
}
