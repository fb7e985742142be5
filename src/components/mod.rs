pub mod app;
pub mod game_over_overlay;
pub mod hud;
pub mod tile_board;

pub use app::App;
