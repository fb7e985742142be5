mod audio;
mod components;
mod config;
mod leaderboard;
mod model;
mod settings;
mod state;
mod storage;
mod util;

use components::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
        }
    }
    log::info!("starting Number Order");
    yew::Renderer::<App>::new().render();
}
