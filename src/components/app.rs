use super::{game_over_overlay::GameOverOverlay, hud::Hud, tile_board::TileBoard};
use crate::audio::{AudioBank, Cue};
use crate::config::{
    LEVEL_TRANSITION_DELAY_MS, MISTAP_CLEAR_DELAY_MS, SETTLE_DELAY_MS, TICK_INTERVAL_MS,
};
use crate::leaderboard::Leaderboard;
use crate::model::{GameAction, GameState, TapOutcome};
use crate::settings::Settings;
use crate::state::{LayoutMode, NumeralScript};
use crate::util::{fresh_seed, now_label, set_timeout};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

const SHAKE_CSS: &str = "
@keyframes shake {
  0% { transform: translateX(0); }
  20% { transform: translateX(-8px); }
  40% { transform: translateX(8px); }
  60% { transform: translateX(-8px); }
  80% { transform: translateX(8px); }
  100% { transform: translateX(0); }
}
.shake { animation: shake 0.4s; }
";

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(|| GameState::new(LayoutMode::from_viewport(), fresh_seed()));
    let leaderboard = use_state(Leaderboard::load);
    let settings = use_state(Settings::load);
    let audio = {
        let muted = settings.muted;
        use_mut_ref(move || AudioBank::load(muted))
    };

    {
        // Countdown ticker; replaced whenever the level changes, stopped on game over.
        let dispatcher = game.dispatcher();
        use_effect_with((game.game_over, game.epoch), move |&(over, epoch)| {
            let mut active = None;
            if !over {
                if let Some(window) = web_sys::window() {
                    let tick = Closure::wrap(Box::new(move || {
                        dispatcher.dispatch(GameAction::Tick { epoch });
                    }) as Box<dyn FnMut()>);
                    match window.set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        TICK_INTERVAL_MS,
                    ) {
                        Ok(id) => active = Some((window, id, tick)),
                        Err(e) => log::warn!("failed to start countdown: {:?}", e),
                    }
                }
            }
            move || {
                if let Some((window, id, tick)) = active {
                    window.clear_interval_with_handle(id);
                    drop(tick);
                }
            }
        });
    }

    {
        // Record the final score once per game over.
        let leaderboard = leaderboard.clone();
        let score = game.score;
        use_effect_with(game.game_over, move |&over| {
            if over {
                let mut board = (*leaderboard).clone();
                if board.record(score, now_label()) {
                    if let Err(e) = board.save() {
                        log::warn!("leaderboard not saved: {}", e);
                    }
                    leaderboard.set(board);
                }
            }
            || ()
        });
    }

    let on_tap = {
        let game = game.clone();
        let audio = audio.clone();
        Callback::from(move |value: u8| {
            let outcome = game.classify_tap(value);
            let epoch = game.epoch;
            let dispatcher = game.dispatcher();
            game.dispatch(GameAction::Tap { value });
            match outcome {
                TapOutcome::Ignored => {}
                TapOutcome::Correct { completes_level } => {
                    audio.borrow().play(Cue::Success);
                    let audio = audio.clone();
                    set_timeout(SETTLE_DELAY_MS, move || {
                        dispatcher.dispatch(GameAction::SettleTap { epoch, value });
                        if completes_level {
                            audio.borrow().play(Cue::LevelComplete);
                            set_timeout(LEVEL_TRANSITION_DELAY_MS, move || {
                                dispatcher.dispatch(GameAction::AdvanceLevel {
                                    epoch,
                                    layout: LayoutMode::from_viewport(),
                                    seed: fresh_seed(),
                                });
                            });
                        }
                    });
                }
                TapOutcome::Wrong => {
                    audio.borrow().play(Cue::Error);
                    set_timeout(MISTAP_CLEAR_DELAY_MS, move || {
                        dispatcher.dispatch(GameAction::ClearMistap { epoch, value });
                    });
                }
            }
        })
    };

    let restart = {
        let game = game.clone();
        Callback::from(move |_| {
            game.dispatch(GameAction::Restart {
                layout: LayoutMode::from_viewport(),
                seed: fresh_seed(),
            });
        })
    };

    let toggle_mute = {
        let settings = settings.clone();
        let audio = audio.clone();
        Callback::from(move |_| {
            let next = (*settings).toggled_mute();
            if let Err(e) = next.save() {
                log::warn!("settings not saved: {}", e);
            }
            audio.borrow_mut().set_muted(next.muted);
            settings.set(next);
        })
    };

    // Sizing follows the current viewport; grid placement follows the layout the level was built with.
    let layout = LayoutMode::from_viewport();
    let container_style = format!(
        "text-align:center; font-family:Arial, sans-serif; background:linear-gradient(135deg, #667eea, #764ba2); min-height:100vh; padding:20px; color:white; transition:background-color 0.2s ease;{}",
        if game.flash { " background:#ff4b4b;" } else { "" }
    );

    html! {
        <div id="root" style={container_style}>
            <style>{ SHAKE_CSS }</style>
            <h1 style="font-size:32px; margin-bottom:10px;">{"🎮 Number Order Game"}</h1>
            <h2 style="margin-bottom:15px;">{ format!("🏆 Best Score: {}", leaderboard.best_score()) }</h2>
            <Hud
                time_left={game.time_left}
                lives={game.lives}
                level={game.level}
                score={game.score}
                muted={settings.muted}
                on_toggle_mute={toggle_mute}
            />
            if !game.game_over {
                <TileBoard
                    tiles={game.tiles.clone()}
                    script={NumeralScript::for_level(game.level)}
                    metrics={layout.metrics()}
                    on_tap={on_tap}
                />
            }
            <GameOverOverlay
                show={game.game_over}
                reason={game.over_reason}
                score={game.score}
                leaderboard={(*leaderboard).clone()}
                restart={restart}
            />
        </div>
    }
}
