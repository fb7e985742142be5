//! Sound cues played from static assets.
//!
//! Playback is fire-and-forget: load or play failures are logged and dropped.

use crate::config::{ERROR_SOUND, LEVEL_COMPLETE_SOUND, SUCCESS_SOUND};
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlAudioElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Correct tile tapped
    Success,
    /// Wrong tile tapped
    Error,
    /// Last tile of a level tapped
    LevelComplete,
}

impl Cue {
    pub fn asset(self) -> &'static str {
        match self {
            Cue::Success => SUCCESS_SOUND,
            Cue::Error => ERROR_SOUND,
            Cue::LevelComplete => LEVEL_COMPLETE_SOUND,
        }
    }
}

pub struct AudioBank {
    success: Option<HtmlAudioElement>,
    error: Option<HtmlAudioElement>,
    level_complete: Option<HtmlAudioElement>,
    muted: bool,
    // Swallows rejected play() promises (autoplay policy, missing file).
    on_reject: Closure<dyn FnMut(JsValue)>,
}

impl AudioBank {
    pub fn load(muted: bool) -> Self {
        Self {
            success: Self::element(Cue::Success),
            error: Self::element(Cue::Error),
            level_complete: Self::element(Cue::LevelComplete),
            muted,
            on_reject: Closure::new(|e: JsValue| {
                log::debug!("sound playback rejected: {:?}", e);
            }),
        }
    }

    fn element(cue: Cue) -> Option<HtmlAudioElement> {
        match HtmlAudioElement::new_with_src(cue.asset()) {
            Ok(el) => Some(el),
            Err(e) => {
                log::warn!("failed to load {}: {:?}", cue.asset(), e);
                None
            }
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn play(&self, cue: Cue) {
        if self.muted {
            return;
        }
        let el = match cue {
            Cue::Success => &self.success,
            Cue::Error => &self.error,
            Cue::LevelComplete => &self.level_complete,
        };
        let Some(el) = el else { return };
        // restart if still playing from a previous tap
        el.set_current_time(0.0);
        match el.play() {
            Ok(promise) => {
                let _ = promise.catch(&self.on_reject);
            }
            Err(e) => log::debug!("sound playback failed: {:?}", e),
        }
    }
}
