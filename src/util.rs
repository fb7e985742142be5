// Browser helpers and formatting shared by the components
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

pub fn format_time(secs: u32) -> String {
    let m = secs / 60;
    let s = secs % 60;
    if m > 0 {
        format!("{:02}:{:02}", m, s)
    } else {
        format!("{}s", s)
    }
}

/// Local date/time label stored with leaderboard entries.
pub fn now_label() -> String {
    let date = js_sys::Date::new_0();
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}

/// Seed for a level shuffle, mixed from Math.random and the clock.
pub fn fresh_seed() -> u64 {
    let r = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let t = js_sys::Date::now() as u64;
    (r << 32) ^ t
}

/// Runs `f` once after `ms` milliseconds. Not cancellable; scheduled actions
/// carry an epoch instead so late ones are ignored.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window; dropping timeout");
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
    {
        log::warn!("set_timeout failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0s");
        assert_eq!(format_time(30), "30s");
        assert_eq!(format_time(59), "59s");
        assert_eq!(format_time(75), "01:15");
    }
}
