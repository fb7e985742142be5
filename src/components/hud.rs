use crate::util::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub time_left: u32,
    pub lives: u32,
    pub level: u32,
    pub score: u32,
    pub muted: bool,
    pub on_toggle_mute: Callback<()>,
}

#[function_component]
pub fn Hud(props: &HudProps) -> Html {
    let row_style = "display:flex; justify-content:space-around; flex-wrap:wrap; gap:10px; font-size:18px; margin-bottom:20px;";
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";
    let mute_cb = {
        let cb = props.on_toggle_mute.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style={row_style}>
            <span>{"⏰ "}<span style={value_style}>{ format_time(props.time_left) }</span></span>
            <span>{"❤️ "}<span style={value_style}>{ props.lives }</span></span>
            <span>{"Level: "}<span style={value_style}>{ props.level }</span></span>
            <span>{"Score: "}<span style={value_style}>{ props.score }</span></span>
            <button onclick={mute_cb} style="padding:2px 10px; font-size:14px; border:none; border-radius:8px; cursor:pointer;">
                { if props.muted { "🔇 Sound off" } else { "🔊 Sound on" } }
            </button>
        </div>
    }
}
