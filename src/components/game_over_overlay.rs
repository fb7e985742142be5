use crate::leaderboard::Leaderboard;
use crate::model::GameOverReason;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub reason: Option<GameOverReason>,
    pub score: u32,
    pub leaderboard: Leaderboard,
    pub restart: Callback<()>,
}

pub fn reason_headline(reason: Option<GameOverReason>) -> &'static str {
    match reason {
        Some(GameOverReason::OutOfLives) => "💀 No Lives Left!",
        Some(GameOverReason::OutOfTime) | None => "⏰ Time's Up!",
    }
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    html! {
        <div>
            <h2>{ reason_headline(props.reason) }</h2>
            <h3>{ format!("Score: {}", props.score) }</h3>
            <button onclick={restart_btn} style="padding:10px 20px; font-size:18px; border-radius:10px; border:none; cursor:pointer; background:#00c9ff; color:white; margin-top:15px;">{"Restart Game"}</button>
            <h2 style="margin-top:20px;">{"🏆 High Score Leaderboard"}</h2>
            if props.leaderboard.is_empty() {
                <p style="opacity:0.8;">{"No scores yet"}</p>
            } else {
                <ol style="text-align:left; max-width:300px; margin:10px auto;">
                    { for props.leaderboard.entries().iter().map(|e| html! {
                        <li>{ format!("{} pts - ", e.score) }<small>{ e.date.clone() }</small></li>
                    }) }
                </ol>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_headline() {
        assert_eq!(reason_headline(Some(GameOverReason::OutOfLives)), "💀 No Lives Left!");
        assert_eq!(reason_headline(Some(GameOverReason::OutOfTime)), "⏰ Time's Up!");
    }
}
