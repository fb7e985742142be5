use crate::model::{Tile, TileFx};
use crate::state::{NumeralScript, TileMetrics};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TileBoardProps {
    pub tiles: Vec<Tile>,
    pub script: NumeralScript,
    pub metrics: TileMetrics,
    pub on_tap: Callback<u8>,
}

const BOARD_STYLE: &str = "position:relative; height:400px; width:80%; margin:0 auto; background-color:white; border-radius:15px; box-shadow:0 8px 20px rgba(0,0,0,0.3); overflow:hidden;";
const TILE_STYLE: &str = "position:absolute; border-radius:50%; border:none; font-weight:bold; color:white; background:linear-gradient(45deg, #ff416c, #ff4b2b); cursor:pointer; box-shadow:0 4px 10px rgba(0,0,0,0.3); transition:all 0.4s ease;";

fn tile_style(tile: &Tile, metrics: TileMetrics) -> String {
    let (opacity, scale) = match tile.fx {
        TileFx::Fading => (0.0, 0.5),
        _ => (1.0, 1.0),
    };
    format!(
        "{} {} width:{}px; height:{}px; font-size:{}px; opacity:{}; transform:scale({});",
        TILE_STYLE,
        tile.position.style(),
        metrics.size_px,
        metrics.size_px,
        metrics.font_px,
        opacity,
        scale
    )
}

#[function_component]
pub fn TileBoard(props: &TileBoardProps) -> Html {
    html! {
        <div style={BOARD_STYLE}>
            { for props.tiles.iter().map(|tile| {
                let value = tile.value;
                let onclick = {
                    let cb = props.on_tap.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(value))
                };
                let class = if tile.fx == TileFx::Shaking { "shake" } else { "" };
                html! {
                    <button key={value} {class} {onclick} style={tile_style(tile, props.metrics)}>
                        { props.script.render(value) }
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GridPosition, LayoutMode};

    #[test]
    fn test_fading_tile_shrinks() {
        let tile = Tile {
            value: 3,
            position: GridPosition { top: 10.0, left: 2.0 },
            fx: TileFx::Fading,
        };
        let style = tile_style(&tile, LayoutMode::Compact.metrics());
        assert!(style.contains("opacity:0;"));
        assert!(style.contains("scale(0.5)"));
        assert!(style.contains("width:45px;"));
        assert!(style.contains("top:10%; left:2%;"));
    }
}
