use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IsoTileProps {
    pub left: f64,
    pub top: f64,
    pub tile_w: f64,
    pub tile_h: f64,
    #[prop_or(0.0)]
    pub wall_h: f64,
    #[prop_or(false)]
    pub selected: bool,
}

pub struct TilePalette {
    pub left_wall: &'static str,
    pub right_wall: &'static str,
    pub top: &'static str,
}

pub fn palette(selected: bool) -> TilePalette {
    if selected {
        TilePalette {
            left_wall: "#5fa15f",
            right_wall: "#66b366",
            top: "#76cb6e",
        }
    } else {
        TilePalette {
            left_wall: "#61a761",
            right_wall: "#6abb69",
            top: "#7ccf74",
        }
    }
}

/// SVG point lists for (top face, left wall, right wall) of one tile.
pub fn tile_polygons(w: f64, h: f64, wall: f64) -> (String, String, String) {
    let (hw, hh) = (w / 2.0, h / 2.0);
    let top = format!("{hw},0 {w},{hh} {hw},{h} 0,{hh}");
    let left = format!("0,{hh} {hw},{h} {hw},{} 0,{}", h + wall, hh + wall);
    let right = format!("{w},{hh} {hw},{h} {hw},{} {w},{}", h + wall, hh + wall);
    (top, left, right)
}

#[function_component(IsoTile)]
pub fn iso_tile(props: &IsoTileProps) -> Html {
    let pal = palette(props.selected);
    let (top, left, right) = tile_polygons(props.tile_w, props.tile_h, props.wall_h);
    let box_h = props.tile_h + props.wall_h;
    let walls = if props.wall_h > 0.0 {
        html! {<>
            <polygon points={left} fill={pal.left_wall} opacity="0.95" />
            <polygon points={right} fill={pal.right_wall} opacity="0.95" />
        </>}
    } else {
        html! {}
    };
    html! {<div style={format!("position:absolute; left:{}px; top:{}px; width:{}px; height:{}px;", props.left, props.top, props.tile_w, box_h)}>
        <svg width={props.tile_w.to_string()} height={box_h.to_string()} style="overflow:visible;">
            { walls }
            <polygon points={top} fill={pal.top} stroke="#00000022" />
        </svg>
    </div>}
}
