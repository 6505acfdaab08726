use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MarkerPinProps {
    pub left: f64,
    pub top: f64,
    pub tile_w: f64,
    pub tile_h: f64,
    #[prop_or(18.0)]
    pub lift: f64,
    #[prop_or(0)]
    pub transition_ms: u32,
}

#[function_component(MarkerPin)]
pub fn marker_pin(props: &MarkerPinProps) -> Html {
    let cx = props.tile_w / 2.0;
    let transition = if props.transition_ms > 0 {
        format!(
            " transition:left {0}ms linear, top {0}ms linear;",
            props.transition_ms
        )
    } else {
        String::new()
    };
    let style = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; pointer-events:none;{}",
        props.left,
        props.top - props.lift,
        props.tile_w,
        props.tile_h,
        transition
    );
    html! {<div style={style}>
        <svg width={props.tile_w.to_string()} height={props.tile_h.to_string()} style="overflow:visible;">
            <circle cx={cx.to_string()} cy="10" r="6" fill="#222" />
            <polygon points={format!("{},10 {},10 {},26", cx - 5.0, cx + 5.0, cx)} fill="#444" />
        </svg>
    </div>}
}
