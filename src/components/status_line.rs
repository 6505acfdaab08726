use crate::model::{Cell, Coord, MoveMode};
use crate::util::format_coord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusLineProps {
    pub pos: Coord,
    pub selected: Cell,
    pub mode: MoveMode,
    pub step_divisions: u32,
    pub mode_toggle: bool,
}

pub fn help_text(step_divisions: u32, mode_toggle: bool, mode: MoveMode) -> String {
    let step = if step_divisions > 1 {
        format!("1/{step_divisions} cell per press")
    } else {
        "one cell per press".to_string()
    };
    if mode_toggle {
        format!("← ↑ ↓ → move ({step}) / M switch mode ({})", mode.label())
    } else {
        format!("← ↑ ↓ → move ({step})")
    }
}

pub fn status_text(pos: Coord, selected: Cell) -> String {
    format!(
        "pos={} · tile=({}, {})",
        format_coord(pos.x, pos.y),
        selected.x,
        selected.y
    )
}

#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    let fine = props.step_divisions > 1;
    html! {<div style="margin-top:10px; font-size:14px; opacity:0.8; text-align:center;">
        { help_text(props.step_divisions, props.mode_toggle, props.mode) }
        { if fine {
            html!{ <div style="margin-top:6px; font-size:12px; opacity:0.7; font-variant-numeric:tabular-nums;">{ status_text(props.pos, props.selected) }</div> }
        } else { html!{} } }
    </div>}
}
