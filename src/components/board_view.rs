use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::input::decide;
use crate::model::cells;
use crate::projection::Projection;
use crate::state::{MarkerAction, MarkerState};
use crate::util::clog;

use super::{iso_tile::IsoTile, marker_pin::MarkerPin, status_line::StatusLine};

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub marker: UseReducerHandle<MarkerState>,
    /// False while an overlay owns the keyboard.
    #[prop_or(true)]
    pub keys_enabled: bool,
}

#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let keys_flag = use_mut_ref(|| true);

    // Keep the listener's view of `keys_enabled` current without re-registering it
    {
        let keys_flag = keys_flag.clone();
        let enabled = props.keys_enabled;
        use_effect_with(enabled, move |_| {
            *keys_flag.borrow_mut() = enabled;
            || ()
        });
    }

    // Mode changes are logged after the reducer has accepted them
    {
        let mode = props.marker.switchable_mode();
        use_effect_with(mode, move |mode| {
            if let Some(label) = mode {
                clog(&format!("movement mode: {label}"));
            }
            || ()
        });
    }

    // Window keydown listener: attached on mount, removed on unmount
    {
        let marker = props.marker.clone();
        let keys_flag = keys_flag.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let keydown_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                let d = decide(&e.key(), *keys_flag.borrow());
                if d.prevent_default {
                    e.prevent_default();
                }
                let Some(input) = d.input else {
                    return;
                };
                marker.dispatch(MarkerAction::Key(input));
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                if win
                    .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .is_ok()
                {
                    clog("keydown listener attached");
                }
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
                clog("keydown listener detached");
                let _keep_alive = &keydown_cb;
            }
        });
    }

    let st = &*props.marker;
    let cfg = &st.config;
    let proj = Projection::new(cfg);
    let selected = st.selected();

    let tiles = cells(st.size())
        .map(|c| {
            let sp = proj.to_screen(c.x as f64, c.y as f64);
            html! { <IsoTile
                key={format!("{}-{}", c.x, c.y)}
                left={sp.left}
                top={sp.top}
                tile_w={proj.tile_w}
                tile_h={proj.tile_h}
                wall_h={proj.wall_h}
                selected={c == selected}
            /> }
        })
        .collect::<Html>();
    let pin = proj.project(st.pos);

    html! {<div style="display:flex; flex-direction:column; align-items:center;">
        <div style={format!("width:{}px; height:{}px; position:relative; filter:drop-shadow(0 8px 16px rgba(0,0,0,0.15));", proj.map_px_w(), proj.map_px_h())}>
            { tiles }
            <MarkerPin
                left={pin.left}
                top={pin.top}
                tile_w={proj.tile_w}
                tile_h={proj.tile_h}
                lift={cfg.pin_lift}
                transition_ms={cfg.transition_ms}
            />
        </div>
        <StatusLine
            pos={st.pos}
            selected={selected}
            mode={st.mode}
            step_divisions={cfg.step_divisions}
            mode_toggle={cfg.mode_toggle}
        />
    </div>}
}
