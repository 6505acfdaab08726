use crate::config::{BoardConfig, Preset};
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const STEP_CHOICES: [u32; 4] = [3, 5, 9, 16];

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub config: BoardConfig,
    pub on_close: Callback<()>,
    pub on_apply: Callback<BoardConfig>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    // Draft edited locally; only Apply touches the board.
    let draft = use_state(|| props.config.clone());
    {
        let draft = draft.clone();
        use_effect_with((props.show, props.config.clone()), move |(_, cfg)| {
            draft.set(cfg.clone());
            || ()
        });
    }
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let apply_cb = {
        let cb = props.on_apply.clone();
        let draft = draft.clone();
        Callback::from(move |_| cb.emit((*draft).clone()))
    };
    let preset_cb = |preset: Preset| {
        let draft = draft.clone();
        Callback::from(move |_| draft.set((*draft).clone().with_preset(preset)))
    };
    let walls_cb = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let on = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|el| el.checked())
                .unwrap_or(false);
            draft.set((*draft).clone().with_walls(on));
        })
    };
    let step_cb = |n: u32| {
        let draft = draft.clone();
        Callback::from(move |_| draft.set((*draft).clone().with_step_divisions(n)))
    };

    let current = draft.preset();
    let fine = draft.is_fine_step();
    let step_buttons = STEP_CHOICES
        .iter()
        .map(|&n| {
            let active = draft.step_divisions == n;
            let style = if active { "font-weight:700;" } else { "" };
            html! { <button onclick={step_cb(n)} style={style}>{ format!("1/{n}") }</button> }
        })
        .collect::<Html>();

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.35); z-index:50;">
        <div style="background:#fff; border:1px solid #d0d7de; border-radius:12px; padding:16px 20px; min-width:320px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; gap:8px;">
                <button onclick={preset_cb(Preset::Simple)} disabled={current == Preset::Simple}>{ Preset::Simple.label() }</button>
                <button onclick={preset_cb(Preset::Fine)} disabled={current == Preset::Fine}>{ Preset::Fine.label() }</button>
            </div>
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="checkbox" checked={draft.wall_h > 0.0} onchange={walls_cb} />
                <span>{"Draw tile walls"}</span>
            </label>
            { if fine { html!{
                <div style="display:flex; align-items:center; gap:6px;">
                    <span>{"Step"}</span>
                    { step_buttons }
                </div>
            } } else { html!{} } }
            <div style="display:flex; gap:8px;">
                <button onclick={apply_cb} style="flex:1;">{"Apply"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Cancel"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Applying restarts the marker at the board center. Nothing is kept after the page closes."}</div>
        </div>
    </div>}
}
