use crate::config::Preset;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub preset: Preset,
    pub on_recenter: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let recenter_cb = {
        let cb = props.on_recenter.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(255,255,255,0.85); border:1px solid #d0d7de; border-radius:8px; padding:8px; min-width:160px; display:flex; flex-direction:column; gap:6px; font-size:13px;">
        <div style="font-weight:600;">{ props.preset.label() }</div>
        <button onclick={recenter_cb}>{"Center"}</button>
        <button onclick={settings_cb}>{"Settings"}</button>
    </div>}
}
