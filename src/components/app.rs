use super::{board_view::BoardView, controls_panel::ControlsPanel, settings_modal::SettingsModal};
use crate::config::BoardConfig;
use crate::state::{MarkerAction, MarkerState};
use crate::util::{clog, cwarn};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let marker = use_reducer(MarkerState::default);
    let open_settings = use_state(|| false);

    let recenter_cb = {
        let marker = marker.clone();
        Callback::from(move |()| marker.dispatch(MarkerAction::Recenter))
    };
    let open_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(true))
    };
    let close_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let apply_settings_cb = {
        let marker = marker.clone();
        let open_settings = open_settings.clone();
        Callback::from(move |cfg: BoardConfig| {
            match cfg.validate() {
                Ok(cfg) => {
                    clog(&format!(
                        "board reconfigured: {}x{}, step 1/{}",
                        cfg.cols, cfg.rows, cfg.step_divisions
                    ));
                    marker.dispatch(MarkerAction::Reconfigure(cfg));
                }
                Err(e) => cwarn(&format!("settings rejected: {e}")),
            }
            open_settings.set(false);
        })
    };

    html! {<div style="min-height:100dvh; display:grid; place-items:center; background:#eef2f7; font-family:Inter, system-ui, -apple-system, Segoe UI, Roboto, Noto Sans KR, Helvetica, Arial, sans-serif;">
        <BoardView marker={marker.clone()} keys_enabled={!*open_settings} />
        <ControlsPanel preset={marker.config.preset()} on_recenter={recenter_cb} on_open_settings={open_settings_cb} />
        <SettingsModal show={*open_settings} config={marker.config.clone()} on_close={close_settings_cb} on_apply={apply_settings_cb} />
    </div>}
}
