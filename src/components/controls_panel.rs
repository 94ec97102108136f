use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub pause_label: String,
    pub on_toggle_pause: Callback<()>,
    pub on_restart: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let pause_cb = {
        let cb = props.on_toggle_pause.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let restart_cb = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; gap:8px; justify-content:center; margin-top:8px;">
        <button id="qd-pause" onclick={pause_cb}>{ props.pause_label.clone() }</button>
        <button id="qd-restart" onclick={restart_cb}>{"Restart"}</button>
    </div>}
}
