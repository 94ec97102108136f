use super::{consent_overlay::ConsentOverlay, round_view::RoundView};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div style="min-height:100vh; background:#020814; color:#eaf4ff; font-family:Inter, sans-serif;">
            <RoundView />
            <ConsentOverlay />
        </div>
    }
}
