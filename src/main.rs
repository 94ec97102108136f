mod catalog;
mod components;
mod engine;
mod input;
mod leaderboard;
mod model;
mod render;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
