mod canvas;
mod components;
mod error;
mod export;
mod loader;
mod model;
mod overlay;
mod render;
mod settings;
mod sizing;
mod state;
mod units;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
