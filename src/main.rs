mod components;
mod config;
mod controller;
mod error;
mod geo;
mod model;
mod state;
mod tiles;
mod util;
mod viewer;

use components::{App, AppProps};
use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    util::init_logging(&config.log_filter);
    tracing::info!(api_key = config.api_key.is_some(), "starting");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
