use dioxus::prelude::*;

mod config;
mod routes;

use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    if let Err(err) = dioxus::logger::init(config::log_level()) {
        eprintln!("logger already initialised: {err}");
    }
    tracing::info!(platform = config::client_platform(), "starting deal ui");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
