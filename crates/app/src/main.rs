use dioxus::prelude::*;

mod config;
mod routes;
mod sections;
mod shell;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load once up front so a rejected config.toml is reported at startup
    use_hook(config::shell_config);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
