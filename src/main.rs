use dioxus::prelude::*;
use agentflux_site::{ Home, SiteConfig, ThemeProvider, ThemedRoot };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::warn!("Logger was already initialised");
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SiteConfig::load);

    rsx! {
        document::Title { "AgentFlux: Privacy-Preserving On-Device Agentic Systems" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemeProvider { storage_key: config.theme_storage_key.clone(),
            ThemedRoot {
                Home {}
            }
        }
    }
}
