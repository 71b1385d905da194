//! Widget playground.
//!
//! A sidebar of colour swatches paints a box, a list of cards can be
//! reordered by dragging, and two resizable containers host pie/radar charts
//! whose type is switched from the toolbar or the sidebar.
//!
//! Startup:
//! 1. `build.rs` copies `assets/playground.json` into `OUT_DIR`.
//! 2. `include_str!` embeds it; it is parsed once on mount.
//! 3. A rejected config falls back to the defaults and its error chain is
//!    shown in a banner.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use playground_core::PlaygroundConfig;
use playground_ui::components::{
    ChartTypeButtons, DraggableCards, EChart, ErrorDisplay, ResizeBox, ResizeableContainer,
    SideBar,
};
use playground_ui::js_bridge;
use playground_ui::state::AppState;

const PLAYGROUND_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/playground.json"));

/// The two chart containers, left to right.
const CONTAINER_SIDES: [&str; 2] = ["left", "right"];

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting widget playground");
    launch(App);
}

#[component]
fn App() -> Element {
    let (config, config_errors) = use_hook(|| PlaygroundConfig::load(PLAYGROUND_JSON));
    let state = use_context_provider(|| AppState::new(config.clone()));

    // One-time ECharts bridge install; charts poll until it is ready.
    use_effect(js_bridge::init_charts);

    let kind = (state.chart_kind)();

    rsx! {
        div {
            class: "main-container",
            style: "display: flex; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            SideBar {}

            div {
                class: "App",
                style: "flex: 1; padding: 8px;",

                ErrorDisplay {
                    title: "Config rejected, using defaults".to_string(),
                    messages: config_errors,
                }

                ChartTypeButtons {}

                h2 { "Draggable List" }
                DraggableCards {}

                ResizeBox {}

                div {
                    style: "display: flex; gap: 8px; margin-top: 12px;",
                    for side in CONTAINER_SIDES {
                        ResizeableContainer {
                            key: "{side}",
                            id: format!("resize-{}", side),
                            bounds: config.resize,
                            initial_size: config.initial_size,
                            tracking: config.tracking,
                            EChart { id: format!("chart-{}", side), kind }
                        }
                    }
                }
            }
        }
    }
}
