//! Sidebar with colour swatches and chart-type buttons.

use super::ChartTypeButtons;
use crate::state::AppState;
use dioxus::prelude::*;
use playground_core::BoxInfo;

#[component]
pub fn SideBar() -> Element {
    let mut state = use_context::<AppState>();
    let swatches = state.config.read().swatches.clone();

    rsx! {
        div {
            class: "side-bar",
            style: "width: 160px; padding: 8px; border-right: 1px solid #e0e0e0; display: flex; flex-direction: column; gap: 4px;",
            h2 { style: "margin: 0 0 8px 0;", "SideBar" }
            for color in swatches {
                button {
                    key: "{color}",
                    style: "border-left: 12px solid {color};",
                    onclick: {
                        let color = color.clone();
                        move |_| state.box_info.set(BoxInfo::from_swatch(&color))
                    },
                    "{color}"
                }
            }
            ChartTypeButtons { short: true }
        }
    }
}
