//! Buttons that switch the chart type shown in every container.

use crate::state::AppState;
use dioxus::prelude::*;
use playground_core::ChartKind;

/// One button per chart kind, writing `AppState::chart_kind`.
///
/// With `short` the buttons show the bare kind ("pie") instead of the
/// toolbar caption ("PieChart").
#[component]
pub fn ChartTypeButtons(#[props(default = false)] short: bool) -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.chart_kind)();

    let buttons: Vec<(ChartKind, &'static str, &'static str)> = ChartKind::ALL
        .iter()
        .map(|&kind| {
            let caption = if short { kind.as_str() } else { kind.label() };
            let weight = if kind == current { "bold" } else { "normal" };
            (kind, caption, weight)
        })
        .collect();

    rsx! {
        for (kind, caption, weight) in buttons {
            button {
                key: "{kind}",
                style: "margin: 2px; font-weight: {weight};",
                onclick: move |_| {
                    log::info!("chart type -> {}", kind);
                    state.chart_kind.set(kind);
                },
                "{caption}"
            }
        }
    }
}
