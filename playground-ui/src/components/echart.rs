//! ECharts host element.

use super::resizeable_container::ContentInteraction;
use crate::js_bridge;
use dioxus::prelude::*;
use playground_core::ChartKind;

#[derive(Props, Clone, PartialEq)]
pub struct EChartProps {
    /// DOM id ECharts renders into; must be unique on the page
    pub id: String,
    pub kind: ChartKind,
}

/// A div filled by ECharts. Re-renders when `kind` changes and disposes the
/// chart instance on unmount. Inside a [`ResizeableContainer`] it stops
/// taking pointer events while the container is being resized.
///
/// [`ResizeableContainer`]: super::ResizeableContainer
#[component]
pub fn EChart(props: EChartProps) -> Element {
    let interaction = try_use_context::<ContentInteraction>();
    let interactive = interaction.map(|i| i.enabled()).unwrap_or(true);
    let pointer_events = if interactive { "auto" } else { "none" };

    let render_id = props.id.clone();
    use_effect(use_reactive(&props.kind, move |kind| {
        let option = kind.option().to_string();
        let config = kind.bridge_config().to_string();
        log::debug!("rendering {} chart into #{}", kind, render_id);
        js_bridge::render_chart(&render_id, &option, &config);
    }));

    let dispose_id = props.id.clone();
    use_drop(move || js_bridge::dispose_chart(&dispose_id));

    rsx! {
        div {
            id: "{props.id}",
            style: "width: 100%; height: 100%; pointer-events: {pointer_events};",
        }
    }
}
