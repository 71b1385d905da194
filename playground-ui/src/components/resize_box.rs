//! The box painted by the sidebar swatches.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ResizeBox() -> Element {
    let state = use_context::<AppState>();
    let style = state.box_info.read().style();

    rsx! {
        div { style: "{style}" }
    }
}
