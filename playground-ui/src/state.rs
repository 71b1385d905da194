//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals shared across the playground into a
//! single struct provided via `use_context_provider`. Child components
//! retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use playground_core::{BoxInfo, CardList, ChartKind, PlaygroundConfig};

/// Shared application state for the playground.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Configuration the app was started with
    pub config: Signal<PlaygroundConfig>,
    /// Chart type shown in every resizable container
    pub chart_kind: Signal<ChartKind>,
    /// Size and colour of the swatch box
    pub box_info: Signal<BoxInfo>,
    /// Draggable cards in display order
    pub cards: Signal<CardList>,
    /// Index of the card currently being dragged
    pub dragged_card: Signal<Option<usize>>,
}

impl AppState {
    pub fn new(config: PlaygroundConfig) -> Self {
        Self {
            chart_kind: Signal::new(config.default_chart),
            box_info: Signal::new(BoxInfo::default()),
            cards: Signal::new(config.cards.clone()),
            dragged_card: Signal::new(None),
            config: Signal::new(config),
        }
    }
}
