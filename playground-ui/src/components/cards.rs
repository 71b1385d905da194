//! Draggable card list using HTML5 drag and drop.
//!
//! The dragged card's index lives in `AppState::dragged_card`. Hovering
//! another card past its vertical middle moves the dragged card there, and
//! the dragged index follows it.

use crate::state::AppState;
use dioxus::prelude::*;
use playground_core::cards::should_move;
use playground_core::Card;

const CARD_STYLE: &str = "border: 1px dashed gray; padding: 0.5rem 1rem; margin-bottom: .5rem; \
    background-color: white; cursor: move; border-radius: 8px; transition: opacity 0.3s ease;";

#[component]
pub fn DraggableCards() -> Element {
    let state = use_context::<AppState>();
    let cards: Vec<Card> = state.cards.read().cards().to_vec();

    rsx! {
        div {
            style: "width: 400px;",
            for (index, card) in cards.into_iter().enumerate() {
                DraggableCard { key: "{card.id}", index, card }
            }
        }
    }
}

#[component]
fn DraggableCard(index: usize, card: Card) -> Element {
    let mut state = use_context::<AppState>();
    let mut height = use_signal(|| 0.0_f64);
    let opacity = if (state.dragged_card)() == Some(index) { 0 } else { 1 };

    rsx! {
        div {
            draggable: "true",
            style: "{CARD_STYLE} opacity: {opacity};",
            onmounted: move |evt: MountedEvent| async move {
                match evt.get_client_rect().await {
                    Ok(rect) => height.set(rect.height()),
                    Err(e) => log::debug!("could not measure card {}: {:?}", index, e),
                }
            },
            ondragstart: move |_| state.dragged_card.set(Some(index)),
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                let Some(drag_index) = *state.dragged_card.peek() else {
                    return;
                };
                let pointer_y = evt.element_coordinates().y;
                if !should_move(drag_index, index, pointer_y, height()) {
                    return;
                }
                if state.cards.write().move_card(drag_index, index) {
                    state.dragged_card.set(Some(index));
                }
            },
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                state.dragged_card.set(None);
            },
            ondragend: move |_| state.dragged_card.set(None),
            "{card.text}"
        }
    }
}
