//! Resizable box with a bottom-right drag handle.
//!
//! All three pointer handlers sit on the outer box and the press is filtered
//! by target identity against the handle's DOM id. On a handle press the outer
//! box takes pointer capture, so moves and the final release keep arriving
//! after the pointer leaves the handle (or the window).
//!
//! While a gesture is active the wrapped content is made non-interactive
//! through an explicit flag: the content wrapper's `pointer-events` is derived
//! from it, and nested widgets can read it from [`ContentInteraction`].

use dioxus::prelude::*;
use playground_core::resize::{DeltaTracking, Point, PointerTarget, ResizeBounds, Size};
use playground_core::ResizeDragController;
use wasm_bindgen::JsCast;

/// Whether content inside the nearest [`ResizeableContainer`] should react to
/// the pointer right now. Provided as context.
#[derive(Clone, Copy)]
pub struct ContentInteraction(Memo<bool>);

impl ContentInteraction {
    pub fn enabled(&self) -> bool {
        (self.0)()
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ResizeableContainerProps {
    /// DOM id of the outer box; the handle gets `{id}-handle`
    pub id: String,
    #[props(default)]
    pub bounds: ResizeBounds,
    #[props(default)]
    pub initial_size: Size,
    #[props(default)]
    pub tracking: DeltaTracking,
    pub children: Element,
}

pub fn handle_id(container_id: &str) -> String {
    format!("{}-handle", container_id)
}

pub fn container_style(size: Size, dragging: bool) -> String {
    let select = if dragging { "none" } else { "auto" };
    format!(
        "position: relative; width: {}px; height: {}px; border: 1px solid #ccc; \
         box-sizing: border-box; touch-action: none; user-select: {};",
        size.width, size.height, select
    )
}

pub fn content_style(interactive: bool) -> String {
    let events = if interactive { "auto" } else { "none" };
    format!("width: 95%; height: 95%; pointer-events: {};", events)
}

fn client_point(evt: &PointerEvent) -> Point {
    let p = evt.client_coordinates();
    Point::new(p.x, p.y)
}

/// Classify the press by comparing the DOM target's id with the handle id.
/// Events that cannot be inspected count as landing elsewhere.
fn pointer_target(evt: &PointerEvent, handle: &str) -> PointerTarget {
    let data = evt.data();
    let on_handle = data
        .downcast::<web_sys::PointerEvent>()
        .and_then(|raw| raw.target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| el.id() == handle);
    if on_handle {
        PointerTarget::Handle
    } else {
        PointerTarget::Elsewhere
    }
}

/// Route the rest of the gesture to the outer box, wherever the pointer goes.
/// Returns `false` when capture could not be taken.
fn capture_pointer(evt: &PointerEvent, container_id: &str) -> bool {
    let data = evt.data();
    let Some(raw) = data.downcast::<web_sys::PointerEvent>() else {
        log::debug!("pointer event for {} is not a web_sys::PointerEvent", container_id);
        return false;
    };
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
    else {
        log::debug!("resizeable container {} not mounted", container_id);
        return false;
    };
    match el.set_pointer_capture(raw.pointer_id()) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("setPointerCapture failed on {}: {:?}", container_id, e);
            false
        }
    }
}

#[component]
pub fn ResizeableContainer(props: ResizeableContainerProps) -> Element {
    let (bounds, initial, tracking) = (props.bounds, props.initial_size, props.tracking);
    let mut controller = use_signal(move || {
        if let Err(e) = bounds.validate() {
            log::warn!("normalizing resize bounds: {:#}", e);
        }
        ResizeDragController::new(bounds, initial).with_tracking(tracking)
    });
    let interactive = use_memo(move || controller.read().content_interactive());
    use_context_provider(|| ContentInteraction(interactive));

    let container_id = props.id.clone();
    let handle = handle_id(&props.id);

    let on_pointer_down = {
        let container_id = container_id.clone();
        let handle = handle.clone();
        move |evt: PointerEvent| {
            let target = pointer_target(&evt, &handle);
            if target != PointerTarget::Handle || controller.peek().is_active() {
                return;
            }
            // Without capture the release may never reach us, so the press
            // is rolled back rather than left dragging.
            let began = controller
                .write()
                .pointer_down_with(target, client_point(&evt), || {
                    capture_pointer(&evt, &container_id)
                });
            if began {
                evt.prevent_default();
            }
        }
    };

    // Hover moves while idle must not touch the signal, or every mouse move
    // over the box would re-render it.
    let on_pointer_move = move |evt: PointerEvent| {
        if controller.peek().is_active() {
            controller.write().pointer_move(client_point(&evt));
        }
    };

    let on_pointer_up = move |_: PointerEvent| {
        if controller.peek().is_active() {
            controller.write().pointer_up();
        }
    };

    let on_pointer_cancel = move |_: PointerEvent| {
        if controller.peek().is_active() {
            controller.write().pointer_cancel();
        }
    };

    let (outer_style, inner_style) = {
        let ctl = controller.read();
        (
            container_style(ctl.size(), ctl.is_active()),
            content_style(ctl.content_interactive()),
        )
    };

    rsx! {
        div {
            id: "{container_id}",
            class: "parent",
            style: "{outer_style}",
            onpointerdown: on_pointer_down,
            onpointermove: on_pointer_move,
            onpointerup: on_pointer_up,
            onpointercancel: on_pointer_cancel,
            onlostpointercapture: on_pointer_cancel,
            div {
                class: "container",
                style: "{inner_style}",
                {props.children}
            }
            div {
                id: "{handle}",
                class: "resize-handle",
                style: "position: absolute; right: 0; bottom: 0; width: 12px; height: 12px; \
                        cursor: se-resize; background: linear-gradient(135deg, transparent 50%, #888 50%);",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_id_derives_from_container() {
        assert_eq!(handle_id("chart-left"), "chart-left-handle");
    }

    #[test]
    fn test_container_style_uses_pixel_size() {
        let style = container_style(Size::new(400.0, 370.0), false);
        assert!(style.contains("width: 400px;"));
        assert!(style.contains("height: 370px;"));
        assert!(style.contains("user-select: auto;"));
        assert!(container_style(Size::default(), true).contains("user-select: none;"));
    }

    #[test]
    fn test_content_style_follows_interaction_flag() {
        assert!(content_style(true).ends_with("pointer-events: auto;"));
        assert!(content_style(false).ends_with("pointer-events: none;"));
    }
}
