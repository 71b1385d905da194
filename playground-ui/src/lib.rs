//! Shared Dioxus components and ECharts bridge for the widget playground.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for ECharts calls via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components (resizable container, charts, sidebar, cards)

pub mod components;
pub mod js_bridge;
pub mod state;
