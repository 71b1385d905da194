//! Core types for the widget playground.
//!
//! Nothing in here touches the DOM, so all of it compiles and tests natively:
//! - `resize`: the resize-drag state machine behind every resizable container
//! - `cards`: ordering rules for the draggable card list
//! - `chart`: chart kinds and their ECharts option payloads
//! - `swatch`: colour swatches and the box they paint
//! - `config`: the embedded playground configuration

pub mod cards;
pub mod chart;
pub mod config;
pub mod resize;
pub mod swatch;

pub use cards::{Card, CardList};
pub use chart::ChartKind;
pub use config::PlaygroundConfig;
pub use resize::{DeltaTracking, Point, PointerTarget, ResizeBounds, ResizeDragController, Size};
pub use swatch::BoxInfo;
