//! Dioxus RSX components for the widget playground.

mod cards;
mod chart_switch;
mod echart;
mod error_display;
mod resize_box;
mod resizeable_container;
mod side_bar;

pub use cards::DraggableCards;
pub use chart_switch::ChartTypeButtons;
pub use echart::EChart;
pub use error_display::ErrorDisplay;
pub use resize_box::ResizeBox;
pub use resizeable_container::{ContentInteraction, ResizeableContainer};
pub use side_bar::SideBar;
