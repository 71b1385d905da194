//! Colour swatches and the box they paint.

use serde::{Deserialize, Serialize};

/// Swatches offered by the sidebar, in display order.
pub const DEFAULT_SWATCHES: [&str; 10] = [
    "red", "green", "blue", "yellow", "orange", "purple", "pink", "brown", "gray", "black",
];

pub const SWATCH_BOX_SIZE: u32 = 100;

/// Dimensions and fill of the swatch box.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxInfo {
    pub width: u32,
    pub height: u32,
    pub background: String,
}

impl Default for BoxInfo {
    fn default() -> Self {
        Self::from_swatch("red")
    }
}

impl BoxInfo {
    /// Picking a swatch always resets the box to its standard size.
    pub fn from_swatch(color: &str) -> Self {
        Self {
            width: SWATCH_BOX_SIZE,
            height: SWATCH_BOX_SIZE,
            background: color.to_string(),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {}px; height: {}px; background-color: {};",
            self.width, self.height, self.background
        )
    }
}
