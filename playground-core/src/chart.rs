//! Chart kinds and the ECharts option payloads behind them.
//!
//! Options are built as `serde_json::Value` and handed to the JS bridge as
//! strings. Anything that has to be a JS function (label formatters) is
//! switched on through the bridge config instead.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Pie,
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Pie, ChartKind::Radar];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Radar => "radar",
        }
    }

    /// Button caption used in the main toolbar.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Pie => "PieChart",
            ChartKind::Radar => "RadarChart",
        }
    }

    pub fn option(&self) -> Value {
        match self {
            ChartKind::Pie => pie_option(),
            ChartKind::Radar => radar_option(),
        }
    }

    /// Extra settings for the bridge that cannot live in the option JSON.
    pub fn bridge_config(&self) -> Value {
        match self {
            ChartKind::Pie => json!({}),
            ChartKind::Radar => json!({ "thousandsAxisLabels": true }),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// "Access From" pie with five traffic sources.
pub fn pie_option() -> Value {
    json!({
        "tooltip": { "trigger": "item" },
        "legend": { "top": "0%", "left": "center" },
        "grid": { "containLabel": true },
        "series": [{
            "name": "Access From",
            "type": "pie",
            "radius": ["0%", "60%"],
            "avoidLabelOverlap": false,
            "itemStyle": {
                "borderRadius": 10,
                "borderColor": "#fff",
                "borderWidth": 2,
            },
            "label": { "show": false, "position": "center" },
            "emphasis": {
                "label": { "show": true, "fontSize": 20, "fontWeight": "bold" }
            },
            "labelLine": { "show": false },
            "data": [
                { "value": 10, "name": "Search Engine" },
                { "value": 20, "name": "Direct" },
                { "value": 10, "name": "Email" },
                { "value": 20, "name": "Union Ads" },
                { "value": 40, "name": "Video Ads" },
            ],
        }],
    })
}

const RADAR_INDICATORS: [&str; 6] = [
    "Sales",
    "Administration",
    "Information Technology",
    "Customer Support",
    "Development",
    "Marketing",
];
const RADAR_MAX: u32 = 1000;

/// Budget vs spending radar across six departments.
pub fn radar_option() -> Value {
    let indicator: Vec<Value> = RADAR_INDICATORS
        .iter()
        .map(|name| json!({ "name": name, "max": RADAR_MAX }))
        .collect();

    json!({
        "legend": { "data": ["Allocated Budget", "Actual Spending"] },
        "alignTicks": false,
        "grid": {
            "containLabel": true,
            "top": "10%",
            "left": "10%",
            "right": "10%",
            "bottom": "10%",
        },
        "radar": {
            "indicator": indicator,
            "alignTicks": false,
        },
        "series": [{
            "name": "Budget vs spending",
            "type": "radar",
            "data": [
                { "value": [420, 300, 200, 350, 500, 800], "name": "Allocated Budget" },
                { "value": [500, 140, 280, 260, 420, 210], "name": "Actual Spending" },
            ],
        }],
    })
}
