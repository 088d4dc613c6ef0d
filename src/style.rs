//! Style Descriptor
//!
//! The visual style computed per county per render pass. Ephemeral output
//! of the symbology engine; serialized field names match what the map
//! display layer expects for a path style (`color` is the border color).

use serde::Serialize;

/// Default border and no-data fill token.
pub const DEFAULT_GRAY: &str = "gray";

/// Border color applied to counties covered by two or more RTOs.
pub const MULTI_RTO_BORDER: &str = "#000000";

/// Border weight applied to counties covered by two or more RTOs.
pub const MULTI_RTO_WEIGHT: f64 = 3.5;

/// Fill opacity for every county with data.
pub const FILL_OPACITY: f64 = 0.6;

/// Computed visual style for one county.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    /// Border color token.
    #[serde(rename = "color")]
    pub border_color: String,
    /// Border stroke weight.
    #[serde(rename = "weight")]
    pub border_weight: f64,
    #[serde(rename = "fillColor")]
    pub fill_color: String,
    #[serde(rename = "fillOpacity")]
    pub fill_opacity: f64,
}

impl Style {
    /// The "no data" rendering: fully transparent fill, default gray
    /// border at weight 1. Must stay visually distinct from every
    /// graduated color, and is exempt from border emphasis.
    pub fn no_data() -> Self {
        Style {
            border_color: DEFAULT_GRAY.to_string(),
            border_weight: 1.0,
            fill_color: DEFAULT_GRAY.to_string(),
            fill_opacity: 0.0,
        }
    }

    /// A filled style with the shared positive-value defaults: gray border
    /// at weight 1 and fixed 0.6 opacity.
    pub fn filled(fill_color: impl Into<String>) -> Self {
        Style {
            border_color: DEFAULT_GRAY.to_string(),
            border_weight: 1.0,
            fill_color: fill_color.into(),
            fill_opacity: FILL_OPACITY,
        }
    }

    /// Whether this is the transparent no-data rendering.
    pub fn is_no_data(&self) -> bool {
        self.fill_opacity == 0.0
    }

    /// Shared post-processing for every classification mode: counties
    /// covered by two or more RTOs get a heavy black border. The no-data
    /// style keeps its default border.
    pub fn with_border_emphasis(mut self, rto_count: u32) -> Self {
        if rto_count >= 2 && !self.is_no_data() {
            self.border_color = MULTI_RTO_BORDER.to_string();
            self.border_weight = MULTI_RTO_WEIGHT;
        }
        self
    }
}
