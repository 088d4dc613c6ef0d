//! Leading-Fuel Classification
//!
//! Categorical variants that color a county by whichever fuel holds the
//! largest queued capacity: a discrete one-color-per-category mode and a
//! three-shade mode graduated by the leading fuel's share of the total.

use crate::record::{CountyRecord, FuelCategory};
use crate::style::Style;

/// Fixed fill color per leading fuel (discrete mode).
pub fn discrete_color(category: FuelCategory) -> &'static str {
    match category {
        FuelCategory::Solar => "#FFD700",
        FuelCategory::Hybrid => "#FF8C00",
        FuelCategory::Wind => "#1E90FF",
        FuelCategory::Storage => "#006400",
        FuelCategory::NaturalGas => "#8B0000",
        FuelCategory::Other => "#7A7A7A",
    }
}

/// Shade triple for the graduated leading-fuel mode.
struct ShadeTriple {
    /// Leading fuel is more than 75% of the total.
    dark: &'static str,
    /// More than 50%.
    medium: &'static str,
    /// 50% or less.
    light: &'static str,
}

fn shades(category: FuelCategory) -> ShadeTriple {
    match category {
        FuelCategory::Solar => ShadeTriple {
            dark: "#FFD700",
            medium: "#FFEA00",
            light: "#fcfa68",
        },
        FuelCategory::Hybrid => ShadeTriple {
            dark: "#FF8C00",
            medium: "#FFA500",
            light: "#FFDAB9",
        },
        FuelCategory::Wind => ShadeTriple {
            dark: "#0000CD",
            medium: "#1E90FF",
            light: "#ADD8E6",
        },
        FuelCategory::Storage => ShadeTriple {
            dark: "#006400",
            medium: "#32CD32",
            light: "#98FB98",
        },
        FuelCategory::NaturalGas => ShadeTriple {
            dark: "#8B0000",
            medium: "#FF6347",
            light: "#FFA07A",
        },
        FuelCategory::Other => ShadeTriple {
            dark: "#7A7A7A",
            medium: "#A9A9A9",
            light: "#D3D3D3",
        },
    }
}

/// Discrete mode: one fixed color per leading fuel.
pub fn classify_discrete(record: &CountyRecord) -> Style {
    match record.leading_fuel() {
        Some(category) => Style::filled(discrete_color(category)),
        None => Style::no_data(),
    }
}

/// Shaded mode: the leading fuel picks the hue family, its share of total
/// capacity picks the shade (>75% dark, >50% medium, otherwise light).
pub fn classify_shaded(record: &CountyRecord) -> Style {
    let Some(category) = record.leading_fuel() else {
        return Style::no_data();
    };
    let triple = shades(category);
    let share = record.leading_share();
    let color = if share > 75.0 {
        triple.dark
    } else if share > 50.0 {
        triple.medium
    } else {
        triple.light
    };
    Style::filled(color)
}
