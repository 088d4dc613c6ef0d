//! Continuous Hue Classification
//!
//! Alternative leading-fuel mode: hue is fixed per fuel category, saturation
//! tracks the leading fuel's share of total capacity, and value stays at
//! 100%. A county dominated by one fuel renders fully saturated; an even mix
//! washes toward white.

use crate::record::{CountyRecord, FuelCategory};
use crate::style::Style;

/// Hue anchor per category, in degrees, aligned with the discrete colors.
/// `None` for Other, which has no meaningful hue and keeps its fixed gray.
fn category_hue(category: FuelCategory) -> Option<f64> {
    match category {
        FuelCategory::Solar => Some(51.0),
        FuelCategory::Hybrid => Some(33.0),
        FuelCategory::Wind => Some(210.0),
        FuelCategory::Storage => Some(120.0),
        FuelCategory::NaturalGas => Some(0.0),
        FuelCategory::Other => None,
    }
}

/// Standard six-sector HSV to RGB conversion.
///
/// `h` in degrees (wrapped into [0, 360)), `s` and `v` in [0, 1].
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    let sector = h.rem_euclid(360.0) / 60.0;
    let i = sector.floor();
    let f = sector - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match i as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let to_channel = |x: f64| (x * 255.0).round() as u8;
    (to_channel(r), to_channel(g), to_channel(b))
}

fn rgb_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Continuous-hue mode: category hue at a saturation equal to the leading
/// fuel's share of total capacity, value fixed at 100%.
pub fn classify(record: &CountyRecord) -> Style {
    let Some(category) = record.leading_fuel() else {
        return Style::no_data();
    };
    let fill = match category_hue(category) {
        Some(hue) => {
            let saturation = record.leading_share() / 100.0;
            let (r, g, b) = hsv_to_rgb(hue, saturation, 1.0);
            rgb_hex(r, g, b)
        }
        None => super::leading_fuel::discrete_color(category).to_string(),
    };
    Style::filled(fill)
}
