//! Graduated (Threshold-Ladder) Classification
//!
//! One parameterized classifier serves the total-capacity mode and all six
//! per-fuel modes; the ladders themselves are static configuration. The
//! original map shipped a near-identical copy of this routine per fuel,
//! collapsed here into a single function plus a lookup table.

use crate::record::{CountyRecord, FuelCategory};
use crate::style::Style;

/// A graduated color scale: thresholds sorted descending, one color per
/// threshold, always terminating in a 0-threshold catch-all so every
/// positive value selects exactly one color.
#[derive(Debug)]
pub struct ThresholdLadder {
    thresholds: &'static [f64],
    colors: &'static [&'static str],
}

impl ThresholdLadder {
    /// Color for a positive value: the first threshold STRICTLY below the
    /// value wins. A value exactly equal to a threshold falls into the
    /// next lower bracket, never the bracket it equals.
    pub fn pick_color(&self, value: f64) -> &'static str {
        for (i, &threshold) in self.thresholds.iter().enumerate() {
            if value > threshold {
                return self.colors[i];
            }
        }
        // Unreachable for positive values (the ladder ends at 0); callers
        // route non-positive values to the no-data style first.
        self.colors[self.colors.len() - 1]
    }

    /// Number of brackets in the ladder.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Brackets as (lower threshold, upper threshold, color), ordered from
    /// the top bracket down. The top bracket has no upper bound.
    pub fn brackets(&self) -> impl Iterator<Item = (f64, Option<f64>, &'static str)> + '_ {
        self.thresholds.iter().enumerate().map(|(i, &lower)| {
            let upper = if i == 0 { None } else { Some(self.thresholds[i - 1]) };
            (lower, upper, self.colors[i])
        })
    }
}

/// Solar and solar+storage hybrid share one scale (YlOrBr).
static SOLAR_LADDER: ThresholdLadder = ThresholdLadder {
    thresholds: &[2000.0, 750.0, 300.0, 100.0, 0.0],
    colors: &["#993404", "#d95f0e", "#fe9929", "#fed98e", "#ffffd4"],
};

static WIND_LADDER: ThresholdLadder = ThresholdLadder {
    thresholds: &[750.0, 500.0, 200.0, 50.0, 0.0],
    colors: &["#08306b", "#2979b9", "#73b2d8", "#c8dcf0", "#f7fbff"],
};

static STORAGE_LADDER: ThresholdLadder = ThresholdLadder {
    thresholds: &[750.0, 500.0, 200.0, 50.0, 0.0],
    colors: &["#00441b", "#1d8641", "#55b567", "#9ed798", "#d5efcf"],
};

static NATURAL_GAS_LADDER: ThresholdLadder = ThresholdLadder {
    thresholds: &[750.0, 500.0, 200.0, 50.0, 0.0],
    colors: &["#67000d", "#d32020", "#fb7050", "#fcbea5", "#fff5f0"],
};

static OTHER_LADDER: ThresholdLadder = ThresholdLadder {
    thresholds: &[750.0, 500.0, 200.0, 50.0, 0.0],
    colors: &["#050505", "#363636", "#676767", "#989898", "#c9c9c9"],
};

/// Seven-step BuPu scale for total queued capacity.
static TOTAL_CAPACITY_LADDER: ThresholdLadder = ThresholdLadder {
    thresholds: &[2000.0, 1200.0, 750.0, 500.0, 200.0, 50.0, 0.0],
    colors: &[
        "#810f7c", "#863e99", "#896bb1", "#8c96c6", "#a6bbd9", "#c6dbeb", "#edf8fb",
    ],
};

/// The graduated scale configured for one fuel category.
pub fn ladder_for(category: FuelCategory) -> &'static ThresholdLadder {
    match category {
        FuelCategory::Solar | FuelCategory::Hybrid => &SOLAR_LADDER,
        FuelCategory::Wind => &WIND_LADDER,
        FuelCategory::Storage => &STORAGE_LADDER,
        FuelCategory::NaturalGas => &NATURAL_GAS_LADDER,
        FuelCategory::Other => &OTHER_LADDER,
    }
}

/// The graduated scale for total queued capacity.
pub fn total_capacity_ladder() -> &'static ThresholdLadder {
    &TOTAL_CAPACITY_LADDER
}

/// Style a county by one fuel category's queued MW.
pub fn classify_fuel(record: &CountyRecord, category: FuelCategory) -> Style {
    classify_value(record.fuel_total(category), ladder_for(category))
}

/// Style a county by total queued MW.
pub fn classify_total(record: &CountyRecord) -> Style {
    classify_value(record.total_capacity(), &TOTAL_CAPACITY_LADDER)
}

fn classify_value(value: f64, ladder: &ThresholdLadder) -> Style {
    if value <= 0.0 {
        return Style::no_data();
    }
    Style::filled(ladder.pick_color(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::test_support::record;

    #[test]
    fn test_ladders_descend_and_terminate_at_zero() {
        let mut ladders: Vec<&ThresholdLadder> =
            FuelCategory::all().iter().map(|&c| ladder_for(c)).collect();
        ladders.push(total_capacity_ladder());

        for ladder in ladders {
            assert_eq!(ladder.thresholds.len(), ladder.colors.len());
            assert!(!ladder.is_empty());
            for pair in ladder.thresholds.windows(2) {
                assert!(pair[0] > pair[1], "thresholds must strictly descend");
            }
            assert_eq!(*ladder.thresholds.last().unwrap(), 0.0);
        }
    }

    #[test]
    fn test_strict_comparison_at_boundary() {
        // Wind ladder thresholds are [750, 500, 200, 50, 0]. A value of
        // exactly 200 is not > 200, so it falls to the 50-bracket color.
        let ladder = ladder_for(FuelCategory::Wind);
        assert_eq!(ladder.pick_color(200.0), "#c8dcf0");
        assert_eq!(ladder.pick_color(200.1), "#73b2d8");
    }

    #[test]
    fn test_catch_all_bracket() {
        let ladder = ladder_for(FuelCategory::Wind);
        assert_eq!(ladder.pick_color(0.5), "#f7fbff");
        assert_eq!(ladder.pick_color(50.0), "#f7fbff");
        assert_eq!(ladder.pick_color(50.01), "#c8dcf0");
    }

    #[test]
    fn test_top_bracket_is_open_ended() {
        let ladder = total_capacity_ladder();
        assert_eq!(ladder.pick_color(2000.5), "#810f7c");
        assert_eq!(ladder.pick_color(1.0e7), "#810f7c");
    }

    #[test]
    fn test_solar_and_hybrid_share_a_scale() {
        let solar = ladder_for(FuelCategory::Solar);
        let hybrid = ladder_for(FuelCategory::Hybrid);
        assert!(std::ptr::eq(solar, hybrid));
    }

    #[test]
    fn test_classify_fuel_boundary_example() {
        // 200 MW of wind under the [750, 500, 200, 50, 0] ladder lands in
        // the 50-bracket, not the 200-bracket.
        let rec = record("Story, IA", 600.0, [400.0, 0.0, 200.0, 0.0, 0.0, 0.0], 1);
        let style = classify_fuel(&rec, FuelCategory::Wind);
        assert_eq!(style.fill_color, "#c8dcf0");
        assert_eq!(style.fill_opacity, crate::style::FILL_OPACITY);
    }

    #[test]
    fn test_classify_zero_value_is_no_data() {
        let rec = record("Adair, IA", 600.0, [600.0, 0.0, 0.0, 0.0, 0.0, 0.0], 1);
        // County has capacity overall but none of it is wind.
        let style = classify_fuel(&rec, FuelCategory::Wind);
        assert!(style.is_no_data());
    }

    #[test]
    fn test_classify_total_no_capacity() {
        let rec = record("Sioux, IA", 0.0, [0.0; 6], 0);
        assert!(classify_total(&rec).is_no_data());
    }

    #[test]
    fn test_brackets_iteration() {
        let ladder = ladder_for(FuelCategory::Wind);
        let brackets: Vec<_> = ladder.brackets().collect();
        assert_eq!(brackets.len(), 5);
        assert_eq!(brackets[0], (750.0, None, "#08306b"));
        assert_eq!(brackets[4], (0.0, Some(50.0), "#f7fbff"));
    }
}
