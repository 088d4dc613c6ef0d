//! Symbology Engine
//!
//! Maps a county record to a visual style under one selectable
//! classification mode. Mode selection is a tagged enum dispatched through
//! a single entry point, so the display layer holds one `ClassificationMode`
//! value as UI state instead of juggling style callbacks.

pub mod graduated;
pub mod hue;
pub mod leading_fuel;

use rayon::prelude::*;

use crate::record::{CountyRecord, FuelCategory};
use crate::style::Style;

/// One selectable symbology. Exactly one mode is active at a time; a mode
/// switch re-styles the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationMode {
    /// Graduated scale over total queued capacity.
    TotalCapacity,
    /// Graduated scale over one fuel category's queued capacity.
    Fuel(FuelCategory),
    /// Fixed color per leading fuel.
    LeadingFuel,
    /// Leading fuel hue family, shade by share of total.
    LeadingFuelShaded,
    /// Leading fuel hue, saturation by share of total (HSV).
    LeadingFuelHue,
}

impl ClassificationMode {
    /// All modes, in menu order.
    pub fn all() -> Vec<ClassificationMode> {
        let mut modes = vec![ClassificationMode::TotalCapacity];
        modes.extend(FuelCategory::all().iter().map(|&c| ClassificationMode::Fuel(c)));
        modes.extend([
            ClassificationMode::LeadingFuel,
            ClassificationMode::LeadingFuelShaded,
            ClassificationMode::LeadingFuelHue,
        ]);
        modes
    }

    /// Stable machine name, used for CLI selection.
    pub fn name(&self) -> &'static str {
        match self {
            ClassificationMode::TotalCapacity => "total",
            ClassificationMode::Fuel(FuelCategory::Solar) => "solar",
            ClassificationMode::Fuel(FuelCategory::Hybrid) => "hybrid",
            ClassificationMode::Fuel(FuelCategory::Wind) => "wind",
            ClassificationMode::Fuel(FuelCategory::Storage) => "storage",
            ClassificationMode::Fuel(FuelCategory::NaturalGas) => "natural-gas",
            ClassificationMode::Fuel(FuelCategory::Other) => "other",
            ClassificationMode::LeadingFuel => "leading-fuel",
            ClassificationMode::LeadingFuelShaded => "leading-fuel-shaded",
            ClassificationMode::LeadingFuelHue => "leading-fuel-hue",
        }
    }

    /// Parse a machine name back into a mode.
    pub fn from_name(name: &str) -> Option<ClassificationMode> {
        Self::all().into_iter().find(|mode| mode.name() == name)
    }

    /// Title for legends and menus.
    pub fn display_name(&self) -> String {
        match self {
            ClassificationMode::TotalCapacity => "Total Queued Capacity".to_string(),
            ClassificationMode::Fuel(category) => {
                format!("Queued {} Capacity", category.display_name())
            }
            ClassificationMode::LeadingFuel => "Leading Fuel".to_string(),
            ClassificationMode::LeadingFuelShaded => "Leading Fuel (Share Shaded)".to_string(),
            ClassificationMode::LeadingFuelHue => "Leading Fuel (Share Saturated)".to_string(),
        }
    }
}

/// Classify one county under the active mode.
///
/// Total over all well-formed records: every mode renders a county with a
/// zero/absent selected value as the transparent no-data style, and the
/// multi-RTO border emphasis applies identically after every mode.
pub fn classify(record: &CountyRecord, mode: ClassificationMode) -> Style {
    let style = match mode {
        ClassificationMode::TotalCapacity => graduated::classify_total(record),
        ClassificationMode::Fuel(category) => graduated::classify_fuel(record, category),
        ClassificationMode::LeadingFuel => leading_fuel::classify_discrete(record),
        ClassificationMode::LeadingFuelShaded => leading_fuel::classify_shaded(record),
        ClassificationMode::LeadingFuelHue => hue::classify(record),
    };
    style.with_border_emphasis(record.rto_count())
}

/// Style a whole collection for one render pass, in parallel.
pub fn style_all(records: &[CountyRecord], mode: ClassificationMode) -> Vec<Style> {
    records.par_iter().map(|record| classify(record, mode)).collect()
}

/// One legend row: a color swatch plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: String,
}

/// Ordered legend entries for a mode, top bracket (or first category) first.
pub fn legend(mode: ClassificationMode) -> Vec<LegendEntry> {
    match mode {
        ClassificationMode::TotalCapacity => ladder_legend(graduated::total_capacity_ladder()),
        ClassificationMode::Fuel(category) => ladder_legend(graduated::ladder_for(category)),
        ClassificationMode::LeadingFuel
        | ClassificationMode::LeadingFuelShaded
        | ClassificationMode::LeadingFuelHue => FuelCategory::all()
            .iter()
            .map(|&category| LegendEntry {
                color: leading_fuel::discrete_color(category),
                label: category.display_name().to_string(),
            })
            .collect(),
    }
}

fn ladder_legend(ladder: &'static graduated::ThresholdLadder) -> Vec<LegendEntry> {
    ladder
        .brackets()
        .map(|(lower, upper, color)| {
            let label = match upper {
                None => format!("> {} MW", lower),
                Some(upper) => format!("{}\u{2013}{} MW", lower, upper),
            };
            LegendEntry { color, label }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::test_support::record;
    use crate::style::{MULTI_RTO_BORDER, MULTI_RTO_WEIGHT};

    #[test]
    fn test_every_mode_is_transparent_without_capacity() {
        let rec = record("Sioux, IA", 0.0, [0.0; 6], 0);
        for mode in ClassificationMode::all() {
            let style = classify(&rec, mode);
            assert!(
                style.is_no_data(),
                "mode {:?} must render zero capacity transparent",
                mode
            );
        }
    }

    #[test]
    fn test_border_emphasis_in_every_mode() {
        let rec = record("Will, IL", 900.0, [300.0, 100.0, 300.0, 100.0, 50.0, 50.0], 3);
        for mode in ClassificationMode::all() {
            let style = classify(&rec, mode);
            assert_eq!(style.border_color, MULTI_RTO_BORDER, "mode {:?}", mode);
            assert_eq!(style.border_weight, MULTI_RTO_WEIGHT, "mode {:?}", mode);
        }
    }

    #[test]
    fn test_spec_example_leading_fuel() {
        // 400 solar / 200 wind of 600 MW, single RTO: gold fill, gray
        // border at weight 1.
        let rec = record("Story, IA", 600.0, [400.0, 0.0, 200.0, 0.0, 0.0, 0.0], 1);
        let style = classify(&rec, ClassificationMode::LeadingFuel);
        assert_eq!(style.fill_color, "#FFD700");
        assert_eq!(style.border_color, "gray");
        assert_eq!(style.border_weight, 1.0);
    }

    #[test]
    fn test_mode_names_round_trip() {
        for mode in ClassificationMode::all() {
            assert_eq!(ClassificationMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(ClassificationMode::from_name("nope"), None);
    }

    #[test]
    fn test_mode_count() {
        // 1 total + 6 per-fuel + 3 leading-fuel variants.
        assert_eq!(ClassificationMode::all().len(), 10);
    }

    #[test]
    fn test_style_all_matches_classify() {
        let records = vec![
            record("Story, IA", 600.0, [400.0, 0.0, 200.0, 0.0, 0.0, 0.0], 1),
            record("Sioux, IA", 0.0, [0.0; 6], 0),
            record("Will, IL", 2500.0, [0.0, 0.0, 0.0, 0.0, 2500.0, 0.0], 2),
        ];
        let styles = style_all(&records, ClassificationMode::TotalCapacity);
        assert_eq!(styles.len(), records.len());
        for (rec, style) in records.iter().zip(&styles) {
            assert_eq!(*style, classify(rec, ClassificationMode::TotalCapacity));
        }
    }

    #[test]
    fn test_graduated_legend_labels() {
        let entries = legend(ClassificationMode::Fuel(FuelCategory::Wind));
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].label, "> 750 MW");
        assert_eq!(entries[0].color, "#08306b");
        assert_eq!(entries[4].label, "0\u{2013}50 MW");
    }

    #[test]
    fn test_categorical_legend_covers_all_fuels() {
        let entries = legend(ClassificationMode::LeadingFuel);
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].label, "Solar");
        assert_eq!(entries[5].label, "Other");
    }
}
