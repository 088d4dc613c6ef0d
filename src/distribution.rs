//! Fuel-Mix Distribution Extractor
//!
//! Derives the data behind a county's pie chart: one entry per fuel
//! category with queued capacity, in the fixed category order, each with
//! its fixed chart color. Categories at zero are omitted entirely rather
//! than drawn as empty slices. Percentages are left to the display layer
//! (`magnitude / total * 100`), not stored here.

use serde::Serialize;
use smallvec::SmallVec;

use crate::record::{CountyRecord, FuelCategory};

/// One pie slice for the county fuel-mix chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionEntry {
    pub category: FuelCategory,
    /// Queued MW for this category (always strictly positive).
    pub magnitude_mw: f64,
    /// Fixed per-category chart color, shared across all counties.
    pub color: &'static str,
}

impl DistributionEntry {
    /// Slice label in the chart's format, e.g. `"Solar: 412.5 MW"`.
    pub fn chart_label(&self) -> String {
        format!("{}: {:.1} MW", self.category.display_name(), self.magnitude_mw)
    }
}

/// At most six entries, so the whole distribution fits on the stack.
pub type FuelDistribution = SmallVec<[DistributionEntry; 6]>;

/// The county's fuel mix for charting: strictly positive categories only,
/// in the fixed enumeration order.
pub fn fuel_distribution(record: &CountyRecord) -> FuelDistribution {
    FuelCategory::all()
        .iter()
        .filter_map(|&category| {
            let mw = record.fuel_total(category);
            (mw > 0.0).then(|| DistributionEntry {
                category,
                magnitude_mw: mw,
                color: category.chart_color(),
            })
        })
        .collect()
}
