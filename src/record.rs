//! County Record Model
//!
//! The immutable per-county data shape consumed by the symbology engine and
//! the distribution extractor. One record per geographic feature, carrying
//! the queued capacity totals aggregated upstream.

use serde::{Deserialize, Serialize};

/// The closed set of fuel categories tracked per county.
///
/// The enumeration order is fixed and load-bearing: the fuel-mix
/// distribution lists entries in this order, and the leading-fuel
/// tie-break resolves against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelCategory {
    Solar,
    /// Solar + storage hybrid projects.
    Hybrid,
    Wind,
    /// Standalone battery storage.
    Storage,
    NaturalGas,
    Other,
}

impl FuelCategory {
    /// All categories in the fixed enumeration order.
    pub fn all() -> &'static [FuelCategory] {
        &[
            FuelCategory::Solar,
            FuelCategory::Hybrid,
            FuelCategory::Wind,
            FuelCategory::Storage,
            FuelCategory::NaturalGas,
            FuelCategory::Other,
        ]
    }

    /// Friendly name for legends and chart labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            FuelCategory::Solar => "Solar",
            FuelCategory::Hybrid => "Hybrid",
            FuelCategory::Wind => "Wind",
            FuelCategory::Storage => "Storage",
            FuelCategory::NaturalGas => "Gas",
            FuelCategory::Other => "Other",
        }
    }

    /// GeoJSON property name carrying this category's county total.
    pub fn property_column(&self) -> &'static str {
        match self {
            FuelCategory::Solar => "total_solar",
            FuelCategory::Hybrid => "total_hybrid",
            FuelCategory::Wind => "total_wind",
            FuelCategory::Storage => "total_storage",
            FuelCategory::NaturalGas => "total_natural_gas",
            FuelCategory::Other => "total_other",
        }
    }

    /// Fixed slice color for the fuel-mix pie chart. Shared across all
    /// counties so a single chart legend stays consistent.
    pub fn chart_color(&self) -> &'static str {
        match self {
            FuelCategory::Solar => "#FFCC00",
            FuelCategory::Hybrid => "#FFAA00",
            FuelCategory::Wind => "#00BFFF",
            FuelCategory::Storage => "#32CD32",
            FuelCategory::NaturalGas => "#FF6347",
            FuelCategory::Other => "#B0C4DE",
        }
    }
}

/// One county's aggregated interconnection-queue totals.
///
/// Deserialized straight from a GeoJSON feature's `properties`. Counties
/// outside every queue arrive from the upstream outer join with null
/// capacity fields, so every numeric field tolerates null/absent and reads
/// as zero through the accessors. Records are loaded once and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct CountyRecord {
    /// Unique county identifier within a loaded collection ("County, ST").
    pub join_key: String,

    #[serde(default)]
    total_capacity: Option<f64>,

    #[serde(default)]
    total_solar: Option<f64>,
    #[serde(default)]
    total_hybrid: Option<f64>,
    #[serde(default)]
    total_wind: Option<f64>,
    #[serde(default)]
    total_storage: Option<f64>,
    #[serde(default)]
    total_natural_gas: Option<f64>,
    #[serde(default)]
    total_other: Option<f64>,

    /// Number of distinct RTO/ISO service territories covering the county.
    /// Arrives as a float from the upstream aggregation.
    #[serde(default)]
    rto_count: Option<f64>,
}

impl CountyRecord {
    /// Total queued capacity in MW. Zero and absent are equivalent.
    pub fn total_capacity(&self) -> f64 {
        self.total_capacity.unwrap_or(0.0)
    }

    /// Queued MW for one fuel category. Absent fields read as zero.
    pub fn fuel_total(&self, category: FuelCategory) -> f64 {
        let mw = match category {
            FuelCategory::Solar => self.total_solar,
            FuelCategory::Hybrid => self.total_hybrid,
            FuelCategory::Wind => self.total_wind,
            FuelCategory::Storage => self.total_storage,
            FuelCategory::NaturalGas => self.total_natural_gas,
            FuelCategory::Other => self.total_other,
        };
        mw.unwrap_or(0.0)
    }

    /// Whether the county has any queued capacity at all.
    pub fn has_capacity(&self) -> bool {
        self.total_capacity() > 0.0
    }

    /// Count of overlapping RTO/ISO authorities (drives border emphasis).
    pub fn rto_count(&self) -> u32 {
        self.rto_count.unwrap_or(0.0).max(0.0) as u32
    }

    /// The fuel category with the largest queued capacity, or `None` when
    /// the county has no queued capacity.
    ///
    /// Ties resolve to the LAST matching category in the fixed enumeration
    /// order (the `>=` below lets later equal values win). This reproduces
    /// the reference map's rendering; see DESIGN.md for the rationale.
    pub fn leading_fuel(&self) -> Option<FuelCategory> {
        if !self.has_capacity() {
            return None;
        }

        let mut leading = FuelCategory::Solar;
        let mut max_mw = f64::NEG_INFINITY;
        for &category in FuelCategory::all() {
            let mw = self.fuel_total(category);
            if mw >= max_mw {
                max_mw = mw;
                leading = category;
            }
        }
        Some(leading)
    }

    /// Leading fuel's share of total capacity, as a percentage (0-100).
    /// Zero when the county has no queued capacity.
    pub fn leading_share(&self) -> f64 {
        let total = self.total_capacity();
        if total <= 0.0 {
            return 0.0;
        }
        match self.leading_fuel() {
            Some(category) => self.fuel_total(category) / total * 100.0,
            None => 0.0,
        }
    }
}
