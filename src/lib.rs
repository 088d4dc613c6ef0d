//! County Interconnection-Queue Symbology
//!
//! Classifies county-level energy interconnection-queue records into
//! choropleth map styles under several selectable modes, and derives the
//! per-county fuel-mix distribution behind the popup pie chart.
//!
//! - `record`: the immutable per-county data model
//! - `style`: the computed visual style and the shared border rule
//! - `symbology`: mode dispatch, graduated ladders, leading-fuel variants
//! - `distribution`: pie-chart slice extraction
//! - `dataset`: load-once GeoJSON cache and styled export
//!
//! The map renderer, tile layer, and chart library are external; this
//! crate's contract toward them is `classify`, `fuel_distribution`, and
//! `CountyDataset::styled_feature_collection`.

pub mod dataset;
pub mod distribution;
pub mod record;
pub mod style;
pub mod symbology;

// Re-export commonly used types
pub use dataset::{CountyDataset, CountyFeature, GeoJsonError};
pub use distribution::{fuel_distribution, DistributionEntry, FuelDistribution};
pub use record::{CountyRecord, FuelCategory};
pub use style::Style;
pub use symbology::{classify, legend, style_all, ClassificationMode, LegendEntry};
