//! Dataset Loading and Caching
//!
//! One read of the aggregated county GeoJSON at startup, parsed into an
//! immutable `CountyDataset`. The dataset is the single-owner, write-once
//! cache the renderer re-styles on every mode switch; nothing here mutates
//! after load. Geometry is carried through as raw JSON for the display
//! layer, never interpreted.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde_json::{json, Value};
use thiserror::Error;

use crate::record::CountyRecord;
use crate::style::Style;
use crate::symbology::{classify, ClassificationMode};

/// Errors raised while parsing a county GeoJSON document.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error("document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a FeatureCollection, found {found:?}")]
    NotAFeatureCollection { found: Option<String> },

    #[error("feature {index} properties do not match the county schema: {source}")]
    BadProperties {
        index: usize,
        source: serde_json::Error,
    },
}

/// One geographic feature: the parsed county record plus its untouched
/// GeoJSON `geometry` and original `properties`.
#[derive(Debug, Clone)]
pub struct CountyFeature {
    pub record: CountyRecord,
    pub geometry: Value,
    pub properties: Value,
}

/// The loaded, read-only county collection.
#[derive(Debug)]
pub struct CountyDataset {
    features: Vec<CountyFeature>,
    index: FxHashMap<String, usize>,
}

impl CountyDataset {
    /// Load the aggregated county GeoJSON from disk. Called once at
    /// startup; a failure here halts rendering, there is no retry.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read GeoJSON: {}", path.display()))?;
        let dataset = Self::from_geojson_str(&raw)
            .with_context(|| format!("Failed to parse GeoJSON: {}", path.display()))?;

        println!("  Counties: {}", dataset.len());
        println!(
            "  With queued capacity: {}",
            dataset.records().filter(|r| r.has_capacity()).count()
        );
        Ok(dataset)
    }

    /// Parse a GeoJSON FeatureCollection from a string.
    ///
    /// Features without a `properties` object or without a `join_key` are
    /// skipped with a warning; properties that exist but carry the wrong
    /// types are an error. Absent capacity fields deserialize to zero.
    pub fn from_geojson_str(raw: &str) -> Result<Self, GeoJsonError> {
        let document: Value = serde_json::from_str(raw)?;

        let doc_type = document.get("type").and_then(Value::as_str);
        if doc_type != Some("FeatureCollection") {
            return Err(GeoJsonError::NotAFeatureCollection {
                found: doc_type.map(str::to_string),
            });
        }

        let raw_features = document
            .get("features")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let mut features = Vec::with_capacity(raw_features.len());
        for (index, feature) in raw_features.into_iter().enumerate() {
            let Some(properties) = feature.get("properties").filter(|p| p.is_object()) else {
                eprintln!("Warning: feature {} has no properties object, skipping", index);
                continue;
            };
            if properties.get("join_key").and_then(Value::as_str).is_none() {
                eprintln!("Warning: feature {} has no join_key, skipping", index);
                continue;
            }

            let record: CountyRecord = serde_json::from_value(properties.clone())
                .map_err(|source| GeoJsonError::BadProperties { index, source })?;
            let geometry = feature.get("geometry").cloned().unwrap_or(Value::Null);

            features.push(CountyFeature {
                record,
                geometry,
                properties: properties.clone(),
            });
        }

        // Later duplicates win the index slot, matching a by-key overwrite.
        let index = features
            .iter()
            .enumerate()
            .map(|(i, f)| (f.record.join_key.clone(), i))
            .collect();

        Ok(CountyDataset { features, index })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Features in load order.
    pub fn features(&self) -> &[CountyFeature] {
        &self.features
    }

    /// County records in load order.
    pub fn records(&self) -> impl Iterator<Item = &CountyRecord> {
        self.features.iter().map(|f| &f.record)
    }

    /// Look up one county by its join key.
    pub fn get(&self, join_key: &str) -> Option<&CountyFeature> {
        self.index.get(join_key).map(|&i| &self.features[i])
    }

    /// Styles for the whole collection under one mode, in feature order.
    pub fn style_features(&self, mode: ClassificationMode) -> Vec<Style> {
        self.features
            .par_iter()
            .map(|f| classify(&f.record, mode))
            .collect()
    }

    /// The export contract toward the display layer: the original
    /// FeatureCollection with each feature's computed style embedded in
    /// its properties under `"style"`. Feature order is preserved.
    pub fn styled_feature_collection(&self, mode: ClassificationMode) -> Value {
        let styles = self.style_features(mode);
        let features: Vec<Value> = self
            .features
            .iter()
            .zip(styles)
            .map(|(feature, style)| {
                let mut properties = feature.properties.clone();
                if let Some(map) = properties.as_object_mut() {
                    // Style serialization is infallible (strings + floats).
                    map.insert(
                        "style".to_string(),
                        serde_json::to_value(&style).unwrap_or(Value::Null),
                    );
                }
                json!({
                    "type": "Feature",
                    "geometry": feature.geometry,
                    "properties": properties,
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}
