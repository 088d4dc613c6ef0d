//! Classifier benchmarks over a synthetic county batch.
//!
//! A mode switch re-styles the entire collection, so the number that
//! matters is full-collection styling time at county scale (~3k records).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use queue_atlas::{classify, style_all, ClassificationMode, CountyDataset, CountyRecord};
use serde_json::json;

/// Deterministic pseudo-county batch with a spread of fuel mixes.
fn synthetic_records(n: usize) -> Vec<CountyRecord> {
    let features: Vec<_> = (0..n)
        .map(|i| {
            let solar = ((i * 37) % 2500) as f64;
            let wind = ((i * 61) % 900) as f64;
            let gas = ((i * 13) % 700) as f64;
            let storage = ((i * 7) % 400) as f64;
            json!({
                "type": "Feature",
                "geometry": null,
                "properties": {
                    "join_key": format!("County {}, XX", i),
                    "total_capacity": solar + wind + gas + storage,
                    "total_solar": solar,
                    "total_wind": wind,
                    "total_natural_gas": gas,
                    "total_storage": storage,
                    "rto_count": (i % 3) as f64
                }
            })
        })
        .collect();

    let raw = json!({"type": "FeatureCollection", "features": features}).to_string();
    CountyDataset::from_geojson_str(&raw)
        .expect("synthetic collection parses")
        .records()
        .cloned()
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let records = synthetic_records(3000);

    c.bench_function("classify_single_graduated", |b| {
        b.iter(|| classify(black_box(&records[17]), ClassificationMode::TotalCapacity))
    });

    c.bench_function("classify_single_leading_fuel", |b| {
        b.iter(|| classify(black_box(&records[17]), ClassificationMode::LeadingFuel))
    });

    c.bench_function("style_all_3k_total_capacity", |b| {
        b.iter(|| style_all(black_box(&records), ClassificationMode::TotalCapacity))
    });

    c.bench_function("style_all_3k_leading_fuel_hue", |b| {
        b.iter(|| style_all(black_box(&records), ClassificationMode::LeadingFuelHue))
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
