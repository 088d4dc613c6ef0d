//! Print summary statistics for an aggregated county GeoJSON file.
//!
//! Usage: inspect_dataset <agg_county_data.geojson>

use std::env;

use anyhow::{bail, Result};
use queue_atlas::{fuel_distribution, CountyDataset, FuelCategory};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        bail!("usage: inspect_dataset <geojson>");
    }

    println!("Loading counties from {}...", args[1]);
    let dataset = CountyDataset::load(&args[1])?;

    println!("\n=== QUEUED CAPACITY BY FUEL ===\n");
    for &category in FuelCategory::all() {
        let mw: f64 = dataset.records().map(|r| r.fuel_total(category)).sum();
        println!("  {:<8} {:>12.1} MW", category.display_name(), mw);
    }
    let total: f64 = dataset.records().map(|r| r.total_capacity()).sum();
    println!("  {:<8} {:>12.1} MW", "Total", total);

    println!("\n=== LEADING FUEL BY COUNTY ===\n");
    for &category in FuelCategory::all() {
        let counties = dataset
            .records()
            .filter(|r| r.leading_fuel() == Some(category))
            .count();
        println!("  {:<8} {:>6} counties", category.display_name(), counties);
    }

    let multi_rto = dataset.records().filter(|r| r.rto_count() >= 2).count();
    println!("\nCounties in 2+ RTO territories: {}", multi_rto);

    // Largest queue, with its chart slices, as a spot check.
    if let Some(top) = dataset
        .records()
        .filter(|r| r.has_capacity())
        .max_by(|a, b| a.total_capacity().total_cmp(&b.total_capacity()))
    {
        println!(
            "\nLargest queue: {} ({:.1} MW)",
            top.join_key,
            top.total_capacity()
        );
        for entry in fuel_distribution(top) {
            println!("  {}", entry.chart_label());
        }
    }

    Ok(())
}
