//! Export a styled county FeatureCollection for one classification mode.
//!
//! Usage: style_counties <agg_county_data.geojson> <mode> [output.geojson]
//!
//! With no output path the styled collection is pretty-printed to stdout.

use std::env;
use std::fs;

use anyhow::{anyhow, bail, Context, Result};
use queue_atlas::{ClassificationMode, CountyDataset};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        bail!("usage: style_counties <geojson> <mode> [output]\nmodes: {}", mode_list());
    }

    let mode = ClassificationMode::from_name(&args[2])
        .ok_or_else(|| anyhow!("unknown mode '{}', expected one of: {}", args[2], mode_list()))?;

    println!("Loading counties from {}...", args[1]);
    let dataset = CountyDataset::load(&args[1])?;

    println!("Styling as '{}'...", mode.display_name());
    let styled = dataset.styled_feature_collection(mode);

    match args.get(3) {
        Some(path) => {
            let body = serde_json::to_string(&styled).context("Failed to serialize output")?;
            fs::write(path, body).with_context(|| format!("Failed to write {}", path))?;
            println!("Wrote {}", path);
        }
        None => {
            let body =
                serde_json::to_string_pretty(&styled).context("Failed to serialize output")?;
            println!("{}", body);
        }
    }

    Ok(())
}

fn mode_list() -> String {
    ClassificationMode::all()
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ")
}
