//! JSON point files for the `dedup` subcommand.
//!
//! Format: a JSON array of `{"X": .., "Y": .., "Z": ..}` objects, the serde
//! layout of `Point3D`.

use anyhow::{Context, Result};
use geom3::Point3D;
use std::fs;
use std::path::Path;

pub fn read_points(path: &Path) -> Result<Vec<Point3D>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let points: Vec<Point3D> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing points from {}", path.display()))?;
    Ok(points)
}

pub fn write_points(path: &Path, points: &[Point3D]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(points)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Parse `"x,y,z"` into three floats.
pub fn parse_triple(s: &str) -> std::result::Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let values = parts
        .iter()
        .map(|p| p.parse::<f64>().map_err(|e| format!("`{p}`: {e}")))
        .collect::<std::result::Result<Vec<f64>, String>>()?;
    match values[..] {
        [x, y, z] => Ok([x, y, z]),
        _ => Err(format!("expected x,y,z but got {} values", values.len())),
    }
}
