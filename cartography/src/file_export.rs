use crate::catalog::Catalog;
use crate::curve::MotionCurve;
use crate::error::Result;
use crate::sampler::SamplerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One line of an exported motion curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveRow {
    pub elapsed_days: f64,
    pub percent: f64,
    pub x_au: f64,
    pub y_au: f64,
}

impl CurveRow {
    pub fn rows(curve: &MotionCurve) -> impl Iterator<Item = CurveRow> + '_ {
        curve
            .iter()
            .zip(curve.points())
            .map(|(s, p)| CurveRow {
                elapsed_days: s.elapsed_days,
                percent: s.percent,
                x_au: p.x,
                y_au: p.y,
            })
    }
}

pub fn export_motion_curve(curve: &MotionCurve, filename: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(filename)?;

    let mut rows = 0;
    for row in CurveRow::rows(curve) {
        writer.serialize(row)?;
        rows += 1;
    }

    writer.flush()?;

    tracing::info!(path = %filename.display(), rows, "exported motion curve");

    Ok(())
}

pub fn load_catalog_file(filename: &Path) -> Result<Catalog> {
    let s = std::fs::read_to_string(filename)?;
    let catalog: Catalog = serde_yaml::from_str(&s)?;
    tracing::debug!(path = %filename.display(), bodies = catalog.len(), "loaded catalog");
    Ok(catalog)
}

pub fn to_catalog_file(catalog: &Catalog, filename: &Path) -> Result<()> {
    let s = serde_yaml::to_string(catalog)?;
    std::fs::write(filename, s)?;
    Ok(())
}

pub fn load_sampler_config(filename: &Path) -> Result<SamplerConfig> {
    let s = std::fs::read_to_string(filename)?;
    Ok(serde_yaml::from_str(&s)?)
}
