//! Floor-plan overlays: per-person markers (point mode) and blurred count
//! blobs (density mode), drawn with `tiny-skia` on a copy of the base image.

pub mod blur;
pub mod density;
pub mod palette;
pub mod points;

use crate::config::{Config, DensityConfig};
use crate::errors::{AppError, AppResult};
use crate::models::location::{LocationPoint, Rgb};
use crate::models::record::AttendanceRecord;
use crate::utils::normalize::normalize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

pub use density::{DensitySpot, plan_density, render_density};
pub use points::{PointMarker, plan_points, render_points};

pub const POINTS_FILE: &str = "mapa_puntos.png";
pub const DENSITY_FILE: &str = "mapa_calor.png";

/// Immutable rendering configuration: coordinate table keyed by normalized
/// label, person palette, marker geometry and density style.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    locations: BTreeMap<String, LocationPoint>,
    pub palette: Vec<Rgb>,
    pub marker_radius: f32,
    pub ring_radius: f32,
    pub density: DensityConfig,
}

impl OverlayConfig {
    pub fn new(locations: Vec<LocationPoint>, palette: Vec<Rgb>) -> Self {
        let mut table = BTreeMap::new();
        for loc in locations {
            // first definition wins when two names fold to the same key
            table.entry(loc.key()).or_insert(loc);
        }
        Self {
            locations: table,
            palette,
            marker_radius: 7.0,
            ring_radius: 14.0,
            density: DensityConfig::default(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self {
            marker_radius: cfg.marker_radius,
            ring_radius: cfg.ring_radius,
            density: cfg.density.clone(),
            ..Self::new(cfg.locations.clone(), cfg.palette.clone())
        }
    }

    /// Configured checkpoint for a recorded label, if any.
    pub fn locate(&self, label: &str) -> Option<&LocationPoint> {
        self.locations.get(&normalize(label))
    }
}

/// Records left after the optional person filter.
pub(crate) fn considered<'a>(
    records: &'a [AttendanceRecord],
    person: Option<&str>,
) -> Vec<&'a AttendanceRecord> {
    match person.map(str::trim) {
        Some(p) => records.iter().filter(|r| r.name.trim() == p).collect(),
        None => records.iter().collect(),
    }
}

pub(crate) fn fill_circle(pixmap: &mut Pixmap, x: f32, y: f32, r: f32, color: Rgb, alpha: u8) {
    let Some(path) = PathBuilder::from_circle(x, y, r) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.0, color.1, color.2, alpha);
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

pub(crate) fn outline_circle(pixmap: &mut Pixmap, x: f32, y: f32, r: f32, width: f32) {
    let Some(path) = PathBuilder::from_circle(x, y, r) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color_rgba8(255, 255, 255, 220);
    paint.anti_alias = true;
    let stroke = Stroke {
        width,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

pub fn load_floor_plan(path: &Path) -> AppResult<Pixmap> {
    if !path.exists() {
        return Err(AppError::FloorPlanMissing(path.display().to_string()));
    }
    Pixmap::load_png(path).map_err(|e| AppError::Render(format!("{}: {e}", path.display())))
}

pub fn save_png(pixmap: &Pixmap, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    pixmap
        .save_png(path)
        .map_err(|e| AppError::Render(format!("{}: {e}", path.display())))
}

/// Render both overlays of `records` and write them into `out_dir`.
pub fn write_overlays(
    base: &Pixmap,
    records: &[AttendanceRecord],
    person: Option<&str>,
    cfg: &OverlayConfig,
    out_dir: &Path,
) -> AppResult<(PathBuf, PathBuf)> {
    let points_path = out_dir.join(POINTS_FILE);
    let density_path = out_dir.join(DENSITY_FILE);

    save_png(&render_points(base, records, person, cfg), &points_path)?;
    save_png(&render_density(base, records, person, cfg), &density_path)?;

    Ok((points_path, density_path))
}
