use super::palette::PersonPalette;
use super::{OverlayConfig, considered, fill_circle, outline_circle};
use crate::models::location::Rgb;
use crate::models::record::AttendanceRecord;
use crate::utils::normalize::normalize;
use std::f32::consts::TAU;
use tiny_skia::Pixmap;
use tracing::debug;

const ANCHOR_COLOR: Rgb = Rgb(40, 40, 40);

/// One person's marker around a checkpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMarker {
    pub location: String,
    pub person: String,
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
}

/// Marker layout: one marker per distinct person per checkpoint, spread on a
/// ring of `ring_radius` at angle `2π·i/n`.
pub fn plan_points(
    records: &[AttendanceRecord],
    person: Option<&str>,
    cfg: &OverlayConfig,
) -> Vec<PointMarker> {
    let rows = considered(records, person);
    let mut palette = PersonPalette::new(&cfg.palette);

    // (normalized label, people in first-seen order), groups in first-seen order
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for r in rows {
        let name = r.name.trim();
        if name.is_empty() {
            continue;
        }
        palette.color_for(name);

        let key = normalize(&r.location);
        let idx = match groups.iter().position(|(k, _)| *k == key) {
            Some(i) => i,
            None => {
                groups.push((key, Vec::new()));
                groups.len() - 1
            }
        };
        let people = &mut groups[idx].1;
        if !people.iter().any(|p| p == name) {
            people.push(name.to_string());
        }
    }

    let mut markers = Vec::new();
    for (key, people) in groups {
        let Some(loc) = cfg.locate(&key) else {
            debug!(location = %key, "no coordinates configured, skipping");
            continue;
        };

        let n = people.len() as f32;
        for (i, p) in people.iter().enumerate() {
            let angle = TAU * i as f32 / n;
            markers.push(PointMarker {
                location: loc.name.clone(),
                person: p.clone(),
                x: loc.x + cfg.ring_radius * angle.cos(),
                y: loc.y + cfg.ring_radius * angle.sin(),
                color: palette.get(p).unwrap_or(ANCHOR_COLOR),
            });
        }
    }
    markers
}

/// Base image with one colored marker per person per checkpoint. Each
/// visited checkpoint also gets a small anchor dot in its configured color.
pub fn render_points(
    base: &Pixmap,
    records: &[AttendanceRecord],
    person: Option<&str>,
    cfg: &OverlayConfig,
) -> Pixmap {
    let mut img = base.clone();
    let markers = plan_points(records, person, cfg);

    let mut anchored: Vec<&str> = Vec::new();
    for m in &markers {
        if anchored.contains(&m.location.as_str()) {
            continue;
        }
        anchored.push(&m.location);
        if let Some(loc) = cfg.locate(&m.location) {
            let color = loc.color.unwrap_or(ANCHOR_COLOR);
            fill_circle(&mut img, loc.x, loc.y, 3.0, color, 255);
        }
    }

    for m in &markers {
        fill_circle(&mut img, m.x, m.y, cfg.marker_radius, m.color, 255);
        outline_circle(&mut img, m.x, m.y, cfg.marker_radius, 1.5);
    }
    img
}
