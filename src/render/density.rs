use super::blur::box_blur;
use super::{OverlayConfig, considered, fill_circle};
use crate::config::DensityScale;
use crate::models::location::Rgb;
use crate::models::record::AttendanceRecord;
use crate::utils::normalize::normalize;
use std::collections::BTreeMap;
use tiny_skia::{Pixmap, PixmapPaint, Transform};
use tracing::debug;

const GREEN: Rgb = Rgb(46, 204, 64);
const YELLOW: Rgb = Rgb(255, 220, 0);
const ORANGE: Rgb = Rgb(255, 133, 27);
const RED: Rgb = Rgb(230, 30, 30);

/// One blob of the density overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DensitySpot {
    pub location: String,
    pub x: f32,
    pub y: f32,
    pub count: usize,
    pub radius: f32,
    pub color: Rgb,
}

/// Fixed stepped scale: green < 3 ≤ yellow < 6 ≤ orange < 10 ≤ red.
pub fn stepped_color(count: usize) -> Rgb {
    match count {
        0..=2 => GREEN,
        3..=5 => YELLOW,
        6..=9 => ORANGE,
        _ => RED,
    }
}

/// Fixed continuous green → yellow → red; `max_count` records and above are red.
pub fn continuous_color(count: usize, max_count: usize) -> Rgb {
    let t = if max_count == 0 {
        1.0
    } else {
        (count as f32 / max_count as f32).clamp(0.0, 1.0)
    };
    if t < 0.5 {
        lerp(GREEN, YELLOW, t * 2.0)
    } else {
        lerp(YELLOW, RED, t * 2.0 - 1.0)
    }
}

fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// How "hot" a scale color reads: red minus green, higher is warmer.
pub fn warmth(c: Rgb) -> i16 {
    i16::from(c.0) - i16::from(c.1)
}

pub fn radius_for(count: usize, cfg: &OverlayConfig) -> f32 {
    let d = &cfg.density;
    (d.base_radius + count as f32 * d.per_record).min(d.max_radius)
}

/// Per-checkpoint counts mapped to color and radius. Checkpoints without
/// records, and labels without coordinates, produce no spot.
pub fn plan_density(
    records: &[AttendanceRecord],
    person: Option<&str>,
    cfg: &OverlayConfig,
) -> Vec<DensitySpot> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for r in considered(records, person) {
        *counts.entry(normalize(&r.location)).or_default() += 1;
    }

    counts
        .into_iter()
        .filter_map(|(key, n)| match cfg.locate(&key) {
            Some(loc) => Some((loc, n)),
            None => {
                debug!(location = %key, "no coordinates configured, skipping");
                None
            }
        })
        .map(|(loc, n)| DensitySpot {
            location: loc.name.clone(),
            x: loc.x,
            y: loc.y,
            count: n,
            radius: radius_for(n, cfg),
            color: match cfg.density.scale {
                DensityScale::Stepped => stepped_color(n),
                DensityScale::Continuous => continuous_color(n, cfg.density.max_count),
            },
        })
        .collect()
}

/// Base image with a blurred, alpha-composited blob per visited checkpoint.
pub fn render_density(
    base: &Pixmap,
    records: &[AttendanceRecord],
    person: Option<&str>,
    cfg: &OverlayConfig,
) -> Pixmap {
    let mut img = base.clone();
    let spots = plan_density(records, person, cfg);
    if spots.is_empty() {
        return img;
    }

    let Some(mut layer) = Pixmap::new(img.width(), img.height()) else {
        return img;
    };
    for s in &spots {
        fill_circle(&mut layer, s.x, s.y, s.radius, s.color, cfg.density.alpha);
    }
    box_blur(&mut layer, cfg.density.blur_radius);

    img.draw_pixmap(
        0,
        0,
        layer.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepped_scale_gets_warmer() {
        let steps: Vec<i16> = [1, 3, 6, 10].into_iter().map(|n| warmth(stepped_color(n))).collect();
        assert!(steps.windows(2).all(|w| w[0] < w[1]), "{steps:?}");
    }

    #[test]
    fn continuous_scale_endpoints() {
        assert_eq!(continuous_color(0, 10), GREEN);
        assert_eq!(continuous_color(5, 10), YELLOW);
        assert_eq!(continuous_color(10, 10), RED);
        assert_eq!(continuous_color(25, 10), RED);
    }

    #[test]
    fn continuous_scale_ignores_other_checkpoints() {
        // a lone quiet checkpoint stays green instead of becoming the hottest
        assert_eq!(continuous_color(1, 10), lerp(GREEN, YELLOW, 0.2));
        assert!(warmth(continuous_color(1, 10)) < warmth(YELLOW));
    }
}
