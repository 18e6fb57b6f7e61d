use qrcheckin::config::DensityScale;
use qrcheckin::models::location::{LocationPoint, Rgb, default_locations, default_palette};
use qrcheckin::models::record::AttendanceRecord;
use qrcheckin::render::density::warmth;
use qrcheckin::render::{OverlayConfig, plan_density, plan_points, render_density, render_points};
use qrcheckin::utils::normalize::normalize;
use std::f32::consts::PI;
use tiny_skia::{Color, Pixmap};

fn rec(name: &str, location: &str) -> AttendanceRecord {
    AttendanceRecord {
        timestamp: "2025-03-10 10:00:00".to_string(),
        date: "2025-03-10".to_string(),
        time: "10:00:00".to_string(),
        name: name.to_string(),
        location: location.to_string(),
    }
}

fn overlay() -> OverlayConfig {
    OverlayConfig::new(
        vec![
            LocationPoint::new("A", 50.0, 50.0),
            LocationPoint::new("B", 150.0, 150.0),
            LocationPoint::new("Flotación Zn", 100.0, 40.0),
        ],
        default_palette(),
    )
}

fn base() -> Pixmap {
    let mut pm = Pixmap::new(200, 200).unwrap();
    pm.fill(Color::WHITE);
    pm
}

#[test]
fn test_normalization_equivalence() {
    let keys: Vec<String> = ["Flotación Zn", "  flotacion zn ", "FLOTACIÓN ZN"]
        .iter()
        .map(|s| normalize(s))
        .collect();
    assert!(keys.iter().all(|k| k == "flotacion zn"));
}

#[test]
fn test_empty_records_leave_image_unchanged() {
    let img = base();
    let cfg = overlay();
    assert_eq!(render_points(&img, &[], None, &cfg).data(), img.data());
    assert_eq!(render_density(&img, &[], None, &cfg).data(), img.data());
}

#[test]
fn test_unknown_locations_are_skipped() {
    let img = base();
    let cfg = overlay();
    let records = vec![rec("Ana", "Nowhere"), rec("Beto", "")];

    assert!(plan_points(&records, None, &cfg).is_empty());
    assert!(plan_density(&records, None, &cfg).is_empty());
    assert_eq!(render_density(&img, &records, None, &cfg).data(), img.data());
}

#[test]
fn test_density_busier_location_is_warmer_and_larger() {
    let mut records = vec![rec("Ana", "A")];
    for i in 0..10 {
        records.push(rec(&format!("P{i}"), "B"));
    }
    let spots = plan_density(&records, None, &overlay());
    assert_eq!(spots.len(), 2);

    let a = spots.iter().find(|s| s.location == "A").unwrap();
    let b = spots.iter().find(|s| s.location == "B").unwrap();
    assert_eq!((a.count, b.count), (1, 10));
    assert!(warmth(b.color) > warmth(a.color));
    assert!(b.radius > a.radius);
    assert!(b.radius <= 60.0);
}

#[test]
fn test_density_continuous_scale_and_render() {
    let mut cfg = overlay();
    cfg.density.scale = DensityScale::Continuous;
    let records = vec![rec("Ana", "A"), rec("Ana", "B"), rec("Beto", "B"), rec("Cris", "b")];

    let spots = plan_density(&records, None, &cfg);
    let a = spots.iter().find(|s| s.location == "A").unwrap();
    let b = spots.iter().find(|s| s.location == "B").unwrap();
    assert_eq!(b.count, 3);
    assert!(warmth(b.color) > warmth(a.color));

    let img = base();
    let out = render_density(&img, &records, None, &cfg);
    assert_ne!(out.data(), img.data());
    // far corner is untouched
    assert_eq!(out.pixel(199, 0), img.pixel(199, 0));
}

#[test]
fn test_continuous_scale_is_fixed() {
    let mut cfg = overlay();
    cfg.density.scale = DensityScale::Continuous;

    // a single quiet checkpoint is not painted as the hottest one
    let lone = plan_density(&[rec("Ana", "A")], None, &cfg);
    assert_eq!(lone.len(), 1);
    assert!(warmth(lone[0].color) < 0, "{:?}", lone[0].color);

    let mut busy = Vec::new();
    for i in 0..cfg.density.max_count {
        busy.push(rec(&format!("P{i}"), "B"));
    }
    let spots = plan_density(&busy, None, &cfg);
    assert_eq!(spots[0].color, Rgb(230, 30, 30));
}

#[test]
fn test_points_ring_layout() {
    let cfg = overlay();
    let records = vec![rec("Ana", "A"), rec("Beto", "a"), rec("Ana", "A"), rec("Cris", "A")];

    let markers = plan_points(&records, None, &cfg);
    assert_eq!(markers.len(), 3);
    for (i, m) in markers.iter().enumerate() {
        let angle = 2.0 * PI * i as f32 / 3.0;
        assert!((m.x - (50.0 + cfg.ring_radius * angle.cos())).abs() < 1e-3);
        assert!((m.y - (50.0 + cfg.ring_radius * angle.sin())).abs() < 1e-3);
    }
    let names: Vec<&str> = markers.iter().map(|m| m.person.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Beto", "Cris"]);
}

#[test]
fn test_point_colors_are_stable_and_cycle() {
    let palette = vec![Rgb(1, 0, 0), Rgb(0, 1, 0)];
    let cfg = OverlayConfig::new(vec![LocationPoint::new("A", 50.0, 50.0)], palette.clone());
    let records = vec![rec("Ana", "A"), rec("Beto", "A"), rec("Cris", "A")];

    let first = plan_points(&records, None, &cfg);
    let again = plan_points(&records, None, &cfg);
    assert_eq!(first, again);
    assert_eq!(first[0].color, palette[0]);
    assert_eq!(first[1].color, palette[1]);
    assert_eq!(first[2].color, palette[0]);
}

#[test]
fn test_person_filter() {
    let cfg = overlay();
    let records = vec![rec("Ana", "A"), rec("Beto", "B"), rec("Ana", "Flotacion zn")];

    let markers = plan_points(&records, Some("Ana"), &cfg);
    assert_eq!(markers.len(), 2);
    assert!(markers.iter().all(|m| m.person == "Ana"));
    assert!(markers.iter().any(|m| m.location == "Flotación Zn"));

    let spots = plan_density(&records, Some("Beto"), &cfg);
    assert_eq!(spots.len(), 1);
    assert_eq!(spots[0].location, "B");
}

#[test]
fn test_default_table_places_ventanas() {
    let cfg = OverlayConfig::new(default_locations(), default_palette());
    let loc = cfg.locate("ventanas").unwrap();
    assert_eq!((loc.x, loc.y), (195.0, 608.0));
}
