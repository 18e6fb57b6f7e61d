use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use qrcheckin::config::Config;
use qrcheckin::render::{OverlayConfig, plan_points};
use qrcheckin::store::records::RecordStore;
use std::fs;
use std::path::Path;

mod common;
use common::{ROSTER, edit_config, init_workspace, qr, record_lines};

#[test]
fn test_init_creates_files() {
    let (dir, _cfg) = init_workspace("init_creates", ROSTER);

    assert!(dir.join("qrcheckin.conf").exists());
    assert!(dir.join("qrcheckin.sqlite").exists());
    assert!(dir.join("out").is_dir());

    let content = fs::read_to_string(dir.join("registros.csv")).unwrap();
    assert_eq!(content.trim(), "timestamp;fecha;hora;nombre;punto");
}

#[test]
fn test_people_lists_only_active() {
    let (_dir, cfg) = init_workspace("people_active", ROSTER);

    qr().args(["--config", &cfg, "people"])
        .assert()
        .success()
        .stdout(contains("Ana"))
        .stdout(contains("Luis").not());
}

#[test]
fn test_form_without_name_lists_people_and_writes_nothing() {
    let (dir, cfg) = init_workspace("form_list", ROSTER);

    qr().args(["--config", &cfg, "view", "--punto", "Ventanas"])
        .assert()
        .success()
        .stdout(contains("Checkpoint: Ventanas"))
        .stdout(contains("- Ana"))
        .stdout(contains("Luis").not());

    assert!(record_lines(&dir).is_empty());
}

#[test]
fn test_end_to_end_register_and_dashboard() {
    let (dir, cfg) = init_workspace("end_to_end", ROSTER);

    qr().args(["--config", &cfg, "view", "--punto", "Ventanas", "--nombre", "Ana"])
        .assert()
        .success()
        .stdout(contains("Registration successful. Hello, Ana."));

    let rows = record_lines(&dir);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].ends_with(";Ana;Ventanas"), "row: {}", rows[0]);

    let out = dir.join("overlays");
    let download = dir.join("copia.csv");
    qr().args([
        "--config",
        &cfg,
        "view",
        "--modo",
        "panel",
        "--out",
        &out.to_string_lossy(),
        "--download",
        &download.to_string_lossy(),
    ])
    .assert()
    .success()
    .stdout(contains("Total records:\x1b[0m 1"))
    .stdout(contains("Unique locations:\x1b[0m 1"))
    .stdout(contains("Unique people:\x1b[0m 1"));

    assert!(out.join("mapa_puntos.png").exists());
    assert!(out.join("mapa_calor.png").exists());
    let copy = fs::read_to_string(&download).unwrap();
    assert!(copy.contains(";Ana;Ventanas"));

    // one marker, on the ring around the Ventanas coordinate
    let c = Config::load(Path::new(&cfg)).unwrap();
    let records = RecordStore::from_config(&c).unwrap().load();
    let markers = plan_points(&records, None, &OverlayConfig::from_config(&c));
    assert_eq!(markers.len(), 1);
    let dist = ((markers[0].x - 195.0).powi(2) + (markers[0].y - 608.0).powi(2)).sqrt();
    assert!((dist - c.ring_radius).abs() < 0.01);
}

#[test]
fn test_inactive_or_blank_name_is_rejected() {
    let (dir, cfg) = init_workspace("reject_names", ROSTER);

    qr().args(["--config", &cfg, "view", "--punto", "Ventanas", "--nombre", "Luis"])
        .assert()
        .success()
        .stderr(contains("not in the list of active people"));

    qr().args(["--config", &cfg, "view", "--punto", "Ventanas", "--nombre", "  "])
        .assert()
        .success()
        .stderr(contains("Please select your name."));

    assert!(record_lines(&dir).is_empty());
}

#[test]
fn test_cooldown_blocks_second_registration() {
    let (dir, cfg) = init_workspace("cooldown_blocks", ROSTER);

    qr().args(["--config", &cfg, "view", "--punto", "Ventanas", "--nombre", "Ana"])
        .assert()
        .success();

    qr().args(["--config", &cfg, "view", "--punto", "Molienda", "--nombre", "Ana"])
        .assert()
        .success()
        .stderr(contains("You can register again in"));

    assert_eq!(record_lines(&dir).len(), 1);

    // window disabled for this submission
    qr().args([
        "--config", &cfg, "view", "--punto", "Molienda", "--nombre", "Ana", "--cooldown", "0",
    ])
    .assert()
    .success()
    .stdout(contains("Registration successful."));

    assert_eq!(record_lines(&dir).len(), 2);
}

#[test]
fn test_session_is_one_shot() {
    let (dir, cfg) = init_workspace("session_one_shot", "nombre\nAna\nBeto\n");
    edit_config(&cfg, |c| c.cooldown_minutes = 0);

    qr().args([
        "--config", &cfg, "view", "--punto", "Tripper", "--nombre", "Ana", "--session", "qr-42",
    ])
    .assert()
    .success()
    .stdout(contains("Registration successful."));

    qr().args([
        "--config", &cfg, "view", "--punto", "Tripper", "--nombre", "Beto", "--session", "qr-42",
    ])
    .assert()
    .success()
    .stdout(contains("already used"))
    .stdout(contains("Checkpoint").not());

    // another session is unaffected
    qr().args([
        "--config", &cfg, "view", "--punto", "Tripper", "--nombre", "Beto", "--session", "qr-43",
    ])
    .assert()
    .success()
    .stdout(contains("Hello, Beto."));

    assert_eq!(record_lines(&dir).len(), 2);
}

#[test]
fn test_replication_failure_is_only_a_warning() {
    let (dir, cfg) = init_workspace("replication_warning", ROSTER);
    let unreachable = dir.join("no_such_mount").join("sheet.csv");
    edit_config(&cfg, |c| {
        c.mirror_file = Some(unreachable.to_string_lossy().to_string())
    });

    qr().args(["--config", &cfg, "view", "--punto", "Ventanas", "--nombre", "Ana"])
        .assert()
        .success()
        .stdout(contains("Could not save to the remote sheet"))
        .stdout(contains("Registration successful."));

    assert_eq!(record_lines(&dir).len(), 1);

    qr().args(["--config", &cfg, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("replicate_failed"))
        .stdout(contains("register"));
}

#[test]
fn test_replication_mirror_receives_row() {
    let (dir, cfg) = init_workspace("replication_ok", ROSTER);
    let mirror = dir.join("sheet.csv");
    edit_config(&cfg, |c| c.mirror_file = Some(mirror.to_string_lossy().to_string()));

    qr().args(["--config", &cfg, "view", "--punto", "Faja 2", "--nombre", "Ana"])
        .assert()
        .success()
        .stdout(contains("remote sheet").not());

    let sheet = fs::read_to_string(&mirror).unwrap();
    let lines: Vec<&str> = sheet.lines().collect();
    assert_eq!(lines[0], "timestamp;fecha;hora;nombre;punto");
    assert_eq!(lines[1], record_lines(&dir)[0]);
}

#[test]
fn test_dashboard_without_records() {
    let (_dir, cfg) = init_workspace("dashboard_empty", ROSTER);

    qr().args(["--config", &cfg, "view", "--modo", "panel"])
        .assert()
        .success()
        .stdout(contains("No records yet."));
}

#[test]
fn test_dashboard_without_floor_plan_still_shows_metrics() {
    let (dir, cfg) = init_workspace("dashboard_no_plan", ROSTER);
    fs::remove_file(dir.join("planta.png")).unwrap();

    qr().args(["--config", &cfg, "view", "--punto", "Ventanas", "--nombre", "Ana"])
        .assert()
        .success();

    qr().args(["--config", &cfg, "view", "--modo", "panel"])
        .assert()
        .success()
        .stdout(contains("Overlays skipped"))
        .stdout(contains("Total records:\x1b[0m 1"));
}

#[test]
fn test_render_requires_floor_plan() {
    let (dir, cfg) = init_workspace("render_missing_plan", ROSTER);
    fs::remove_file(dir.join("planta.png")).unwrap();

    qr().args(["--config", &cfg, "render"])
        .assert()
        .failure()
        .stderr(contains("Floor plan not found"));
}

#[test]
fn test_export_and_backup() {
    let (dir, cfg) = init_workspace("export_backup", ROSTER);

    qr().args(["--config", &cfg, "view", "--punto", "Flotación Zn", "--nombre", "Ana"])
        .assert()
        .success();

    let json = dir.join("registros.json");
    qr().args(["--config", &cfg, "export", "--format", "json", "--file", &json.to_string_lossy()])
        .assert()
        .success();
    let content = fs::read_to_string(&json).unwrap();
    assert!(content.contains("\"punto\": \"Flotación Zn\""));

    let xlsx = dir.join("registros.xlsx");
    qr().args(["--config", &cfg, "export", "--format", "xlsx", "--file", &xlsx.to_string_lossy()])
        .assert()
        .success();
    assert!(fs::metadata(&xlsx).unwrap().len() > 0);

    let backup = dir.join("backup").join("registros.csv");
    qr().args([
        "--config",
        &cfg,
        "backup",
        "--file",
        &backup.to_string_lossy(),
        "--compress",
    ])
    .assert()
    .success();
    assert!(dir.join("backup").join("registros.zip").exists());
    assert!(!backup.exists());
}

#[test]
fn test_config_print_shows_locations() {
    let (_dir, cfg) = init_workspace("config_print", ROSTER);

    qr().args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("cooldown_minutes: 30"))
        .stdout(contains("Nido de Ciclones 4"));
}
