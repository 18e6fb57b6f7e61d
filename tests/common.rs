#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use qrcheckin::config::Config;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn qr() -> Command {
    cargo_bin_cmd!("qrcheckin")
}

/// Fresh, empty working directory inside the system temp dir.
pub fn setup_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("qrcheckin_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

pub fn config_path(dir: &Path) -> String {
    dir.join("qrcheckin.conf").to_string_lossy().to_string()
}

/// Run `init` in a fresh directory, write the roster and a blank floor plan.
/// Returns (directory, config path).
pub fn init_workspace(name: &str, roster: &str) -> (PathBuf, String) {
    let dir = setup_dir(name);
    let cfg = config_path(&dir);

    qr().args(["--config", &cfg, "init"]).assert().success();

    fs::write(dir.join("personas.csv"), roster).expect("write roster");
    write_floor_plan(&dir.join("planta.png"), 900, 800);

    (dir, cfg)
}

pub fn write_floor_plan(path: &Path, w: u32, h: u32) {
    let mut pm = tiny_skia::Pixmap::new(w, h).expect("pixmap");
    pm.fill(tiny_skia::Color::WHITE);
    pm.save_png(path).expect("save floor plan");
}

/// Load the config at `cfg`, let `f` change it, and write it back.
pub fn edit_config(cfg: &str, f: impl FnOnce(&mut Config)) {
    let path = Path::new(cfg);
    let mut c = Config::load(path).expect("load config");
    f(&mut c);
    c.save(path).expect("save config");
}

/// Data rows of the record file (header excluded).
pub fn record_lines(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("registros.csv"))
        .unwrap_or_default()
        .lines()
        .skip(1)
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub const ROSTER: &str = "nombre;activo;pin\nAna;1;1234\nLuis;0;\n";
