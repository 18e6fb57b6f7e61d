use crate::errors::{AppError, AppResult};
use crate::models::location::{LocationPoint, Rgb, default_locations, default_palette};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "qrcheckin.conf";

/// Color scale used by the density overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityScale {
    /// green < 3 ≤ yellow < 6 ≤ orange < 10 ≤ red
    #[default]
    Stepped,
    /// green → yellow → red, saturating at `max_count` records
    Continuous,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
    pub scale: DensityScale,
    pub base_radius: f32,
    pub per_record: f32,
    pub max_radius: f32,
    pub blur_radius: u32,
    pub alpha: u8,
    /// Count that reaches full red on the continuous scale.
    pub max_count: usize,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            scale: DensityScale::Stepped,
            base_radius: 15.0,
            per_record: 5.0,
            max_radius: 60.0,
            blur_radius: 8,
            alpha: 170,
            max_count: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub records_file: String,
    pub people_file: String,
    pub floor_plan: String,
    pub output_dir: String,
    pub audit_db: String,
    pub sessions_file: String,
    /// Secondary sheet each new row is replicated to (best effort).
    pub mirror_file: Option<String>,
    /// Fixed offset for every timestamp; -300 is America/Lima.
    pub utc_offset_minutes: i32,
    /// Minimum minutes between two registrations of the same person; 0 disables.
    pub cooldown_minutes: i64,
    pub marker_radius: f32,
    pub ring_radius: f32,
    pub density: DensityConfig,
    pub locations: Vec<LocationPoint>,
    pub palette: Vec<Rgb>,
}

impl Default for Config {
    fn default() -> Self {
        Self::rooted_at(&Self::config_dir())
    }
}

impl Config {
    /// Defaults with every data file placed inside `dir`.
    pub fn rooted_at(dir: &Path) -> Self {
        let p = |name: &str| dir.join(name).to_string_lossy().to_string();
        Self {
            records_file: p("registros.csv"),
            people_file: p("personas.csv"),
            floor_plan: p("planta.png"),
            output_dir: p("out"),
            audit_db: p("qrcheckin.sqlite"),
            sessions_file: p("sessions.json"),
            mirror_file: None,
            utc_offset_minutes: -300,
            cooldown_minutes: 30,
            marker_radius: 7.0,
            ring_radius: 14.0,
            density: DensityConfig::default(),
            locations: default_locations(),
            palette: default_palette(),
        }
    }

    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".qrcheckin")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    /// Load configuration from `path`, or defaults rooted next to it if the
    /// file does not exist yet.
    pub fn load(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let cfg: Config = serde_yaml::from_str(&content)?;
            cfg.validate()?;
            Ok(cfg)
        } else {
            Ok(Self::rooted_at(parent_dir(path)))
        }
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        if self.cooldown_minutes < 0 {
            return Err(AppError::Config(format!(
                "cooldown_minutes must be >= 0 (got {})",
                self.cooldown_minutes
            )));
        }
        if self.palette.is_empty() {
            return Err(AppError::Config("palette must not be empty".into()));
        }
        if self.density.max_radius < self.density.base_radius {
            return Err(AppError::Config(
                "density.max_radius must be >= density.base_radius".into(),
            ));
        }
        Ok(())
    }

    pub fn records_path(&self) -> PathBuf {
        expand_tilde(&self.records_file)
    }

    pub fn people_path(&self) -> PathBuf {
        expand_tilde(&self.people_file)
    }

    pub fn floor_plan_path(&self) -> PathBuf {
        expand_tilde(&self.floor_plan)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    pub fn audit_path(&self) -> PathBuf {
        expand_tilde(&self.audit_db)
    }

    pub fn sessions_path(&self) -> PathBuf {
        expand_tilde(&self.sessions_file)
    }

    pub fn mirror_path(&self) -> Option<PathBuf> {
        self.mirror_file.as_deref().map(expand_tilde)
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
