use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::records::RecordStore;
use crate::ui::messages::{info, success, warning};
use std::fs;

const ROSTER_TEMPLATE: &str = "nombre;activo;pin\n";

/// Handle the `init` command
///
/// This creates:
///  - the configuration file (defaults rooted next to it)
///  - the record file with its header row
///  - an empty roster template, if none exists
///  - the overlay output directory
///  - the internal log database
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = cli.config_path();

    println!("⚙️  Initializing qrcheckin…");

    let cfg = if path.exists() && !force {
        info(format!("Keeping existing config file: {}", path.display()));
        Config::load(&path)?
    } else {
        let dir = path.parent().unwrap_or(std::path::Path::new("."));
        let cfg = Config::rooted_at(dir);
        cfg.save(&path)?;
        success(format!("Config file: {}", path.display()));
        cfg
    };

    let store = RecordStore::from_config(&cfg)?;
    if store.ensure_exists()? {
        success(format!("Record file: {}", store.path().display()));
    } else {
        info(format!("Keeping existing record file: {}", store.path().display()));
    }

    let roster = cfg.people_path();
    if !roster.exists() {
        fs::write(&roster, ROSTER_TEMPLATE)?;
        success(format!("Roster template: {}", roster.display()));
    }

    fs::create_dir_all(cfg.output_path())?;

    let audit_path = cfg.audit_path();
    let pool = DbPool::open(&audit_path)?;
    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        &audit_path.to_string_lossy(),
        "Configuration and record file initialized",
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    if !cfg.floor_plan_path().exists() {
        warning(format!(
            "Floor plan not found yet: {} (needed for the overlays)",
            cfg.floor_plan_path().display()
        ));
    }

    success("qrcheckin initialization completed!");
    Ok(())
}
