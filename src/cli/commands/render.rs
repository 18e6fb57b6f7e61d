use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::parse_filter;
use crate::errors::AppResult;
use crate::render::{OverlayConfig, load_floor_plan, write_overlays};
use crate::store::records::RecordStore;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render { persona, out } = cmd {
        let store = RecordStore::from_config(cfg)?;
        let records = store.load();

        let base = load_floor_plan(&cfg.floor_plan_path())?;
        let out_dir = out
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.output_path());

        let (points, density) = write_overlays(
            &base,
            &records,
            parse_filter(persona.as_deref()),
            &OverlayConfig::from_config(cfg),
            &out_dir,
        )?;

        success(format!("Point overlay:   {}", points.display()));
        success(format!("Density overlay: {}", density.display()));
    }
    Ok(())
}
