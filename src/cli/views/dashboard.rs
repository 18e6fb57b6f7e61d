use crate::config::Config;
use crate::core::dashboard::{locations_in, metrics, parse_filter, people_in, table_rows};
use crate::errors::AppResult;
use crate::models::record::HEADERS;
use crate::render::{OverlayConfig, load_floor_plan, write_overlays};
use crate::store::records::RecordStore;
use crate::ui::messages::{header, info, metric, success, warning};
use crate::utils::table::Table;
use std::path::PathBuf;

pub struct DashboardOptions<'a> {
    pub persona: Option<&'a str>,
    pub filtro_punto: Option<&'a str>,
    pub out_dir: PathBuf,
    pub download: Option<PathBuf>,
}

/// Control panel: overlays, metrics, detail table and history download.
pub fn show(cfg: &Config, opts: &DashboardOptions<'_>) -> AppResult<()> {
    header("QR control panel");

    let store = RecordStore::from_config(cfg)?;
    let records = store.load();

    if records.is_empty() {
        info("No records yet. Once people start scanning the QR codes, they will show up here.");
        return Ok(());
    }

    // ---- Overlays ----
    let persona = parse_filter(opts.persona);
    println!("Floor-plan overlays");
    println!(
        "  person filter: {} (choices: Todos, {})",
        persona.unwrap_or("Todos"),
        people_in(&records).join(", ")
    );
    match load_floor_plan(&cfg.floor_plan_path()) {
        Ok(base) => {
            let (points, density) = write_overlays(
                &base,
                &records,
                persona,
                &OverlayConfig::from_config(cfg),
                &opts.out_dir,
            )?;
            success(format!("Point overlay:   {}", points.display()));
            success(format!("Density overlay: {}", density.display()));
        }
        Err(e) => warning(format!("Overlays skipped: {e}")),
    }
    println!();

    // ---- Metrics ----
    let m = metrics(&records);
    metric("Total records", m.total);
    metric("Unique locations", m.unique_locations);
    metric("Unique people", m.unique_people);
    println!();

    // ---- Detail table ----
    let filtro = parse_filter(opts.filtro_punto);
    println!(
        "Detailed records (checkpoint: {}; choices: Todos, {})\n",
        filtro.unwrap_or("Todos"),
        locations_in(&records).join(", ")
    );
    let mut table = Table::with_headers(&HEADERS);
    for r in table_rows(&records, filtro) {
        table.add_row(r.to_row());
    }
    print!("{}", table.render());

    // ---- Download ----
    if let Some(dest) = &opts.download {
        let n = store.write_copy(dest)?;
        println!();
        success(format!("Full history ({n} records) written to {}", dest.display()));
    }

    Ok(())
}
