use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::records::RecordStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = RecordStore::from_config(cfg)?;
        ExportLogic::export(&store, &cfg.audit_path(), format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
