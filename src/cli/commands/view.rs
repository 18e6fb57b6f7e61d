use crate::cli::parser::Commands;
use crate::cli::views::dashboard::{self, DashboardOptions};
use crate::cli::views::registration::{self, RegistrationOptions};
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Which page the QR link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Registro,
    Panel,
}

impl Mode {
    /// Only "panel" opens the dashboard; any other value is the form.
    pub fn from_param(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("panel") {
            Mode::Panel
        } else {
            Mode::Registro
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        punto,
        modo,
        nombre,
        session,
        cooldown,
        persona,
        filtro_punto,
        out,
        download,
    } = cmd
    {
        match Mode::from_param(modo) {
            Mode::Registro => registration::show(
                cfg,
                &RegistrationOptions {
                    punto,
                    nombre: nombre.as_deref(),
                    session: session.as_deref(),
                    cooldown_minutes: cooldown.unwrap_or(cfg.cooldown_minutes),
                },
            )?,
            Mode::Panel => dashboard::show(
                cfg,
                &DashboardOptions {
                    persona: persona.as_deref(),
                    filtro_punto: filtro_punto.as_deref(),
                    out_dir: out
                        .as_deref()
                        .map(expand_tilde)
                        .unwrap_or_else(|| cfg.output_path()),
                    download: download.as_deref().map(expand_tilde),
                },
            )?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_panel_opens_the_dashboard() {
        assert_eq!(Mode::from_param("panel"), Mode::Panel);
        assert_eq!(Mode::from_param(" PANEL "), Mode::Panel);
        assert_eq!(Mode::from_param("registro"), Mode::Registro);
        assert_eq!(Mode::from_param("whatever"), Mode::Registro);
    }
}
