use crate::config::Config;
use crate::core::register::{Registrar, Registration};
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::store::records::RecordStore;
use crate::store::replicate;
use crate::store::roster::{eligible_names, load_people};
use crate::store::session::SessionStore;
use crate::ui::messages::{error, halt, header, info, success, warning};
use crate::utils::time::format_wait;

pub struct RegistrationOptions<'a> {
    pub punto: &'a str,
    pub nombre: Option<&'a str>,
    pub session: Option<&'a str>,
    pub cooldown_minutes: i64,
}

const ALREADY_USED: &str =
    "This page was already used to register. Scan the QR code again to register someone else.";

/// Registration form: shows the checkpoint and the selectable names, and
/// submits when a name is given.
pub fn show(cfg: &Config, opts: &RegistrationOptions<'_>) -> AppResult<()> {
    let sessions = SessionStore::new(cfg.sessions_path());
    let mut session = sessions.open(opts.session);
    if session.is_used() {
        halt(ALREADY_USED);
        return Ok(());
    }

    header("QR presence check-in");
    println!("Checkpoint: {}\n", opts.punto);

    let people_path = cfg.people_path();
    let names = eligible_names(&load_people(&people_path));
    if names.is_empty() {
        error(format!(
            "No people loaded in {} or none of them is active.",
            people_path.display()
        ));
        return Ok(());
    }

    let Some(nombre) = opts.nombre else {
        println!("Select your name:");
        for n in &names {
            println!("  - {n}");
        }
        println!();
        info("Run again with --nombre \"<your name>\" to register your presence.");
        return Ok(());
    };

    let store = RecordStore::from_config(cfg)?;
    let replicator = replicate::from_config(cfg);
    let registrar = Registrar::new(&store, replicator.as_ref(), opts.cooldown_minutes);

    match registrar.submit(&mut session, &names, nombre, opts.punto)? {
        Registration::Registered(outcome) => {
            let rec = &outcome.record;
            if let Err(e) = &outcome.replication {
                warning(format!("Could not save to the remote sheet: {e}"));
                audit(&cfg.audit_path(), "replicate_failed", replicator.name(), e);
            }
            audit(
                &cfg.audit_path(),
                "register",
                &rec.location,
                &format!("{} at {}", rec.name, rec.timestamp),
            );
            if let Err(e) = sessions.save(&session) {
                warning(format!("Could not store the session state: {e}"));
            }

            success(format!("Registration successful. Hello, {}.", rec.name));
            info(format!("Recorded at {} ({}).", rec.timestamp, rec.location));
            info("You can close this window.");
        }
        Registration::NoNameSelected => error("Please select your name."),
        Registration::NotEligible(name) => error(format!(
            "'{name}' is not in the list of active people. Please select your name."
        )),
        Registration::SessionUsed => halt(ALREADY_USED),
        Registration::CoolingDown { remaining } => error(format!(
            "{} is already registered. You can register again in {}.",
            nombre.trim(),
            format_wait(remaining)
        )),
    }

    Ok(())
}
