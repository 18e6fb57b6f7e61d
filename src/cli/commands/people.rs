use crate::config::Config;
use crate::errors::AppResult;
use crate::store::roster::{eligible_names, load_people};
use crate::ui::messages::{error, info};

/// List the names shown in the registration form.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let path = cfg.people_path();
    let people = load_people(&path);
    let names = eligible_names(&people);

    if names.is_empty() {
        error(format!(
            "No people loaded in {} or none of them is active.",
            path.display()
        ));
        return Ok(());
    }

    for n in &names {
        println!("{n}");
    }

    let inactive = people.iter().filter(|p| !p.active).count();
    info(format!("{} active, {} inactive", names.len(), inactive));
    Ok(())
}
