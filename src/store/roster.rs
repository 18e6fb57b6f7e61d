use crate::errors::AppResult;
use crate::models::person::Person;
use crate::store::DELIMITER;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

/// Every roster row, active or not. A missing or unreadable file yields an
/// empty roster.
pub fn load_people(path: &Path) -> Vec<Person> {
    if !path.exists() {
        return Vec::new();
    }
    match try_load(path) {
        Ok(people) => people,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "roster unreadable, treating as empty");
            Vec::new()
        }
    }
}

fn try_load(path: &Path) -> AppResult<Vec<Person>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };
    let name_col = column("nombre");
    let active_col = column("activo");
    let pin_col = column("pin");

    let mut out = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).map(str::trim);

        let name = cell(name_col).unwrap_or("").to_string();
        let active = match active_col {
            None => true,
            Some(_) => parse_active(cell(active_col).unwrap_or("")),
        };
        let pin = cell(pin_col)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        out.push(Person { name, active, pin });
    }
    Ok(out)
}

/// `activo` cell: blank counts as 0, numeric values compare to 1.
fn parse_active(raw: &str) -> bool {
    if raw.is_empty() {
        return false;
    }
    raw.parse::<f64>().map(|v| v.trunc() == 1.0).unwrap_or(false)
}

/// Sorted, de-duplicated names of the people allowed to register.
pub fn eligible_names(people: &[Person]) -> Vec<String> {
    people
        .iter()
        .filter(|p| p.is_eligible())
        .map(|p| p.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
