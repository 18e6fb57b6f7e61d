use crate::models::location::Rgb;
use std::collections::HashMap;

/// Stable person → color assignment: the first person seen takes the first
/// color, the next new person the next one, wrapping around the palette.
#[derive(Debug)]
pub struct PersonPalette<'a> {
    colors: &'a [Rgb],
    assigned: HashMap<String, Rgb>,
}

const FALLBACK: Rgb = Rgb(31, 119, 180);

impl<'a> PersonPalette<'a> {
    pub fn new(colors: &'a [Rgb]) -> Self {
        Self {
            colors,
            assigned: HashMap::new(),
        }
    }

    pub fn color_for(&mut self, person: &str) -> Rgb {
        if let Some(c) = self.assigned.get(person) {
            return *c;
        }
        let next = if self.colors.is_empty() {
            FALLBACK
        } else {
            self.colors[self.assigned.len() % self.colors.len()]
        };
        self.assigned.insert(person.to_string(), next);
        next
    }

    pub fn get(&self, person: &str) -> Option<Rgb> {
        self.assigned.get(person).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_once_exhausted() {
        let colors = [Rgb(1, 0, 0), Rgb(2, 0, 0)];
        let mut p = PersonPalette::new(&colors);
        assert_eq!(p.color_for("Ana"), Rgb(1, 0, 0));
        assert_eq!(p.color_for("Luis"), Rgb(2, 0, 0));
        assert_eq!(p.color_for("Ana"), Rgb(1, 0, 0));
        assert_eq!(p.color_for("Zoe"), Rgb(1, 0, 0));
        assert_eq!(p.get("Luis"), Some(Rgb(2, 0, 0)));
        assert_eq!(p.get("Nadie"), None);
    }
}
