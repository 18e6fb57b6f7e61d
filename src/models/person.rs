/// One row of the roster file (`personas.csv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,        // ⇔ nombre
    pub active: bool,        // ⇔ activo (1 = eligible)
    pub pin: Option<String>, // ⇔ pin (optional column)
}

impl Person {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            active: true,
            pin: None,
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.active && !self.name.is_empty()
    }
}
