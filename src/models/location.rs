use crate::utils::normalize::normalize;
use serde::{Deserialize, Serialize};

/// Plain 8-bit RGB triple, written as `[r, g, b]` in the YAML config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A checkpoint on the floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

impl LocationPoint {
    pub fn new(name: &str, x: f32, y: f32) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
            color: None,
        }
    }

    /// Lookup key shared with the recorded `punto` labels.
    pub fn key(&self) -> String {
        normalize(&self.name)
    }
}

/// Checkpoints of the concentrator plant (pixel positions on `planta.png`).
pub fn default_locations() -> Vec<LocationPoint> {
    vec![
        LocationPoint::new("Ventanas", 195.0, 608.0),
        LocationPoint::new("Faja 2", 252.0, 587.0),
        LocationPoint::new("Chancado Primario", 330.0, 560.0),
        LocationPoint::new("Chancado Secundario", 388.0, 533.0),
        LocationPoint::new("Cuarto Control", 650.0, 760.0),
        LocationPoint::new("Filtro Zn", 455.0, 409.0),
        LocationPoint::new("Flotación Zn", 623.0, 501.0),
        LocationPoint::new("Flotación Pb", 691.0, 423.0),
        LocationPoint::new("Tripper", 766.0, 452.0),
        LocationPoint::new("Molienda", 802.0, 480.0),
        LocationPoint::new("Nido de Ciclones 4", 811.0, 307.0),
    ]
}

/// Per-person marker colors (cycled once exhausted).
pub fn default_palette() -> Vec<Rgb> {
    vec![
        Rgb(31, 119, 180),
        Rgb(255, 127, 14),
        Rgb(44, 160, 44),
        Rgb(214, 39, 40),
        Rgb(148, 103, 189),
        Rgb(140, 86, 75),
        Rgb(227, 119, 194),
        Rgb(127, 127, 127),
        Rgb(188, 189, 34),
        Rgb(23, 190, 207),
    ]
}
