//! The two pages behind a QR link, rendered to the terminal.

pub mod dashboard;
pub mod registration;
