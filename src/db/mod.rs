//! Internal audit log kept in a small SQLite database.

pub mod initialize;
pub mod log;
pub mod pool;
