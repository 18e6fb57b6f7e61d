pub mod backup;
pub mod dashboard;
pub mod gate;
pub mod log;
pub mod register;
