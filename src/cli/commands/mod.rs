pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod people;
pub mod render;
pub mod view;
