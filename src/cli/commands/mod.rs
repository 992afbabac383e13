pub mod backup;
pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod punch;
pub mod status;
