pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod status;
pub mod timeline;
pub mod tracking;
