pub mod calculator;
pub mod config;
pub mod log;
pub mod logic;
pub mod tracking;
