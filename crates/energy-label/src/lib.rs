pub mod catalog;
pub mod config;
pub mod error;
pub mod label;
pub mod telemetry;
