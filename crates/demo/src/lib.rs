// File: crates/demo/src/lib.rs
// Summary: Statement chart CLI library: configuration, logging, CSV input/export, manifest and the run pipeline.

pub mod app;
pub mod cli;
pub mod config;
pub mod export;
pub mod input;
pub mod logging;
pub mod manifest;

pub use app::{run, RunSummary};
pub use cli::Cli;
pub use config::AppConfig;
