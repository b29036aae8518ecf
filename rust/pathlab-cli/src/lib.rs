//! Library side of the `pathlab` binary: configuration and the comparison runner.

pub mod config;
pub mod logging;
pub mod runner;

pub use config::{Config, Overrides};
pub use runner::Workload;
