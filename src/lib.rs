pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{StdConsole, StdRandom, TokioClock};
pub use crate::config::{toml_config::TomlConfig, SimulatorSettings};
pub use crate::core::simulator::{DeploymentSimulator, Outcome, Stage};
pub use crate::domain::model::{DeploymentResult, Service};
pub use crate::utils::error::{CaasError, Result, SimulatedFailure};
