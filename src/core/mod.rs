pub mod cleanup;
pub mod simulator;

pub use crate::domain::model::{DeploymentResult, Service};
pub use crate::domain::ports::{Clock, ConfigProvider, Console, RandomProvider};
pub use crate::utils::error::Result;
