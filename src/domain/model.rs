use crate::domain::ports::Console;
use crate::utils::error::Result;

pub const OUT_OF_BEANS_MESSAGE: &str = "[CRITICAL] Dependency Injection Failed: Out of beans.";
pub const STREAMING_MESSAGE: &str = "[INFO] Streaming liquid assets to Mug.v1.0...";

/// What `Service::execute_action` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentResult {
    OutOfBeans,
    Streaming,
}

impl DeploymentResult {
    pub fn message(&self) -> &'static str {
        match self {
            DeploymentResult::OutOfBeans => OUT_OF_BEANS_MESSAGE,
            DeploymentResult::Streaming => STREAMING_MESSAGE,
        }
    }
}

/// The coffee-dispensing service. Nothing in a run ever adds beans, so
/// `Streaming` is only reachable through `Service::with_beans`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    bean_count: u32,
}

impl Service {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_beans(bean_count: u32) -> Self {
        Self { bean_count }
    }

    pub fn bean_count(&self) -> u32 {
        self.bean_count
    }

    pub fn execute_action<C: Console>(&self, console: &mut C) -> Result<DeploymentResult> {
        let result = if self.bean_count < 1 {
            DeploymentResult::OutOfBeans
        } else {
            DeploymentResult::Streaming
        };
        tracing::debug!(bean_count = self.bean_count, ?result, "executing liquid deployment");
        console.println(result.message())?;
        Ok(result)
    }
}
