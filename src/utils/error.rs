use thiserror::Error;

/// Message carried by the synthetic fault raised on the dominant path.
pub const PRINTER_ERROR_MESSAGE: &str = "PrinterError: Out of Cyan (Wait, I'm a coffee machine?)";

/// Remediation hint printed after any failed deployment.
pub const RESTART_HINT: &str = "Please restart your morning and try again.";

/// The synthetic failure. A plain value: the kind is fixed, only the message varies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SimulatedFailure {
    pub message: String,
}

impl SimulatedFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn printer_error() -> Self {
        Self::new(PRINTER_ERROR_MESSAGE)
    }
}

#[derive(Error, Debug)]
pub enum CaasError {
    #[error(transparent)]
    SimulatedFailure(#[from] SimulatedFailure),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Simulation,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl CaasError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CaasError::SimulatedFailure(_) => ErrorCategory::Simulation,
            CaasError::IoError(_) => ErrorCategory::Io,
            CaasError::ConfigError { .. }
            | CaasError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Simulated failures are the expected outcome, so they rank lowest.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CaasError::SimulatedFailure(_) => ErrorSeverity::Low,
            CaasError::IoError(_) => ErrorSeverity::Medium,
            CaasError::ConfigError { .. }
            | CaasError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CaasError::SimulatedFailure(_) | CaasError::IoError(_) => RESTART_HINT,
            CaasError::ConfigError { .. } => "Check that the config file exists and is valid TOML",
            CaasError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value or remove it to fall back to the default"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CaasError::SimulatedFailure(failure) => failure.message.clone(),
            CaasError::IoError(e) => format!("Could not write to the console: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CaasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_failure_displays_bare_message() {
        let err = CaasError::from(SimulatedFailure::printer_error());
        assert_eq!(err.to_string(), PRINTER_ERROR_MESSAGE);
        assert_eq!(err.category(), ErrorCategory::Simulation);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.recovery_suggestion(), RESTART_HINT);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = CaasError::InvalidConfigValueError {
            field: "simulator.failure_threshold".to_string(),
            value: "1.5".to_string(),
            reason: "Value must be between 0 and 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("simulator.failure_threshold"));
    }
}
