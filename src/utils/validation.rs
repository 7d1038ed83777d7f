use crate::utils::error::{CaasError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(CaasError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CaasError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CaasError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN compares false against both bounds and lands here
    let in_range = value >= min && value <= max;
    if !in_range {
        return Err(CaasError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "caas.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "   ").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("simulator.failure_threshold", 0.99, 0.0, 1.0).is_ok());
        assert!(validate_range("simulator.failure_threshold", 1.0, 0.0, 1.0).is_ok());
        assert!(validate_range("simulator.failure_threshold", 1.01, 0.0, 1.0).is_err());
        assert!(validate_range("simulator.failure_threshold", f64::NAN, 0.0, 1.0).is_err());
        assert!(validate_range("simulator.check_delay_ms", 60_001u64, 0, 60_000).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("log_format", "json", &["compact", "json"]).is_ok());
        assert!(validate_one_of("log_format", "yaml", &["compact", "json"]).is_err());
    }
}
