use crate::config::SimulatorSettings;
use crate::utils::error::{CaasError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub simulator: Option<SimulatorSection>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulatorSection {
    pub check_delay_ms: Option<u64>,
    pub failure_threshold: Option<f64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CaasError::ConfigError {
            message: format!("Failed to read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CaasError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CAAS_SEED})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CaasError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 以預設值補齊缺少的欄位
    pub fn to_settings(&self) -> SimulatorSettings {
        let defaults = SimulatorSettings::default();
        let simulator = self.simulator.clone().unwrap_or_default();

        SimulatorSettings {
            check_delay_ms: simulator.check_delay_ms.unwrap_or(defaults.check_delay_ms),
            failure_threshold: simulator
                .failure_threshold
                .unwrap_or(defaults.failure_threshold),
            seed: simulator.seed.or(defaults.seed),
            monitoring: self.monitoring_enabled(),
        }
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[simulator]
check_delay_ms = 10
failure_threshold = 0.5
seed = 7

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = config.to_settings();

        assert_eq!(settings.check_delay_ms, 10);
        assert_eq!(settings.failure_threshold, 0.5);
        assert_eq!(settings.seed, Some(7));
        assert!(settings.monitoring);
    }

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.to_settings(), SimulatorSettings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CAAS_TEST_DELAY", "25");

        let toml_content = r#"
[simulator]
check_delay_ms = ${CAAS_TEST_DELAY}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.to_settings().check_delay_ms, 25);

        std::env::remove_var("CAAS_TEST_DELAY");
    }

    #[test]
    fn test_unset_env_var_is_a_parse_error() {
        let toml_content = r#"
[simulator]
seed = ${CAAS_TEST_DEFINITELY_UNSET}
"#;
        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, CaasError::ConfigError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[simulator]
failure_threshold = 1.5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[simulator]\nfailure_threshold = 0.0\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.to_settings().failure_threshold, 0.0);
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let err = TomlConfig::from_file("/nonexistent/caas.toml").unwrap_err();
        assert!(matches!(err, CaasError::ConfigError { .. }));
    }
}
