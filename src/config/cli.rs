use crate::config::toml_config::TomlConfig;
use crate::config::SimulatorSettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use clap::Parser;
use std::ffi::OsString;

pub const LOG_FORMATS: &[&str] = &["compact", "json"];

#[derive(Debug, Clone, Parser)]
#[command(name = "caas")]
#[command(about = "Caffeine-as-a-Service: a highly scalable approach to hydration")]
pub struct CliConfig {
    /// Optional TOML file with [simulator] and [monitoring] sections
    #[arg(short, long)]
    pub config: Option<String>,

    /// Delay for each pre-flight check, in milliseconds
    #[arg(long)]
    pub check_delay_ms: Option<u64>,

    /// Draws below this value fail the deployment
    #[arg(long)]
    pub failure_threshold: Option<f64>,

    /// Seed the dice for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Log process stats at each stage")]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, default_value = "compact")]
    pub log_format: String,

    /// Print the resolved settings and exit without deploying
    #[arg(long)]
    pub dry_run: bool,

    /// Anything else on the command line is accepted and ignored
    #[arg(hide = true, num_args = 0..)]
    pub rest: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config: None,
            check_delay_ms: None,
            failure_threshold: None,
            seed: None,
            monitor: false,
            verbose: false,
            log_format: "compact".to_string(),
            dry_run: false,
            rest: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Parses the command line, falling back to the defaults when it cannot be
    /// parsed. The error is handed back so the caller can log it.
    pub fn parse_lenient_from<I, T>(args: I) -> (Self, Option<clap::Error>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Like `resolve`, but an unusable configuration only costs a warning.
    pub fn resolve_or_default(&self) -> SimulatorSettings {
        self.resolve().unwrap_or_else(|e| {
            tracing::warn!("⚠️ Ignoring configuration: {}", e);
            tracing::warn!("💡 Suggestion: {}", e.recovery_suggestion());
            SimulatorSettings::default()
        })
    }

    /// Layers flags over the config file (if any) over the defaults.
    pub fn resolve(&self) -> Result<SimulatorSettings> {
        self.validate()?;

        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.to_settings()
            }
            None => SimulatorSettings::default(),
        };

        if let Some(check_delay_ms) = self.check_delay_ms {
            settings.check_delay_ms = check_delay_ms;
        }
        if let Some(failure_threshold) = self.failure_threshold {
            settings.failure_threshold = failure_threshold;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.monitor {
            settings.monitoring = true;
        }

        settings.validate()?;
        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        validate_one_of("log_format", &self.log_format, LOG_FORMATS)
    }
}
