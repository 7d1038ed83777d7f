use crate::core::cleanup::CleanupScope;
use crate::core::{Clock, ConfigProvider, Console, DeploymentResult, RandomProvider, Result, Service};
use crate::utils::error::{CaasError, SimulatedFailure};
use crate::utils::monitor::StageMonitor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const BANNER: &str = "--- Booting Caffeine-as-a-Service (CaaS) ---";
pub const AUTH_CHECK_LABEL: &str = "Authenticating user's right to be awake...";
pub const AUTH_CHECK_STATUS: &str = " SUCCESS.";
pub const FROTH_CHECK_LABEL: &str = "Verifying milk-froth compatibility layer...";
pub const FROTH_CHECK_STATUS: &str = " OPTIMIZED.";
pub const FAILURE_PREFIX: &str = "[STALEDATA] Process failed: ";

pub const DEFAULT_CHECK_DELAY: Duration = Duration::from_millis(800);
pub const DEFAULT_FAILURE_THRESHOLD: f64 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    CheckA,
    CheckB,
    FailPath,
    SuccessPath,
    Done,
}

#[derive(Debug)]
pub enum Outcome {
    Deployed(DeploymentResult),
    Failed(CaasError),
}

impl Outcome {
    /// Every outcome, the failed one included, ends the process normally.
    pub fn exit_code(&self) -> i32 {
        0
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

pub struct DeploymentSimulator<K: Clock, R: RandomProvider, C: Console> {
    clock: K,
    random: R,
    console: C,
    check_delay: Duration,
    failure_threshold: f64,
    monitor: StageMonitor,
    stage: Stage,
    cleanups: Arc<AtomicUsize>,
}

impl<K: Clock, R: RandomProvider, C: Console> DeploymentSimulator<K, R, C> {
    pub fn new(clock: K, random: R, console: C) -> Self {
        Self {
            clock,
            random,
            console,
            check_delay: DEFAULT_CHECK_DELAY,
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
            monitor: StageMonitor::default(),
            stage: Stage::Start,
            cleanups: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_config<P: ConfigProvider>(mut self, config: &P) -> Self {
        self.check_delay = config.check_delay();
        self.failure_threshold = config.failure_threshold();
        self
    }

    pub fn with_monitor(mut self, monitor: StageMonitor) -> Self {
        self.monitor = monitor;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn random(&self) -> &R {
        &self.random
    }

    /// How many times the end-of-run cleanup scope has been released.
    pub fn cleanups_run(&self) -> usize {
        self.cleanups.load(Ordering::SeqCst)
    }

    /// Runs the whole sequence and returns the process exit status.
    pub async fn run(&mut self) -> i32 {
        self.run_outcome().await.exit_code()
    }

    pub async fn run_outcome(&mut self) -> Outcome {
        let _cleanup = CleanupScope::enter("deployment", Arc::clone(&self.cleanups));

        let outcome = match self.deploy().await {
            Ok(result) => Outcome::Deployed(result),
            Err(error) => {
                self.advance(Stage::FailPath);
                self.report_failure(&error);
                Outcome::Failed(error)
            }
        };

        self.advance(Stage::Done);
        // output hygiene, independent of the cleanup scope
        if let Err(e) = self.console.flush() {
            tracing::warn!("Failed to flush console: {}", e);
        }
        self.monitor.log_final_stats();

        outcome
    }

    async fn deploy(&mut self) -> Result<DeploymentResult> {
        self.advance(Stage::Start);
        self.console.println(BANNER)?;

        let service = Service::new();

        self.advance(Stage::CheckA);
        self.check(AUTH_CHECK_LABEL, AUTH_CHECK_STATUS).await?;

        self.advance(Stage::CheckB);
        self.check(FROTH_CHECK_LABEL, FROTH_CHECK_STATUS).await?;

        let draw = self.random.random_ratio();
        tracing::debug!(draw, threshold = self.failure_threshold, "rolled deployment dice");
        if draw < self.failure_threshold {
            return Err(SimulatedFailure::printer_error().into());
        }

        self.advance(Stage::SuccessPath);
        service.execute_action(&mut self.console)
    }

    async fn check(&mut self, label: &str, status: &str) -> Result<()> {
        self.console.print(label)?;
        self.clock.sleep(self.check_delay).await;
        self.console.println(status)?;
        Ok(())
    }

    fn report_failure(&mut self, error: &CaasError) {
        tracing::debug!(
            "Deployment failed: {} (Category: {:?}, Severity: {:?})",
            error,
            error.category(),
            error.severity()
        );

        let line = format!("\n{}{}", FAILURE_PREFIX, error);
        if let Err(e) = self.console.eprintln(&line) {
            tracing::warn!("Failed to report deployment failure: {}", e);
        }
        if let Err(e) = self.console.println(error.recovery_suggestion()) {
            tracing::warn!("Failed to print recovery hint: {}", e);
        }
    }

    fn advance(&mut self, stage: Stage) {
        tracing::debug!(from = ?self.stage, to = ?stage, "stage transition");
        self.stage = stage;
        self.monitor.log_stats(&format!("{:?}", stage));
    }
}
