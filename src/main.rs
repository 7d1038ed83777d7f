use caas::core::ConfigProvider;
use caas::utils::{logger, monitor::StageMonitor};
use caas::{CliConfig, DeploymentSimulator, StdConsole, StdRandom, TokioClock};
use clap::error::ErrorKind;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // the run never refuses to start: bad arguments fall back to the defaults
    let (config, parse_error) = CliConfig::parse_lenient_from(std::env::args_os());
    if let Some(e) = &parse_error {
        if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            e.exit();
        }
    }

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Some(e) = parse_error {
        tracing::warn!("⚠️ Ignoring command line ({:?}), using defaults", e.kind());
    }

    tracing::info!("Starting caas");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = config.resolve_or_default();

    if config.dry_run {
        println!("🔍 DRY RUN - resolved settings:");
        println!("{}", settings.to_toml_summary()?);
        return Ok(());
    }

    if settings.monitoring_enabled() {
        tracing::info!("🔍 Stage monitoring enabled");
    }

    let mut simulator = DeploymentSimulator::new(
        TokioClock::new(),
        StdRandom::from_seed(settings.seed()),
        StdConsole::new(),
    )
    .with_config(&settings)
    .with_monitor(StageMonitor::new(settings.monitoring_enabled()));

    let exit_code = simulator.run().await;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
