use clap::Parser;
use meal_max_smoke::utils::{logger, validation::Validate};
use meal_max_smoke::{smoke_sequence, CliConfig, HttpTransport, SmokeFileConfig, SmokeRunner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting meal-max-smoke");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let file_config = match &cli.config {
        Some(path) => match SmokeFileConfig::from_file(path).and_then(|c| {
            c.validate()?;
            Ok(c)
        }) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::error!("❌ Could not load config file {}: {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        },
        None => None,
    };
    let config = cli.resolve(file_config.as_ref());

    tracing::info!("Target service: {}", config.base_url);

    let transport = match HttpTransport::new(std::time::Duration::from_secs(
        config.timeout_seconds,
    )) {
        Ok(transport) => transport,
        Err(e) => {
            tracing::error!("❌ Could not build HTTP client: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let runner = SmokeRunner::new(transport, config);
    match runner.run(&smoke_sequence()).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Smoke test passed: {} checks in {:?}",
                summary.checks_run,
                summary.duration
            );
            println!(
                "✅ Smoke test passed: {} checks in {:?}",
                summary.checks_run, summary.duration
            );
        }
        Err(e) => {
            tracing::error!("❌ Smoke test failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
