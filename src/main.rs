use anyhow::Context;
use clap::Parser;
use purchase_sim::config::Command;
use purchase_sim::utils::format::format_number;
use purchase_sim::utils::{logger, validation::Validate};
use purchase_sim::{
    run_batch, CliConfig, ConsoleView, FormFields, HttpSimulationApi, Orchestrator, Outcome,
};
use std::fs::File;
use std::io::{BufReader, BufWriter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting purchase-sim CLI");
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let api = HttpSimulationApi::from_config(&config.api).context("failed to build HTTP client")?;
    let orchestrator = Orchestrator::new(api);

    match cli.command {
        Command::Simulate {
            property_value,
            down_payment,
            years,
            json,
        } => {
            let fields = FormFields::new(property_value, down_payment, years);
            let view = ConsoleView::new(json);

            let exit_code = match orchestrator.submit(&fields, &view).await {
                Outcome::Success(_) => 0,
                Outcome::FieldErrors(_) => 1,
                Outcome::ApiFailure(_) | Outcome::Busy => 2,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
        Command::Health => {
            let base_url = orchestrator.api().base_url().to_string();
            if orchestrator.check_health().await {
                println!("✅ Simulation service at {} is healthy", base_url);
            } else {
                eprintln!("⚠️ Simulation service at {} is not responding", base_url);
                std::process::exit(1);
            }
        }
        Command::Batch { input, output } => {
            let reader = BufReader::new(
                File::open(&input).with_context(|| format!("cannot open {}", input.display()))?,
            );

            let summary = match output {
                Some(path) => {
                    let writer = BufWriter::new(
                        File::create(&path)
                            .with_context(|| format!("cannot create {}", path.display()))?,
                    );
                    run_batch(&orchestrator, reader, writer).await?
                }
                None => run_batch(&orchestrator, reader, std::io::stdout().lock()).await?,
            };

            let success_rate = if summary.total > 0 {
                summary.succeeded as f64 * 100.0 / summary.total as f64
            } else {
                0.0
            };
            eprintln!(
                "📁 {} scenarios: {} succeeded ({}%), {} invalid, {} failed",
                summary.total,
                summary.succeeded,
                format_number(success_rate),
                summary.invalid,
                summary.failed
            );
        }
    }

    Ok(())
}
