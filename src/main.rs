use award_intervals::core::ConfigProvider;
use award_intervals::utils::error::{EtlError, ErrorSeverity};
use award_intervals::utils::{logger, validation::Validate};
use award_intervals::{AwardsPipeline, CliConfig, EtlEngine, LocalStorage, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // --config 指定時，其餘選項一律由 TOML 檔案決定
    let toml = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let json_logs = cli.json_logs || toml.as_ref().is_some_and(|t| t.json_logs());
    if json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting award-intervals CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match toml {
        Some(config) => {
            let monitor = cli.monitor || config.monitoring_enabled();
            run(config, monitor).await
        }
        None => {
            let monitor = cli.monitor;
            run(cli, monitor).await
        }
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Awards ETL completed successfully!");
            println!("✅ Awards ETL completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Awards ETL failed: {} (Category: {:?}, Severity: {:?}, Status: {}, Code: {})",
                e,
                e.category(),
                e.severity(),
                e.http_status(),
                e.code()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2, // 可重試 (來源暫時不可用)
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run<C>(config: C, monitor_enabled: bool) -> Result<String, EtlError>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = AwardsPipeline::new(storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    engine.run().await
}
