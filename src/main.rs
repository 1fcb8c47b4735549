use anyhow::Context;
use clap::Parser;
use health_records::utils::{logger, validation::Validate};
use health_records::{CliConfig, TomlConfig, ValidationReport};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match TomlConfig::from_file(&cli.input) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    };

    if cli.json {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!(input = %cli.input, "Starting health-records");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate().and_then(|_| config.validate()) {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    let fail_fast = cli.fail_fast || config.fail_fast();
    let results = config.build_records(fail_fast);
    let report = ValidationReport::from_results(&results);

    if cli.json {
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to render report as JSON")?;
        println!("{}", rendered);
    } else {
        println!(
            "{} entries: {} accepted, {} rejected",
            report.total,
            report.accepted,
            report.rejected.len()
        );
        for rejected in &report.rejected {
            println!("  #{}: {}", rejected.index, rejected.message);
        }
        for group in &report.duplicates {
            println!(
                "  duplicate records at {:?} (hash {:016x})",
                group.indices, group.hash
            );
        }
    }

    if !report.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}
