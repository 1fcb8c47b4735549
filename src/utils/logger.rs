use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "health_records=info";
const VERBOSE_FILTER: &str = "health_records=debug,info";

fn build_filter(verbose: bool, default_level: Option<&str>) -> EnvFilter {
    let fallback = match (verbose, default_level) {
        (true, _) => VERBOSE_FILTER.to_string(),
        (false, Some(level)) => format!("health_records={}", level),
        (false, None) => DEFAULT_FILTER.to_string(),
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Events go to stderr; stdout carries only the report.
///
/// `default_level` comes from the input file's `[logging]` table and is
/// only used when `RUST_LOG` is unset.
pub fn init_cli_logger(verbose: bool, default_level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(default_level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(false, default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
