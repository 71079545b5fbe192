use crate::config::Config;
use env_logger::DEFAULT_FILTER_ENV;
use log::{LevelFilter, debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let env_configured = std::env::var_os(DEFAULT_FILTER_ENV).is_some();
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level_override(verbose, quiet, env_configured) {
        builder.filter_level(level);
    }

    builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init()
        .unwrap_or(());

    debug!("Logger initialized (verbose={verbose}, quiet={quiet})");
}

/// Level forced onto the logger, or `None` to leave `RUST_LOG` in charge.
pub fn level_override(verbose: bool, quiet: bool, env_configured: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if verbose {
        Some(LevelFilter::Debug)
    } else if env_configured {
        None
    } else {
        Some(LevelFilter::Off)
    }
}

/// Log configuration information
pub fn log_config_info(config: &Config, workers: usize) {
    let timeout = config.timeout_duration().as_millis();
    let progress = config.progress_enabled();

    info!("Configuration: workers={workers}, timeout={timeout}ms, progress={progress}");
    info!(
        "Reporting status codes: {:?}, format={}",
        config.report_codes(),
        config.output_format()
    );
}

/// Log wordlist information
pub fn log_wordlist_info(path: &str, count: usize) {
    info!("Loaded {count} path(s) from {path}");
}

/// Log scan completion
pub fn log_scan_complete(visited: usize, hits: usize, duration_ms: u128) {
    if visited == 0 {
        warn!("Scan complete: nothing was probed ({duration_ms}ms)");
    } else {
        info!("Scan complete: {visited} probed, {hits} hit(s) ({duration_ms}ms)");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
