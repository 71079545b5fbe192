// Command-line interface definitions and parsing for dirprobe

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target server root, e.g. http://10.0.0.5/ (may come from the config file)
    pub base_url: Option<String>,

    // Core Options
    /// Wordlist with one path per line (default: wordlist.txt)
    #[arg(short = 'w', long, value_name = "FILE", help_heading = "Core Options")]
    pub wordlist: Option<String>,

    /// Worker threads (default: CPU cores x thread multiplier)
    #[arg(short = 't', long, value_name = "COUNT", help_heading = "Core Options")]
    pub threads: Option<usize>,

    /// Workers per CPU core when --threads is not given (default: 5)
    #[arg(long, value_name = "FACTOR", help_heading = "Core Options")]
    pub thread_multiplier: Option<usize>,

    /// Per-request timeout in milliseconds (default: 2000)
    #[arg(long, value_name = "MS", help_heading = "Core Options")]
    pub timeout: Option<u64>,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Output & Verbosity
    /// Status codes printed as hits (comma-separated, default: 200)
    #[arg(long, value_name = "CODES", help_heading = "Output & Verbosity")]
    pub report_status: Option<String>,

    /// Summary format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, default_value = output_formats::DEFAULT, help_heading = "Output & Verbosity")]
    pub format: String,

    /// Disable periodic progress lines
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    /// Suppress log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Parse a comma-separated list of status codes, skipping blanks.
pub fn parse_status_codes(input: &str) -> Result<Vec<u16>, String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u16>()
                .map_err(|_| format!("'{s}' is not a valid HTTP status code"))
        })
        .collect()
}

/// Convert parsed CLI arguments into CliConfig
pub fn cli_to_config(cli: &Cli) -> Result<CliConfig, String> {
    let report_status_codes = cli
        .report_status
        .as_deref()
        .map(parse_status_codes)
        .transpose()?;

    Ok(CliConfig {
        base_url: cli.base_url.clone(),
        wordlist: cli.wordlist.clone(),
        threads: cli.threads,
        thread_multiplier: cli.thread_multiplier,
        timeout_ms: cli.timeout,
        user_agent: cli.user_agent.clone(),
        report_status_codes,
        // Only override the config file when the flag differs from its default.
        output_format: (cli.format != output_formats::DEFAULT).then(|| cli.format.clone()),
        no_progress: cli.no_progress,
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    })
}
