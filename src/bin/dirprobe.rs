use clap::Parser;
use dirprobe::config::{CliConfig, Config};
use dirprobe::reporting::ScanSummary;
use dirprobe::reporting::logging;
use dirprobe::scan::Scanner;
use dirprobe::ui::{Cli, cli_to_config};
use dirprobe::wordlist::load_wordlist_lossy;

fn main() {
    let cli = Cli::parse();

    match run_dirprobe_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main scan logic extracted from main() for testing
pub fn run_dirprobe_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli)?;
    let config = load_and_merge_config(&cli_config)?;
    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    let base_url = config.normalized_base_url()?;
    let scanner = Scanner::from_config(&config)?;
    logging::log_config_info(&config, scanner.workers());

    let wordlist = config.wordlist_path();
    let paths = load_wordlist_lossy(wordlist);
    logging::log_wordlist_info(wordlist, paths.len());

    let report = scanner.run(&base_url, &paths)?;

    let summary = ScanSummary::from_report(&base_url, &report, &config.report_codes());
    logging::log_scan_complete(
        report.visited,
        summary.hits.len(),
        report.elapsed.as_millis(),
    );
    println!("{}", summary.render(config.output_format()));

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
