use anyhow::{Context, Result};
use clap::Parser;
use photostat::photostat_core::{CatalogConfig, Cli, create_catalog};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    // Usage errors exit with 1; help and version output exit with 0.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        std::process::exit(code);
    });

    // Initialize loggers
    let term_level = if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            Config::default(),
            File::create("photostat.log").context("Cannot create photostat.log")?,
        ));
    }

    CombinedLogger::init(loggers)?;

    let config = CatalogConfig::from_cli(&cli)?;
    let stats = create_catalog(&config)?;

    println!(
        "Wrote {} photos to {}",
        stats.rows_written,
        config.output_filename.display()
    );
    if stats.skipped_no_metadata > 0 {
        println!("  {} without EXIF data skipped", stats.skipped_no_metadata);
    }
    if stats.skipped_errors > 0 {
        println!("  {} unreadable skipped (see warnings)", stats.skipped_errors);
    }

    Ok(())
}
