use crate::photostat_core::cli::Cli;
use crate::photostat_core::error::{PhotostatError, Result};
use std::path::PathBuf;

/// Validated settings of one catalog run.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub input_dir: PathBuf,
    pub output_filename: PathBuf,
    pub verbose: bool,
    pub recursive: bool,
    pub delimiter: u8,
}

impl CatalogConfig {
    /// Build a configuration, checking that the input directory exists and
    /// the output settings are usable.
    pub fn new(
        input_dir: PathBuf,
        output_filename: PathBuf,
        verbose: bool,
        recursive: bool,
        delimiter: char,
    ) -> Result<Self> {
        if output_filename.as_os_str().is_empty() {
            return Err(PhotostatError::Argument(
                "output filename must be specified".to_string(),
            ));
        }
        if !input_dir.exists() {
            return Err(PhotostatError::PathNotFound(input_dir));
        }
        if !input_dir.is_dir() {
            return Err(PhotostatError::NotADirectory(input_dir));
        }
        if !delimiter.is_ascii() {
            return Err(PhotostatError::Argument(format!(
                "delimiter must be a single ASCII character, got {:?}",
                delimiter
            )));
        }

        Ok(Self {
            input_dir,
            output_filename,
            verbose,
            recursive,
            delimiter: delimiter as u8,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::new(
            cli.directory.clone(),
            cli.output.clone(),
            cli.verbose,
            cli.recursive,
            cli.delimiter,
        )
    }
}
