use crate::photostat_core::config::CatalogConfig;
use crate::photostat_core::error::{PhotostatError, Result};
use crate::photostat_core::extractor::extract;
use crate::photostat_core::media::find_photos;
use crate::photostat_core::record::{FIELD_NAMES, PhotoRecord};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Counters of one catalog run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub photos_found: usize,
    pub rows_written: usize,
    pub skipped_no_metadata: usize,
    pub skipped_errors: usize,
}

/// Delimited text sink for photo records.
///
/// The header row is written once, right before the first record.
pub struct CatalogWriter<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

impl<W: Write> CatalogWriter<W> {
    pub fn new(inner: W, delimiter: u8) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(inner);
        Self {
            writer,
            header_written: false,
        }
    }

    pub fn write_record(&mut self, record: &PhotoRecord) -> Result<()> {
        if !self.header_written {
            self.writer.write_record(FIELD_NAMES)?;
            self.header_written = true;
        }
        self.writer.write_record(record.row())?;
        Ok(())
    }

    /// Flush buffered rows and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| {
                PhotostatError::Io(io::Error::new(e.error().kind(), e.error().to_string()))
            })
    }
}

/// Extract every photo in `paths` and stream one row per photo to `sink`.
///
/// Photos without metadata are skipped. Per-photo failures (unreadable
/// files, unknown label codes) are logged and skipped; only sink errors
/// abort the run.
pub fn write_catalog<W: Write>(
    paths: &[PathBuf],
    sink: &mut CatalogWriter<W>,
    progress: &ProgressBar,
) -> Result<CatalogStats> {
    let mut stats = CatalogStats {
        photos_found: paths.len(),
        ..Default::default()
    };

    for path in paths {
        log::info!("Reading exif from {}", path.display());
        match extract(path) {
            Ok(Some(record)) => {
                sink.write_record(&record)?;
                stats.rows_written += 1;
            }
            Ok(None) => {
                log::debug!("Skipping {}: no EXIF data", path.display());
                stats.skipped_no_metadata += 1;
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                stats.skipped_errors += 1;
            }
        }
        progress.inc(1);
    }

    Ok(stats)
}

/// Run a whole catalog: find the photos, create the output file and fill it.
pub fn create_catalog(config: &CatalogConfig) -> Result<CatalogStats> {
    let paths = find_photos(&config.input_dir, config.recursive)?;
    if paths.is_empty() {
        log::warn!(
            "No photos in specified directory: {}",
            config.input_dir.display()
        );
    }

    let file = File::create(&config.output_filename).map_err(|source| {
        PhotostatError::OutputNotWritable {
            path: config.output_filename.clone(),
            source,
        }
    })?;
    let mut sink = CatalogWriter::new(BufWriter::new(file), config.delimiter);

    let progress = if config.verbose {
        ProgressBar::hidden()
    } else {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        ProgressBar::new(paths.len() as u64).with_style(style)
    };
    progress.set_message("Reading photos");

    let stats = write_catalog(&paths, &mut sink, &progress)?;
    progress.finish_and_clear();

    sink.finish()?.flush()?;
    log::debug!(
        "Wrote {} of {} photos to {}",
        stats.rows_written,
        stats.photos_found,
        config.output_filename.display()
    );

    Ok(stats)
}
