use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Creates a list of EXIF values from photos")]
#[command(
    long_about = "Creates a list of EXIF values from photos.\n\n\
                  Reads the camera settings of every JPEG in a directory and writes \
                  one row per photo to a CSV file. You must specify the output filename."
)]
pub struct Cli {
    /// File to write the photo list to (required)
    #[arg(short, long, value_name = "FILENAME")]
    pub output: PathBuf,

    /// Directory of photos
    #[arg(short, long, value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Log every file read
    #[arg(short, long)]
    pub verbose: bool,

    /// Include photos in all subdirectories of the directory
    #[arg(short, long)]
    pub recursive: bool,

    /// Field delimiter of the output file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Enable file logging to photostat.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}
