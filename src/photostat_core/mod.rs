pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod labels;
pub mod media;
pub mod record;

pub use catalog::{CatalogStats, CatalogWriter, create_catalog, write_catalog};
pub use cli::Cli;
pub use config::CatalogConfig;
pub use error::{PhotostatError, Result};
pub use extractor::{build_record, extract};
pub use labels::EnumTable;
pub use media::{find_photos, is_photo};
pub use record::{FIELD_NAMES, PhotoRecord};
