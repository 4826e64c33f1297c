pub mod catalog_writer;
pub mod seed_writer;
pub mod swift_dict_writer;
pub mod timezone_csv_writer;

pub use catalog_writer::{CatalogFileInfo, CatalogVariant, CatalogWriter, FEATURE_COLUMNS};
pub use seed_writer::SeedWriter;
pub use swift_dict_writer::SwiftDictWriter;
pub use timezone_csv_writer::TimezoneCsvWriter;
