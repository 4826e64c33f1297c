use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Shapefile attribute error: {0}")]
    Dbase(#[from] dbase::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Text decoding error: {0}")]
    Encoding(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("Shapefile has no field named '{field}'")]
    MissingField { field: String },

    #[error("Region {tzid} has an empty ring (ring {ring})")]
    EmptyRing { tzid: String, ring: usize },

    #[error("Region {tzid} has no rings")]
    EmptyRegion { tzid: String },

    #[error("Invalid club code {code} for '{name}' on line {line}")]
    InvalidClubCode { name: String, code: i64, line: usize },
}
