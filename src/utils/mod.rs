pub mod constants;
pub mod coordinates;
pub mod progress;
pub mod text;

pub use constants::*;
pub use coordinates::{extent, mean, normalize_longitude};
pub use progress::ProgressReporter;
pub use text::TextDecoding;
