pub mod boundary_reader;
pub mod membership_reader;
pub mod shape_reader;
pub mod timezone_csv_reader;

pub use boundary_reader::BoundaryReader;
pub use membership_reader::MembershipReader;
pub use shape_reader::{ShapeReader, ShapeSelection};
pub use timezone_csv_reader::TimezoneCsvReader;
