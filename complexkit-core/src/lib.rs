pub mod complex;
pub mod config;
mod format;
pub mod functions;
pub mod parse;
pub mod polar;

pub use complex::Complex;
pub use config::{get_format_config, FormatConfig, CANONICAL_FORMAT, ENGINEERING_FORMAT};
pub use parse::ParseComplexError;
pub use polar::Polar;
