
// Home of the random bit matrix: generation, reporting and .npy persistence.

pub mod config;
pub mod error;
pub mod matrix;
pub mod report;
pub mod source;

mod npy;

pub use config::GeneratorConfig;
pub use error::BitMatrixError;
pub use matrix::{BitMatrix, generate};
pub use report::Report;
pub use source::{BitSource, RngBits};
