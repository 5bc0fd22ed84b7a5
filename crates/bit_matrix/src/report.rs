// Human-readable summary of a generated (or loaded) matrix.

use std::fmt;
use std::time::Duration;

use ndarray::Array2;

use crate::matrix::BitMatrix;

/// Side length of the corner block shown in the report.
pub const PREVIEW_SIZE: usize = 5;

/// Statistics printed after generation.
///
/// `elapsed` is `None` when the matrix was loaded rather than generated,
/// in which case the timing line is left out.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub shape: (usize, usize),
    pub footprint_bytes: usize,
    pub footprint_mib: f64,
    pub elapsed: Option<Duration>,
    pub preview: Array2<u8>,
    pub set_bits: u64,
}

impl Report {
    pub fn from_matrix(matrix: &BitMatrix, elapsed: Option<Duration>) -> Self {
        Self {
            shape: matrix.shape(),
            footprint_bytes: matrix.footprint_bytes(),
            footprint_mib: matrix.footprint_mib(),
            elapsed,
            preview: matrix.preview(PREVIEW_SIZE).to_owned(),
            set_bits: matrix.count_set_bits(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix shape: ({}, {})", self.shape.0, self.shape.1)?;
        writeln!(f, "Memory footprint: {:.2} MiB", self.footprint_mib)?;
        if let Some(elapsed) = self.elapsed {
            writeln!(f, "Elapsed: {:.2} s", elapsed.as_secs_f64())?;
        }
        writeln!(f, "Top-left {}x{} elements:", self.preview.nrows(), self.preview.ncols())?;
        writeln!(f, "{}", self.preview)?;
        write!(f, "Set bits: {}", self.set_bits)
    }
}
