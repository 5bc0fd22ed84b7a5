use std::collections::TryReserveError;
use std::path::PathBuf;

use ndarray::ShapeError;
use ndarray_npy::{ReadNpyError, WriteNpyError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BitMatrixError {
    #[error("invalid shape ({rows}, {cols}): rows and cols must both be positive")]
    InvalidShape { rows: usize, cols: usize },

    #[error("shape ({rows}, {cols}) has more elements than fit in memory addressing")]
    CapacityOverflow { rows: usize, cols: usize },

    #[error("unable to allocate {bytes} bytes for the matrix: {source}")]
    Allocation {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("element at ({row}, {col}) is {value}, expected 0 or 1")]
    NotBinary { row: usize, col: usize, value: u8 },

    #[error("i/o error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write matrix to {}: {}", .path.display(), .source)]
    Save {
        path: PathBuf,
        #[source]
        source: WriteNpyError,
    },

    #[error("failed to read matrix from {}: {}", .path.display(), .source)]
    Load {
        path: PathBuf,
        #[source]
        source: ReadNpyError,
    },
}
