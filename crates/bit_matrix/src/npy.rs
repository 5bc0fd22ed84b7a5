// Saving and loading a BitMatrix as a NumPy .npy file.
//
// The file holds the magic string, a header with dtype '|u1', C order and
// the (rows, cols) shape, then the rows * cols payload bytes.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ndarray::Array2;
use ndarray_npy::{ReadNpyExt, WriteNpyExt};

use crate::error::BitMatrixError;
use crate::matrix::BitMatrix;

impl BitMatrix {
    /// Writes the matrix to `path`, creating or truncating the file.
    ///
    /// The parent directory is not created. If this fails part way the file
    /// is left in whatever state the failed write produced.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BitMatrixError> {
        let path = path.as_ref();
        let io_error = |source| BitMatrixError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);

        self.view()
            .write_npy(&mut writer)
            .map_err(|source| BitMatrixError::Save {
                path: path.to_path_buf(),
                source,
            })?;

        // BufWriter swallows errors on drop, so flush and sync explicitly
        writer.flush().map_err(io_error)?;
        writer.get_ref().sync_all().map_err(io_error)?;

        log::debug!("Wrote {} payload bytes to {}", self.footprint_bytes(), path.display());
        Ok(())
    }

    /// Reads a matrix written by [`BitMatrix::save`] (or any `.npy` file of
    /// two-dimensional `u8` data) and checks it is a valid bit matrix.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BitMatrixError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BitMatrixError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let data = Array2::<u8>::read_npy(BufReader::new(file)).map_err(|source| {
            BitMatrixError::Load {
                path: path.to_path_buf(),
                source,
            }
        })?;

        log::debug!("Read {:?} matrix from {}", data.dim(), path.display());
        Self::from_array(data)
    }
}
