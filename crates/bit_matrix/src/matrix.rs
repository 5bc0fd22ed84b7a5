// The bit matrix itself and the function that generates it.

use ndarray::{Array2, ArrayView2, s};

use crate::error::BitMatrixError;
use crate::source::BitSource;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// A (rows, cols) array of bytes, each of which is 0 or 1.
///
/// The only ways to get one are [`generate`] and [`BitMatrix::from_array`],
/// both of which check the shape and values, so every `BitMatrix` upholds
/// the 0/1 invariant. Nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    data: Array2<u8>,
}

/// Generates a (rows, cols) matrix of independent uniform bits drawn from
/// `source`.
///
/// __Arguments:__
///
/// + `rows`, `cols` - shape of the matrix; zero in either is rejected
///   before anything is allocated.
///
/// + `source` - the bit stream; the matrix is filled in row-major order.
///
/// The rows * cols byte buffer is reserved fallibly, so a shape that does
/// not fit in memory comes back as [`BitMatrixError::Allocation`] rather
/// than aborting the process.
///
pub fn generate<S: BitSource + ?Sized>(
    rows: usize,
    cols: usize,
    source: &mut S,
) -> Result<BitMatrix, BitMatrixError> {
    check_shape(rows, cols)?;
    let len = rows
        .checked_mul(cols)
        .ok_or(BitMatrixError::CapacityOverflow { rows, cols })?;

    log::debug!("Reserving {} bytes for a {} x {} matrix", len, rows, cols);

    let mut buffer: Vec<u8> = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|source| BitMatrixError::Allocation { bytes: len, source })?;

    // capacity is already reserved, so this does not reallocate
    buffer.resize(len, 0);
    source.fill_bits(&mut buffer);

    let data = Array2::from_shape_vec((rows, cols), buffer)?;
    debug_assert!(data.iter().all(|&bit| bit <= 1));

    Ok(BitMatrix { data })
}

fn check_shape(rows: usize, cols: usize) -> Result<(), BitMatrixError> {
    if rows == 0 || cols == 0 {
        return Err(BitMatrixError::InvalidShape { rows, cols });
    }
    Ok(())
}

impl BitMatrix {
    /// Wraps an existing array, checking that it has a positive shape and
    /// holds nothing but 0s and 1s. The first offending element, in
    /// row-major order, is reported.
    pub fn from_array(data: Array2<u8>) -> Result<Self, BitMatrixError> {
        let (rows, cols) = data.dim();
        check_shape(rows, cols)?;

        if let Some(((row, col), &value)) = data.indexed_iter().find(|(_, value)| **value > 1) {
            return Err(BitMatrixError::NotBinary { row, col, value });
        }

        // keep the standard layout so the payload is written row-major
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };

        Ok(Self { data })
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.data.view()
    }

    /// One byte per element.
    pub fn footprint_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<u8>()
    }

    pub fn footprint_mib(&self) -> f64 {
        self.footprint_bytes() as f64 / BYTES_PER_MIB
    }

    /// Top-left `n` x `n` block, clipped to the matrix.
    pub fn preview(&self, n: usize) -> ArrayView2<'_, u8> {
        let rows = n.min(self.rows());
        let cols = n.min(self.cols());
        self.data.slice(s![..rows, ..cols])
    }

    /// Sum of all elements, i.e. the number of 1s.
    pub fn count_set_bits(&self) -> u64 {
        self.data.iter().map(|&bit| u64::from(bit)).sum()
    }

    /// Fraction of elements that are 1.
    pub fn set_fraction(&self) -> f64 {
        self.count_set_bits() as f64 / self.data.len() as f64
    }
}
