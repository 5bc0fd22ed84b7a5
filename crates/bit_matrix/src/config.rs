// Generation parameters, passed explicitly instead of living in globals.

use std::path::PathBuf;

pub const DEFAULT_ROWS: usize = 40000;
pub const DEFAULT_COLS: usize = 40000;
pub const DEFAULT_OUTPUT_PATH: &str = "/data05/quanbin_data/bitMatrix/bit_matrix.npy";

/// Everything one run of the generator needs to know.
///
/// __Fields:__
///
/// + `rows`, `cols` - shape of the matrix; both must be positive.
///
/// + `output_path` - where the `.npy` file is written; created or
///   overwritten, but its parent directory must already exist.
///
/// + `seed` - fixes the random stream when set; otherwise the
///   generator is seeded from the OS.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    pub output_path: PathBuf,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
        }
    }
}
