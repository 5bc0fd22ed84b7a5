// Where the random bits come from.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// A stream of independent, uniformly distributed bits.
///
/// Generation only ever talks to this trait, so tests can substitute a
/// deterministic stream for the real generator.
pub trait BitSource {
    /// Returns 0 or 1.
    fn draw_uniform_bit(&mut self) -> u8;

    /// Fills `out` with bits. Implementors may override this with
    /// something faster than one draw per element.
    fn fill_bits(&mut self, out: &mut [u8]) {
        for bit in out.iter_mut() {
            *bit = self.draw_uniform_bit();
        }
    }
}

/// Adapts any `rand` generator into a [`BitSource`].
#[derive(Debug, Clone)]
pub struct RngBits<R> {
    rng: R,
}

impl<R: RngCore> RngBits<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngBits<StdRng> {
    /// Reproducible stream: the same seed always gives the same bits.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: RngCore> BitSource for RngBits<R> {
    fn draw_uniform_bit(&mut self) -> u8 {
        (self.rng.next_u32() & 1) as u8
    }

    // low bit of a uniform byte is a uniform bit
    fn fill_bits(&mut self, out: &mut [u8]) {
        self.rng.fill_bytes(out);
        for byte in out.iter_mut() {
            *byte &= 1;
        }
    }
}
