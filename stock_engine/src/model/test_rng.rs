//! Deterministic random source for unit tests.

use rand::RngCore;

/// Always yields zero bits, so every `[0, 1)` draw is exactly `0.0`.
pub(crate) struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}
