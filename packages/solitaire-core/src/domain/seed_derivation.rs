//! Deal seeds: preset games, clock-derived seeds and display labels.
//!
//! Seeds are always passed explicitly into game construction; nothing here
//! keeps process-wide state.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::clock::Clock;

/// Seeds behind the "Preset games" menu, in menu order.
pub const PRESET_SEEDS: [u64; 7] = [
    0x567C_0882,
    0xCCC0_A516,
    0x9811_B537,
    0xE864_D2BA,
    0x66B4_C3F5,
    0xB178_FAD4,
    0x7484_7F14,
];

/// Seed of the 1-based preset game `number`.
pub fn preset_seed(number: usize) -> Option<u64> {
    number
        .checked_sub(1)
        .and_then(|i| PRESET_SEEDS.get(i))
        .copied()
}

/// Derive a 32-bit deal seed from the clock's current time.
///
/// Two games started within the same millisecond get the same deal.
pub fn derive_time_seed(clock: &dyn Clock) -> u64 {
    let mut rng = ChaCha8Rng::seed_from_u64(clock.now_millis() as u64);
    u64::from(rng.random::<u32>())
}

/// Human-readable seed, e.g. `Seed: 0x567C0882`.
pub fn seed_label(seed: u64) -> String {
    format!("Seed: 0x{seed:08X}")
}
