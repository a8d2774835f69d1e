//! # Gunghap Benchmarks
//!
//! Input fixtures for the criterion benchmarks in `benches/`.
//!
//! ## Usage
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --package gunghap-benchmarks
//!
//! # Run one group
//! cargo bench --package gunghap-benchmarks -- pipeline
//! ```

use gunghap_core::types::constants::{HANGUL_BASE, HANGUL_LAST};
use gunghap_core::Name;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random composed syllables, reproducible from `seed`
pub fn random_name(seed: u64, syllables: usize) -> Name {
    let mut rng = StdRng::seed_from_u64(seed);
    let chars = (0..syllables)
        .map(|_| {
            let code = rng.gen_range(HANGUL_BASE..=HANGUL_LAST);
            char::from_u32(code).unwrap_or('가')
        })
        .collect();
    Name::from_syllables(chars)
}

/// A pair of names whose lengths differ by at most one
pub fn name_pair(seed: u64, syllables: usize) -> (Name, Name) {
    (
        random_name(seed, syllables),
        random_name(seed.wrapping_add(1), syllables + 1),
    )
}
