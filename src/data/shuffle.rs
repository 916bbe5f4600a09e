// ============================================================
// Layer 4 — Seeded Shuffler
// ============================================================
// Puts the working copy of the dataset into a random but
// reproducible order before the first filter runs.
//
// Why seeded?
//   The same seed gives the same order on every run, so a
//   session that is stopped and resumed walks the remaining
//   records in the same order it would have without the
//   restart.
//
// Why shuffle only once?
//   Re-filtering after a term edit must not reorder records
//   the operator has already seen the neighbourhood of. The
//   filter preserves order, so one shuffle up front fixes the
//   order for the whole session.
//
// Uses Fisher-Yates via rand::seq::SliceRandom over a StdRng
// owned by the caller, never a global or thread-local RNG.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Build the session's RNG from a seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffle `items` in place using `rng`.
pub fn shuffle_records<T>(items: &mut [T], rng: &mut StdRng) {
    // Fisher-Yates shuffle — every permutation is equally likely
    items.shuffle(rng);

    tracing::debug!("Shuffled {} records", items.len());
}
