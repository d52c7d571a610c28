//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Every random draw in a game (initial turn order, yearly immigration) is
//! derived from the single `rng_seed` stored on the game, so replaying the
//! same actions from the same seed reproduces the same game.

/// Derive the seed for shuffling the initial turn order.
pub fn derive_turn_order_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_add(1)
}

/// Derive the seed for drawing a year's immigrants from the bag.
///
/// Unique per (game, year) so every year draws differently but stays
/// reproducible.
pub fn derive_immigration_seed(game_seed: u64, year: u8) -> u64 {
    game_seed
        .wrapping_add((year as u64).wrapping_mul(1_000_000))
        .wrapping_add(2) // Offset to distinguish from the turn-order seed
}
