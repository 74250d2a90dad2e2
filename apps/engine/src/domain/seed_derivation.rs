//! RNG seed derivation for deterministic round shuffles.
//!
//! A game holds one base seed; the initial shuffle and every round
//! transition derive their own seed from it, so a full game replays
//! identically from (seed, player actions).

/// Derive the shuffle seed for a round.
///
/// Unique per (game, round) combination; wrapping arithmetic keeps the
/// derivation total over the whole u64 range.
pub fn derive_shuffle_seed(game_seed: u64, round_no: u8) -> u64 {
    game_seed
        .wrapping_add(u64::from(round_no).wrapping_mul(1_000_003))
        .wrapping_add(1)
}
