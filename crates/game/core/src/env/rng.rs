//! Deterministic roll source.
//!
//! Every gate is pure given a roll; this module decides where rolls come from.
//! Given the same match seed, nonce, combatant and roll purpose, an oracle
//! must return the same value, so a match can be replayed from its action log.

use crate::state::CombatantId;

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        (self.next_u32(seed) % sides) + 1
    }
}

/// PCG-XSH-RR generator: 64-bit state, 32-bit output.
///
/// Stateless by construction: the seed is the state, so the oracle can be
/// shared behind `&dyn RngOracle` without interior mutability.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Purpose of a roll, mixed into its seed so rolls within one action differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RollContext {
    AttackerEvolution = 0,
    DefenderEvolution = 1,
    Revival = 2,
    Loot = 3,
}

/// Compute a deterministic seed for one roll.
///
/// # Arguments
///
/// * `match_seed` - Seed set at match creation
/// * `nonce` - Action sequence number
/// * `combatant` - Combatant the roll is about
/// * `context` - Which roll within the action
pub fn compute_seed(
    match_seed: u64,
    nonce: u64,
    combatant: CombatantId,
    context: RollContext,
) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = match_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (combatant.0 as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
