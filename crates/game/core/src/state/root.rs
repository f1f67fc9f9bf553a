//! Match state commitment for replay audit.

use super::MatchState;

/// Computes a SHA-256 commitment to the full match state.
///
/// Two hosts replaying the same seed and action sequence must arrive at the
/// same root. The encoding is bincode, which is deterministic for the types
/// used here (no hash maps).
///
/// # Errors
///
/// Returns the bincode error if the state fails to encode.
pub fn compute_state_root(state: &MatchState) -> Result<[u8; 32], bincode::Error> {
    use sha2::{Digest, Sha256};

    let bytes = bincode::serialize(state)?;
    Ok(Sha256::digest(&bytes).into())
}
