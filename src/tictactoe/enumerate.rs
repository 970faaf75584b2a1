//! Enumeration of reachable positions

use std::collections::HashSet;

use super::{board::BoardState, fingerprint::Fingerprint};

/// All states reachable from `root` by legal play, `root` included, sorted by
/// fingerprint.
///
/// Play stops at terminal states. From the empty board this yields 5478 states.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidState`] if `root` is malformed.
pub fn reachable_states(root: BoardState) -> Result<Vec<BoardState>, crate::Error> {
    let mut seen: HashSet<Fingerprint> = HashSet::new();
    let mut states = Vec::new();
    let mut stack = vec![root];

    while let Some(state) = stack.pop() {
        if !seen.insert(state.fingerprint()) {
            continue;
        }
        for (_, next) in state.successor_states()? {
            stack.push(next);
        }
        states.push(state);
    }

    states.sort_by_key(BoardState::fingerprint);
    Ok(states)
}
