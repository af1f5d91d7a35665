//! Round lifecycle
//!
//! The controller is the single source of truth for whether a round is
//! open and which one it is. It holds one scalar and cannot fail.

use serde::{Deserialize, Serialize};

use crate::round_id::RoundId;

/// Tracks the active round and mints round IDs
///
/// Only the active ID is retained here. Superseded rounds live on in the
/// ledger under their own IDs.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SessionController {
    /// The round currently accepting answers
    active: Option<RoundId>,
    /// The most recently minted ID, kept so the next one is always larger
    last_minted: Option<RoundId>,
}

impl SessionController {
    /// Opens a new round, superseding any active one
    ///
    /// # Returns
    ///
    /// The freshly minted ID, which is now the active round
    pub fn start_round(&mut self) -> RoundId {
        let id = RoundId::next_after(self.last_minted);
        self.last_minted = Some(id);
        self.active = Some(id);
        id
    }

    /// Returns the active round, if any round has been started
    pub fn active_round(&self) -> Option<RoundId> {
        self.active
    }
}
