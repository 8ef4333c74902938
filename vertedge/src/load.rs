//! Bookkeeping for asynchronous graph loads.
//!
//! The host fetches documents itself; each request is stamped with a token
//! and only the result carrying the newest token is applied.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadToken(pub u64);

#[derive(Clone, Debug, Default)]
pub struct LoadTracker {
    issued: u64,
    pending: Option<LoadToken>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request, superseding any still in flight.
    pub fn begin(&mut self) -> LoadToken {
        self.issued += 1;
        let token = LoadToken(self.issued);
        self.pending = Some(token);
        token
    }

    pub fn is_current(&self, token: LoadToken) -> bool {
        self.pending == Some(token)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Settles `token`. Returns whether its result should be applied.
    pub fn finish(&mut self, token: LoadToken) -> bool {
        if self.is_current(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
