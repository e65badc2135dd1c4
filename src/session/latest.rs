use std::sync::atomic::{AtomicU64, Ordering};

/// Generation token handed out by [`LatestRequest::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Caller-side "latest request wins" bookkeeping.
///
/// The engine cannot be cancelled once a run starts. A caller that re-runs on every settings
/// or image change takes a ticket per run and drops any result whose ticket is no longer the
/// newest.
#[derive(Debug, Default)]
pub struct LatestRequest {
    latest: AtomicU64,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Pass `result` through only if `ticket` is still the newest request.
    pub fn accept<T>(&self, ticket: RequestTicket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            tracing::debug!(
                stale = ticket.0,
                latest = self.latest.load(Ordering::Acquire),
                "dropping superseded result"
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/latest.rs"]
mod tests;
