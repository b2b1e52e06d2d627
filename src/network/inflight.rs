//! Bookkeeping for "newest request wins".
//!
//! Every request of a given kind takes a [`Ticket`] from an [`InFlight`]
//! tracker. Starting a new request supersedes the previous one; a response
//! whose ticket is no longer current is stale and must be dropped. The
//! tracker itself is plain data so reducers stay testable off-browser; the
//! matching `AbortController` is held next to it by the DOM layer.

/// Identifies one request issued through an [`InFlight`] tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct InFlight {
    generation: u64,
    pending: bool,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request. Returns its ticket and whether an older request
    /// was still pending (and is now superseded).
    pub fn start(&mut self) -> (Ticket, bool) {
        let superseded = self.pending;
        self.generation += 1;
        self.pending = true;
        (Ticket(self.generation), superseded)
    }

    /// Whether `ticket` belongs to the newest, still unsettled request.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.pending && ticket.0 == self.generation
    }

    /// Mark the request behind `ticket` as finished. Returns false (and
    /// changes nothing) when the ticket is stale.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending = false;
        true
    }

    /// Invalidate whatever is pending without starting anything new.
    /// Returns true when a request was actually cancelled.
    pub fn cancel(&mut self) -> bool {
        let had_pending = self.pending;
        self.generation += 1;
        self.pending = false;
        had_pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_supersedes_nothing() {
        let mut tracker = InFlight::new();
        let (ticket, superseded) = tracker.start();
        assert!(!superseded);
        assert!(tracker.is_current(ticket));
    }

    #[test]
    fn newer_request_makes_older_stale() {
        let mut tracker = InFlight::new();
        let (old, _) = tracker.start();
        let (new, superseded) = tracker.start();
        assert!(superseded);
        assert!(!tracker.is_current(old));
        assert!(!tracker.settle(old));
        assert!(tracker.settle(new));
        assert!(!tracker.is_pending());
    }

    #[test]
    fn settled_ticket_cannot_settle_twice() {
        let mut tracker = InFlight::new();
        let (ticket, _) = tracker.start();
        assert!(tracker.settle(ticket));
        assert!(!tracker.settle(ticket));
    }

    #[test]
    fn cancel_invalidates_pending_ticket() {
        let mut tracker = InFlight::new();
        let (ticket, _) = tracker.start();
        assert!(tracker.cancel());
        assert!(!tracker.is_current(ticket));
        assert!(!tracker.cancel());
    }
}
