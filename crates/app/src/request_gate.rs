//! Per-endpoint request gate: at most one request in flight, and only the
//! most recently issued request may be applied.

/// Proof that a request was issued through a [`RequestGate`].
///
/// Not `Clone`: a ticket completes at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a ticket must be completed to release the gate"]
pub struct Ticket {
    seq: u64,
}

impl Ticket {
    /// Sequence number of the request.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Sequence-numbered in-flight guard for one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestGate {
    issued: u64,
    in_flight: Option<u64>,
}

impl RequestGate {
    /// Issue a ticket unless a request is already in flight. Used by timer
    /// ticks: a tick that finds the endpoint busy is simply skipped.
    pub fn try_begin(&mut self) -> Option<Ticket> {
        if self.in_flight.is_some() {
            return None;
        }
        Some(self.issue())
    }

    /// Issue a ticket unconditionally, superseding whatever is in flight.
    /// The superseded response will be refused by [`complete`](Self::complete).
    pub fn supersede(&mut self) -> Ticket {
        self.issue()
    }

    /// Settle a request. Returns `true` when its response is the latest one
    /// issued and must be applied, `false` when it was superseded and must
    /// be dropped.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.in_flight == Some(ticket.seq) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    fn issue(&mut self) -> Ticket {
        self.issued += 1;
        self.in_flight = Some(self.issued);
        Ticket { seq: self.issued }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_refuse_second_tick_while_first_is_in_flight() {
        let mut gate = RequestGate::default();
        let first = gate.try_begin().unwrap();
        assert!(gate.try_begin().is_none());
        assert!(gate.complete(first));
        assert!(!gate.is_busy());
        assert!(gate.try_begin().is_some());
    }

    #[test]
    fn should_issue_increasing_sequence_numbers() {
        let mut gate = RequestGate::default();
        let a = gate.try_begin().unwrap();
        let a_seq = a.seq();
        assert!(gate.complete(a));
        let b = gate.supersede();
        assert!(b.seq() > a_seq);
    }

    #[test]
    fn should_drop_superseded_response_even_when_it_lands_last() {
        let mut gate = RequestGate::default();
        let old = gate.try_begin().unwrap();
        let new = gate.supersede();

        assert!(gate.complete(new));
        assert!(!gate.complete(old));
        assert!(!gate.is_busy());
    }

    #[test]
    fn should_stay_busy_when_superseded_response_lands_first() {
        let mut gate = RequestGate::default();
        let old = gate.try_begin().unwrap();
        let new = gate.supersede();

        assert!(!gate.complete(old));
        assert!(gate.is_busy());
        assert!(gate.try_begin().is_none());
        assert!(gate.complete(new));
    }
}
