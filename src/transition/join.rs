/// The two independent completions the reveal waits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum JoinParty {
    /// The destination route announced readiness.
    PageReady,
    /// The label scramble finished.
    ScrambleDone,
}

impl JoinParty {
    fn bit(self) -> u8 {
        match self {
            Self::PageReady => 0b01,
            Self::ScrambleDone => 0b10,
        }
    }
}

/// Result of [`RevealJoin::arrive`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinStatus {
    /// At least one party is still outstanding.
    Pending,
    /// This arrival completed the join.
    Complete,
    /// The join was already complete before this arrival.
    AlreadyComplete,
}

/// Two-party barrier gating the reveal phase.
///
/// Arrivals are order-independent and idempotent per party; the join completes once both
/// parties have arrived, and reports [`JoinStatus::Complete`] exactly once per cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealJoin {
    arrived: u8,
}

impl RevealJoin {
    const ALL: u8 = 0b11;

    /// A join with nobody arrived.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `party` as arrived.
    pub fn arrive(&mut self, party: JoinParty) -> JoinStatus {
        if self.is_complete() {
            return JoinStatus::AlreadyComplete;
        }
        self.arrived |= party.bit();
        if self.is_complete() {
            JoinStatus::Complete
        } else {
            JoinStatus::Pending
        }
    }

    /// Whether `party` has arrived in this cycle.
    pub fn has_arrived(&self, party: JoinParty) -> bool {
        self.arrived & party.bit() != 0
    }

    /// `true` once both parties have arrived.
    pub fn is_complete(&self) -> bool {
        self.arrived == Self::ALL
    }

    /// Start a new cycle.
    pub fn reset(&mut self) {
        self.arrived = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/join.rs"]
mod tests;
