//! Identifier generation for new records.
//!
//! Ids are derived from wall-clock milliseconds so they grow over a session,
//! but two calls in the same millisecond (or after the clock stepped back)
//! still get distinct values: each id is at least one past the previous one,
//! and is bumped past any id the store already holds.

use crate::model::EmployeeId;
use crate::store::EmployeeStore;
use chrono::Utc;

/// Source of the current time in milliseconds.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct IdentifierGenerator<C: Clock = SystemClock> {
    clock: C,
    last: Option<u64>,
}

impl IdentifierGenerator<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> IdentifierGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock, last: None }
    }

    /// Returns an id no record in `store` uses and that was never issued before.
    pub fn next<S: EmployeeStore + ?Sized>(&mut self, store: &S) -> EmployeeId {
        let mut candidate = self.clock.now_millis();
        if let Some(last) = self.last {
            candidate = candidate.max(last + 1);
        }
        while store.contains(EmployeeId(candidate)) {
            candidate += 1;
        }
        self.last = Some(candidate);
        EmployeeId(candidate)
    }
}
