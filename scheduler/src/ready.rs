//! Ready-queue helpers shared by the policies.
//!
//! Processes are referred to by their position in the [`Workload`], so a
//! ready structure is a plain collection of positions and per-process state
//! (such as remaining time) lives in arrays indexed the same way.

use log::{debug, trace};

use crate::{Process, Time, Workload};

/// Admits processes into a ready structure as simulated time advances.
///
/// Owns the simulated clock of a single run.
pub struct Admission<'a> {
    pending: &'a [Process],
    next: usize,
    now: Time,
}

impl<'a> Admission<'a> {
    pub fn new(workload: &'a Workload) -> Self {
        Admission {
            pending: workload.processes(),
            next: 0,
            now: 0,
        }
    }

    /// The current simulated time.
    pub fn now(&self) -> Time {
        self.now
    }

    /// Moves the clock forward by `amount` units of work.
    pub fn advance(&mut self, amount: Time) {
        self.now += amount;
    }

    /// Adds every process with `arrival <= now` to `ready`, in arrival order.
    pub fn admit(&mut self, ready: &mut impl Extend<usize>) {
        while let Some(process) = self.pending.get(self.next) {
            if process.arrival > self.now {
                break;
            }
            trace!("t={} admit {}", self.now, process.pid);
            ready.extend(Some(self.next));
            self.next += 1;
        }
    }

    /// The arrival time of the next process that has not been admitted.
    pub fn next_arrival(&self) -> Option<Time> {
        self.pending.get(self.next).map(|process| process.arrival)
    }

    /// Jumps the clock to the next arrival. Called when nothing is ready.
    ///
    /// Returns `false` if every process has already been admitted.
    pub fn idle_skip(&mut self) -> bool {
        let Some(arrival) = self.next_arrival() else {
            return false;
        };
        if arrival > self.now {
            debug!("t={} idle until {}", self.now, arrival);
            self.now = arrival;
        }
        true
    }
}

/// Removes and returns the ready process with the smallest key.
pub fn take_min<K: Ord>(ready: &mut Vec<usize>, key: impl Fn(usize) -> K) -> Option<usize> {
    let slot = ready
        .iter()
        .enumerate()
        .min_by_key(|&(_, &position)| key(position))
        .map(|(slot, _)| slot)?;
    Some(ready.swap_remove(slot))
}
