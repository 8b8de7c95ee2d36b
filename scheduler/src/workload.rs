use std::collections::{HashMap, HashSet};
use std::ops::Index;

use crate::{Pid, Process, SimError, Time};

/// A validated process set, ordered by arrival.
///
/// Processes that arrive at the same instant keep their input order, so the
/// position of a process in the workload is its `(arrival, input order)`
/// rank. The tie-break rules in [`crate::order`] rely on this.
#[derive(Debug, Clone)]
pub struct Workload {
    processes: Vec<Process>,
    positions: HashMap<Pid, usize>,
}

impl Workload {
    /// Validates a process set.
    ///
    /// Rejects duplicate ids, negative arrivals and non-positive bursts.
    /// Nothing is clamped or coerced. The latest arrival plus the total
    /// burst bounds every instant a policy can reach, so a set where that
    /// sum does not fit in [`Time`] is rejected as well.
    pub fn new(processes: &[Process]) -> Result<Workload, SimError> {
        let mut seen = HashSet::with_capacity(processes.len());
        let mut latest_arrival: Time = 0;
        let mut total_burst: Time = 0;
        for process in processes {
            if process.arrival < 0 {
                return Err(SimError::NegativeArrival {
                    pid: process.pid.clone(),
                    arrival: process.arrival,
                });
            }
            if process.burst <= 0 {
                return Err(SimError::NonPositiveBurst {
                    pid: process.pid.clone(),
                    burst: process.burst,
                });
            }
            if !seen.insert(&process.pid) {
                return Err(SimError::DuplicatePid(process.pid.clone()));
            }

            latest_arrival = latest_arrival.max(process.arrival);
            total_burst = total_burst
                .checked_add(process.burst)
                .filter(|total| latest_arrival.checked_add(*total).is_some())
                .ok_or_else(|| SimError::TimeOverflow(process.pid.clone()))?;
        }

        let mut indexed = processes.iter().enumerate().collect::<Vec<_>>();
        indexed.sort_unstable_by_key(|&(index, process)| (process.arrival, index));
        let processes = indexed
            .into_iter()
            .map(|(_, process)| process.clone())
            .collect::<Vec<_>>();

        let positions = processes
            .iter()
            .enumerate()
            .map(|(position, process)| (process.pid.clone(), position))
            .collect::<HashMap<_, _>>();

        Ok(Workload {
            processes,
            positions,
        })
    }

    /// The processes in arrival order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Returns the position of a process in arrival order.
    pub fn position(&self, pid: &Pid) -> Option<usize> {
        self.positions.get(pid).copied()
    }

    pub fn find(&self, pid: &Pid) -> Option<&Process> {
        self.position(pid).map(|position| &self.processes[position])
    }
}

impl Index<usize> for Workload {
    type Output = Process;

    fn index(&self, position: usize) -> &Self::Output {
        &self.processes[position]
    }
}
