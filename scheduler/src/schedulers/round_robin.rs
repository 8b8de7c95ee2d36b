use std::collections::VecDeque;

use log::debug;

use crate::ready::Admission;
use crate::{Scheduler, Segment, SimError, Time, Timeline, Workload};

/// Round robin with a fixed time quantum.
///
/// The ready queue is FIFO. A dispatched process runs for at most one
/// quantum. Processes that arrived while it ran are queued before it is put
/// back at the tail, so a process that used up its quantum never cuts in
/// front of the peers that arrived during its slice.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Time,
}

impl RoundRobin {
    /// Fails with [`SimError::InvalidQuantum`] if `quantum` is not positive.
    pub fn new(quantum: Time) -> Result<Self, SimError> {
        if quantum <= 0 {
            return Err(SimError::InvalidQuantum(quantum));
        }
        Ok(RoundRobin { quantum })
    }

    pub fn quantum(&self) -> Time {
        self.quantum
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn schedule(&self, workload: &Workload) -> Timeline {
        let mut remaining = workload
            .processes()
            .iter()
            .map(|process| process.burst)
            .collect::<Vec<Time>>();
        let mut admission = Admission::new(workload);
        let mut ready_queue: VecDeque<usize> = VecDeque::new();
        let mut timeline = Timeline::new();

        loop {
            admission.admit(&mut ready_queue);
            let Some(position) = ready_queue.pop_front() else {
                if admission.idle_skip() {
                    continue;
                }
                break;
            };

            let pid = &workload[position].pid;
            let start = admission.now();
            let slice = remaining[position].min(self.quantum);
            remaining[position] -= slice;
            admission.advance(slice);
            debug!(
                "t={} run {} until {} ({} left)",
                start,
                pid,
                admission.now(),
                remaining[position]
            );
            timeline.push(Segment::new(pid.clone(), start, admission.now()));

            admission.admit(&mut ready_queue);
            if remaining[position] > 0 {
                ready_queue.push_back(position);
            }
        }

        timeline
    }
}
