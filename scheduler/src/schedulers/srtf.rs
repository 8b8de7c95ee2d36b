use log::debug;

use crate::order::shortest_remaining;
use crate::ready::Admission;
use crate::{Scheduler, Segment, Time, Timeline, Workload};

/// Shortest remaining time first, the preemptive form of shortest job first.
///
/// The simulation advances from event to event, an event being the next
/// arrival or the completion of the running process, whichever is sooner.
/// At every event the ready process with the least remaining time runs.
/// Ties go to the earliest arrival, then to input order, so the running
/// process is only preempted by a process with strictly less remaining time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl Scheduler for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
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
        let mut ready: Vec<usize> = Vec::new();
        let mut running: Option<usize> = None;
        let mut timeline = Timeline::new();

        loop {
            admission.admit(&mut ready);
            let Some(position) = ready
                .iter()
                .copied()
                .min_by_key(|&position| shortest_remaining(&remaining, position))
            else {
                if admission.idle_skip() {
                    continue;
                }
                break;
            };

            let now = admission.now();
            let pid = &workload[position].pid;
            match running {
                Some(previous) if previous != position => debug!(
                    "t={} preempt {} ({} left) for {} ({} left)",
                    now, workload[previous].pid, remaining[previous], pid, remaining[position]
                ),
                None => debug!("t={} dispatch {} ({} left)", now, pid, remaining[position]),
                _ => {}
            }
            running = Some(position);

            let slice = match admission.next_arrival() {
                Some(arrival) => remaining[position].min(arrival - now),
                None => remaining[position],
            };
            remaining[position] -= slice;
            admission.advance(slice);
            timeline.push(Segment::new(pid.clone(), now, admission.now()));

            if remaining[position] == 0 {
                debug!("t={} finish {}", admission.now(), pid);
                ready.retain(|&other| other != position);
                running = None;
            }
        }

        timeline
    }
}
