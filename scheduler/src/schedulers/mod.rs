//! The scheduling policies.
//!
//! Each policy lives in its own file and implements [`crate::Scheduler`].

use log::debug;

use crate::ready::{take_min, Admission};
use crate::{Segment, Timeline, Workload};

mod fcfs;
pub use fcfs::Fcfs;

mod sjf;
pub use sjf::Sjf;

mod srtf;
pub use srtf::Srtf;

mod priority;
pub use priority::Priority;

mod round_robin;
pub use round_robin::RoundRobin;

/// Runs the ready process with the smallest key to completion at every
/// decision point, idling forward when nothing is ready.
fn run_to_completion<K: Ord>(workload: &Workload, key: impl Fn(usize) -> K) -> Timeline {
    let mut admission = Admission::new(workload);
    let mut ready: Vec<usize> = Vec::new();
    let mut timeline = Timeline::new();

    loop {
        admission.admit(&mut ready);
        let Some(position) = take_min(&mut ready, &key) else {
            if admission.idle_skip() {
                continue;
            }
            break;
        };

        let process = &workload[position];
        let start = admission.now();
        admission.advance(process.burst);
        debug!(
            "t={} dispatch {} until {} ({} waiting)",
            start,
            process.pid,
            admission.now(),
            ready.len()
        );
        timeline.push(Segment::new(process.pid.clone(), start, admission.now()));
    }

    timeline
}
