use log::debug;

use crate::{Scheduler, Segment, Time, Timeline, Workload};

/// First-come first-served.
///
/// Runs processes to completion in arrival order. Processes that arrive at
/// the same time run in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, workload: &Workload) -> Timeline {
        let mut timeline = Timeline::new();
        let mut now: Time = 0;

        for process in workload.processes() {
            let start = now.max(process.arrival);
            if start > now {
                debug!("t={} idle until {}", now, start);
            }
            now = start + process.burst;
            debug!("t={} dispatch {} until {}", start, process.pid, now);
            timeline.push(Segment::new(process.pid.clone(), start, now));
        }

        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::textbook;
    use crate::timeline::segments;
    use crate::Process;
    use pretty_assertions::assert_eq;

    #[test]
    fn textbook_set() {
        let workload = Workload::new(&textbook()).unwrap();
        assert_eq!(
            segments(&Fcfs.schedule(&workload)),
            vec![("P1", 0, 7), ("P2", 7, 11), ("P3", 11, 12), ("P4", 12, 16)]
        );
    }

    #[test]
    fn equal_arrivals_keep_input_order() {
        let workload = Workload::new(&[
            Process::new("B", 0, 2),
            Process::new("A", 0, 1),
            Process::new("C", 0, 3),
        ])
        .unwrap();
        assert_eq!(
            segments(&Fcfs.schedule(&workload)),
            vec![("B", 0, 2), ("A", 2, 3), ("C", 3, 6)]
        );
    }

    #[test]
    fn idles_until_next_arrival() {
        let workload = Workload::new(&[Process::new("A", 1, 2), Process::new("B", 6, 1)]).unwrap();
        assert_eq!(
            segments(&Fcfs.schedule(&workload)),
            vec![("A", 1, 3), ("B", 6, 7)]
        );
    }
}
