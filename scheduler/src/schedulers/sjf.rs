use crate::order::shortest_job;
use crate::{Scheduler, Timeline, Workload};

/// Shortest job first, non-preemptive.
///
/// At every decision point the ready process with the smallest burst runs
/// to completion. Ties go to the earliest arrival, then to input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, workload: &Workload) -> Timeline {
        super::run_to_completion(workload, |position| shortest_job(workload, position))
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
            segments(&Sjf.schedule(&workload)),
            vec![("P1", 0, 7), ("P3", 7, 8), ("P2", 8, 12), ("P4", 12, 16)]
        );
    }

    #[test]
    fn does_not_preempt_for_shorter_arrival() {
        let workload = Workload::new(&[Process::new("long", 0, 10), Process::new("short", 1, 1)]).unwrap();
        assert_eq!(
            segments(&Sjf.schedule(&workload)),
            vec![("long", 0, 10), ("short", 10, 11)]
        );
    }

    #[test]
    fn equal_bursts_go_to_earliest_arrival() {
        let workload = Workload::new(&[
            Process::new("A", 0, 5),
            Process::new("C", 3, 2),
            Process::new("B", 1, 2),
        ])
        .unwrap();
        assert_eq!(
            segments(&Sjf.schedule(&workload)),
            vec![("A", 0, 5), ("B", 5, 7), ("C", 7, 9)]
        );
    }
}
