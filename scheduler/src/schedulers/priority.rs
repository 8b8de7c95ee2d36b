use crate::order::highest_priority;
use crate::{Scheduler, Timeline, Workload};

/// Priority scheduling, non-preemptive.
///
/// At every decision point the ready process with the lowest priority value
/// runs to completion, even if a more important process arrives meanwhile.
/// Ties go to the earliest arrival, then to input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl Scheduler for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, workload: &Workload) -> Timeline {
        super::run_to_completion(workload, |position| highest_priority(workload, position))
    }
}
