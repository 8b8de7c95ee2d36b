//! Selection keys for the policies that reorder the ready set.
//!
//! Every key ends with the arrival-order position of the process. The
//! position already orders by arrival and then by input order, so two
//! distinct processes never compare equal and no selection depends on how
//! the ready set happens to be laid out.

use crate::{Time, Workload};

/// Shortest job first: smallest burst, then earliest arrival, then input order.
pub fn shortest_job(workload: &Workload, position: usize) -> (Time, usize) {
    (workload[position].burst, position)
}

/// Priority: lowest priority value, then earliest arrival, then input order.
pub fn highest_priority(workload: &Workload, position: usize) -> (i32, usize) {
    (workload[position].priority, position)
}

/// Shortest remaining time: least remaining time, then earliest arrival,
/// then input order.
///
/// A running process is only preempted by a process with strictly less
/// remaining time: a newcomer always has a later position, and the running
/// process had the smallest key when it was picked.
pub fn shortest_remaining(remaining: &[Time], position: usize) -> (Time, usize) {
    (remaining[position], position)
}
