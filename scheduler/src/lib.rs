//! A CPU scheduling simulator.
//!
//! This library replays a fixed set of processes on a single simulated
//! processor under one of five policies and reports the execution timeline
//! together with the waiting and turnaround time of every process.
//!
//! ```rust
//! use scheduler::{Params, Policy, Process};
//!
//! let processes = vec![Process::new("P1", 0, 7), Process::new("P2", 2, 4)];
//! let simulation = Policy::Sjf.simulate(&processes, &Params::default()).unwrap();
//! assert_eq!(simulation.timeline.len(), 2);
//! assert_eq!(simulation.metrics.average_waiting, 2.5);
//! ```

mod error;
mod metrics;
mod order;
mod policy;
mod ready;
mod scheduler;
mod timeline;
mod workload;

pub use crate::error::{Defect, SimError};
pub use crate::metrics::{Metrics, ProcessMetrics};
pub use crate::policy::{simulate, Params, Policy, Simulation, DEFAULT_QUANTUM};
pub use crate::scheduler::{Pid, Process, Scheduler, Time};
pub use crate::timeline::{Segment, Timeline, Timing};
pub use crate::workload::Workload;

use schedulers::{Fcfs, Priority, RoundRobin, Sjf, Srtf};

mod schedulers;

/// Returns a structure that implements the `Scheduler` trait with a
/// first-come first-served policy.
pub fn fcfs() -> impl Scheduler {
    Fcfs
}

/// Returns a structure that implements the `Scheduler` trait with a
/// non-preemptive shortest job first policy.
pub fn sjf() -> impl Scheduler {
    Sjf
}

/// Returns a structure that implements the `Scheduler` trait with a
/// shortest remaining time first policy.
pub fn srtf() -> impl Scheduler {
    Srtf
}

/// Returns a structure that implements the `Scheduler` trait with a
/// non-preemptive priority policy. Lower values mean higher priority.
pub fn priority() -> impl Scheduler {
    Priority
}

/// Returns a structure that implements the `Scheduler` trait with a round
/// robin policy.
///
/// * `quantum` - the time a process can run before it is preempted. Must be
///               positive.
pub fn round_robin(quantum: Time) -> Result<impl Scheduler, SimError> {
    RoundRobin::new(quantum)
}
