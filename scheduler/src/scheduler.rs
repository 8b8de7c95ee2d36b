use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{Timeline, Workload};

/// Simulated time, in abstract units.
///
/// The type is signed so that a negative arrival can be reported as an
/// input error instead of wrapping around.
pub type Time = i64;

/// The identifier of a process.
///
/// Identifiers are unique within one process set.
#[derive(PartialEq, Eq, Clone, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pid(String);

impl Pid {
    pub fn new(pid: impl Into<String>) -> Pid {
        Pid(pid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Pid {
    fn from(pid: &str) -> Self {
        Pid::new(pid)
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A process descriptor.
///
/// Descriptors are built by the caller before a run and are never
/// modified by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// The process identifier.
    #[serde(alias = "id")]
    pub pid: Pid,

    /// The instant the process becomes eligible to run.
    pub arrival: Time,

    /// The total processor time the process needs.
    pub burst: Time,

    /// The process priority. A lower value means a higher priority.
    /// Policies that do not use priorities ignore this value.
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    pub fn new(pid: impl Into<String>, arrival: Time, burst: Time) -> Process {
        Process {
            pid: Pid::new(pid),
            arrival,
            burst,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Process {
        self.priority = priority;
        self
    }
}

/// The trait that every scheduling policy implements.
pub trait Scheduler {
    /// Returns the short name of the policy.
    fn name(&self) -> &'static str;

    /// Returns `true` if a running process can be interrupted before it
    /// completes.
    fn is_preemptive(&self) -> bool;

    /// Runs every process of the workload to completion and returns the
    /// execution timeline.
    ///
    /// The workload has already been validated. The returned timeline
    /// must not contain two abutting segments of the same process.
    fn schedule(&self, workload: &Workload) -> Timeline;
}
