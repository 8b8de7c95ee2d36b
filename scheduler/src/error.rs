use std::error::Error;
use std::fmt::{self, Display};

use crate::{Pid, Time};

/// The reasons a simulation run can fail.
///
/// Every variant except [`SimError::Defect`] is a caller error that is
/// detected before the simulation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Two processes of the same set share an identifier.
    DuplicatePid(Pid),

    /// A process requires no processor time, or a negative amount.
    NonPositiveBurst { pid: Pid, burst: Time },

    /// A process arrives before the simulation starts.
    NegativeArrival { pid: Pid, arrival: Time },

    /// The schedule of the set would run past the largest representable
    /// time. Names the process at which the set stops fitting.
    TimeOverflow(Pid),

    /// The Round Robin quantum is zero or negative.
    InvalidQuantum(Time),

    /// The policy name does not match any known policy.
    UnknownPolicy(String),

    /// The engine produced a result that breaks one of its own invariants.
    Defect(Defect),
}

impl SimError {
    /// Returns `true` if the error points at the engine rather than
    /// at the caller's input.
    pub fn is_defect(&self) -> bool {
        matches!(self, SimError::Defect(_))
    }
}

impl Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::DuplicatePid(pid) => write!(f, "duplicate process id {pid}"),
            SimError::NonPositiveBurst { pid, burst } => {
                write!(f, "process {pid} has non-positive burst {burst}")
            }
            SimError::NegativeArrival { pid, arrival } => {
                write!(f, "process {pid} has negative arrival {arrival}")
            }
            SimError::TimeOverflow(pid) => {
                write!(f, "process {pid} makes the schedule exceed the time range")
            }
            SimError::InvalidQuantum(quantum) => {
                write!(f, "round robin quantum must be positive, got {quantum}")
            }
            SimError::UnknownPolicy(name) => {
                write!(f, "unrecognized scheduling policy {name:?}")
            }
            SimError::Defect(defect) => write!(f, "simulation failure: {defect}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimError::Defect(defect) => Some(defect),
            _ => None,
        }
    }
}

impl From<Defect> for SimError {
    fn from(defect: Defect) -> Self {
        SimError::Defect(defect)
    }
}

/// An invariant violated by a timeline or by the metrics derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    /// A process never appears in the timeline.
    Unscheduled(Pid),

    /// The timeline references a process that is not in the workload.
    UnknownPid(Pid),

    /// A segment starts before the segment preceding it.
    OutOfOrder { pid: Pid, start: Time },

    /// Two segments share processor time.
    Overlap { first: Pid, second: Pid, at: Time },

    /// A segment does not cover any time.
    EmptySegment { pid: Pid, start: Time, end: Time },

    /// A process runs before it arrives.
    EarlyStart { pid: Pid, start: Time, arrival: Time },

    /// The time assigned to a process differs from its burst.
    BurstMismatch {
        pid: Pid,
        expected: Time,
        actual: Time,
    },

    /// A process finishes sooner than its arrival plus its burst.
    NegativeWaiting { pid: Pid, waiting: Time },
}

impl Display for Defect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Defect::Unscheduled(pid) => write!(f, "process {pid} was never scheduled"),
            Defect::UnknownPid(pid) => write!(f, "timeline references unknown process {pid}"),
            Defect::OutOfOrder { pid, start } => {
                write!(f, "segment of {pid} at {start} is out of order")
            }
            Defect::Overlap { first, second, at } => {
                write!(f, "segments of {first} and {second} overlap at {at}")
            }
            Defect::EmptySegment { pid, start, end } => {
                write!(f, "segment of {pid} from {start} to {end} is empty")
            }
            Defect::EarlyStart {
                pid,
                start,
                arrival,
            } => write!(f, "process {pid} runs at {start} before arriving at {arrival}"),
            Defect::BurstMismatch {
                pid,
                expected,
                actual,
            } => write!(f, "process {pid} ran for {actual} instead of {expected}"),
            Defect::NegativeWaiting { pid, waiting } => {
                write!(f, "process {pid} has negative waiting time {waiting}")
            }
        }
    }
}

impl Error for Defect {}
