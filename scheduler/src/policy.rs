use std::fmt::{self, Display};
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use crate::{fcfs, priority, round_robin, sjf, srtf};
use crate::{Metrics, Process, Scheduler, SimError, Time, Timeline, Workload};

/// The Round Robin quantum used when the caller does not pick one.
pub const DEFAULT_QUANTUM: Time = 2;

/// The scheduling policies the engine implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// First-come first-served.
    Fcfs,
    /// Shortest job first, non-preemptive.
    Sjf,
    /// Shortest remaining time first.
    Srtf,
    /// Priority, non-preemptive.
    Priority,
    /// Round robin with a fixed quantum.
    RoundRobin,
}

/// Parameters of a run. Policies ignore the fields they do not use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// The Round Robin time quantum.
    pub quantum: Time,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

/// The result of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    pub policy: Policy,
    /// The quantum, for Round Robin runs.
    pub quantum: Option<Time>,
    pub timeline: Timeline,
    pub metrics: Metrics,
}

impl Policy {
    pub const ALL: [Policy; 5] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Srtf,
        Policy::Priority,
        Policy::RoundRobin,
    ];

    /// A lowercase name usable in file names and on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::Srtf => "srtf",
            Policy::Priority => "priority",
            Policy::RoundRobin => "round-robin",
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::Srtf | Policy::RoundRobin)
    }

    /// Builds the scheduler of this policy.
    pub fn scheduler(&self, params: &Params) -> Result<Box<dyn Scheduler>, SimError> {
        let scheduler: Box<dyn Scheduler> = match self {
            Policy::Fcfs => Box::new(fcfs()),
            Policy::Sjf => Box::new(sjf()),
            Policy::Srtf => Box::new(srtf()),
            Policy::Priority => Box::new(priority()),
            Policy::RoundRobin => Box::new(round_robin(params.quantum)?),
        };
        Ok(scheduler)
    }

    /// Validates the input, runs the policy and derives the metrics.
    ///
    /// Either the whole run succeeds or an error is returned; no partial
    /// result is exposed.
    pub fn simulate(&self, processes: &[Process], params: &Params) -> Result<Simulation, SimError> {
        let scheduler = self.scheduler(params)?;
        let (timeline, metrics) = simulate(scheduler.as_ref(), processes)?;
        Ok(Simulation {
            policy: *self,
            quantum: (*self == Policy::RoundRobin).then_some(params.quantum),
            timeline,
            metrics,
        })
    }
}

/// Runs `scheduler` over `processes`.
///
/// The timeline is normalized and checked against every schedule invariant
/// before the metrics are derived from it.
pub fn simulate(
    scheduler: &dyn Scheduler,
    processes: &[Process],
) -> Result<(Timeline, Metrics), SimError> {
    let workload = Workload::new(processes)?;

    let mut timeline = scheduler.schedule(&workload);
    timeline.normalize();
    timeline.check(&workload)?;
    let metrics = Metrics::compute(&workload, &timeline)?;

    info!(
        "{}: {} processes, {} segments, average waiting {:.2}, average turnaround {:.2}",
        scheduler.name(),
        workload.len(),
        timeline.len(),
        metrics.average_waiting,
        metrics.average_turnaround
    );

    Ok((timeline, metrics))
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "srtf" => Ok(Policy::Srtf),
            "priority" => Ok(Policy::Priority),
            "rr" | "round-robin" | "round_robin" => Ok(Policy::RoundRobin),
            _ => Err(SimError::UnknownPolicy(name.to_string())),
        }
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "FCFS"),
            Policy::Sjf => write!(f, "SJF"),
            Policy::Srtf => write!(f, "SRTF"),
            Policy::Priority => write!(f, "Priority"),
            Policy::RoundRobin => write!(f, "Round Robin"),
        }
    }
}
