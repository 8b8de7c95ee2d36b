use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Defect, Pid, Process, Time, Timeline, Timing, Workload};

/// The performance figures of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival: Time,
    pub burst: Time,
    pub priority: i32,
    /// The first time the process ran.
    pub start: Time,
    /// The time the process completed.
    pub finish: Time,
    /// `start - arrival`
    pub response: Time,
    /// `turnaround - burst`
    pub waiting: Time,
    /// `finish - arrival`
    pub turnaround: Time,
}

/// The metrics of a run, keyed by process id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub processes: BTreeMap<Pid, ProcessMetrics>,
    pub average_waiting: f64,
    pub average_turnaround: f64,
    pub average_response: f64,
    /// The time from the earliest arrival to the last completion.
    pub makespan: Time,
    /// The share of the makespan the processor was busy, in percent.
    pub utilization: f64,
}

impl Metrics {
    /// Derives the metrics of every process from the timeline.
    pub fn compute(workload: &Workload, timeline: &Timeline) -> Result<Metrics, Defect> {
        Metrics::from_timings(workload.processes(), &timeline.timings())
    }

    /// Derives the metrics of every process from its start and finish times.
    ///
    /// Fails if a process has no timing or finishes sooner than its arrival
    /// plus its burst.
    pub fn from_timings(
        processes: &[Process],
        timings: &BTreeMap<Pid, Timing>,
    ) -> Result<Metrics, Defect> {
        let mut metrics = BTreeMap::new();
        for process in processes {
            let timing = timings
                .get(&process.pid)
                .ok_or_else(|| Defect::Unscheduled(process.pid.clone()))?;

            let turnaround = timing.finish - process.arrival;
            let waiting = turnaround - process.burst;
            if waiting < 0 {
                return Err(Defect::NegativeWaiting {
                    pid: process.pid.clone(),
                    waiting,
                });
            }

            metrics.insert(
                process.pid.clone(),
                ProcessMetrics {
                    pid: process.pid.clone(),
                    arrival: process.arrival,
                    burst: process.burst,
                    priority: process.priority,
                    start: timing.start,
                    finish: timing.finish,
                    response: timing.start - process.arrival,
                    waiting,
                    turnaround,
                },
            );
        }

        let makespan = match (
            processes.iter().map(|process| process.arrival).min(),
            metrics.values().map(|metrics| metrics.finish).max(),
        ) {
            (Some(first_arrival), Some(last_finish)) => last_finish - first_arrival,
            _ => 0,
        };
        let busy: Time = processes.iter().map(|process| process.burst).sum();
        let utilization = if makespan > 0 {
            busy as f64 * 100.0 / makespan as f64
        } else {
            0.0
        };

        Ok(Metrics {
            average_waiting: average(metrics.values().map(|metrics| metrics.waiting)),
            average_turnaround: average(metrics.values().map(|metrics| metrics.turnaround)),
            average_response: average(metrics.values().map(|metrics| metrics.response)),
            processes: metrics,
            makespan,
            utilization,
        })
    }

    pub fn get(&self, pid: &Pid) -> Option<&ProcessMetrics> {
        self.processes.get(pid)
    }

    /// The metrics of every process, sorted by process id.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessMetrics> {
        self.processes.values()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

fn average(values: impl Iterator<Item = Time>) -> f64 {
    let (sum, count) = values.fold((0, 0), |(sum, count), value| (sum + value, count + 1));
    if count > 0 {
        sum as f64 / count as f64
    } else {
        0.0
    }
}
