//! A report formatting library
//!
//! Renders the [`Simulation`]s produced by the [`scheduler`] crate as text,
//! for terminals and golden output files.

use std::fmt::{self, Display};

use scheduler::{Metrics, Simulation, Timeline};

/// A one-line text Gantt chart.
///
/// Every segment prints as `start |pid|`, idle stretches as `start |--|`,
/// and the line ends with the completion time of the last segment.
pub struct Gantt<'a>(pub &'a Timeline);

impl Display for Gantt<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(empty)");
        }
        let mut cursor = 0;
        for segment in self.0 {
            if segment.start > cursor {
                write!(f, "{} |--| ", cursor)?;
            }
            write!(f, "{} |{}| ", segment.start, segment.pid)?;
            cursor = segment.end;
        }
        write!(f, "{}", cursor)
    }
}

/// The segments of a timeline, one per line.
pub struct SegmentTable<'a>(pub &'a Timeline);

impl Display for SegmentTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PID\tSTART\tEND")?;
        for segment in self.0 {
            writeln!(f, "{}\t{}\t{}", segment.pid, segment.start, segment.end)?;
        }
        Ok(())
    }
}

/// The per-process metrics, sorted by process id, followed by the averages.
pub struct MetricsTable<'a>(pub &'a Metrics);

impl Display for MetricsTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PID\tARRIVAL\tBURST\tPRI\tSTART\tFINISH\tRESP\tWAIT\tTAT")?;
        for process in self.0.iter() {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                process.pid,
                process.arrival,
                process.burst,
                process.priority,
                process.start,
                process.finish,
                process.response,
                process.waiting,
                process.turnaround
            )?;
        }
        writeln!(f, "Average waiting time = {:.2}", self.0.average_waiting)?;
        writeln!(f, "Average turnaround time = {:.2}", self.0.average_turnaround)?;
        writeln!(f, "Average response time = {:.2}", self.0.average_response)?;
        writeln!(f, "Makespan = {}", self.0.makespan)?;
        writeln!(f, "CPU utilization = {:.2}%", self.0.utilization)
    }
}

/// The full report of one simulation.
pub struct Report<'a>(pub &'a Simulation);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let simulation = self.0;
        match simulation.quantum {
            Some(quantum) => writeln!(f, "===== {} (quantum {}) =====", simulation.policy, quantum)?,
            None => writeln!(f, "===== {} =====", simulation.policy)?,
        }
        writeln!(f, "Gantt: {}", Gantt(&simulation.timeline))?;
        writeln!(f)?;
        write!(f, "{}", SegmentTable(&simulation.timeline))?;
        writeln!(f)?;
        write!(f, "{}", MetricsTable(&simulation.metrics))
    }
}

/// Format a list of simulations to a [`String`], separated by blank lines.
///
/// ## Example
///
/// ```rust
/// use report::format_report;
/// use scheduler::{Params, Policy, Process};
///
/// let processes = vec![Process::new("P1", 0, 3)];
/// let simulation = Policy::Fcfs.simulate(&processes, &Params::default()).unwrap();
///
/// println!("{}", format_report(&[simulation]));
/// ```
pub fn format_report(simulations: &[Simulation]) -> String {
    let mut s = String::new();
    for simulation in simulations {
        // Writing into a String cannot fail.
        let _ = fmt::write(&mut s, format_args!("{}\n", Report(simulation)));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scheduler::{Params, Policy, Process};

    #[test]
    fn gantt_marks_idle_time() {
        let processes = vec![Process::new("A", 2, 3), Process::new("B", 8, 1)];
        let simulation = Policy::Fcfs.simulate(&processes, &Params::default()).unwrap();
        assert_eq!(
            Gantt(&simulation.timeline).to_string(),
            "0 |--| 2 |A| 5 |--| 8 |B| 9"
        );
    }

    #[test]
    fn gantt_of_empty_timeline() {
        let simulation = Policy::Fcfs.simulate(&[], &Params::default()).unwrap();
        assert_eq!(Gantt(&simulation.timeline).to_string(), "(empty)");
    }

    #[test]
    fn single_process_report() {
        let processes = vec![Process::new("P1", 0, 3)];
        let simulation = Policy::RoundRobin
            .simulate(&processes, &Params { quantum: 2 })
            .unwrap();
        assert_eq!(
            format_report(&[simulation]),
            "===== Round Robin (quantum 2) =====\n\
             Gantt: 0 |P1| 3\n\
             \n\
             PID\tSTART\tEND\n\
             P1\t0\t3\n\
             \n\
             PID\tARRIVAL\tBURST\tPRI\tSTART\tFINISH\tRESP\tWAIT\tTAT\n\
             P1\t0\t3\t0\t0\t3\t0\t0\t3\n\
             Average waiting time = 0.00\n\
             Average turnaround time = 3.00\n\
             Average response time = 0.00\n\
             Makespan = 3\n\
             CPU utilization = 100.00%\n\
             \n"
        );
    }
}
