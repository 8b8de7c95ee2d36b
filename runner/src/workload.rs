use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use scheduler::Process;

/// Reads a JSON array of processes.
///
/// Each entry needs `id` (or `pid`), `arrival` and `burst`; `priority`
/// defaults to 0.
pub fn load(path: &Path) -> Result<Vec<Process>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read workload {}", path.display()))?;
    let processes = parse(&text)
        .with_context(|| format!("failed to parse workload {}", path.display()))?;
    info!("loaded {} processes from {}", processes.len(), path.display());
    Ok(processes)
}

pub fn parse(text: &str) -> Result<Vec<Process>> {
    Ok(serde_json::from_str(text)?)
}

/// The four-process set shown when no workload is given.
pub fn sample() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 7),
        Process::new("P2", 2, 4),
        Process::new("P3", 4, 1),
        Process::new("P4", 5, 4),
    ]
}
