use scheduler::{Params, Policy, Process, Time, DEFAULT_QUANTUM};

use std::env;
use std::fs;

use report::format_report;

mod idle;

fn path(policy: Policy, folder: &str, name: &str) -> String {
    let Params { quantum } = arguments();
    format!("../outputs/{}/{folder}/{name}___{quantum}.log", policy.slug())
}

fn write_logs(policy: Policy, folder: &str, name: &str, logs: &str) {
    fs::create_dir_all(format!("../outputs/{}/{folder}", policy.slug())).unwrap();
    fs::write(path(policy, folder, name), logs).unwrap();
}

fn read_logs(policy: Policy, folder: &str, name: &str) -> String {
    fs::read_to_string(path(policy, folder, name)).unwrap()
}

/// Runs every policy over `processes` and compares each report with its
/// reference file. With `WRITE_OUTPUT` set, the reference files are
/// written instead.
fn run(folder: &str, name: &str, processes: &[Process]) {
    let params = arguments();

    for policy in Policy::ALL {
        let simulation = policy.simulate(processes, &params).unwrap();
        let output = format_report(&[simulation]);

        if env::var("WRITE_OUTPUT").is_ok() {
            write_logs(policy, folder, name, &output);
        } else {
            let reference = read_logs(policy, folder, name);

            println!("\nleft = Correct Output ({policy})\nright = Your Output\n");
            use pretty_assertions::assert_eq;
            assert_eq!(reference, output);
        }
    }
}

fn arguments() -> Params {
    let quantum = env::var("QUANTUM")
        .unwrap_or(DEFAULT_QUANTUM.to_string())
        .parse::<Time>()
        .unwrap();
    Params { quantum }
}
