use core::module_path;
use function_name::named;
use scheduler::Process;

use super::run;

#[test]
#[named]
pub fn gap_between_arrivals() {
    let processes = vec![
        Process::new("A", 0, 3),
        Process::new("B", 6, 2),
        Process::new("C", 7, 4),
    ];

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &processes,
    );
}

#[test]
#[named]
pub fn unsorted_input() {
    let processes = vec![
        Process::new("C", 8, 2).with_priority(1),
        Process::new("A", 1, 4).with_priority(2),
        Process::new("B", 2, 6),
    ];

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &processes,
    );
}
