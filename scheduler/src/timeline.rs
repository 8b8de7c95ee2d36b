use std::collections::{BTreeMap, HashMap};
use std::mem;

use serde::Serialize;

use crate::{Defect, Pid, Time, Workload};

/// An interval during which one process occupies the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub pid: Pid,
    pub start: Time,
    pub end: Time,
}

impl Segment {
    pub fn new(pid: Pid, start: Time, end: Time) -> Segment {
        Segment { pid, start, end }
    }

    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// The first dispatch and the completion time of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timing {
    pub start: Time,
    pub finish: Time,
}

/// The execution log of a run, ordered by start time.
///
/// Each process contributes the minimal number of maximal contiguous
/// segments: [`Timeline::push`] extends the last segment instead of
/// appending one that belongs to the same process and starts where it ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    pub fn new() -> Timeline {
        Timeline::default()
    }

    /// Appends a segment, merging it into the last one when they belong to
    /// the same process and abut.
    pub fn push(&mut self, segment: Segment) {
        if let Some(last) = self.segments.last_mut() {
            if last.pid == segment.pid && last.end == segment.start {
                last.end = segment.end;
                return;
            }
        }
        self.segments.push(segment);
    }

    /// Merges every pair of abutting segments of the same process.
    ///
    /// Running it on a normalized timeline changes nothing.
    pub fn normalize(&mut self) {
        for segment in mem::take(&mut self.segments) {
            self.push(segment);
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The total time assigned to a process.
    pub fn busy_time(&self, pid: &Pid) -> Time {
        self.segments
            .iter()
            .filter(|segment| &segment.pid == pid)
            .map(Segment::duration)
            .sum()
    }

    /// The first start and the last end of every process in the timeline.
    pub fn timings(&self) -> BTreeMap<Pid, Timing> {
        let mut timings = BTreeMap::new();
        for segment in &self.segments {
            timings
                .entry(segment.pid.clone())
                .and_modify(|timing: &mut Timing| timing.finish = segment.end)
                .or_insert(Timing {
                    start: segment.start,
                    finish: segment.end,
                });
        }
        timings
    }

    /// Verifies that the timeline is a valid single-processor schedule of
    /// the workload.
    ///
    /// Segments must be ordered by start, non-empty and non-overlapping, no
    /// process may run before it arrives, and every process must receive
    /// exactly its burst.
    pub fn check(&self, workload: &Workload) -> Result<(), Defect> {
        let mut assigned: HashMap<&Pid, Time> = HashMap::new();
        let mut previous: Option<&Segment> = None;

        for segment in &self.segments {
            let pid = &segment.pid;
            let process = workload
                .find(pid)
                .ok_or_else(|| Defect::UnknownPid(pid.clone()))?;

            if segment.end <= segment.start {
                return Err(Defect::EmptySegment {
                    pid: pid.clone(),
                    start: segment.start,
                    end: segment.end,
                });
            }
            if segment.start < process.arrival {
                return Err(Defect::EarlyStart {
                    pid: pid.clone(),
                    start: segment.start,
                    arrival: process.arrival,
                });
            }
            if let Some(previous) = previous {
                if segment.start < previous.start {
                    return Err(Defect::OutOfOrder {
                        pid: pid.clone(),
                        start: segment.start,
                    });
                }
                if segment.start < previous.end {
                    return Err(Defect::Overlap {
                        first: previous.pid.clone(),
                        second: pid.clone(),
                        at: segment.start,
                    });
                }
            }

            *assigned.entry(pid).or_default() += segment.duration();
            previous = Some(segment);
        }

        for process in workload.processes() {
            match assigned.get(&process.pid) {
                None => return Err(Defect::Unscheduled(process.pid.clone())),
                Some(&actual) if actual != process.burst => {
                    return Err(Defect::BurstMismatch {
                        pid: process.pid.clone(),
                        expected: process.burst,
                        actual,
                    })
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

impl FromIterator<Segment> for Timeline {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut timeline = Timeline::new();
        for segment in iter {
            timeline.push(segment);
        }
        timeline
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
pub(crate) fn segments(timeline: &Timeline) -> Vec<(&str, Time, Time)> {
    timeline
        .iter()
        .map(|segment| (segment.pid.as_str(), segment.start, segment.end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Process;
    use pretty_assertions::assert_eq;

    fn segment(pid: &str, start: Time, end: Time) -> Segment {
        Segment::new(Pid::new(pid), start, end)
    }

    fn unmerged() -> Timeline {
        Timeline {
            segments: vec![
                segment("A", 0, 1),
                segment("A", 1, 2),
                segment("B", 2, 4),
                segment("A", 5, 6),
                segment("A", 6, 8),
            ],
        }
    }

    #[test]
    fn push_merges_abutting_segments_of_one_process() {
        let timeline = Timeline::from_iter(unmerged().segments);
        assert_eq!(
            segments(&timeline),
            vec![("A", 0, 2), ("B", 2, 4), ("A", 5, 8)]
        );
    }

    #[test]
    fn push_keeps_gaps() {
        let timeline = Timeline::from_iter(vec![segment("A", 0, 2), segment("A", 3, 4)]);
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut once = unmerged();
        once.normalize();
        let mut twice = once.clone();
        twice.normalize();
        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn timings_use_first_start_and_last_end() {
        let mut timeline = unmerged();
        timeline.normalize();
        let timings = timeline.timings();
        assert_eq!(timings[&Pid::new("A")], Timing { start: 0, finish: 8 });
        assert_eq!(timings[&Pid::new("B")], Timing { start: 2, finish: 4 });
        assert_eq!(timeline.busy_time(&Pid::new("A")), 5);
    }

    #[test]
    fn check_accepts_valid_schedule() {
        let workload = Workload::new(&[Process::new("A", 0, 5), Process::new("B", 1, 2)]).unwrap();
        let mut timeline = unmerged();
        timeline.normalize();
        assert_eq!(timeline.check(&workload), Ok(()));
    }

    #[test]
    fn check_rejects_overlap() {
        let workload = Workload::new(&[Process::new("A", 0, 3), Process::new("B", 0, 2)]).unwrap();
        let timeline = Timeline::from_iter(vec![segment("A", 0, 3), segment("B", 2, 4)]);
        assert_eq!(
            timeline.check(&workload),
            Err(Defect::Overlap {
                first: Pid::new("A"),
                second: Pid::new("B"),
                at: 2
            })
        );
    }

    #[test]
    fn check_rejects_out_of_order() {
        let workload = Workload::new(&[Process::new("A", 0, 1), Process::new("B", 0, 1)]).unwrap();
        let timeline = Timeline::from_iter(vec![segment("A", 3, 4), segment("B", 0, 1)]);
        assert_eq!(
            timeline.check(&workload),
            Err(Defect::OutOfOrder {
                pid: Pid::new("B"),
                start: 0
            })
        );
    }

    #[test]
    fn check_rejects_early_start() {
        let workload = Workload::new(&[Process::new("A", 2, 1)]).unwrap();
        let timeline = Timeline::from_iter(vec![segment("A", 1, 2)]);
        assert_eq!(
            timeline.check(&workload),
            Err(Defect::EarlyStart {
                pid: Pid::new("A"),
                start: 1,
                arrival: 2
            })
        );
    }

    #[test]
    fn check_rejects_missing_and_short_processes() {
        let workload = Workload::new(&[Process::new("A", 0, 2), Process::new("B", 0, 1)]).unwrap();

        let missing = Timeline::from_iter(vec![segment("A", 0, 2)]);
        assert_eq!(
            missing.check(&workload),
            Err(Defect::Unscheduled(Pid::new("B")))
        );

        let short = Timeline::from_iter(vec![segment("A", 0, 1), segment("B", 1, 2)]);
        assert_eq!(
            short.check(&workload),
            Err(Defect::BurstMismatch {
                pid: Pid::new("A"),
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn check_rejects_unknown_and_empty_segments() {
        let workload = Workload::new(&[Process::new("A", 0, 1)]).unwrap();

        let unknown = Timeline::from_iter(vec![segment("Z", 0, 1)]);
        assert_eq!(
            unknown.check(&workload),
            Err(Defect::UnknownPid(Pid::new("Z")))
        );

        let empty = Timeline::from_iter(vec![segment("A", 1, 1)]);
        assert_eq!(
            empty.check(&workload),
            Err(Defect::EmptySegment {
                pid: Pid::new("A"),
                start: 1,
                end: 1
            })
        );
    }
}
