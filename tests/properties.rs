//! Invariants checked over seeded random workloads for every discipline.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use u_cpusched::models::{Discipline, Pid, RandomWorkloadOptions, SimulationResult, Workload};
use u_cpusched::simulate;

const DISCIPLINES: [Discipline; 7] = [
    Discipline::Fcfs,
    Discipline::Sjf,
    Discipline::Srtf,
    Discipline::Priority,
    Discipline::PriorityPreemptive,
    Discipline::RoundRobin { quantum: 1 },
    Discipline::RoundRobin { quantum: 3 },
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn workloads() -> Vec<Workload> {
    let options = RandomWorkloadOptions::new()
        .with_max_arrival(12)
        .with_burst_range(1, 8)
        .with_priority_range(0, 4);

    (0..40u64)
        .map(|seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let count = 1 + (seed as usize % 7);
            Workload::random(count, &options, &mut rng)
        })
        .collect()
}

fn check_invariants(workload: &Workload, discipline: Discipline, result: &SimulationResult) {
    let n = workload.len();
    let context = format!("{discipline} on {workload:?}");

    // Table preserves input order and size
    assert_eq!(result.process_table.len(), n, "{context}");
    for (row, (spec, pid)) in result
        .process_table
        .iter()
        .zip(workload.specs.iter().zip(1..))
    {
        assert_eq!(row.pid, pid, "{context}");
        assert_eq!(row.arrival, spec.arrival, "{context}");
        assert_eq!(row.burst, spec.burst, "{context}");
        assert_eq!(row.turnaround, row.end - row.arrival, "{context}");
        assert_eq!(row.waiting, row.turnaround - row.burst, "{context}");
        assert!(row.waiting >= 0, "{context}");
        assert!(row.start >= row.arrival && row.start < row.end, "{context}");
    }

    // Averages match exact sums
    let avg_turnaround = result.total_turnaround() as f64 / n as f64;
    let avg_waiting = result.total_waiting() as f64 / n as f64;
    assert!((result.average_turnaround - avg_turnaround).abs() < 1e-9, "{context}");
    assert!((result.average_waiting - avg_waiting).abs() < 1e-9, "{context}");

    // Completion order is a permutation of all pids
    let completed: BTreeSet<Pid> = result.completed.iter().copied().collect();
    let expected: BTreeSet<Pid> = (1..=n as Pid).collect();
    assert_eq!(result.completed.len(), n, "{context}");
    assert_eq!(completed, expected, "{context}");

    // Every unit of demand is served exactly once
    let total_burst: i64 = workload.specs.iter().map(|s| s.burst).sum();
    assert_eq!(result.running_process.len() as i64, total_burst, "{context}");

    // Ready queue recorded every tick, never listing the running pid
    let makespan = result.makespan();
    assert_eq!(result.ready_queue.len() as i64, makespan, "{context}");
    for (time, ready) in &result.ready_queue {
        match result.running_process.get(time) {
            Some(pid) => assert!(!ready.contains(pid), "{context} at {time}"),
            // Work conserving: idle only when nothing waits
            None => assert!(ready.is_empty(), "{context} at {time}"),
        }
    }

    // Timeline events coincide with changes of the running pid
    for event in &result.timeline {
        assert_eq!(result.running_process.get(&event.time), Some(&event.pid), "{context}");
        let before = result.running_process.get(&(event.time - 1));
        assert_ne!(before, Some(&event.pid), "{context}");
    }

    // Gantt segments cover [0, makespan) without gaps
    let gantt = result.gantt();
    assert_eq!(gantt.first().map(|s| s.start), Some(0), "{context}");
    assert_eq!(gantt.last().map(|s| s.end), Some(makespan), "{context}");
    for pair in gantt.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "{context}");
    }

    if !discipline.is_preemptive() {
        for row in &result.process_table {
            assert_eq!(row.end - row.start, row.burst, "{context}");
        }
        assert_eq!(result.timeline.len(), n, "{context}");
    }
}

#[test]
fn invariants_hold_for_all_disciplines() {
    init_tracing();
    for workload in workloads() {
        for discipline in DISCIPLINES {
            let result = simulate(&workload, discipline).unwrap();
            check_invariants(&workload, discipline, &result);
        }
    }
}

#[test]
fn results_are_byte_identical_across_runs() {
    init_tracing();
    for workload in workloads() {
        for discipline in DISCIPLINES {
            let first = simulate(&workload, discipline).unwrap().to_json().unwrap();
            let second = simulate(&workload, discipline).unwrap().to_json().unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn srtf_minimizes_total_turnaround() {
    init_tracing();
    for workload in workloads() {
        let srtf = simulate(&workload, Discipline::Srtf).unwrap().total_turnaround();
        for discipline in DISCIPLINES {
            let other = simulate(&workload, discipline).unwrap().total_turnaround();
            assert!(srtf <= other, "{discipline}: {other} < srtf {srtf}");
        }
    }
}

#[test]
fn textbook_scenarios() {
    init_tracing();

    let fcfs = u_cpusched::fcfs(&[0, 1, 2], &[5, 3, 2]).unwrap();
    let json = fcfs.to_json().unwrap();
    assert!(json.contains(r#""average_turnaround":6.67"#));
    assert!(json.contains(r#""average_waiting":3.33"#));

    let srtf = u_cpusched::sjf_preemptive(&[0, 1, 2], &[7, 4, 1]).unwrap();
    assert_eq!(srtf.running_process[&2], 3);
    assert!(srtf.timeline.len() >= 3);

    let rr = u_cpusched::round_robin(&[0, 0, 0], &[4, 4, 4], 2).unwrap();
    let pattern: Vec<Pid> = rr.running_process.values().copied().collect();
    assert_eq!(pattern, vec![1, 1, 2, 2, 3, 3, 1, 1, 2, 2, 3, 3]);
    let waits: Vec<i64> = rr.process_table.iter().map(|p| p.waiting).collect();
    assert_eq!(waits, vec![4, 6, 8]);
}
