//! Simulator Tests
//!
//! Golden fault counts for the classroom reference string, plus the frame
//! invariants every run must satisfy.

use pagesim::{simulate, FrameId, PageId, PolicyKind, ReferenceString, Simulator, Slot};

const CLASSIC_BELADY: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

fn faults(ids: &[u32], capacity: usize, kind: PolicyKind) -> usize {
    let refs = ReferenceString::from_ids(ids.iter().copied());
    simulate(&refs, capacity, kind).unwrap().statistics().faults
}

fn default_faults(capacity: usize, kind: PolicyKind) -> usize {
    simulate(&ReferenceString::default(), capacity, kind)
        .unwrap()
        .statistics()
        .faults
}

// ============================================================================
// Golden values
// ============================================================================

/// Capacity 3 on 1 2 3 2 1 5 2 1 6 2 5 6 3 1 3 6 1 2 4 3.
#[test]
fn test_golden_capacity_three() {
    assert_eq!(default_faults(3, PolicyKind::Fifo), 14);
    assert_eq!(default_faults(3, PolicyKind::Lru), 11);
    assert_eq!(default_faults(3, PolicyKind::Optimal), 9);
}

/// Capacity 4 on the same string.
#[test]
fn test_golden_capacity_four() {
    assert_eq!(default_faults(4, PolicyKind::Fifo), 9);
    assert_eq!(default_faults(4, PolicyKind::Lru), 10);
    assert_eq!(default_faults(4, PolicyKind::Optimal), 7);
}

/// Hits are the complement of faults.
#[test]
fn test_golden_hits() {
    let sim = Simulator::new(ReferenceString::default(), 3).unwrap();
    let hits: Vec<usize> = sim
        .compare(&PolicyKind::ALL)
        .unwrap()
        .iter()
        .map(|run| run.statistics().hits)
        .collect();
    assert_eq!(hits, vec![6, 9, 11]);
}

/// The classroom string does not show Belady's anomaly for FIFO at 3 -> 4.
#[test]
fn test_no_belady_anomaly_on_default_string() {
    assert!(default_faults(4, PolicyKind::Fifo) <= default_faults(3, PolicyKind::Fifo));
}

/// The textbook string does: FIFO faults go up with an extra frame.
#[test]
fn test_belady_anomaly_fifo() {
    assert_eq!(faults(&CLASSIC_BELADY, 3, PolicyKind::Fifo), 9);
    assert_eq!(faults(&CLASSIC_BELADY, 4, PolicyKind::Fifo), 10);
}

/// Optimal never suffers from the anomaly.
#[test]
fn test_optimal_immune_to_belady() {
    let three = faults(&CLASSIC_BELADY, 3, PolicyKind::Optimal);
    let four = faults(&CLASSIC_BELADY, 4, PolicyKind::Optimal);
    assert!(four <= three);
}

/// Full FIFO frame contents at capacity 3.
#[test]
fn test_fifo_final_frames() {
    let timeline = simulate(&ReferenceString::default(), 3, PolicyKind::Fifo).unwrap();
    let last = timeline.get(19).unwrap();
    let pages: Vec<Option<u32>> = last
        .frames
        .slots()
        .iter()
        .map(|slot| slot.page().map(|p| p.0))
        .collect();
    assert_eq!(pages, vec![Some(4), Some(3), Some(2)]);
}

/// Optimal at capacity 3: step 12 (page 3) evicts page 5, never used again.
#[test]
fn test_optimal_evicts_dead_page() {
    let timeline = simulate(&ReferenceString::default(), 3, PolicyKind::Optimal).unwrap();
    let step = timeline.get(12).unwrap();
    assert!(step.faulted);
    assert_eq!(step.evicted, Some(PageId::new(5)));
    assert_eq!(step.frames.find(PageId::new(3)), Some(FrameId::new(2)));
}

// ============================================================================
// Invariants
// ============================================================================

/// Length, occupancy, fault correctness and single-slot changes.
#[test]
fn test_frame_invariants_all_policies() {
    let refs = ReferenceString::default();

    for capacity in 1..=6 {
        let sim = Simulator::new(refs.clone(), capacity).unwrap();
        for kind in PolicyKind::ALL {
            let timeline = sim.run(kind).unwrap();
            assert_eq!(timeline.len(), refs.len());

            let mut prev_occupied = 0;
            for (i, page) in refs.iter().enumerate() {
                let before = timeline.snapshot_before(i).unwrap();
                let record = timeline.get(i).unwrap();

                // Fault iff absent before
                assert_eq!(record.faulted, !before.contains(page), "{} step {}", kind, i);
                // Always resident afterwards
                assert!(record.frames.contains(page));

                let changed = before.changed_slots(&record.frames);
                assert_eq!(changed, if record.faulted { 1 } else { 0 });

                let occupied = record.frames.occupied_count();
                assert!(occupied <= capacity);
                assert!(occupied >= prev_occupied);
                if prev_occupied == capacity {
                    assert_eq!(occupied, capacity);
                }
                prev_occupied = occupied;

                // Eviction only when the frames were full
                assert_eq!(record.evicted.is_some(), record.faulted && before.is_full());
            }
        }
    }
}

/// Running twice gives the same timeline.
#[test]
fn test_runs_are_deterministic() {
    let sim = Simulator::new(ReferenceString::default(), 3).unwrap();
    for kind in PolicyKind::ALL {
        let a = sim.run(kind).unwrap();
        let b = sim.run(kind).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}

/// Different policies leave different traces on this string.
#[test]
fn test_policies_diverge() {
    let sim = Simulator::new(ReferenceString::default(), 3).unwrap();
    let fifo = sim.run(PolicyKind::Fifo).unwrap();
    let lru = sim.run(PolicyKind::Lru).unwrap();
    assert_ne!(fifo.fingerprint(), lru.fingerprint());
}

// ============================================================================
// Capacity 1
// ============================================================================

/// With one frame every change of page faults and every repeat hits.
#[test]
fn test_single_frame_all_policies_agree() {
    let ids = [1, 1, 2, 2, 2, 1, 3, 3, 1];
    let refs = ReferenceString::from_ids(ids);
    let sim = Simulator::new(refs, 1).unwrap();

    let runs = sim.compare(&PolicyKind::ALL).unwrap();
    for run in &runs {
        let flags: Vec<bool> = run.timeline.fault_flags().collect();
        assert_eq!(
            flags,
            vec![true, false, true, false, false, true, true, false, true]
        );
        assert_eq!(run.timeline.get(8).unwrap().frames.slots(), &[Slot::Occupied(PageId::new(1))]);
    }
    assert_eq!(runs[0].timeline, runs[1].timeline);
    assert_eq!(runs[1].timeline, runs[2].timeline);
}

/// More frames than distinct pages: only compulsory faults.
#[test]
fn test_large_capacity_only_cold_misses() {
    for kind in PolicyKind::ALL {
        let stats = simulate(&ReferenceString::default(), 8, kind).unwrap().statistics();
        assert_eq!(stats.faults, 6);
        assert_eq!(stats.evictions, 0);
    }
}
