//! Unit tests for the scale view lock ledger

use super::*;
use std::collections::HashSet;

fn v1alpha1_lock(name: &str, component: &str, groups: &[(&str, i32)]) -> v1alpha1::RisingWaveScaleViewLock {
    v1alpha1::RisingWaveScaleViewLock {
        name: name.to_string(),
        uid: format!("{name}-uid"),
        component: component.to_string(),
        generation: 7,
        group_locks: groups
            .iter()
            .map(|(group, replicas)| v1alpha1::RisingWaveScaleViewLockGroupLock {
                name: (*group).to_string(),
                replicas: *replicas,
            })
            .collect(),
    }
}

#[test]
fn test_lock_is_copied_verbatim() {
    let src = v1alpha1_lock("sv", "compute", &[("g1", 3), ("g2", 5)]);
    let lock = lock_to_v1alpha2(&src);

    assert_eq!(lock.reference.name, "sv");
    assert_eq!(lock.reference.uid, "sv-uid");
    assert_eq!(lock.reference.observed_generation, 7);
    assert_eq!(lock.component, "compute");
    assert_eq!(lock.ceiling("g1"), Some(3));
    assert_eq!(lock.ceiling("g2"), Some(5));
    let order: Vec<_> = lock.locks.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(order, vec!["g1", "g2"]);
}

#[test]
fn test_round_trip_preserves_group_set() {
    let src = v1alpha1_lock("sv", "frontend", &[("g1", 3), ("g2", 5)]);
    let back = lock_to_v1alpha1(&lock_to_v1alpha2(&src));

    let original: HashSet<_> = src.group_locks.iter().cloned().collect();
    let round_tripped: HashSet<_> = back.group_locks.iter().cloned().collect();
    assert_eq!(original, round_tripped);
    assert_eq!(back, src);
}

#[test]
fn test_lists_keep_order() {
    let src = vec![
        v1alpha1_lock("a", "compute", &[("g1", 1)]),
        v1alpha1_lock("b", "meta", &[]),
    ];
    let locks = locks_to_v1alpha2(&src);
    assert_eq!(locks.len(), 2);
    assert_eq!(locks[0].reference.name, "a");
    assert_eq!(locks[1].reference.name, "b");
    assert!(locks[1].locks.is_empty());
    assert_eq!(locks_to_v1alpha1(&locks), src);
}

#[test]
fn test_overlapping_claims() {
    let locks = locks_to_v1alpha2(&[
        v1alpha1_lock("a", "compute", &[("g1", 1), ("g2", 2)]),
        v1alpha1_lock("b", "compute", &[("g2", 4)]),
        v1alpha1_lock("c", "frontend", &[("g2", 1), ("g3", 1), ("g3", 2)]),
    ]);

    assert_eq!(
        overlapping_claims(&locks),
        vec![
            OverlappingClaim {
                component: "compute".to_string(),
                group: "g2".to_string(),
                scale_views: vec!["a".to_string(), "b".to_string()],
            },
            OverlappingClaim {
                component: "frontend".to_string(),
                group: "g3".to_string(),
                scale_views: vec!["c".to_string(), "c".to_string()],
            },
        ]
    );
}

#[test]
fn test_exclusive_claims_report_nothing() {
    let locks = locks_to_v1alpha2(&[
        v1alpha1_lock("a", "compute", &[("g1", 1)]),
        v1alpha1_lock("b", "meta", &[("g1", 1)]),
    ]);
    assert!(overlapping_claims(&locks).is_empty());
}
