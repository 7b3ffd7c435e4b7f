//! Scale view lock ledger.
//!
//! Lock records are copied verbatim in both directions. Enforcing the locks
//! (rejecting replica writes on locked groups) belongs to admission control.

use std::collections::BTreeMap;

use risingwave_crds::{v1alpha1, v1alpha2};

/// Converts a lock record to the hub version.
pub fn lock_to_v1alpha2(src: &v1alpha1::RisingWaveScaleViewLock) -> v1alpha2::RisingWaveScaleViewLock {
    v1alpha2::RisingWaveScaleViewLock {
        reference: v1alpha2::RisingWaveScaleViewReference {
            name: src.name.clone(),
            uid: src.uid.clone(),
            observed_generation: src.generation,
        },
        component: src.component.clone(),
        locks: src
            .group_locks
            .iter()
            .map(|gl| v1alpha2::RisingWaveScaleViewNodeGroupLock {
                name: gl.name.clone(),
                replicas: gl.replicas,
            })
            .collect(),
    }
}

/// Converts a lock record back to the legacy version.
pub fn lock_to_v1alpha1(src: &v1alpha2::RisingWaveScaleViewLock) -> v1alpha1::RisingWaveScaleViewLock {
    v1alpha1::RisingWaveScaleViewLock {
        name: src.reference.name.clone(),
        uid: src.reference.uid.clone(),
        component: src.component.clone(),
        generation: src.reference.observed_generation,
        group_locks: src
            .locks
            .iter()
            .map(|l| v1alpha1::RisingWaveScaleViewLockGroupLock {
                name: l.name.clone(),
                replicas: l.replicas,
            })
            .collect(),
    }
}

/// Converts every lock record to the hub version, keeping the order.
pub fn locks_to_v1alpha2(src: &[v1alpha1::RisingWaveScaleViewLock]) -> Vec<v1alpha2::RisingWaveScaleViewLock> {
    src.iter().map(lock_to_v1alpha2).collect()
}

/// Converts every lock record back to the legacy version, keeping the order.
pub fn locks_to_v1alpha1(src: &[v1alpha2::RisingWaveScaleViewLock]) -> Vec<v1alpha1::RisingWaveScaleViewLock> {
    src.iter().map(lock_to_v1alpha1).collect()
}

/// A node group claimed more than once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlappingClaim {
    /// Component of the node group
    pub component: String,
    /// Node group name
    pub group: String,
    /// Names of the claiming scale views, once per claim
    pub scale_views: Vec<String>,
}

/// Reports node groups locked more than once, whether by two scale views or
/// twice within one record. Sorted by component, then group.
pub fn overlapping_claims(locks: &[v1alpha2::RisingWaveScaleViewLock]) -> Vec<OverlappingClaim> {
    let mut claims: BTreeMap<(&str, &str), Vec<String>> = BTreeMap::new();
    for lock in locks {
        for group in &lock.locks {
            claims
                .entry((lock.component.as_str(), group.name.as_str()))
                .or_default()
                .push(lock.reference.name.clone());
        }
    }

    claims
        .into_iter()
        .filter(|(_, views)| views.len() > 1)
        .map(|((component, group), scale_views)| OverlappingClaim {
            component: component.to_string(),
            group: group.to_string(),
            scale_views,
        })
        .collect()
}

#[cfg(test)]
#[path = "scale_view_test.rs"]
mod tests;
