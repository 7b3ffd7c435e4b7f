//! Scale view lock records (v1alpha2)
//!
//! Written by the scale view controller. Every lock names the groups of one
//! component whose `replicas` may only be changed by the owning scale view,
//! and only up to the recorded ceiling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reference to a RisingWaveScaleView object
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveScaleViewReference {
    /// Name of the scale view
    #[serde(default)]
    pub name: String,

    /// UID of the scale view
    #[serde(default)]
    pub uid: String,

    /// Generation of the scale view last observed
    #[serde(default)]
    pub observed_generation: i64,
}

/// Lock record of a scale view
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveScaleViewLock {
    /// Owning scale view
    #[serde(flatten)]
    pub reference: RisingWaveScaleViewReference,

    /// Component targeted by the scale view
    #[serde(default)]
    pub component: String,

    /// Locked node groups, unique by name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locks: Vec<RisingWaveScaleViewNodeGroupLock>,
}

impl RisingWaveScaleViewLock {
    /// Replica ceiling recorded for a node group, if the group is locked.
    pub fn ceiling(&self, group: &str) -> Option<i32> {
        self.locks.iter().find(|l| l.name == group).map(|l| l.replicas)
    }
}

/// Lock on a single node group
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveScaleViewNodeGroupLock {
    /// Node group name
    pub name: String,

    /// Replicas currently allowed for the node group
    #[serde(default)]
    pub replicas: i32,
}
