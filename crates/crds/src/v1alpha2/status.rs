//! Observed state (v1alpha2)

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::meta_store::RisingWaveMetaStoreStatus;
use super::scale_view_lock::RisingWaveScaleViewLock;
use super::state_store::RisingWaveStateStoreStatus;
use crate::common::ConditionStatus;

/// RisingWaveStatus defines the observed state of a RisingWave cluster
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveStatus {
    /// Generation observed by the controller
    #[serde(default)]
    pub observed_generation: i64,

    /// Image tag of the spec-level image
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_tag: String,

    /// Latest condition of each type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<RisingWaveCondition>,

    /// Meta store
    #[serde(default)]
    pub meta_store: RisingWaveMetaStoreStatus,

    /// State store
    #[serde(default)]
    pub state_store: RisingWaveStateStoreStatus,

    /// Meta nodes
    #[serde(default)]
    pub meta_component: RisingWaveComponentStatus,

    /// Frontend nodes
    #[serde(default)]
    pub frontend_component: RisingWaveComponentStatus,

    /// Compute nodes
    #[serde(default)]
    pub compute_component: RisingWaveComponentStatus,

    /// Compactor nodes
    #[serde(default)]
    pub compactor_component: RisingWaveComponentStatus,

    /// Lock records maintained by the scale view controller
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scale_view_locks: Vec<RisingWaveScaleViewLock>,
}

/// Condition of a RisingWave cluster
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveCondition {
    /// Condition type, copied verbatim from the converted object
    #[serde(rename = "type")]
    pub condition_type: String,

    /// Condition status
    pub status: ConditionStatus,

    /// Last time the condition transitioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<Time>,

    /// Reason of the last transition
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,

    /// Human-readable details of the last transition
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// Replica counts of a workload
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadReplicaStatus {
    /// Desired replicas
    #[serde(default)]
    pub replicas: i32,

    /// Ready replicas
    #[serde(default)]
    pub ready_replicas: i32,

    /// Available replicas
    #[serde(default)]
    pub available_replicas: i32,

    /// Replicas running the latest revision
    #[serde(default)]
    pub updated_replicas: i32,

    /// Unavailable replicas
    #[serde(default)]
    pub unavailable_replicas: i32,
}

/// Observed state of a component
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveComponentStatus {
    /// Replicas over all node groups
    #[serde(default)]
    pub total: WorkloadReplicaStatus,

    /// Per-group replicas
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub node_groups: Vec<RisingWaveNodeGroupStatus>,
}

/// Observed state of a node group
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveNodeGroupStatus {
    /// Node group name
    pub name: String,

    /// Replicas of the group
    #[serde(flatten)]
    pub replicas: WorkloadReplicaStatus,

    /// Whether the workload of the group exists
    #[serde(default)]
    pub exists: bool,
}
