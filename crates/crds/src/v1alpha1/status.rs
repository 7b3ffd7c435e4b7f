//! Observed state (v1alpha1)

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::ConditionStatus;

/// RisingWaveStatus defines the observed state of a RisingWave cluster
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveStatus {
    /// Generation observed by the controller
    #[serde(default)]
    pub observed_generation: i64,

    /// Version (image tag) of the running cluster
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Latest condition of each type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<RisingWaveCondition>,

    /// Observed storage types
    #[serde(default)]
    pub storages: RisingWaveStoragesStatus,

    /// Replicas of every component
    #[serde(default)]
    pub component_replicas: RisingWaveComponentsReplicasStatus,

    /// Lock records of the scale views targeting this cluster
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scale_views: Vec<RisingWaveScaleViewLock>,
}

/// Condition of a RisingWave cluster
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveCondition {
    /// Condition type (Running, Initializing, Upgrading, Failed, Unknown)
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

/// Observed storage types
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveStoragesStatus {
    /// Meta storage
    #[serde(default)]
    pub meta: RisingWaveMetaStorageStatus,

    /// Object storage
    #[serde(default)]
    pub object: RisingWaveObjectStorageStatus,
}

/// Observed meta storage type
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub struct RisingWaveMetaStorageStatus {
    /// Storage type
    #[serde(default, rename = "type")]
    pub storage_type: MetaStorageType,
}

/// Observed object storage type
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub struct RisingWaveObjectStorageStatus {
    /// Storage type
    #[serde(default, rename = "type")]
    pub storage_type: ObjectStorageType,
}

/// Meta storage type. Unrecognized values deserialize as `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub enum MetaStorageType {
    /// In-memory
    Memory,

    /// Etcd
    Etcd,

    /// Not (yet) observed
    #[default]
    #[serde(other)]
    Unknown,
}

/// Object storage type. Unrecognized values deserialize as `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub enum ObjectStorageType {
    /// In-memory
    Memory,

    /// MinIO
    MinIO,

    /// AWS S3 or S3-compatible
    S3,

    /// Aliyun OSS
    AliyunOSS,

    /// HDFS
    HDFS,

    /// Google Cloud Storage
    GCS,

    /// Not (yet) observed
    #[default]
    #[serde(other)]
    Unknown,
}

/// Replicas of every component
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveComponentsReplicasStatus {
    /// Meta nodes
    #[serde(default)]
    pub meta: ComponentReplicasStatus,

    /// Frontend nodes
    #[serde(default)]
    pub frontend: ComponentReplicasStatus,

    /// Compute nodes
    #[serde(default)]
    pub compute: ComponentReplicasStatus,

    /// Compactor nodes
    #[serde(default)]
    pub compactor: ComponentReplicasStatus,
}

/// Replicas of a component
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReplicasStatus {
    /// Desired replicas over all groups
    #[serde(default)]
    pub target: i32,

    /// Running replicas over all groups
    #[serde(default)]
    pub running: i32,

    /// Per-group breakdown
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ComponentGroupReplicasStatus>,
}

/// Replicas of a group
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentGroupReplicasStatus {
    /// Group name
    pub name: String,

    /// Desired replicas
    #[serde(default)]
    pub target: i32,

    /// Running replicas
    #[serde(default)]
    pub running: i32,

    /// Whether the workload of the group exists
    #[serde(default)]
    pub exists: bool,
}

/// Lock record of a scale view
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveScaleViewLock {
    /// Name of the RisingWaveScaleView object
    #[serde(default)]
    pub name: String,

    /// UID of the RisingWaveScaleView object
    #[serde(default)]
    pub uid: String,

    /// Component targeted by the scale view
    #[serde(default)]
    pub component: String,

    /// Generation of the scale view when the lock was last updated
    #[serde(default)]
    pub generation: i64,

    /// Locked groups and their replica ceilings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_locks: Vec<RisingWaveScaleViewLockGroupLock>,
}

/// Lock on a single group
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveScaleViewLockGroupLock {
    /// Group name
    pub name: String,

    /// Replicas allowed for the group
    #[serde(default)]
    pub replicas: i32,
}
