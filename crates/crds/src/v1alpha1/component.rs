//! Components and groups (v1alpha1)

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{
    Affinity, EnvFromSource, EnvVar, PodDNSConfig, PodSecurityContext, ResourceRequirements,
    Toleration, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::PartialObjectMeta;

/// Pod-level overrides of a group
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveComponentGroupTemplate {
    /// Container image
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,

    /// Image pull policy (Always, IfNotPresent, Never)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,

    /// Names of the image pull secrets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_pull_secrets: Vec<String>,

    /// Resource requests and limits of the container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,

    /// Node selector of the pods
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub node_selector: BTreeMap<String, String>,

    /// Tolerations of the pods
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tolerations: Vec<Toleration>,

    /// Affinity of the pods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,

    /// Labels and annotations of the pods
    #[serde(default)]
    pub metadata: PartialObjectMeta,

    /// Security context of the pods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_context: Option<PodSecurityContext>,

    /// Priority class of the pods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,

    /// Termination grace period of the pods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_grace_period_seconds: Option<i64>,

    /// DNS config of the pods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_config: Option<PodDNSConfig>,

    /// Environment variables of the container
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,

    /// Environment sources of the container
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env_from: Vec<EnvFromSource>,
}

/// Upgrade strategy type of a group. Unrecognized values deserialize as `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub enum RisingWaveUpgradeStrategyType {
    /// Kill all pods, then create new ones
    Recreate,

    /// Replace pods one after another
    #[default]
    RollingUpdate,

    /// Update in place when only the image or metadata changed, recreate otherwise
    InPlaceIfPossible,

    /// Only update in place
    InPlaceOnly,

    /// Unrecognized strategy
    #[serde(other)]
    Unknown,
}

/// Rolling update parameters
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveRollingUpdate {
    /// Maximum number of unavailable pods during the update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<IntOrString>,

    /// Ordinal (or percentage) at which the update is partitioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<IntOrString>,

    /// Maximum number of pods created above the desired count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_surge: Option<IntOrString>,
}

/// In-place update parameters
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InPlaceUpdateStrategy {
    /// Seconds between marking a pod not-ready and updating it in place
    #[serde(default)]
    pub grace_period_seconds: i32,
}

/// Upgrade strategy of a group
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveUpgradeStrategy {
    /// Strategy type
    #[serde(default, rename = "type")]
    pub strategy_type: RisingWaveUpgradeStrategyType,

    /// Parameters of the RollingUpdate type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling_update: Option<RisingWaveRollingUpdate>,

    /// Parameters of the in-place types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_place_update_strategy: Option<InPlaceUpdateStrategy>,
}

/// A named group of meta, frontend or compactor nodes
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveComponentGroup {
    /// Group name, unique within the component
    pub name: String,

    /// Replicas of the group
    #[serde(default)]
    pub replicas: i32,

    /// Upgrade strategy of the group
    #[serde(default)]
    pub upgrade_strategy: RisingWaveUpgradeStrategy,

    /// Pod overrides of the group; the global template applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<RisingWaveComponentGroupTemplate>,
}

/// Pod overrides of a compute group
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveComputeGroupTemplate {
    /// Common pod overrides
    #[serde(flatten)]
    pub template: RisingWaveComponentGroupTemplate,

    /// Volume mounts of the compute container, referencing `storages.pvcTemplates`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volume_mounts: Vec<VolumeMount>,
}

/// A named group of compute nodes
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveComputeGroup {
    /// Group name, unique within the component
    pub name: String,

    /// Replicas of the group
    #[serde(default)]
    pub replicas: i32,

    /// Upgrade strategy of the group
    #[serde(default)]
    pub upgrade_strategy: RisingWaveUpgradeStrategy,

    /// Pod overrides of the group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<RisingWaveComputeGroupTemplate>,
}

/// Meta, frontend or compactor component
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveComponent {
    /// Restart every pod of the component created before this time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_at: Option<Time>,

    /// Named groups
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<RisingWaveComponentGroup>,
}

/// Compute component
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveComputeComponent {
    /// Restart every pod of the component created before this time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_at: Option<Time>,

    /// Named groups
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<RisingWaveComputeGroup>,
}

/// All components of a cluster
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveComponentsSpec {
    /// Meta nodes
    #[serde(default)]
    pub meta: RisingWaveComponent,

    /// Frontend nodes
    #[serde(default)]
    pub frontend: RisingWaveComponent,

    /// Compute nodes
    #[serde(default)]
    pub compute: RisingWaveComputeComponent,

    /// Compactor nodes
    #[serde(default)]
    pub compactor: RisingWaveComponent,
}
