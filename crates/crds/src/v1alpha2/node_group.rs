//! Components and node groups (v1alpha2)

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{
    Affinity, EnvFromSource, EnvVar, LocalObjectReference, PodDNSConfig, PodSecurityContext,
    ResourceRequirements, Toleration, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::PersistentVolumeClaim;

/// A RisingWave component: a flat list of node groups
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveComponent {
    /// Log level of the nodes (e.g. `INFO`, `DEBUG`)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub log_level: String,

    /// Node groups; the group with the empty name is the default group
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub node_groups: Vec<RisingWaveNodeGroup>,
}

impl RisingWaveComponent {
    /// The default node group, if present.
    pub fn default_node_group(&self) -> Option<&RisingWaveNodeGroup> {
        self.node_groups.iter().find(|ng| ng.name.is_empty())
    }

    /// Looks up a named node group.
    pub fn node_group(&self, name: &str) -> Option<&RisingWaveNodeGroup> {
        self.node_groups.iter().find(|ng| ng.name == name)
    }
}

/// A node group: pods sharing one replica count and one set of overrides
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveNodeGroup {
    /// Group name, unique within the component; empty for the default group
    #[serde(default)]
    pub name: String,

    /// Replicas of the group
    #[serde(default)]
    pub replicas: i32,

    /// Upgrade strategy of the group
    #[serde(default)]
    pub upgrade_strategy: RisingWaveNodeGroupUpgradeStrategy,

    /// Restart every pod of the group created before this time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_at: Option<Time>,

    /// Pod template of the group
    #[serde(default)]
    pub template: RisingWaveNodePodTemplate,

    /// Persistent volume claim templates of the group
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volume_claim_templates: Vec<PersistentVolumeClaim>,
}

/// Upgrade strategy type of a node group. Unrecognized values deserialize as `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub enum RisingWaveNodeGroupUpgradeStrategyType {
    /// Kill all pods, then create new ones
    Recreate,

    /// Replace pods one after another
    #[default]
    RollingUpdate,

    /// Update in place when possible, recreate otherwise
    InPlaceIfPossible,

    /// Only update in place
    InPlaceOnly,

    /// Unrecognized strategy
    #[serde(other)]
    Unknown,
}

/// Rolling update parameters of a node group
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveNodeGroupRollingUpdate {
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

/// In-place update parameters of a node group
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveInPlaceUpdateStrategy {
    /// Seconds between marking a pod not-ready and updating it in place
    #[serde(default)]
    pub grace_period_seconds: i32,
}

/// Upgrade strategy of a node group. Only the parameters matching the type
/// are meaningful.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveNodeGroupUpgradeStrategy {
    /// Strategy type
    #[serde(default, rename = "type")]
    pub strategy_type: RisingWaveNodeGroupUpgradeStrategyType,

    /// Parameters of the RollingUpdate type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling_update: Option<RisingWaveNodeGroupRollingUpdate>,

    /// Parameters of the in-place types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_place_update_strategy: Option<RisingWaveInPlaceUpdateStrategy>,
}

/// Pod template of a node group
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveNodePodTemplate {
    /// Container image; the spec-level image applies when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,

    /// Image pull policy (Always, IfNotPresent, Never)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,

    /// Image pull secrets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_pull_secrets: Vec<LocalObjectReference>,

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

    /// Labels of the pods
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Annotations of the pods
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

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

    /// Volume mounts of the container
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volume_mounts: Vec<VolumeMount>,
}
