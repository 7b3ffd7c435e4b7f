//! RisingWave CRD (v1alpha1)

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::component::{RisingWaveComponentGroupTemplate, RisingWaveComponentsSpec};
use super::status::RisingWaveStatus;
use super::storage::RisingWaveStoragesSpec;
use crate::common::PartialObjectMeta;

/// RisingWaveSpec defines the desired state of a RisingWave cluster
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[kube(
    group = "risingwave.risingwavelabs.com",
    version = "v1alpha1",
    kind = "RisingWave",
    shortname = "rw",
    namespaced,
    status = "RisingWaveStatus",
    derive = "PartialEq",
    derive = "Default"
)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveSpec {
    /// Run the nodes with OpenKruise workloads instead of the builtin ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_open_kruise: Option<bool>,

    /// Sync the default Prometheus ServiceMonitor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_default_service_monitor: Option<bool>,

    /// Global settings: image, pod template defaults and default group replicas
    #[serde(default)]
    pub global: RisingWaveGlobalSpec,

    /// Meta and object storages plus persistent volume claim templates
    #[serde(default)]
    pub storages: RisingWaveStoragesSpec,

    /// Configuration source of the nodes
    #[serde(default)]
    pub configuration: RisingWaveConfigurationSpec,

    /// Per-component groups
    #[serde(default)]
    pub components: RisingWaveComponentsSpec,
}

/// Global settings shared by every component
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveGlobalSpec {
    /// Pod template of the default groups, including the global image
    #[serde(flatten)]
    pub template: RisingWaveComponentGroupTemplate,

    /// Replicas of the default group of each component
    #[serde(default)]
    pub replicas: RisingWaveGlobalReplicas,

    /// Service type of the frontend service (ClusterIP, NodePort, LoadBalancer)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,

    /// Additional metadata of the frontend service
    #[serde(default)]
    pub service_meta: PartialObjectMeta,
}

/// Replicas of the default group of each component
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveGlobalReplicas {
    /// Meta nodes
    #[serde(default)]
    pub meta: i32,

    /// Frontend nodes
    #[serde(default)]
    pub frontend: i32,

    /// Compute nodes
    #[serde(default)]
    pub compute: i32,

    /// Compactor nodes
    #[serde(default)]
    pub compactor: i32,
}

/// Where the `risingwave.toml` of the nodes comes from
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveConfigurationSpec {
    /// ConfigMap holding the configuration file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_map: Option<RisingWaveConfigurationConfigMapSource>,
}

/// ConfigMap key selector for the configuration file
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveConfigurationConfigMapSource {
    /// Name of the ConfigMap
    #[serde(default)]
    pub name: String,

    /// Key of the configuration file inside the ConfigMap
    #[serde(default)]
    pub key: String,

    /// Whether the key may be absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}
