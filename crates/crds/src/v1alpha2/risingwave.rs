//! RisingWave CRD (v1alpha2, hub version)

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::meta_store::RisingWaveMetaStoreBackend;
use super::node_group::{RisingWaveComponent, RisingWaveNodePodTemplate};
use super::state_store::RisingWaveStateStoreBackend;
use super::status::RisingWaveStatus;
use crate::common::PartialObjectMeta;

/// RisingWaveSpec defines the desired state of a RisingWave cluster
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[kube(
    group = "risingwave.risingwavelabs.com",
    version = "v1alpha2",
    kind = "RisingWave",
    shortname = "rw",
    namespaced,
    status = "RisingWaveStatus",
    derive = "PartialEq",
    derive = "Default",
    printcolumn = r#"{"name":"Image", "type":"string", "jsonPath":".spec.image"}"#,
    printcolumn = r#"{"name":"Meta Store", "type":"string", "jsonPath":".status.metaStore.backend"}"#,
    printcolumn = r#"{"name":"State Store", "type":"string", "jsonPath":".status.stateStore.backend"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveSpec {
    /// Run the nodes with OpenKruise workloads instead of Deployments and StatefulSets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_kruise_workloads: Option<bool>,

    /// Sync the default ServiceMonitor of the Prometheus Operator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_prometheus_service_monitor: Option<bool>,

    /// Service type of the frontend service (ClusterIP, NodePort, LoadBalancer)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend_service_type: Option<String>,

    /// Additional labels and annotations of the frontend service
    #[serde(default)]
    pub additional_frontend_service_metadata: PartialObjectMeta,

    /// Meta store backend; absent means unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_store: Option<RisingWaveMetaStoreBackend>,

    /// State store backend; absent means unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_store: Option<RisingWaveStateStoreBackend>,

    /// Image of the nodes
    #[serde(default)]
    pub image: String,

    /// Pod template applied to every node group
    #[serde(default)]
    pub pod_template: RisingWaveNodePodTemplate,

    /// Configuration source of the nodes
    #[serde(default)]
    pub configuration: RisingWaveNodeConfiguration,

    /// Meta nodes
    #[serde(default)]
    pub meta_component: RisingWaveComponent,

    /// Frontend nodes
    #[serde(default)]
    pub frontend_component: RisingWaveComponent,

    /// Compute nodes
    #[serde(default)]
    pub compute_component: RisingWaveComponent,

    /// Compactor nodes
    #[serde(default)]
    pub compactor_component: RisingWaveComponent,
}

/// Where the `risingwave.toml` of the nodes comes from
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveNodeConfiguration {
    /// ConfigMap holding the configuration file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_map: Option<RisingWaveNodeConfigurationConfigMapSource>,

    /// Secret holding the configuration file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<RisingWaveNodeConfigurationSecretSource>,

    /// Inline configuration file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// ConfigMap key selector for the configuration file
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveNodeConfigurationConfigMapSource {
    /// Name of the ConfigMap
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Key of the configuration file, `risingwave.toml` by convention
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,

    /// Whether the key may be absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

/// Secret key selector for the configuration file
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveNodeConfigurationSecretSource {
    /// Name of the Secret
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Key of the configuration file
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,

    /// Whether the key may be absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}
