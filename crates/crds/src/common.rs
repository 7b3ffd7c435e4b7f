//! Types shared verbatim by both schema versions.

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::PersistentVolumeClaimSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Labels and annotations to be attached to a generated object.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PartialObjectMeta {
    /// Labels of the object
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Annotations of the object
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// Status of a condition, one of `True`, `False`, `Unknown`. Any other value
/// deserializes as `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
pub enum ConditionStatus {
    /// Condition holds
    True,

    /// Condition does not hold
    False,

    /// Condition state cannot be determined
    #[default]
    #[serde(other)]
    Unknown,
}

/// Metadata part of a persistent volume claim template.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistentVolumeClaimPartialObjectMeta {
    /// Name of the claim, also the name referenced by volume mounts
    #[serde(default)]
    pub name: String,

    /// Labels of the claim
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Annotations of the claim
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

    /// Finalizers of the claim
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub finalizers: Vec<String>,
}

/// Persistent volume claim template attached to stateful nodes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistentVolumeClaim {
    /// Claim metadata
    #[serde(default)]
    pub metadata: PersistentVolumeClaimPartialObjectMeta,

    /// Claim spec
    #[serde(default)]
    pub spec: PersistentVolumeClaimSpec,
}
