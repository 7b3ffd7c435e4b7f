//! Meta store backend (v1alpha2)

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Meta store backend: exactly one of memory or etcd
///
/// Serialized with the branch name as the only key, e.g. `{"etcd": {...}}`,
/// the same wire shape as a struct of optional branches with one branch set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub enum RisingWaveMetaStoreBackend {
    /// In-memory meta store, test only
    #[serde(rename = "memory")]
    Memory(bool),

    /// Etcd meta store
    #[serde(rename = "etcd")]
    Etcd(RisingWaveMetaStoreBackendEtcd),
}

impl RisingWaveMetaStoreBackend {
    /// Discriminant of the backend, as reported in the status.
    pub fn backend_type(&self) -> RisingWaveMetaStoreBackendType {
        match self {
            Self::Memory(_) => RisingWaveMetaStoreBackendType::Memory,
            Self::Etcd(_) => RisingWaveMetaStoreBackendType::Etcd,
        }
    }
}

/// Etcd endpoints and optional credentials
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveMetaStoreBackendEtcd {
    /// Credentials from a Secret; absent when etcd is accessed without authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<RisingWaveEtcdCredentials>,

    /// Endpoints of the etcd service, comma separated, without scheme
    pub endpoints: String,
}

/// Secret keys holding the etcd username and password
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveEtcdCredentials {
    /// Name of the Secret in the namespace of the pods
    pub secret_name: String,

    /// Key of the username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_key_ref: Option<String>,

    /// Key of the password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_key_ref: Option<String>,
}

/// Meta store backend discriminant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub enum RisingWaveMetaStoreBackendType {
    /// In-memory
    Memory,

    /// Etcd
    Etcd,
}

/// Observed meta store
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveMetaStoreStatus {
    /// Backend type; absent when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<RisingWaveMetaStoreBackendType>,
}
