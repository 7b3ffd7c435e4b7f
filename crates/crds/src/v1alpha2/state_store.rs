//! State store backend (v1alpha2)

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::meta_store::RisingWaveMetaStoreBackendEtcd;

/// State store backend: exactly one branch
///
/// AWS S3 with the default endpoint is `s3`; every other S3-speaking service
/// (custom endpoints, virtual-hosted buckets, Aliyun OSS) is `s3c`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub enum RisingWaveStateStoreBackend {
    /// In-memory state store, test only
    #[serde(rename = "memory")]
    Memory(bool),

    /// Etcd-backed state store
    #[serde(rename = "etcd")]
    Etcd(RisingWaveMetaStoreBackendEtcd),

    /// MinIO
    #[serde(rename = "minio")]
    MinIO(RisingWaveStateStoreBackendMinIO),

    /// AWS S3
    #[serde(rename = "s3")]
    S3(RisingWaveStateStoreBackendS3),

    /// S3-compatible service
    #[serde(rename = "s3c")]
    S3Compatible(RisingWaveStateStoreBackendS3C),

    /// HDFS
    #[serde(rename = "hdfs")]
    HDFS(RisingWaveStateStoreBackendHDFS),

    /// Google Cloud Storage
    #[serde(rename = "gcs")]
    GCS(RisingWaveStateStoreBackendGCS),
}

impl RisingWaveStateStoreBackend {
    /// Discriminant of the backend, as reported in the status.
    pub fn backend_type(&self) -> RisingWaveStateStoreBackendType {
        match self {
            Self::Memory(_) => RisingWaveStateStoreBackendType::Memory,
            Self::Etcd(_) => RisingWaveStateStoreBackendType::Etcd,
            Self::MinIO(_) => RisingWaveStateStoreBackendType::MinIO,
            Self::S3(_) => RisingWaveStateStoreBackendType::S3,
            Self::S3Compatible(_) => RisingWaveStateStoreBackendType::S3Compatible,
            Self::HDFS(_) => RisingWaveStateStoreBackendType::HDFS,
            Self::GCS(_) => RisingWaveStateStoreBackendType::GCS,
        }
    }
}

/// Secret keys holding the MinIO username and password
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveMinIOCredentials {
    /// Name of the Secret in the namespace of the pods
    pub secret_name: String,

    /// Key of the username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_key_ref: Option<String>,

    /// Key of the password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_key_ref: Option<String>,
}

/// MinIO endpoint and bucket
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveStateStoreBackendMinIO {
    /// Credentials from a Secret
    pub credentials: RisingWaveMinIOCredentials,

    /// Endpoint of the MinIO service, without scheme
    pub endpoint: String,

    /// Bucket name
    pub bucket: String,
}

/// Secret keys holding the S3 access key pair
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveS3Credentials {
    /// Name of the Secret in the namespace of the pods
    pub secret_name: String,

    /// Key of the access key ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_ref: Option<String>,

    /// Key of the secret access key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key_ref: Option<String>,
}

/// AWS S3 bucket
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveStateStoreBackendS3 {
    /// Credentials from a Secret
    pub credentials: RisingWaveS3Credentials,

    /// Region of the bucket
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,

    /// Bucket name
    pub bucket: String,

    /// Prefix of the stored objects
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data_directory: String,
}

/// S3-compatible bucket
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveStateStoreBackendS3C {
    /// Credentials from a Secret
    pub credentials: RisingWaveS3Credentials,

    /// Endpoint of the service. May start with `http://` or `https://` (the
    /// default) and may contain the `${BUCKET}` and `${REGION}` placeholders,
    /// which the nodes substitute at runtime.
    pub endpoint: String,

    /// Region of the bucket
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,

    /// Bucket name
    pub bucket: String,

    /// Prefix of the stored objects
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data_directory: String,
}

/// HDFS name node and working directory
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveStateStoreBackendHDFS {
    /// Name node address
    pub name_node: String,

    /// Root of the working directory
    pub root: String,
}

/// Credentials of a GCS bucket
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveGCSCredentials {
    /// Use workload identity (ADC) instead of a Secret
    #[serde(default)]
    pub use_workload_identity: bool,

    /// Name of the Secret in the namespace of the pods
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secret_name: String,

    /// Key of the service account credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_credentials_key_ref: Option<String>,
}

/// GCS bucket
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveStateStoreBackendGCS {
    /// Credentials
    #[serde(default)]
    pub credentials: RisingWaveGCSCredentials,

    /// Bucket name
    pub bucket: String,

    /// Root of the working directory
    pub root: String,
}

/// State store backend discriminant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub enum RisingWaveStateStoreBackendType {
    /// In-memory
    Memory,

    /// Etcd
    Etcd,

    /// MinIO
    MinIO,

    /// AWS S3
    S3,

    /// S3-compatible service
    #[serde(rename = "S3c")]
    S3Compatible,

    /// HDFS
    HDFS,

    /// HDFS over the WebHDFS REST API
    WebHDFS,

    /// Google Cloud Storage
    GCS,
}

/// Observed state store
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveStateStoreStatus {
    /// Backend type; absent when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<RisingWaveStateStoreBackendType>,
}
