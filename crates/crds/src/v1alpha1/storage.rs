//! Storage backends (v1alpha1)
//!
//! Every backend is a struct of optional branches. Nothing in the wire format
//! prevents more than one branch from being set; callers decide how to treat
//! that.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::PersistentVolumeClaim;

/// Storages of a RisingWave cluster
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveStoragesSpec {
    /// Meta storage
    #[serde(default)]
    pub meta: RisingWaveMetaStorage,

    /// Object storage
    #[serde(default)]
    pub object: RisingWaveObjectStorage,

    /// Persistent volume claim templates usable by compute nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pvc_templates: Vec<PersistentVolumeClaim>,
}

/// Meta storage backend, one of memory or etcd
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveMetaStorage {
    /// In-memory meta store, test only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<bool>,

    /// Etcd meta store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etcd: Option<RisingWaveEtcdConfig>,
}

/// Etcd endpoint and credentials
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveEtcdConfig {
    /// Endpoints of the etcd service, comma separated, without scheme
    pub endpoint: String,

    /// Secret holding `username` and `password`, if the etcd requires authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Object storage backend
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveObjectStorage {
    /// In-memory state store, test only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<bool>,

    /// MinIO state store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minio: Option<RisingWaveObjectStorageMinIO>,

    /// AWS S3 or S3-compatible state store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<RisingWaveObjectStorageS3>,

    /// Aliyun OSS state store
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "aliyunOSS")]
    #[schemars(rename = "aliyunOSS")]
    pub aliyun_oss: Option<RisingWaveObjectStorageAliyunOSS>,

    /// HDFS state store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdfs: Option<RisingWaveObjectStorageHDFS>,

    /// Google Cloud Storage state store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcs: Option<RisingWaveObjectStorageGCS>,
}

/// MinIO endpoint, bucket and credentials
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveObjectStorageMinIO {
    /// Secret holding `username` and `password`
    pub secret: String,

    /// Endpoint of the MinIO service, without scheme
    pub endpoint: String,

    /// Bucket name
    pub bucket: String,
}

/// S3 bucket, optionally behind a custom S3-compatible endpoint
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveObjectStorageS3 {
    /// Secret holding `AccessKeyID` and `SecretAccessKey`
    pub secret: String,

    /// Bucket name
    pub bucket: String,

    /// Region of the bucket
    #[serde(default)]
    pub region: String,

    /// Custom endpoint; empty means AWS S3
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint: String,

    /// Address the bucket in the host name instead of the path
    #[serde(default)]
    pub virtual_hosted_style: bool,
}

/// Aliyun OSS bucket and credentials
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveObjectStorageAliyunOSS {
    /// Secret holding `AccessKeyID` and `SecretAccessKey`
    pub secret: String,

    /// Bucket name
    pub bucket: String,

    /// Region of the bucket
    pub region: String,

    /// Use the VPC-internal endpoint of the region
    #[serde(default)]
    pub internal_endpoint: bool,
}

/// HDFS name node and working directory
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveObjectStorageHDFS {
    /// Name node address
    pub name_node: String,

    /// Root of the working directory
    pub root: String,
}

/// GCS bucket and credentials
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RisingWaveObjectStorageGCS {
    /// Use workload identity instead of a service account secret
    #[serde(default)]
    pub use_workload_identity: bool,

    /// Secret holding `ServiceAccountCredentials`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secret: String,

    /// Bucket name
    pub bucket: String,

    /// Root of the working directory
    pub root: String,
}
