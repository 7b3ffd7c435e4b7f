//! Storage backend union mapping.
//!
//! The old schema stores each backend as a struct of optional branches, the
//! new one as a tagged union. Mapping first collects the populated branches
//! into a closed enumeration, picks one according to the conversion mode and
//! then converts that branch alone.

use risingwave_crds::v1alpha1::{
    RisingWaveEtcdConfig, RisingWaveMetaStorage, RisingWaveObjectStorage,
    RisingWaveObjectStorageAliyunOSS, RisingWaveObjectStorageGCS, RisingWaveObjectStorageHDFS,
    RisingWaveObjectStorageMinIO, RisingWaveObjectStorageS3,
};
use risingwave_crds::v1alpha2::{
    RisingWaveEtcdCredentials, RisingWaveGCSCredentials, RisingWaveMetaStoreBackend,
    RisingWaveMetaStoreBackendEtcd, RisingWaveMinIOCredentials, RisingWaveS3Credentials,
    RisingWaveStateStoreBackend, RisingWaveStateStoreBackendGCS, RisingWaveStateStoreBackendHDFS,
    RisingWaveStateStoreBackendMinIO, RisingWaveStateStoreBackendS3,
    RisingWaveStateStoreBackendS3C,
};
use tracing::{debug, warn};

use crate::config::ConversionMode;
use crate::error::ConversionError;

/// Endpoint template of Aliyun OSS
pub const ALIYUN_OSS_ENDPOINT: &str = "${BUCKET}.oss-${REGION}.aliyuncs.com";

/// Endpoint template of Aliyun OSS from inside the region's VPC
pub const INTERNAL_ALIYUN_OSS_ENDPOINT: &str = "${BUCKET}.oss-${REGION}-internal.aliyuncs.com";

/// Placeholder the nodes replace with the bucket name
pub const BUCKET_PLACEHOLDER: &str = "${BUCKET}";

const HTTPS_SCHEME: &str = "https://";

const USERNAME_KEY: &str = "username";
const PASSWORD_KEY: &str = "password";
const ACCESS_KEY_ID_KEY: &str = "AccessKeyID";
const SECRET_ACCESS_KEY_KEY: &str = "SecretAccessKey";
const SERVICE_ACCOUNT_CREDENTIALS_KEY: &str = "ServiceAccountCredentials";

/// A populated union branch, named for error messages and logs.
trait Branch {
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy)]
enum MetaStoreBranch<'a> {
    Memory,
    Etcd(&'a RisingWaveEtcdConfig),
}

impl Branch for MetaStoreBranch<'_> {
    fn name(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Etcd(_) => "etcd",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StateStoreBranch<'a> {
    Memory,
    MinIO(&'a RisingWaveObjectStorageMinIO),
    S3(&'a RisingWaveObjectStorageS3),
    AliyunOSS(&'a RisingWaveObjectStorageAliyunOSS),
    HDFS(&'a RisingWaveObjectStorageHDFS),
    GCS(&'a RisingWaveObjectStorageGCS),
}

impl Branch for StateStoreBranch<'_> {
    fn name(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::MinIO(_) => "minio",
            Self::S3(_) => "s3",
            Self::AliyunOSS(_) => "aliyunOSS",
            Self::HDFS(_) => "hdfs",
            Self::GCS(_) => "gcs",
        }
    }
}

/// Populated branches in evaluation order. `memory: false` is not a branch.
fn meta_store_branches(src: &RisingWaveMetaStorage) -> Vec<MetaStoreBranch<'_>> {
    let mut branches = Vec::new();
    if src.memory == Some(true) {
        branches.push(MetaStoreBranch::Memory);
    }
    if let Some(etcd) = &src.etcd {
        branches.push(MetaStoreBranch::Etcd(etcd));
    }
    branches
}

fn state_store_branches(src: &RisingWaveObjectStorage) -> Vec<StateStoreBranch<'_>> {
    let mut branches = Vec::new();
    if src.memory == Some(true) {
        branches.push(StateStoreBranch::Memory);
    }
    if let Some(minio) = &src.minio {
        branches.push(StateStoreBranch::MinIO(minio));
    }
    if let Some(s3) = &src.s3 {
        branches.push(StateStoreBranch::S3(s3));
    }
    if let Some(oss) = &src.aliyun_oss {
        branches.push(StateStoreBranch::AliyunOSS(oss));
    }
    if let Some(hdfs) = &src.hdfs {
        branches.push(StateStoreBranch::HDFS(hdfs));
    }
    if let Some(gcs) = &src.gcs {
        branches.push(StateStoreBranch::GCS(gcs));
    }
    branches
}

/// Picks the branch to convert. Several branches are an error in strict mode;
/// in compatible mode later branches overwrite earlier ones.
fn select_branch<B: Branch>(
    store: &'static str,
    mut branches: Vec<B>,
    mode: ConversionMode,
) -> Result<Option<B>, ConversionError> {
    if branches.len() > 1 {
        let names = branches.iter().map(Branch::name).collect::<Vec<_>>().join(", ");
        if mode.is_strict() {
            return Err(ConversionError::AmbiguousBackend {
                store,
                branches: names,
            });
        }
        warn!("{} has more than one backend set ({}), keeping the last one", store, names);
    }
    Ok(branches.pop())
}

/// Converts the meta storage. `Ok(None)` means no backend is set.
pub fn convert_meta_store(
    src: &RisingWaveMetaStorage,
    mode: ConversionMode,
) -> Result<Option<RisingWaveMetaStoreBackend>, ConversionError> {
    let Some(branch) = select_branch("meta store", meta_store_branches(src), mode)? else {
        debug!("No meta store backend set");
        return Ok(None);
    };
    debug!("Converting {} meta store", branch.name());

    let backend = match branch {
        MetaStoreBranch::Memory => RisingWaveMetaStoreBackend::Memory(true),
        MetaStoreBranch::Etcd(etcd) => RisingWaveMetaStoreBackend::Etcd(convert_etcd(etcd)),
    };
    Ok(Some(backend))
}

fn convert_etcd(src: &RisingWaveEtcdConfig) -> RisingWaveMetaStoreBackendEtcd {
    RisingWaveMetaStoreBackendEtcd {
        credentials: src
            .secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .map(|secret| RisingWaveEtcdCredentials {
                secret_name: secret.to_string(),
                username_key_ref: Some(USERNAME_KEY.to_string()),
                password_key_ref: Some(PASSWORD_KEY.to_string()),
            }),
        endpoints: src.endpoint.clone(),
    }
}

/// Converts the object storage. `Ok(None)` means no backend is set.
pub fn convert_state_store(
    src: &RisingWaveObjectStorage,
    mode: ConversionMode,
) -> Result<Option<RisingWaveStateStoreBackend>, ConversionError> {
    let Some(branch) = select_branch("state store", state_store_branches(src), mode)? else {
        debug!("No state store backend set");
        return Ok(None);
    };
    debug!("Converting {} state store", branch.name());

    let backend = match branch {
        StateStoreBranch::Memory => RisingWaveStateStoreBackend::Memory(true),
        StateStoreBranch::MinIO(minio) => RisingWaveStateStoreBackend::MinIO(convert_minio(minio)),
        StateStoreBranch::S3(s3) => convert_s3(s3, mode)?,
        StateStoreBranch::AliyunOSS(oss) => {
            RisingWaveStateStoreBackend::S3Compatible(convert_aliyun_oss(oss))
        }
        StateStoreBranch::HDFS(hdfs) => RisingWaveStateStoreBackend::HDFS(
            RisingWaveStateStoreBackendHDFS {
                name_node: hdfs.name_node.clone(),
                root: hdfs.root.clone(),
            },
        ),
        StateStoreBranch::GCS(gcs) => RisingWaveStateStoreBackend::GCS(convert_gcs(gcs)),
    };
    Ok(Some(backend))
}

fn convert_minio(src: &RisingWaveObjectStorageMinIO) -> RisingWaveStateStoreBackendMinIO {
    RisingWaveStateStoreBackendMinIO {
        credentials: RisingWaveMinIOCredentials {
            secret_name: src.secret.clone(),
            username_key_ref: Some(USERNAME_KEY.to_string()),
            password_key_ref: Some(PASSWORD_KEY.to_string()),
        },
        endpoint: src.endpoint.clone(),
        bucket: src.bucket.clone(),
    }
}

fn s3_credentials(secret: &str) -> RisingWaveS3Credentials {
    RisingWaveS3Credentials {
        secret_name: secret.to_string(),
        access_key_ref: Some(ACCESS_KEY_ID_KEY.to_string()),
        secret_access_key_ref: Some(SECRET_ACCESS_KEY_KEY.to_string()),
    }
}

/// S3 without an endpoint is AWS S3; with one it is an S3-compatible service.
fn convert_s3(
    src: &RisingWaveObjectStorageS3,
    mode: ConversionMode,
) -> Result<RisingWaveStateStoreBackend, ConversionError> {
    if src.endpoint.is_empty() {
        if src.virtual_hosted_style {
            if mode.is_strict() {
                return Err(ConversionError::VirtualHostedWithoutEndpoint {
                    bucket: src.bucket.clone(),
                });
            }
            warn!(
                "S3 bucket {} requests virtual-hosted style without an endpoint, ignoring the flag",
                src.bucket
            );
        }
        return Ok(RisingWaveStateStoreBackend::S3(RisingWaveStateStoreBackendS3 {
            credentials: s3_credentials(&src.secret),
            region: src.region.clone(),
            bucket: src.bucket.clone(),
            data_directory: String::new(),
        }));
    }

    let endpoint = if src.virtual_hosted_style {
        if mode.is_strict() && has_foreign_scheme(&src.endpoint) {
            return Err(ConversionError::VirtualHostedEndpointScheme {
                endpoint: src.endpoint.clone(),
            });
        }
        virtual_hosted_endpoint(&src.endpoint)
    } else {
        src.endpoint.clone()
    };

    Ok(RisingWaveStateStoreBackend::S3Compatible(RisingWaveStateStoreBackendS3C {
        credentials: s3_credentials(&src.secret),
        endpoint,
        region: src.region.clone(),
        bucket: src.bucket.clone(),
        data_directory: String::new(),
    }))
}

fn has_foreign_scheme(endpoint: &str) -> bool {
    endpoint.contains("://") && !endpoint.starts_with(HTTPS_SCHEME)
}

/// Turns a path-style endpoint into a virtual-hosted one by prefixing the
/// host with the bucket placeholder, keeping an `https://` scheme in front.
///
/// The placeholder is always followed by a `.`, so a host given with a
/// leading `.` loses it. Any scheme other than `https://` is treated as part
/// of the host: `http://h` becomes `${BUCKET}.http://h`, which strict mode
/// rejects before calling this.
///
/// ```
/// use risingwave_conversion::storage::virtual_hosted_endpoint;
///
/// assert_eq!(virtual_hosted_endpoint("https://s3.example.com"), "https://${BUCKET}.s3.example.com");
/// assert_eq!(virtual_hosted_endpoint("s3.example.com"), "${BUCKET}.s3.example.com");
/// assert_eq!(virtual_hosted_endpoint(".s3.example.com"), "${BUCKET}.s3.example.com");
/// assert_eq!(virtual_hosted_endpoint("http://s3.example.com"), "${BUCKET}.http://s3.example.com");
/// ```
pub fn virtual_hosted_endpoint(endpoint: &str) -> String {
    let (scheme, host) = match endpoint.strip_prefix(HTTPS_SCHEME) {
        Some(host) => (HTTPS_SCHEME, host),
        None => ("", endpoint),
    };
    let host = host.strip_prefix('.').unwrap_or(host);
    format!("{scheme}{BUCKET_PLACEHOLDER}.{host}")
}

/// Endpoint template of an Aliyun OSS bucket.
pub fn aliyun_oss_endpoint(internal: bool) -> &'static str {
    if internal {
        INTERNAL_ALIYUN_OSS_ENDPOINT
    } else {
        ALIYUN_OSS_ENDPOINT
    }
}

fn convert_aliyun_oss(src: &RisingWaveObjectStorageAliyunOSS) -> RisingWaveStateStoreBackendS3C {
    RisingWaveStateStoreBackendS3C {
        credentials: s3_credentials(&src.secret),
        endpoint: aliyun_oss_endpoint(src.internal_endpoint).to_string(),
        region: src.region.clone(),
        bucket: src.bucket.clone(),
        data_directory: String::new(),
    }
}

fn convert_gcs(src: &RisingWaveObjectStorageGCS) -> RisingWaveStateStoreBackendGCS {
    let has_secret = !src.secret.is_empty();
    RisingWaveStateStoreBackendGCS {
        credentials: RisingWaveGCSCredentials {
            use_workload_identity: src.use_workload_identity,
            secret_name: src.secret.clone(),
            service_account_credentials_key_ref: has_secret
                .then(|| SERVICE_ACCOUNT_CREDENTIALS_KEY.to_string()),
        },
        bucket: src.bucket.clone(),
        root: src.root.clone(),
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
