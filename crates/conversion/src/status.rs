//! Status and condition translation.
//!
//! The legacy status only records target and running replicas, so the hub's
//! ready, available and updated counts all repeat the running count and
//! unavailable is always zero. Consumers of converted statuses must not read
//! those four fields as independent observations.

use risingwave_crds::v1alpha1::{
    ComponentGroupReplicasStatus, ComponentReplicasStatus, MetaStorageType, ObjectStorageType,
};
use risingwave_crds::{v1alpha1, v1alpha2};
use tracing::{debug, warn};

use crate::scale_view::{locks_to_v1alpha2, overlapping_claims};

/// Projects a target and a running count onto the hub replica counters.
pub fn collapse_replicas(target: i32, running: i32) -> v1alpha2::WorkloadReplicaStatus {
    v1alpha2::WorkloadReplicaStatus {
        replicas: target,
        ready_replicas: running,
        available_replicas: running,
        updated_replicas: running,
        unavailable_replicas: 0,
    }
}

fn convert_group_status(src: &ComponentGroupReplicasStatus) -> v1alpha2::RisingWaveNodeGroupStatus {
    v1alpha2::RisingWaveNodeGroupStatus {
        name: src.name.clone(),
        replicas: collapse_replicas(src.target, src.running),
        exists: src.exists,
    }
}

/// Converts the replicas of one component.
pub fn convert_component_status(src: &ComponentReplicasStatus) -> v1alpha2::RisingWaveComponentStatus {
    v1alpha2::RisingWaveComponentStatus {
        total: collapse_replicas(src.target, src.running),
        node_groups: src.groups.iter().map(convert_group_status).collect(),
    }
}

/// Copies a condition.
pub fn convert_condition(src: &v1alpha1::RisingWaveCondition) -> v1alpha2::RisingWaveCondition {
    v1alpha2::RisingWaveCondition {
        condition_type: src.condition_type.clone(),
        status: src.status,
        last_transition_time: src.last_transition_time.clone(),
        reason: src.reason.clone(),
        message: src.message.clone(),
    }
}

/// Meta store discriminant; `None` when the legacy type is unknown.
pub fn meta_store_backend_type(src: MetaStorageType) -> Option<v1alpha2::RisingWaveMetaStoreBackendType> {
    match src {
        MetaStorageType::Memory => Some(v1alpha2::RisingWaveMetaStoreBackendType::Memory),
        MetaStorageType::Etcd => Some(v1alpha2::RisingWaveMetaStoreBackendType::Etcd),
        MetaStorageType::Unknown => None,
    }
}

/// State store discriminant; `None` when the legacy type is unknown.
/// Aliyun OSS is served through the S3-compatible backend.
pub fn state_store_backend_type(src: ObjectStorageType) -> Option<v1alpha2::RisingWaveStateStoreBackendType> {
    use v1alpha2::RisingWaveStateStoreBackendType as Backend;

    match src {
        ObjectStorageType::Memory => Some(Backend::Memory),
        ObjectStorageType::MinIO => Some(Backend::MinIO),
        ObjectStorageType::S3 => Some(Backend::S3),
        ObjectStorageType::GCS => Some(Backend::GCS),
        ObjectStorageType::AliyunOSS => Some(Backend::S3Compatible),
        ObjectStorageType::HDFS => Some(Backend::HDFS),
        ObjectStorageType::Unknown => None,
    }
}

/// Converts a whole status. Never fails: unknown discriminants become unset.
pub fn convert_status(src: &v1alpha1::RisingWaveStatus) -> v1alpha2::RisingWaveStatus {
    let meta_backend = meta_store_backend_type(src.storages.meta.storage_type);
    let state_backend = state_store_backend_type(src.storages.object.storage_type);
    if meta_backend.is_none() || state_backend.is_none() {
        debug!(
            "Storage types not fully observed (meta: {:?}, object: {:?})",
            src.storages.meta.storage_type, src.storages.object.storage_type
        );
    }

    let scale_view_locks = locks_to_v1alpha2(&src.scale_views);
    for claim in overlapping_claims(&scale_view_locks) {
        warn!(
            "Node group {} of the {} component is locked more than once (scale views: {})",
            claim.group,
            claim.component,
            claim.scale_views.join(", ")
        );
    }

    v1alpha2::RisingWaveStatus {
        observed_generation: src.observed_generation,
        image_tag: src.version.clone(),
        conditions: src.conditions.iter().map(convert_condition).collect(),
        meta_store: v1alpha2::RisingWaveMetaStoreStatus {
            backend: meta_backend,
        },
        state_store: v1alpha2::RisingWaveStateStoreStatus {
            backend: state_backend,
        },
        meta_component: convert_component_status(&src.component_replicas.meta),
        frontend_component: convert_component_status(&src.component_replicas.frontend),
        compute_component: convert_component_status(&src.component_replicas.compute),
        compactor_component: convert_component_status(&src.component_replicas.compactor),
        scale_view_locks,
    }
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
