//! End-to-end conversion of RisingWave documents

use risingwave_conversion::{
    ConversionError, ConversionMode, ConversionOptions, convert_backward, convert_document,
    convert_forward, hub_api_version, legacy_api_version,
};
use risingwave_crds::v1alpha2::{
    RisingWaveMetaStoreBackend, RisingWaveMetaStoreBackendType, RisingWaveNodeGroupUpgradeStrategyType,
    RisingWaveStateStoreBackend, RisingWaveStateStoreBackendType,
};
use risingwave_crds::{v1alpha1, v1alpha2};
use serde_json::{Value, json};

const FIXTURE: &str = include_str!("fixtures/risingwave-v1alpha1.yaml");

fn load_fixture() -> v1alpha1::RisingWave {
    serde_yaml::from_str(FIXTURE).unwrap()
}

fn fixture_document() -> Value {
    serde_yaml::from_str(FIXTURE).unwrap()
}

#[test]
fn test_forward_conversion_of_fixture() {
    let src = load_fixture();
    let rw = convert_forward(&src, &ConversionOptions::default()).unwrap();

    assert_eq!(rw.metadata, src.metadata);

    let spec = &rw.spec;
    assert_eq!(spec.use_kruise_workloads, Some(true));
    assert_eq!(spec.sync_prometheus_service_monitor, Some(false));
    assert_eq!(spec.frontend_service_type.as_deref(), Some("NodePort"));
    assert_eq!(
        spec.additional_frontend_service_metadata.labels.get("exposure").map(String::as_str),
        Some("public")
    );
    assert_eq!(spec.image, "ghcr.io/risingwavelabs/risingwave:v1.7.0");
    assert_eq!(spec.pod_template.image, spec.image);
    assert_eq!(spec.pod_template.image_pull_secrets.len(), 1);

    let config_map = spec.configuration.config_map.as_ref().unwrap();
    assert_eq!(config_map.name, "risingwave-config");
    assert_eq!(config_map.key, "risingwave.toml");

    match spec.meta_store.as_ref().unwrap() {
        RisingWaveMetaStoreBackend::Etcd(etcd) => {
            assert_eq!(etcd.endpoints, "etcd-client:2379");
            let credentials = etcd.credentials.as_ref().unwrap();
            assert_eq!(credentials.secret_name, "etcd-credentials");
        }
        other => panic!("unexpected meta store {other:?}"),
    }

    match spec.state_store.as_ref().unwrap() {
        RisingWaveStateStoreBackend::S3Compatible(s3c) => {
            assert_eq!(s3c.endpoint, "https://${BUCKET}.s3.example.com");
            assert_eq!(s3c.bucket, "hummock");
            assert_eq!(s3c.region, "us-east-1");
            assert_eq!(s3c.credentials.secret_name, "s3-credentials");
        }
        other => panic!("unexpected state store {other:?}"),
    }
}

#[test]
fn test_forward_conversion_expands_components() {
    let rw = convert_forward(&load_fixture(), &ConversionOptions::default()).unwrap();

    let names = |component: &v1alpha2::RisingWaveComponent| {
        component
            .node_groups
            .iter()
            .map(|g| (g.name.clone(), g.replicas))
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&rw.spec.meta_component), vec![("ha".to_string(), 2), (String::new(), 1)]);
    assert_eq!(names(&rw.spec.compactor_component), vec![(String::new(), 1)]);
    assert_eq!(
        names(&rw.spec.compute_component),
        vec![("cached".to_string(), 4), ("plain".to_string(), 1), (String::new(), 2)]
    );

    let frontend = &rw.spec.frontend_component;
    assert_eq!(frontend.node_groups.len(), 2);
    for group in &frontend.node_groups {
        assert!(group.restart_at.is_some(), "group {:?} lost restartAt", group.name);
    }
    assert_eq!(
        frontend.node_group("serving").unwrap().upgrade_strategy.strategy_type,
        RisingWaveNodeGroupUpgradeStrategyType::Recreate
    );

    let compute = &rw.spec.compute_component;
    let cached = compute.node_group("cached").unwrap();
    assert_eq!(cached.template.volume_mounts.len(), 1);
    assert_eq!(cached.template.volume_mounts[0].mount_path, "/var/cache/risingwave");
    assert!(compute.node_group("plain").unwrap().template.volume_mounts.is_empty());
    for group in &compute.node_groups {
        assert_eq!(group.volume_claim_templates.len(), 1);
        assert_eq!(group.volume_claim_templates[0].metadata.name, "cache");
    }
    assert!(rw.spec.meta_component.node_groups.iter().all(|g| g.volume_claim_templates.is_empty()));

    for component in [
        &rw.spec.meta_component,
        &rw.spec.frontend_component,
        &rw.spec.compute_component,
        &rw.spec.compactor_component,
    ] {
        assert_eq!(component.log_level, "INFO");
    }
}

#[test]
fn test_forward_conversion_of_status() {
    let rw = convert_forward(&load_fixture(), &ConversionOptions::default()).unwrap();
    let status = rw.status.unwrap();

    assert_eq!(status.observed_generation, 3);
    assert_eq!(status.image_tag, "v1.7.0");
    assert_eq!(status.conditions.len(), 1);
    assert_eq!(status.conditions[0].condition_type, "Running");
    assert_eq!(status.meta_store.backend, Some(RisingWaveMetaStoreBackendType::Etcd));
    assert_eq!(status.state_store.backend, Some(RisingWaveStateStoreBackendType::S3));

    let total = status.compute_component.total;
    assert_eq!(
        (total.replicas, total.ready_replicas, total.available_replicas, total.updated_replicas, total.unavailable_replicas),
        (7, 5, 5, 5, 0)
    );
    assert_eq!(status.compute_component.node_groups[0].name, "cached");

    assert_eq!(status.scale_view_locks.len(), 1);
    let lock = &status.scale_view_locks[0];
    assert_eq!(lock.reference.name, "compute-view");
    assert_eq!(lock.reference.observed_generation, 2);
    assert_eq!(lock.ceiling("cached"), Some(4));
}

#[test]
fn test_forward_conversion_without_status() {
    let mut src = load_fixture();
    src.status = None;

    let rw = convert_forward(&src, &ConversionOptions::default()).unwrap();
    assert!(rw.status.is_none());
}

#[test]
fn test_strict_mode_rejects_ambiguous_storage() {
    let mut document = fixture_document();
    document["spec"]["storages"]["object"]["minio"] = json!({
        "secret": "minio-credentials",
        "endpoint": "minio:9000",
        "bucket": "hummock",
    });
    let src: v1alpha1::RisingWave = serde_json::from_value(document).unwrap();

    let err = convert_forward(&src, &ConversionOptions::default()).unwrap_err();
    match err {
        ConversionError::AmbiguousBackend { store, branches } => {
            assert_eq!(store, "state store");
            assert!(branches.contains("minio") && branches.contains("s3"), "{branches}");
        }
        other => panic!("unexpected error {other:?}"),
    }

    let options = ConversionOptions::compatible();
    assert_eq!(options.mode, ConversionMode::Compatible);
    let rw = convert_forward(&src, &options).unwrap();
    assert!(rw.spec.state_store.is_some());
}

#[test]
fn test_backward_conversion_is_unsupported() {
    let rw = convert_forward(&load_fixture(), &ConversionOptions::default()).unwrap();

    let err = convert_backward(&rw).unwrap_err();
    match err {
        ConversionError::Unsupported { from, to } => {
            assert_eq!(from, hub_api_version());
            assert_eq!(to, legacy_api_version());
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_convert_document_dispatch() {
    let options = ConversionOptions::default();
    let hub = hub_api_version();

    let converted = convert_document(fixture_document(), &hub, &options).unwrap();
    assert_eq!(converted["apiVersion"], json!(hub));
    assert_eq!(converted["kind"], json!("RisingWave"));
    assert_eq!(converted["metadata"]["name"], json!("risingwave-s3c"));
    assert_eq!(converted["spec"]["stateStore"]["s3c"]["bucket"], json!("hummock"));
    assert_eq!(converted["spec"]["metaStore"]["etcd"]["endpoints"], json!("etcd-client:2379"));

    // Same version passes through untouched.
    let again = convert_document(converted.clone(), &hub, &options).unwrap();
    assert_eq!(again, converted);
    let legacy = convert_document(fixture_document(), &legacy_api_version(), &options).unwrap();
    assert_eq!(legacy, fixture_document());

    assert!(matches!(
        convert_document(converted, &legacy_api_version(), &options),
        Err(ConversionError::Unsupported { .. })
    ));
}

#[test]
fn test_convert_document_rejects_unknown_versions() {
    let options = ConversionOptions::default();

    let mut document = fixture_document();
    document["apiVersion"] = json!("risingwave.risingwavelabs.com/v1beta1");
    match convert_document(document, &hub_api_version(), &options) {
        Err(ConversionError::UnknownApiVersion(version)) => {
            assert_eq!(version, "risingwave.risingwavelabs.com/v1beta1");
        }
        other => panic!("unexpected result {other:?}"),
    }

    assert!(matches!(
        convert_document(fixture_document(), "apps/v1", &options),
        Err(ConversionError::UnknownApiVersion(_))
    ));
}

#[test]
fn test_convert_document_tolerates_unrecognized_enum_values() {
    let mut document = fixture_document();
    document["spec"]["components"]["frontend"]["groups"][0]["upgradeStrategy"]["type"] = json!("Canary");
    document["status"]["conditions"][0]["status"] = json!("Maybe");

    let converted = convert_document(document, &hub_api_version(), &ConversionOptions::default()).unwrap();

    let groups = converted["spec"]["frontendComponent"]["nodeGroups"].as_array().unwrap();
    assert_eq!(groups[0]["name"], json!("serving"));
    assert_eq!(groups[0]["upgradeStrategy"]["type"], json!("Unknown"));
    assert_eq!(converted["status"]["conditions"][0]["status"], json!("Unknown"));
}
