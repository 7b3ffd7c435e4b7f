//! Unit tests for component expansion

use super::*;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use risingwave_crds::v1alpha1::{
    RisingWaveComputeGroupTemplate, RisingWaveRollingUpdate, RisingWaveUpgradeStrategyType,
};
use risingwave_crds::v1alpha2::{RisingWaveNodeGroupUpgradeStrategyType, RisingWaveNodePodTemplate};
use serde_json::json;

fn time(raw: &str) -> Time {
    serde_json::from_value(json!(raw)).unwrap()
}

fn group(name: &str, replicas: i32) -> RisingWaveComponentGroup {
    RisingWaveComponentGroup {
        name: name.to_string(),
        replicas,
        ..Default::default()
    }
}

fn mount(name: &str, path: &str) -> VolumeMount {
    VolumeMount {
        name: name.to_string(),
        mount_path: path.to_string(),
        ..Default::default()
    }
}

fn compute_group(name: &str, replicas: i32, mounts: Option<Vec<VolumeMount>>) -> RisingWaveComputeGroup {
    RisingWaveComputeGroup {
        name: name.to_string(),
        replicas,
        template: mounts.map(|volume_mounts| RisingWaveComputeGroupTemplate {
            volume_mounts,
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn test_named_groups_plus_default_group() {
    let src = SourceComponent {
        restart_at: None,
        groups: vec![group("g1", 3), group("g2", 5)],
    };

    let component =
        convert_component(ComponentKind::Frontend, 2, &src, &ConversionOptions::default()).unwrap();

    let groups: Vec<_> = component
        .node_groups
        .iter()
        .map(|ng| (ng.name.as_str(), ng.replicas))
        .collect();
    assert_eq!(groups, vec![("g1", 3), ("g2", 5), ("", 2)]);
    assert_eq!(component.default_node_group().map(|ng| ng.replicas), Some(2));
    assert_eq!(component.log_level, "INFO");
}

#[test]
fn test_default_group_only() {
    let component = convert_component(
        ComponentKind::Meta,
        1,
        &SourceComponent::default(),
        &ConversionOptions::default(),
    )
    .unwrap();

    assert_eq!(component.node_groups.len(), 1);
    let default_group = &component.node_groups[0];
    assert_eq!(default_group.name, "");
    assert_eq!(default_group.replicas, 1);
    assert_eq!(default_group.template, RisingWaveNodePodTemplate::default());
}

#[test]
fn test_restart_at_is_stamped_on_every_group() {
    let restart_at = time("2024-03-01T08:00:00Z");
    let src = SourceComponent {
        restart_at: Some(restart_at.clone()),
        groups: vec![group("g1", 1), group("g2", 1)],
    };

    let component =
        convert_component(ComponentKind::Compactor, 1, &src, &ConversionOptions::default()).unwrap();

    assert_eq!(component.node_groups.len(), 3);
    for node_group in &component.node_groups {
        assert_eq!(node_group.restart_at.as_ref(), Some(&restart_at));
    }
}

#[test]
fn test_template_and_upgrade_strategy_are_copied() {
    let mut g1 = group("g1", 2);
    g1.template = Some(RisingWaveComponentGroupTemplate {
        image: "risingwavelabs/risingwave:v1.7.0".to_string(),
        image_pull_secrets: vec!["registry".to_string()],
        priority_class_name: Some("high".to_string()),
        ..Default::default()
    });
    g1.upgrade_strategy = RisingWaveUpgradeStrategy {
        strategy_type: RisingWaveUpgradeStrategyType::RollingUpdate,
        rolling_update: Some(RisingWaveRollingUpdate {
            max_unavailable: Some(IntOrString::String("50%".to_string())),
            partition: Some(IntOrString::Int(1)),
            max_surge: None,
        }),
        in_place_update_strategy: None,
    };
    let src = SourceComponent {
        restart_at: None,
        groups: vec![g1],
    };

    let component =
        convert_component(ComponentKind::Meta, 0, &src, &ConversionOptions::default()).unwrap();
    let node_group = component.node_group("g1").unwrap();

    assert_eq!(node_group.template.image, "risingwavelabs/risingwave:v1.7.0");
    assert_eq!(node_group.template.priority_class_name.as_deref(), Some("high"));
    assert_eq!(node_group.template.image_pull_secrets.len(), 1);
    assert_eq!(
        node_group.upgrade_strategy.strategy_type,
        RisingWaveNodeGroupUpgradeStrategyType::RollingUpdate
    );
    let rolling_update = node_group.upgrade_strategy.rolling_update.as_ref().unwrap();
    assert_eq!(rolling_update.max_unavailable, Some(IntOrString::String("50%".to_string())));
    assert_eq!(rolling_update.partition, Some(IntOrString::Int(1)));
    assert_eq!(rolling_update.max_surge, None);
}

#[test]
fn test_compute_volumes_are_attached_per_group() {
    let claim_templates = vec![PersistentVolumeClaim {
        metadata: risingwave_crds::PersistentVolumeClaimPartialObjectMeta {
            name: "data".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }];
    let src = RisingWaveComputeComponent {
        restart_at: None,
        groups: vec![
            compute_group("with-mounts", 2, Some(vec![mount("data", "/data")])),
            compute_group("no-template", 1, None),
        ],
    };

    let component =
        convert_compute_component(4, &src, &claim_templates, &ConversionOptions::default()).unwrap();

    let with_mounts = component.node_group("with-mounts").unwrap();
    assert_eq!(with_mounts.template.volume_mounts, vec![mount("data", "/data")]);
    assert_eq!(with_mounts.volume_claim_templates, claim_templates);

    let no_template = component.node_group("no-template").unwrap();
    assert!(no_template.template.volume_mounts.is_empty());
    assert_eq!(no_template.volume_claim_templates, claim_templates);

    let default_group = component.default_node_group().unwrap();
    assert_eq!(default_group.replicas, 4);
    assert!(default_group.template.volume_mounts.is_empty());
    assert_eq!(default_group.volume_claim_templates, claim_templates);
}

#[test]
fn test_non_compute_components_have_no_volumes() {
    let src = SourceComponent {
        restart_at: None,
        groups: vec![group("g1", 1)],
    };
    let component =
        convert_component(ComponentKind::Meta, 1, &src, &ConversionOptions::default()).unwrap();
    for node_group in &component.node_groups {
        assert!(node_group.volume_claim_templates.is_empty());
        assert!(node_group.template.volume_mounts.is_empty());
    }
}

#[test]
fn test_mounts_lookup() {
    let groups = vec![compute_group("a", 1, Some(vec![mount("data", "/data")]))];
    let volumes = VolumeAttachments::new(&[], &groups);

    assert_eq!(volumes.mounts_of(Some("a")).len(), 1);
    assert!(volumes.mounts_of(Some("b")).is_empty());
    assert!(volumes.mounts_of(None).is_empty());
}

#[test]
fn test_empty_group_name_is_reserved() {
    let src = SourceComponent {
        restart_at: None,
        groups: vec![group("", 3)],
    };

    let strict = convert_component(ComponentKind::Frontend, 1, &src, &ConversionOptions::default());
    assert!(matches!(
        strict,
        Err(ConversionError::ReservedGroupName { component: "frontend" })
    ));

    let component =
        convert_component(ComponentKind::Frontend, 1, &src, &ConversionOptions::compatible()).unwrap();
    assert_eq!(component.node_groups.len(), 2);
}

#[test]
fn test_duplicate_group_names_are_rejected() {
    let src = SourceComponent {
        restart_at: None,
        groups: vec![group("g1", 1), group("g1", 2)],
    };

    match convert_component(ComponentKind::Compactor, 1, &src, &ConversionOptions::default()) {
        Err(ConversionError::DuplicateGroup { component, group }) => {
            assert_eq!(component, "compactor");
            assert_eq!(group, "g1");
        }
        other => panic!("expected a duplicate group error, got {other:?}"),
    }
}

#[test]
fn test_log_level_comes_from_options() {
    let options = ConversionOptions {
        log_level: "DEBUG".to_string(),
        ..Default::default()
    };
    let component =
        convert_component(ComponentKind::Meta, 1, &SourceComponent::default(), &options).unwrap();
    assert_eq!(component.log_level, "DEBUG");
}

#[test]
fn test_full_template_is_copied() {
    let template: RisingWaveComponentGroupTemplate = serde_json::from_value(json!({
        "image": "risingwavelabs/risingwave:v1.7.0",
        "imagePullPolicy": "Always",
        "imagePullSecrets": ["registry-a", "registry-b"],
        "resources": {"limits": {"cpu": "1", "memory": "2Gi"}},
        "nodeSelector": {"disktype": "ssd"},
        "tolerations": [{"key": "dedicated", "operator": "Equal", "value": "risingwave", "effect": "NoSchedule"}],
        "affinity": {"nodeAffinity": {"requiredDuringSchedulingIgnoredDuringExecution": {
            "nodeSelectorTerms": [{"matchExpressions": [{"key": "zone", "operator": "In", "values": ["a"]}]}]
        }}},
        "metadata": {
            "labels": {"team": "streaming"},
            "annotations": {"prometheus.io/scrape": "true"}
        },
        "securityContext": {"runAsUser": 1000, "fsGroup": 2000},
        "priorityClassName": "high",
        "terminationGracePeriodSeconds": 30,
        "dnsConfig": {"nameservers": ["10.0.0.10"], "searches": ["svc.cluster.local"]},
        "env": [{"name": "RUST_BACKTRACE", "value": "1"}],
        "envFrom": [{"configMapRef": {"name": "extra-env"}}]
    }))
    .unwrap();
    let mut g1 = group("g1", 1);
    g1.template = Some(template.clone());
    let src = SourceComponent {
        restart_at: None,
        groups: vec![g1],
    };

    let component =
        convert_component(ComponentKind::Frontend, 1, &src, &ConversionOptions::default()).unwrap();
    let converted = &component.node_group("g1").unwrap().template;

    assert_eq!(converted.image, template.image);
    assert_eq!(converted.image_pull_policy.as_deref(), Some("Always"));
    let secrets: Vec<_> = converted
        .image_pull_secrets
        .iter()
        .map(|r| serde_json::to_value(r).unwrap())
        .collect();
    assert_eq!(secrets, vec![json!({"name": "registry-a"}), json!({"name": "registry-b"})]);
    assert_eq!(converted.resources, template.resources);
    assert_eq!(converted.node_selector, template.node_selector);
    assert_eq!(converted.tolerations, template.tolerations);
    assert_eq!(converted.affinity, template.affinity);
    assert_eq!(converted.labels.get("team").map(String::as_str), Some("streaming"));
    assert_eq!(
        converted.annotations.get("prometheus.io/scrape").map(String::as_str),
        Some("true")
    );
    assert_eq!(converted.labels.len(), 1);
    assert_eq!(converted.annotations.len(), 1);
    assert_eq!(converted.security_context, template.security_context);
    assert_eq!(converted.priority_class_name, template.priority_class_name);
    assert_eq!(converted.termination_grace_period_seconds, Some(30));
    assert_eq!(converted.dns_config, template.dns_config);
    assert_eq!(converted.env, template.env);
    assert_eq!(converted.env_from, template.env_from);
    assert!(converted.volume_mounts.is_empty());
}

#[test]
fn test_compute_groups_keep_upgrade_strategy() {
    let mut cached = compute_group("cached", 2, Some(vec![mount("data", "/data")]));
    cached.upgrade_strategy = RisingWaveUpgradeStrategy {
        strategy_type: RisingWaveUpgradeStrategyType::InPlaceIfPossible,
        rolling_update: None,
        in_place_update_strategy: Some(risingwave_crds::v1alpha1::InPlaceUpdateStrategy {
            grace_period_seconds: 15,
        }),
    };
    let src = RisingWaveComputeComponent {
        restart_at: None,
        groups: vec![cached],
    };

    let component = convert_compute_component(1, &src, &[], &ConversionOptions::default()).unwrap();
    let strategy = &component.node_group("cached").unwrap().upgrade_strategy;

    assert_eq!(
        strategy.strategy_type,
        RisingWaveNodeGroupUpgradeStrategyType::InPlaceIfPossible
    );
    assert_eq!(
        strategy.in_place_update_strategy.as_ref().map(|s| s.grace_period_seconds),
        Some(15)
    );
    assert_eq!(
        component.default_node_group().unwrap().upgrade_strategy.strategy_type,
        RisingWaveNodeGroupUpgradeStrategyType::RollingUpdate
    );
}

#[test]
fn test_unrecognized_upgrade_strategy_converts_as_unknown() {
    let g1: RisingWaveComponentGroup = serde_json::from_value(json!({
        "name": "g1",
        "replicas": 1,
        "upgradeStrategy": {"type": "Canary"}
    }))
    .unwrap();
    assert_eq!(g1.upgrade_strategy.strategy_type, RisingWaveUpgradeStrategyType::Unknown);
    let src = SourceComponent {
        restart_at: None,
        groups: vec![g1],
    };

    let component =
        convert_component(ComponentKind::Meta, 1, &src, &ConversionOptions::default()).unwrap();
    assert_eq!(
        component.node_group("g1").unwrap().upgrade_strategy.strategy_type,
        RisingWaveNodeGroupUpgradeStrategyType::Unknown
    );
}
