//! Field-for-field copy of pod templates and upgrade strategies.

use k8s_openapi::api::core::v1::LocalObjectReference;
use risingwave_crds::v1alpha1::{
    RisingWaveComponentGroupTemplate, RisingWaveUpgradeStrategy, RisingWaveUpgradeStrategyType,
};
use risingwave_crds::v1alpha2::{
    RisingWaveInPlaceUpdateStrategy, RisingWaveNodeGroupRollingUpdate,
    RisingWaveNodeGroupUpgradeStrategy, RisingWaveNodeGroupUpgradeStrategyType,
    RisingWaveNodePodTemplate,
};
use tracing::debug;

/// Converts a group template; an absent template becomes the empty one.
pub fn convert_pod_template(
    src: Option<&RisingWaveComponentGroupTemplate>,
) -> RisingWaveNodePodTemplate {
    let Some(src) = src else {
        return RisingWaveNodePodTemplate::default();
    };

    RisingWaveNodePodTemplate {
        image: src.image.clone(),
        image_pull_policy: src.image_pull_policy.clone(),
        image_pull_secrets: src
            .image_pull_secrets
            .iter()
            .map(|name| LocalObjectReference {
                name: name.clone().into(),
            })
            .collect(),
        resources: src.resources.clone(),
        node_selector: src.node_selector.clone(),
        tolerations: src.tolerations.clone(),
        affinity: src.affinity.clone(),
        labels: src.metadata.labels.clone(),
        annotations: src.metadata.annotations.clone(),
        security_context: src.security_context.clone(),
        priority_class_name: src.priority_class_name.clone(),
        termination_grace_period_seconds: src.termination_grace_period_seconds,
        dns_config: src.dns_config.clone(),
        env: src.env.clone(),
        env_from: src.env_from.clone(),
        volume_mounts: Vec::new(),
    }
}

/// Copies an upgrade strategy. Parameters of inactive strategy types are
/// carried along untouched.
pub fn convert_upgrade_strategy(
    src: &RisingWaveUpgradeStrategy,
) -> RisingWaveNodeGroupUpgradeStrategy {
    RisingWaveNodeGroupUpgradeStrategy {
        strategy_type: match src.strategy_type {
            RisingWaveUpgradeStrategyType::Recreate => {
                RisingWaveNodeGroupUpgradeStrategyType::Recreate
            }
            RisingWaveUpgradeStrategyType::RollingUpdate => {
                RisingWaveNodeGroupUpgradeStrategyType::RollingUpdate
            }
            RisingWaveUpgradeStrategyType::InPlaceIfPossible => {
                RisingWaveNodeGroupUpgradeStrategyType::InPlaceIfPossible
            }
            RisingWaveUpgradeStrategyType::InPlaceOnly => {
                RisingWaveNodeGroupUpgradeStrategyType::InPlaceOnly
            }
            RisingWaveUpgradeStrategyType::Unknown => {
                debug!("Unrecognized upgrade strategy type, converting as Unknown");
                RisingWaveNodeGroupUpgradeStrategyType::Unknown
            }
        },
        rolling_update: src.rolling_update.as_ref().map(|ru| RisingWaveNodeGroupRollingUpdate {
            max_unavailable: ru.max_unavailable.clone(),
            partition: ru.partition.clone(),
            max_surge: ru.max_surge.clone(),
        }),
        in_place_update_strategy: src.in_place_update_strategy.as_ref().map(|ip| {
            RisingWaveInPlaceUpdateStrategy {
                grace_period_seconds: ip.grace_period_seconds,
            }
        }),
    }
}
