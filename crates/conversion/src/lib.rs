//! RisingWave Schema Conversion
//!
//! Converts `RisingWave` objects from the legacy `v1alpha1` schema to the
//! `v1alpha2` hub schema:
//! - storage backend unions are narrowed to exactly one branch (`storage`)
//! - component groups are expanded into flat node group lists (`component`)
//! - statuses and scale view locks are re-projected (`status`, `scale_view`)
//!
//! Every conversion is a pure function of its input. Conversion back to
//! `v1alpha1` is not supported and fails explicitly.

pub mod component;
pub mod config;
pub mod error;
pub mod pod_template;
pub mod scale_view;
pub mod status;
pub mod storage;

use std::borrow::Cow;

use kube::{Resource, ResourceExt};
use risingwave_crds::{v1alpha1, v1alpha2};
use serde_json::Value;
use tracing::{debug, info};

pub use crate::component::ComponentKind;
pub use crate::config::{ConversionMode, ConversionOptions};
pub use crate::error::ConversionError;

/// apiVersion of the legacy schema
pub fn legacy_api_version() -> Cow<'static, str> {
    v1alpha1::RisingWave::api_version(&())
}

/// apiVersion of the hub schema
pub fn hub_api_version() -> Cow<'static, str> {
    v1alpha2::RisingWave::api_version(&())
}

/// Converts a `v1alpha1` RisingWave to `v1alpha2`.
///
/// Metadata is copied verbatim. The status is converted when present.
pub fn convert_forward(
    src: &v1alpha1::RisingWave,
    options: &ConversionOptions,
) -> Result<v1alpha2::RisingWave, ConversionError> {
    info!(
        "Converting RisingWave {}/{} to {} ({} mode)",
        src.namespace().unwrap_or_default(),
        src.name_any(),
        hub_api_version(),
        options.mode
    );

    let spec = convert_spec(&src.spec, options)?;
    let status = src.status.as_ref().map(status::convert_status);
    debug!("Status present: {}", status.is_some());

    Ok(v1alpha2::RisingWave {
        metadata: src.metadata.clone(),
        spec,
        status,
    })
}

fn convert_spec(
    src: &v1alpha1::RisingWaveSpec,
    options: &ConversionOptions,
) -> Result<v1alpha2::RisingWaveSpec, ConversionError> {
    let global = &src.global;
    let components = &src.components;

    Ok(v1alpha2::RisingWaveSpec {
        use_kruise_workloads: src.enable_open_kruise,
        sync_prometheus_service_monitor: src.enable_default_service_monitor,
        frontend_service_type: global.service_type.clone(),
        additional_frontend_service_metadata: global.service_meta.clone(),
        meta_store: storage::convert_meta_store(&src.storages.meta, options.mode)?,
        state_store: storage::convert_state_store(&src.storages.object, options.mode)?,
        image: global.template.image.clone(),
        pod_template: pod_template::convert_pod_template(Some(&global.template)),
        configuration: convert_configuration(&src.configuration),
        meta_component: component::convert_component(
            ComponentKind::Meta,
            global.replicas.meta,
            &components.meta,
            options,
        )?,
        frontend_component: component::convert_component(
            ComponentKind::Frontend,
            global.replicas.frontend,
            &components.frontend,
            options,
        )?,
        compute_component: component::convert_compute_component(
            global.replicas.compute,
            &components.compute,
            &src.storages.pvc_templates,
            options,
        )?,
        compactor_component: component::convert_component(
            ComponentKind::Compactor,
            global.replicas.compactor,
            &components.compactor,
            options,
        )?,
    })
}

fn convert_configuration(src: &v1alpha1::RisingWaveConfigurationSpec) -> v1alpha2::RisingWaveNodeConfiguration {
    v1alpha2::RisingWaveNodeConfiguration {
        config_map: src
            .config_map
            .as_ref()
            .map(|cm| v1alpha2::RisingWaveNodeConfigurationConfigMapSource {
                name: cm.name.clone(),
                key: cm.key.clone(),
                optional: cm.optional,
            }),
        secret: None,
        value: None,
    }
}

/// Converting a `v1alpha2` RisingWave back to `v1alpha1` is not supported.
pub fn convert_backward(src: &v1alpha2::RisingWave) -> Result<v1alpha1::RisingWave, ConversionError> {
    debug!("Refusing backward conversion of RisingWave {}", src.name_any());
    Err(ConversionError::Unsupported {
        from: hub_api_version().into_owned(),
        to: legacy_api_version().into_owned(),
    })
}

/// Converts an untyped RisingWave document to `desired_api_version`.
///
/// A document already at the desired version is returned unchanged.
pub fn convert_document(
    document: Value,
    desired_api_version: &str,
    options: &ConversionOptions,
) -> Result<Value, ConversionError> {
    let legacy = legacy_api_version();
    let hub = hub_api_version();

    let source = document
        .get("apiVersion")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    for version in [source.as_str(), desired_api_version] {
        if version != legacy && version != hub {
            return Err(ConversionError::UnknownApiVersion(version.to_string()));
        }
    }

    if source == desired_api_version {
        debug!("Document is already {}", desired_api_version);
        return Ok(document);
    }

    if source == legacy {
        let rw: v1alpha1::RisingWave = serde_json::from_value(document)?;
        let converted = convert_forward(&rw, options)?;
        Ok(serde_json::to_value(converted)?)
    } else {
        let rw: v1alpha2::RisingWave = serde_json::from_value(document)?;
        let converted = convert_backward(&rw)?;
        Ok(serde_json::to_value(converted)?)
    }
}
