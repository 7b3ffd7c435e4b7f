//! Component and node group expansion.
//!
//! A v1alpha1 component is a list of named groups plus a default replica
//! count kept under `global.replicas`. A v1alpha2 component is a single list
//! of node groups in which the default group is the one with the empty name.

use std::collections::{HashMap, HashSet};
use std::fmt;

use k8s_openapi::api::core::v1::VolumeMount;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use risingwave_crds::PersistentVolumeClaim;
use risingwave_crds::v1alpha1::{
    RisingWaveComponent as SourceComponent, RisingWaveComponentGroup,
    RisingWaveComponentGroupTemplate, RisingWaveComputeComponent, RisingWaveComputeGroup,
    RisingWaveUpgradeStrategy,
};
use risingwave_crds::v1alpha2::{RisingWaveComponent, RisingWaveNodeGroup};
use tracing::debug;

use crate::config::ConversionOptions;
use crate::error::ConversionError;
use crate::pod_template::{convert_pod_template, convert_upgrade_strategy};

/// The four components of a RisingWave cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Meta nodes
    Meta,
    /// Frontend nodes
    Frontend,
    /// Compute nodes
    Compute,
    /// Compactor nodes
    Compactor,
}

impl ComponentKind {
    /// Lower-case name, as used by scale views.
    pub fn name(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Frontend => "frontend",
            Self::Compute => "compute",
            Self::Compactor => "compactor",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named source group, whichever component it comes from
#[derive(Debug, Clone, Copy)]
pub struct GroupSource<'a> {
    /// Group name
    pub name: &'a str,
    /// Replicas of the group
    pub replicas: i32,
    /// Upgrade strategy of the group
    pub upgrade_strategy: &'a RisingWaveUpgradeStrategy,
    /// Pod overrides of the group
    pub template: Option<&'a RisingWaveComponentGroupTemplate>,
}

impl<'a> From<&'a RisingWaveComponentGroup> for GroupSource<'a> {
    fn from(group: &'a RisingWaveComponentGroup) -> Self {
        Self {
            name: &group.name,
            replicas: group.replicas,
            upgrade_strategy: &group.upgrade_strategy,
            template: group.template.as_ref(),
        }
    }
}

impl<'a> From<&'a RisingWaveComputeGroup> for GroupSource<'a> {
    fn from(group: &'a RisingWaveComputeGroup) -> Self {
        Self {
            name: &group.name,
            replicas: group.replicas,
            upgrade_strategy: &group.upgrade_strategy,
            template: group.template.as_ref().map(|t| &t.template),
        }
    }
}

/// Volumes attached to every node group of the compute component
#[derive(Debug, Clone, Default)]
pub struct VolumeAttachments<'a> {
    claim_templates: &'a [PersistentVolumeClaim],
    mounts: HashMap<&'a str, &'a [VolumeMount]>,
}

impl<'a> VolumeAttachments<'a> {
    /// Shares `claim_templates` with every group and indexes the volume
    /// mounts declared by the templates of `groups` by group name.
    pub fn new(claim_templates: &'a [PersistentVolumeClaim], groups: &'a [RisingWaveComputeGroup]) -> Self {
        let mounts = groups
            .iter()
            .filter_map(|g| {
                g.template
                    .as_ref()
                    .map(|t| (g.name.as_str(), t.volume_mounts.as_slice()))
            })
            .collect();
        Self {
            claim_templates,
            mounts,
        }
    }

    /// Mounts of a named group; the default group (`None`) has none.
    pub fn mounts_of(&self, group: Option<&str>) -> &'a [VolumeMount] {
        group
            .and_then(|name| self.mounts.get(name).copied())
            .unwrap_or_default()
    }

    fn attach(&self, node_group: &mut RisingWaveNodeGroup, group: Option<&str>) {
        node_group.volume_claim_templates = self.claim_templates.to_vec();
        node_group.template.volume_mounts = self.mounts_of(group).to_vec();
    }
}

/// Input of the expansion of one component
#[derive(Debug, Clone)]
pub struct ComponentExpansion<'a> {
    kind: ComponentKind,
    default_replicas: i32,
    restart_at: Option<&'a Time>,
    groups: Vec<GroupSource<'a>>,
    volumes: Option<VolumeAttachments<'a>>,
}

impl<'a> ComponentExpansion<'a> {
    /// Creates the expansion of a component without volumes.
    pub fn new(
        kind: ComponentKind,
        default_replicas: i32,
        restart_at: Option<&'a Time>,
        groups: Vec<GroupSource<'a>>,
    ) -> Self {
        Self {
            kind,
            default_replicas,
            restart_at,
            groups,
            volumes: None,
        }
    }

    /// Attaches volumes to every converted group, the default group included.
    pub fn with_volumes(mut self, volumes: VolumeAttachments<'a>) -> Self {
        self.volumes = Some(volumes);
        self
    }

    /// Converts the named groups in order and appends the default group.
    pub fn expand(&self, options: &ConversionOptions) -> Result<RisingWaveComponent, ConversionError> {
        if options.mode.is_strict() {
            self.validate_group_names()?;
        }

        let mut node_groups: Vec<RisingWaveNodeGroup> =
            self.groups.iter().map(|g| self.named_group(g)).collect();
        node_groups.push(self.default_group());

        debug!(
            "Expanded {} component into {} node groups ({} default replicas)",
            self.kind,
            node_groups.len(),
            self.default_replicas
        );

        Ok(RisingWaveComponent {
            log_level: options.log_level.clone(),
            node_groups,
        })
    }

    fn validate_group_names(&self) -> Result<(), ConversionError> {
        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.name.is_empty() {
                return Err(ConversionError::ReservedGroupName {
                    component: self.kind.name(),
                });
            }
            if !seen.insert(group.name) {
                return Err(ConversionError::DuplicateGroup {
                    component: self.kind.name(),
                    group: group.name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn named_group(&self, group: &GroupSource<'_>) -> RisingWaveNodeGroup {
        let mut node_group = RisingWaveNodeGroup {
            name: group.name.to_string(),
            replicas: group.replicas,
            upgrade_strategy: convert_upgrade_strategy(group.upgrade_strategy),
            restart_at: self.restart_at.cloned(),
            template: convert_pod_template(group.template),
            volume_claim_templates: Vec::new(),
        };
        if let Some(volumes) = &self.volumes {
            volumes.attach(&mut node_group, Some(group.name));
        }
        node_group
    }

    fn default_group(&self) -> RisingWaveNodeGroup {
        let mut node_group = RisingWaveNodeGroup {
            name: String::new(),
            replicas: self.default_replicas,
            restart_at: self.restart_at.cloned(),
            ..Default::default()
        };
        if let Some(volumes) = &self.volumes {
            volumes.attach(&mut node_group, None);
        }
        node_group
    }
}

/// Converts a meta, frontend or compactor component.
pub fn convert_component(
    kind: ComponentKind,
    default_replicas: i32,
    src: &SourceComponent,
    options: &ConversionOptions,
) -> Result<RisingWaveComponent, ConversionError> {
    ComponentExpansion::new(
        kind,
        default_replicas,
        src.restart_at.as_ref(),
        src.groups.iter().map(GroupSource::from).collect(),
    )
    .expand(options)
}

/// Converts the compute component, attaching the claim templates and the
/// per-group volume mounts.
pub fn convert_compute_component(
    default_replicas: i32,
    src: &RisingWaveComputeComponent,
    claim_templates: &[PersistentVolumeClaim],
    options: &ConversionOptions,
) -> Result<RisingWaveComponent, ConversionError> {
    ComponentExpansion::new(
        ComponentKind::Compute,
        default_replicas,
        src.restart_at.as_ref(),
        src.groups.iter().map(GroupSource::from).collect(),
    )
    .with_volumes(VolumeAttachments::new(claim_templates, &src.groups))
    .expand(options)
}

#[cfg(test)]
#[path = "component_test.rs"]
mod tests;
