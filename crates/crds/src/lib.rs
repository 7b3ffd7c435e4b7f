//! RisingWave CRD Definitions
//!
//! Kubernetes Custom Resource Definitions for the `RisingWave` resource in
//! both served schema versions:
//! - `v1alpha1`: legacy schema (storages, global replicas, component groups)
//! - `v1alpha2`: hub schema (tagged storage backends, node groups)
//!
//! The two versions are kept in separate modules because they share the
//! `RisingWave` kind. Conversion between them lives in `risingwave-conversion`.

pub mod common;
pub mod v1alpha1;
pub mod v1alpha2;

pub use common::*;

/// API group shared by every RisingWave resource version.
pub const API_GROUP: &str = "risingwave.risingwavelabs.com";
