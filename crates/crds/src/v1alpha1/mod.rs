//! `v1alpha1` RisingWave schema
//!
//! The legacy schema. Storage backends are structs of optional branches,
//! replicas of the default group live under `global.replicas`, and compute
//! volume mounts are declared per group.

pub mod risingwave;
pub mod storage;
pub mod component;
pub mod status;

pub use risingwave::*;
pub use storage::*;
pub use component::*;
pub use status::*;
