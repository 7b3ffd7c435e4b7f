//! `v1alpha2` RisingWave schema (hub version)
//!
//! Storage backends are tagged unions: exactly one branch or none at all.
//! Components are flat lists of node groups, the default group included.

pub mod risingwave;
pub mod meta_store;
pub mod state_store;
pub mod node_group;
pub mod scale_view_lock;
pub mod status;

pub use risingwave::*;
pub use meta_store::*;
pub use state_store::*;
pub use node_group::*;
pub use scale_view_lock::*;
pub use status::*;
