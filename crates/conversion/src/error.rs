//! Conversion error types.

use thiserror::Error;

/// Errors that can occur while converting a RisingWave object.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// More than one branch of a storage backend union is set
    #[error("{store} has more than one backend set: {branches}")]
    AmbiguousBackend {
        /// Which union, e.g. "meta store"
        store: &'static str,
        /// Names of the populated branches, comma separated
        branches: String,
    },

    /// Virtual-hosted style requested without an endpoint to host the bucket on
    #[error("S3 bucket {bucket} requests virtual-hosted style but has no endpoint")]
    VirtualHostedWithoutEndpoint {
        /// Bucket of the offending backend
        bucket: String,
    },

    /// Virtual-hosted style requested on an endpoint whose scheme cannot host the bucket
    #[error("S3 endpoint {endpoint} requests virtual-hosted style but only https:// or scheme-less endpoints can be templated")]
    VirtualHostedEndpointScheme {
        /// Offending endpoint
        endpoint: String,
    },

    /// A named group uses the name reserved for the default group
    #[error("{component} component has a group with an empty name, which is reserved for the default group")]
    ReservedGroupName {
        /// Component holding the group
        component: &'static str,
    },

    /// Two groups of one component share a name
    #[error("{component} component has more than one group named {group}")]
    DuplicateGroup {
        /// Component holding the groups
        component: &'static str,
        /// Duplicated name
        group: String,
    },

    /// The requested direction is not implemented
    #[error("conversion from {from} to {to} is not supported")]
    Unsupported {
        /// Source apiVersion
        from: String,
        /// Target apiVersion
        to: String,
    },

    /// The document is not a RisingWave of a known version
    #[error("unknown apiVersion: {0}")]
    UnknownApiVersion(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
