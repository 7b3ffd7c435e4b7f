//! Prints the RisingWave CustomResourceDefinition with both served versions.
//!
//! `v1alpha2` is the storage version.

use kube::CustomResourceExt;
use kube::core::crd::merge_crds;
use risingwave_crds::{v1alpha1, v1alpha2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let crd = merge_crds(
        vec![v1alpha1::RisingWave::crd(), v1alpha2::RisingWave::crd()],
        "v1alpha2",
    )?;
    print!("{}", serde_yaml::to_string(&crd)?);
    Ok(())
}
