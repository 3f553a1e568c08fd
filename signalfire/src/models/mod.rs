//! Data models for SignalFire entities.

mod director;
mod group;
mod info;

pub use director::Director;
pub use group::{Deployment, DeploymentGroup, Release, ReleaseVersion};
pub use info::{ApiInfo, AuthMethod};
