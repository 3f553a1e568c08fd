//! Deployment group models.

use serde::{Deserialize, Serialize};

/// A deployment on one director.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Deployment name.
    pub name: String,
    /// Deployment identifier.
    pub id: String,
    /// UUID of the director running it.
    #[serde(rename = "director_id")]
    pub director_uuid: String,
}

/// One version of a release and the deployments using it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseVersion {
    pub version: String,
    /// Deployment IDs.
    #[serde(default)]
    pub deployments: Vec<String>,
}

/// A release seen across a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<ReleaseVersion>,
}

/// Deployments collated under a common name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentGroup {
    /// Group name.
    pub name: String,
    #[serde(default)]
    pub deployments: Vec<Deployment>,
    #[serde(default)]
    pub releases: Vec<Release>,
}

impl DeploymentGroup {
    /// Number of distinct release versions in this group.
    pub fn version_count(&self) -> usize {
        self.releases.iter().map(|r| r.versions.len()).sum()
    }

    /// Check if deployments of one release disagree on its version.
    pub fn has_version_drift(&self) -> bool {
        self.releases.iter().any(|r| r.versions.len() > 1)
    }
}
