//! Director model.

use serde::{Deserialize, Serialize};

/// A BOSH director known to the SignalFire server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Director {
    /// Display name.
    pub name: String,
    /// Director UUID.
    pub uuid: String,
}

impl Director {
    /// Create a director.
    pub fn new(name: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uuid: uuid.into(),
        }
    }
}
