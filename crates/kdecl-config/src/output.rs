//! Output rendering settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Indented JSON instead of a single line.
    #[serde(default)]
    pub pretty: bool,
}
