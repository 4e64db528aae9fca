//! Syntax tree provider settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParseConfig {
    /// Keep going when the tree contains syntax errors instead of failing.
    #[serde(default)]
    pub lenient: bool,
}
