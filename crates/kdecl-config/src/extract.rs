//! Extraction settings: body normalization and output layout.

use kdecl_parser::{BodyStyle, ExtractOptions, Layout};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// `collapsed` (single-line bodies) or `verbatim` (legacy, line breaks kept).
    #[serde(default)]
    pub body_style: BodyStyle,

    /// `nested` (declarations under their nearest parent) or `flat`.
    #[serde(default)]
    pub layout: Layout,
}

impl ExtractConfig {
    #[must_use]
    pub const fn options(&self) -> ExtractOptions {
        ExtractOptions {
            body_style: self.body_style,
            layout: self.layout,
        }
    }
}
