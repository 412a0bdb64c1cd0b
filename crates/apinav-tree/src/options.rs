//! Formatting options for the endpoint list

use serde::{Deserialize, Serialize};

/// Endpoint list formatting modes
///
/// Two independent flags, both off by default. Changing either one
/// triggers a full recomputation of the entry list; there are no
/// intermediate states and no partial application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Sort endpoints lexicographically by full path (byte order)
    /// instead of declaration order
    pub rearrange_endpoints: bool,

    /// Label every entry with its full path instead of the
    /// parent-relative form
    pub render_full_paths: bool,
}

impl FormatOptions {
    /// Default options: declaration order, relative labels
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable alphabetical ordering
    #[inline]
    #[must_use]
    pub fn with_rearrange_endpoints(mut self, rearrange: bool) -> Self {
        self.rearrange_endpoints = rearrange;
        self
    }

    /// Enable or disable full-path labels
    #[inline]
    #[must_use]
    pub fn with_render_full_paths(mut self, full_paths: bool) -> Self {
        self.render_full_paths = full_paths;
        self
    }
}
