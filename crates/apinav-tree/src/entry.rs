//! Navigation entries
//!
//! The derived, renderer-facing view of one endpoint.

use apinav_model::EndpointPath;
use serde::Serialize;

/// One row of the Endpoints section
///
/// Derived from an [`apinav_model::EndpointSpec`] under the active
/// [`FormatOptions`](crate::FormatOptions); recomputed as a whole list
/// whenever an option changes, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    /// Full endpoint path (always the source path, regardless of label mode)
    pub path: EndpointPath,

    /// Display label for this entry
    pub label: String,

    /// Position in the published list (0-based)
    pub order: usize,

    /// Whether the renderer should expand this endpoint's operation list
    pub expanded: bool,
}
