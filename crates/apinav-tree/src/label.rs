//! Endpoint label computation
//!
//! Labels are derived per entry from the authored display name, the
//! nearest ancestor endpoint, or the path itself, in that order.

use apinav_model::{ApiModel, EndpointPath, EndpointSpec};

/// Deepest strict ancestor of `path` that is itself an endpoint
///
/// Walks the parent chain toward the root; the first hit wins, so
/// `/files/{folderId}/children` resolves to `/files` when
/// `/files/{folderId}` is not an endpoint of the model.
#[must_use]
pub fn nearest_ancestor(model: &ApiModel, path: &EndpointPath) -> Option<EndpointPath> {
    let mut current = path.parent();
    while let Some(candidate) = current {
        if model.contains(&candidate) {
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}

/// Compute the display label for one endpoint
///
/// - full-path mode: the rendered path, unchanged
/// - authored display name: used verbatim (precedence over derivation)
/// - nearest ancestor endpoint: path relative to it, with leading slash
/// - otherwise: the full rendered path (root-level endpoints and orphaned
///   deep paths such as `/channels/stop` with no `/channels` endpoint)
#[must_use]
pub fn compute_label(model: &ApiModel, spec: &EndpointSpec, render_full_paths: bool) -> String {
    if render_full_paths {
        return spec.path.to_string();
    }

    if let Some(name) = spec.display_name() {
        return name.to_string();
    }

    if let Some(ancestor) = nearest_ancestor(model, &spec.path) {
        if let Ok(relative) = spec.path.relative_to(&ancestor) {
            return relative.to_string();
        }
    }

    spec.path.to_string()
}
