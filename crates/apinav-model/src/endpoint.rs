//! Endpoint specifications and per-section item lists
//!
//! These are the immutable inputs handed over by the API-spec loader.

use serde::{Deserialize, Serialize};

use crate::path::EndpointPath;

/// One API operation group, identified by its URL path template
///
/// The optional display name is a human-readable label authored in the
/// source API document (e.g. "Get file"). When present it takes
/// precedence over any path-derived label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSpec {
    /// Absolute URL path template
    pub path: EndpointPath,

    /// Human-readable name from the source document, if any
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "displayName")]
    pub display_name: Option<String>,
}

impl EndpointSpec {
    /// Endpoint without a display name
    #[inline]
    #[must_use]
    pub fn new(path: EndpointPath) -> Self {
        Self {
            path,
            display_name: None,
        }
    }

    /// Endpoint with an explicit display name
    #[inline]
    #[must_use]
    pub fn named(path: EndpointPath, display_name: impl Into<String>) -> Self {
        Self {
            path,
            display_name: Some(display_name.into()),
        }
    }

    /// Display name, if authored
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// One entry of the Documentation section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationItem {
    /// Document title as shown in the navigation
    pub title: String,
}

impl DocumentationItem {
    /// Create a documentation item
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// One entry of the Types section
///
/// Type names are not required to be unique; the same name may appear
/// several times in a source document (inline type reuse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeItem {
    /// Type name as shown in the navigation
    pub name: String,
}

impl TypeItem {
    /// Create a type item
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One entry of the Security section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityItem {
    /// Scheme identifier from the source document (e.g. `oauth_2_0`)
    pub name: String,

    /// Scheme kind (e.g. `OAuth 2.0`)
    pub scheme: String,
}

impl SecurityItem {
    /// Create a security item
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scheme: scheme.into(),
        }
    }

    /// Navigation label: `{name} - {scheme}`
    #[inline]
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.scheme)
    }
}
