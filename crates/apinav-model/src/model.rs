//! Validated API model
//!
//! [`ApiModel`] is the read-only product of the external API-spec loader:
//! the endpoint list in declaration order plus the Documentation, Types
//! and Security item lists. Path uniqueness is enforced on construction.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::endpoint::{DocumentationItem, EndpointSpec, SecurityItem, TypeItem};
use crate::path::{EndpointPath, PathError};

/// Parsed API document as supplied by the API-spec loader
///
/// Endpoints keep their declaration order (the order they appear in the
/// source API document) and are unique by path. The model is immutable
/// once built; derived navigation never writes back into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiModel {
    endpoints: IndexMap<EndpointPath, EndpointSpec>,
    documentation: Vec<DocumentationItem>,
    types: Vec<TypeItem>,
    security: Vec<SecurityItem>,
}

impl ApiModel {
    /// Start building a model
    #[inline]
    #[must_use]
    pub fn builder() -> ApiModelBuilder {
        ApiModelBuilder::default()
    }

    /// Parse a model from a JSON document
    ///
    /// Expected shape:
    ///
    /// ```json
    /// {
    ///   "endpoints": [{"path": "/files", "displayName": "Files"}],
    ///   "documentation": [{"title": "Headline"}],
    ///   "types": [{"name": "File"}],
    ///   "security": [{"name": "oauth_2_0", "scheme": "OAuth 2.0"}]
    /// }
    /// ```
    ///
    /// # Errors
    /// Returns [`ModelError::Json`] on malformed JSON and
    /// [`ModelError::DuplicatePath`] when two endpoints share a path.
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let raw: RawDocument = serde_json::from_str(text)?;

        let mut builder = ApiModelBuilder::default();
        for endpoint in raw.endpoints {
            builder = builder.endpoint(endpoint);
        }
        for item in raw.documentation {
            builder = builder.documentation(item);
        }
        for item in raw.types {
            builder = builder.type_item(item);
        }
        for item in raw.security {
            builder = builder.security(item);
        }
        builder.build()
    }

    /// Endpoints in declaration order
    #[inline]
    pub fn endpoints(&self) -> impl Iterator<Item = &EndpointSpec> {
        self.endpoints.values()
    }

    /// Number of endpoints
    #[inline]
    #[must_use]
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Check whether a path is an endpoint of this model
    #[inline]
    #[must_use]
    pub fn contains(&self, path: &EndpointPath) -> bool {
        self.endpoints.contains_key(path)
    }

    /// Look up an endpoint by path
    #[inline]
    #[must_use]
    pub fn endpoint(&self, path: &EndpointPath) -> Option<&EndpointSpec> {
        self.endpoints.get(path)
    }

    /// Authored display name for a path, if any
    #[inline]
    #[must_use]
    pub fn display_name(&self, path: &EndpointPath) -> Option<&str> {
        self.endpoints.get(path).and_then(EndpointSpec::display_name)
    }

    /// Documentation items in declaration order
    #[inline]
    #[must_use]
    pub fn documentation(&self) -> &[DocumentationItem] {
        &self.documentation
    }

    /// Type items in declaration order
    #[inline]
    #[must_use]
    pub fn types(&self) -> &[TypeItem] {
        &self.types
    }

    /// Security items in declaration order
    #[inline]
    #[must_use]
    pub fn security(&self) -> &[SecurityItem] {
        &self.security
    }
}

/// Raw JSON shape, prior to invariant checks
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    endpoints: Vec<EndpointSpec>,
    #[serde(default)]
    documentation: Vec<DocumentationItem>,
    #[serde(default)]
    types: Vec<TypeItem>,
    #[serde(default)]
    security: Vec<SecurityItem>,
}

/// Builder for [`ApiModel`]
///
/// Collects items in declaration order; `build` enforces path uniqueness.
#[derive(Debug, Default)]
pub struct ApiModelBuilder {
    endpoints: Vec<EndpointSpec>,
    documentation: Vec<DocumentationItem>,
    types: Vec<TypeItem>,
    security: Vec<SecurityItem>,
}

impl ApiModelBuilder {
    /// Add an endpoint
    #[inline]
    #[must_use]
    pub fn endpoint(mut self, spec: EndpointSpec) -> Self {
        self.endpoints.push(spec);
        self
    }

    /// Add an endpoint by path text, without a display name
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidPath`] if the text is not a valid
    /// absolute path template.
    pub fn path(self, path: &str) -> Result<Self, ModelError> {
        let path: EndpointPath = path.parse()?;
        Ok(self.endpoint(EndpointSpec::new(path)))
    }

    /// Add an endpoint by path text with a display name
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidPath`] if the text is not a valid
    /// absolute path template.
    pub fn named_path(self, path: &str, name: &str) -> Result<Self, ModelError> {
        let path: EndpointPath = path.parse()?;
        Ok(self.endpoint(EndpointSpec::named(path, name)))
    }

    /// Add a documentation item
    #[inline]
    #[must_use]
    pub fn documentation(mut self, item: DocumentationItem) -> Self {
        self.documentation.push(item);
        self
    }

    /// Add a type item
    #[inline]
    #[must_use]
    pub fn type_item(mut self, item: TypeItem) -> Self {
        self.types.push(item);
        self
    }

    /// Add a security item
    #[inline]
    #[must_use]
    pub fn security(mut self, item: SecurityItem) -> Self {
        self.security.push(item);
        self
    }

    /// Validate and build the model
    ///
    /// # Errors
    /// Returns [`ModelError::DuplicatePath`] when two endpoints share a
    /// path. Duplicates are an upstream loader bug; they are signaled,
    /// never merged or dropped.
    pub fn build(self) -> Result<ApiModel, ModelError> {
        let mut endpoints = IndexMap::with_capacity(self.endpoints.len());
        for spec in self.endpoints {
            let path = spec.path.clone();
            if endpoints.insert(path.clone(), spec).is_some() {
                return Err(ModelError::DuplicatePath { path });
            }
        }

        Ok(ApiModel {
            endpoints,
            documentation: self.documentation,
            types: self.types,
            security: self.security,
        })
    }
}

/// Errors raised while building an [`ApiModel`]
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Two endpoints share the same path
    #[error("duplicate endpoint path: {path}")]
    DuplicatePath {
        /// The offending path
        path: EndpointPath,
    },

    /// Malformed path text
    #[error("invalid endpoint path: {0}")]
    InvalidPath(#[from] PathError),

    /// Malformed JSON document
    #[error("malformed API document: {0}")]
    Json(#[from] serde_json::Error),
}
