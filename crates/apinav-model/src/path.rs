//! Endpoint URL path templates
//!
//! Provides [`EndpointPath`] for hierarchical addressing of API endpoints.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Absolute, slash-delimited URL path template identifying one endpoint
///
/// Stored as segments. A segment is either a literal (`files`) or a
/// parameter template (`{fileId}`).
///
/// # Examples
/// - `["files", "{fileId}", "copy"]` → `/files/{fileId}/copy`
/// - `[]` → `/` (root)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointPath(Vec<String>);

impl EndpointPath {
    /// Create a path from raw segments
    ///
    /// Segments are taken as-is; use [`FromStr`] for validated parsing.
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Root path (`/`)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Get number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if path is the root
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get parent path (if not root)
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Get last segment (if not root)
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Append a segment, returning new path
    #[inline]
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Check if this path is a prefix of another (segment-wise)
    ///
    /// # Examples
    /// - `/files` is prefix of `/files/{fileId}`
    /// - `/files` is NOT prefix of `/filesystem`
    #[inline]
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        if self.0.len() > other.0.len() {
            return false;
        }
        self.0 == other.0[..self.0.len()]
    }

    /// Check if this path is an ancestor of another (strict prefix)
    #[inline]
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.0.len() < other.0.len() && self.is_prefix_of(other)
    }

    /// Get relative path from ancestor
    ///
    /// The result renders with a leading slash, e.g.
    /// `/files/{fileId}/copy` relative to `/files/{fileId}` is `/copy`.
    ///
    /// # Errors
    /// Returns error if `self` is not a descendant of `ancestor`
    pub fn relative_to(&self, ancestor: &Self) -> Result<Self, PathError> {
        if !ancestor.is_prefix_of(self) {
            return Err(PathError::NotDescendant {
                path: self.to_string(),
                ancestor: ancestor.to_string(),
            });
        }
        Ok(Self(self.0[ancestor.0.len()..].to_vec()))
    }

    /// Iterator over segments from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Bytes of the rendered form, without allocating
    ///
    /// Ordering over paths is defined on these bytes so that sorting
    /// paths matches sorting their rendered strings.
    fn rendered_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.0
            .iter()
            .flat_map(|seg| std::iter::once(b'/').chain(seg.bytes()))
    }
}

impl PartialOrd for EndpointPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EndpointPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rendered_bytes().cmp(other.rendered_bytes())
    }
}

impl Display for EndpointPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// Validate one path segment: a literal or a `{param}` template
fn validate_segment(segment: &str) -> Result<(), PathError> {
    if segment.is_empty() {
        return Err(PathError::EmptySegment);
    }
    if let Some(inner) = segment.strip_prefix('{') {
        let name = inner
            .strip_suffix('}')
            .ok_or_else(|| PathError::InvalidSegment(segment.to_string()))?;
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(PathError::InvalidSegment(segment.to_string()));
        }
        return Ok(());
    }
    if segment.contains(['{', '}']) || segment.contains(char::is_whitespace) {
        return Err(PathError::InvalidSegment(segment.to_string()));
    }
    Ok(())
}

impl FromStr for EndpointPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(rest) = s.strip_prefix('/') else {
            return Err(PathError::Relative(s.to_string()));
        };
        if rest.is_empty() {
            return Ok(Self::root());
        }

        let segments: Vec<String> = rest
            .split('/')
            .map(|seg| {
                validate_segment(seg)?;
                Ok(seg.to_string())
            })
            .collect::<Result<_, PathError>>()?;

        Ok(Self(segments))
    }
}

impl Serialize for EndpointPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EndpointPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

/// Errors related to endpoint paths
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Path does not start with a slash
    #[error("path '{0}' is not absolute (must start with '/')")]
    Relative(String),

    /// Empty segment in path
    #[error("path contains empty segment")]
    EmptySegment,

    /// Invalid segment characters or malformed template
    #[error("invalid segment: {0}")]
    InvalidSegment(String),

    /// Not a descendant path
    #[error("path '{path}' is not a descendant of '{ancestor}'")]
    NotDescendant {
        /// The path that was expected to be a descendant
        path: String,
        /// The candidate ancestor
        ancestor: String,
    },
}
