//! API Navigation Input Model
//!
//! Typed, validated input model for API documentation navigation.
//!
//! # Core Concepts
//!
//! - [`EndpointPath`]: Absolute, slash-delimited URL path template
//! - [`EndpointSpec`]: One API operation group (path + optional display name)
//! - [`ApiModel`]: Validated document: endpoints in declaration order plus
//!   Documentation, Types and Security item lists
//!
//! # Example
//!
//! ```rust
//! use apinav_model::ApiModel;
//!
//! let model = ApiModel::builder()
//!     .named_path("/files", "Files")?
//!     .path("/files/{fileId}/copy")?
//!     .build()?;
//!
//! assert_eq!(model.endpoint_count(), 2);
//! # Ok::<(), apinav_model::ModelError>(())
//! ```

// Core modules
mod endpoint;
mod model;
mod path;

// Re-exports
pub use endpoint::{DocumentationItem, EndpointSpec, SecurityItem, TypeItem};
pub use model::{ApiModel, ApiModelBuilder, ModelError};
pub use path::{EndpointPath, PathError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
