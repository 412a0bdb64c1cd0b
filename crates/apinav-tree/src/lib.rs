//! API Navigation Tree
//!
//! Derived navigation for API documentation viewers.
//!
//! # Core Concepts
//!
//! - [`NavigationEntry`]: One row of the Endpoints section (path, label, order)
//! - [`FormatOptions`]: Alphabetical vs. declaration order, relative vs. full-path labels
//! - [`Section`] / [`SectionState`]: Explicit open/closed visibility per section
//! - [`NavigationTree`]: Facade owning the model, flags and published entries
//!
//! # Example
//!
//! ```rust
//! use apinav_model::ApiModel;
//! use apinav_tree::NavigationTree;
//!
//! let model = ApiModel::builder()
//!     .named_path("/files", "Files")?
//!     .path("/files/{fileId}/copy")?
//!     .build()?;
//!
//! let mut tree = NavigationTree::new(model);
//! tree.set_rearrange_endpoints(true);
//!
//! for entry in tree.entries().iter() {
//!     println!("{} -> {}", entry.path, entry.label);
//! }
//! # Ok::<(), apinav_model::ModelError>(())
//! ```

// Core modules
mod entry;
mod label;
mod options;
mod sections;
mod tree;

// Re-exports
pub use entry::NavigationEntry;
pub use label::{compute_label, nearest_ancestor};
pub use options::FormatOptions;
pub use sections::{Section, SectionState, SectionStates};
pub use tree::{compute_entries, NavigationTree, DEFAULT_SUMMARY_LABEL};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
