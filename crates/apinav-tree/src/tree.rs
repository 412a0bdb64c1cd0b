//! Navigation tree facade
//!
//! Owns the input model, the formatting options and the section states,
//! and publishes the derived entry list. Recomputation is synchronous
//! and whole-list: a fresh list is built, then swapped in. Consumers
//! holding a previous snapshot keep a consistent view.

use std::sync::Arc;

use apinav_model::{ApiModel, DocumentationItem, TypeItem};
use tracing::debug;

use crate::entry::NavigationEntry;
use crate::label::compute_label;
use crate::options::FormatOptions;
use crate::sections::{Section, SectionState, SectionStates};

/// Label shown for the Summary section unless overridden
pub const DEFAULT_SUMMARY_LABEL: &str = "Summary";

/// Build the entry list for a model under the given options
///
/// Pure: identical inputs yield identical output. Declaration order is
/// kept unless `rearrange_endpoints` is set, in which case entries are
/// sorted by full path in byte order. The `order` field reflects the
/// final position either way.
#[must_use]
pub fn compute_entries(
    model: &ApiModel,
    options: FormatOptions,
    expanded: bool,
) -> Vec<NavigationEntry> {
    let mut specs: Vec<_> = model.endpoints().collect();
    if options.rearrange_endpoints {
        specs.sort_by(|a, b| a.path.cmp(&b.path));
    }

    specs
        .into_iter()
        .enumerate()
        .map(|(order, spec)| NavigationEntry {
            path: spec.path.clone(),
            label: compute_label(model, spec, options.render_full_paths),
            order,
            expanded,
        })
        .collect()
}

/// The navigation tree of one API document
///
/// Flag setters recompute the published entry list only when the value
/// actually changes; section visibility changes never recompute.
#[derive(Debug, Clone)]
pub struct NavigationTree {
    model: ApiModel,
    options: FormatOptions,
    sections: SectionStates,
    summary_enabled: bool,
    summary_label: Option<String>,
    operations_opened: bool,
    no_overview: bool,
    entries: Arc<[NavigationEntry]>,
}

impl NavigationTree {
    /// Build a tree over a validated model with default options
    #[must_use]
    pub fn new(model: ApiModel) -> Self {
        let options = FormatOptions::default();
        let entries = Arc::from(compute_entries(&model, options, false));
        Self {
            model,
            options,
            sections: SectionStates::default(),
            summary_enabled: true,
            summary_label: None,
            operations_opened: false,
            no_overview: false,
            entries,
        }
    }

    /// Rebuild and publish the entry list
    fn recompute(&mut self) {
        debug!(
            rearrange = self.options.rearrange_endpoints,
            full_paths = self.options.render_full_paths,
            endpoints = self.model.endpoint_count(),
            "recomputing navigation entries"
        );
        self.entries = Arc::from(compute_entries(
            &self.model,
            self.options,
            self.operations_opened,
        ));
    }

    /// Snapshot of the published entry list
    ///
    /// Cheap to clone; unaffected by later recomputations.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> Arc<[NavigationEntry]> {
        Arc::clone(&self.entries)
    }

    /// The input model
    #[inline]
    #[must_use]
    pub fn model(&self) -> &ApiModel {
        &self.model
    }

    /// Active formatting options
    #[inline]
    #[must_use]
    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// Replace both formatting flags at once
    pub fn set_options(&mut self, options: FormatOptions) {
        if self.options != options {
            self.options = options;
            self.recompute();
        }
    }

    /// Switch between declaration order and alphabetical order
    pub fn set_rearrange_endpoints(&mut self, rearrange: bool) {
        self.set_options(FormatOptions {
            rearrange_endpoints: rearrange,
            ..self.options
        });
    }

    /// Switch between relative and full-path labels
    pub fn set_render_full_paths(&mut self, full_paths: bool) {
        self.set_options(FormatOptions {
            render_full_paths: full_paths,
            ..self.options
        });
    }

    /// Current visibility of a section
    #[inline]
    #[must_use]
    pub fn section_state(&self, section: Section) -> SectionState {
        self.sections.get(section)
    }

    /// Flip a section's visibility, returning the new state
    pub fn toggle_section(&mut self, section: Section) -> SectionState {
        self.sections.toggle(section)
    }

    /// Open a section (idempotent)
    pub fn open_section(&mut self, section: Section) {
        self.sections.set(section, SectionState::Open);
    }

    /// Close a section (idempotent)
    ///
    /// The computed entry list is retained; only visibility changes.
    pub fn close_section(&mut self, section: Section) {
        self.sections.set(section, SectionState::Closed);
    }

    /// Whether the Summary section is rendered at all
    #[inline]
    #[must_use]
    pub fn summary_enabled(&self) -> bool {
        self.summary_enabled
    }

    /// Show or hide the Summary section entirely
    pub fn set_summary_enabled(&mut self, enabled: bool) {
        self.summary_enabled = enabled;
    }

    /// Label for the Summary section, or `None` when disabled
    #[must_use]
    pub fn summary_label(&self) -> Option<&str> {
        if !self.summary_enabled {
            return None;
        }
        Some(self.summary_label.as_deref().unwrap_or(DEFAULT_SUMMARY_LABEL))
    }

    /// Override the Summary section label
    pub fn set_summary_label(&mut self, label: impl Into<String>) {
        self.summary_label = Some(label.into());
    }

    /// Whether entries report themselves as expanded
    #[inline]
    #[must_use]
    pub fn operations_opened(&self) -> bool {
        self.operations_opened
    }

    /// Expand or collapse every endpoint's operation list
    pub fn set_operations_opened(&mut self, opened: bool) {
        if self.operations_opened != opened {
            self.operations_opened = opened;
            self.recompute();
        }
    }

    /// Whether the renderer should show per-endpoint overview rows
    #[inline]
    #[must_use]
    pub fn show_overview(&self) -> bool {
        !self.no_overview
    }

    /// Suppress (or restore) per-endpoint overview rows
    pub fn set_no_overview(&mut self, no_overview: bool) {
        self.no_overview = no_overview;
    }

    /// Documentation items, in declaration order
    #[inline]
    #[must_use]
    pub fn documentation(&self) -> &[DocumentationItem] {
        self.model.documentation()
    }

    /// Type items, in declaration order
    #[inline]
    #[must_use]
    pub fn types(&self) -> &[TypeItem] {
        self.model.types()
    }

    /// Security section labels (`{name} - {scheme}`)
    #[must_use]
    pub fn security_labels(&self) -> Vec<String> {
        self.model.security().iter().map(|item| item.label()).collect()
    }
}
