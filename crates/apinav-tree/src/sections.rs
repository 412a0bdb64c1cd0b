//! Section visibility state
//!
//! Each top-level navigation section carries an explicit open/closed
//! state, with no coupling to any markup representation. Closing a
//! section never discards computed entries; only visibility changes.

use serde::{Deserialize, Serialize};

/// Top-level navigation sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// API summary
    Summary,
    /// Endpoint tree
    Endpoints,
    /// Documentation pages
    Documentation,
    /// Declared types
    Types,
    /// Security schemes
    Security,
}

impl Section {
    /// All sections, in display order
    pub const ALL: [Section; 5] = [
        Section::Summary,
        Section::Endpoints,
        Section::Documentation,
        Section::Types,
        Section::Security,
    ];
}

/// Visibility of one section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionState {
    /// Section content is visible
    Open,
    /// Section content is hidden
    Closed,
}

impl SectionState {
    /// The opposite state
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Check if the state is [`SectionState::Open`]
    #[inline]
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Visibility flags for all sections
///
/// Defaults follow the viewer: Endpoints starts open, everything else
/// closed. Sections are independent; toggling one never affects another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionStates {
    summary: SectionState,
    endpoints: SectionState,
    documentation: SectionState,
    types: SectionState,
    security: SectionState,
}

impl Default for SectionStates {
    fn default() -> Self {
        Self {
            summary: SectionState::Closed,
            endpoints: SectionState::Open,
            documentation: SectionState::Closed,
            types: SectionState::Closed,
            security: SectionState::Closed,
        }
    }
}

impl SectionStates {
    /// Default states (Endpoints open, others closed)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a section
    #[inline]
    #[must_use]
    pub fn get(&self, section: Section) -> SectionState {
        match section {
            Section::Summary => self.summary,
            Section::Endpoints => self.endpoints,
            Section::Documentation => self.documentation,
            Section::Types => self.types,
            Section::Security => self.security,
        }
    }

    /// Set a section to an explicit state (idempotent)
    pub fn set(&mut self, section: Section, state: SectionState) {
        let slot = match section {
            Section::Summary => &mut self.summary,
            Section::Endpoints => &mut self.endpoints,
            Section::Documentation => &mut self.documentation,
            Section::Types => &mut self.types,
            Section::Security => &mut self.security,
        };
        *slot = state;
    }

    /// Flip a section, returning the new state
    pub fn toggle(&mut self, section: Section) -> SectionState {
        let next = self.get(section).toggled();
        self.set(section, next);
        next
    }
}
