//! Navigation tree behaviour over the Google Drive document
//!
//! Mirrors the viewer's own test suite: entry labels in declaration
//! order, alphabetical order and full-path mode, plus section
//! visibility and the per-section item lists.

use apinav_fixtures::{google_drive_api, init_tracing};
use apinav_tree::{NavigationTree, Section, SectionState};
use pretty_assertions::assert_eq;

/// Expected (path, label) rows in declaration order, relative labels
const DECLARATION_ORDER: [(&str, &str); 32] = [
    ("/files", "Files"),
    ("/files/{fileId}", "Get file"),
    ("/files/{fileId}/copy", "/copy"),
    ("/files/{fileId}/touch", "/touch"),
    ("/files/{fileId}/trash", "/trash"),
    ("/files/{fileId}/untrash", "/untrash"),
    ("/files/{fileId}/parents", "/parents"),
    ("/files/{fileId}/parents/{parentId}", "/{parentId}"),
    ("/files/{fileId}/permissions", "/permissions"),
    ("/files/{fileId}/permissions/{permissionId}", "/{permissionId}"),
    ("/files/{fileId}/revisions", "/revisions"),
    ("/files/{fileId}/revisions/{revisionId}", "/{revisionId}"),
    ("/files/{fileId}/comments", "/comments"),
    ("/files/{fileId}/comments/{commentId}", "/{commentId}"),
    ("/files/{fileId}/comments/{commentId}/replies", "/replies"),
    ("/files/{fileId}/comments/{commentId}/replies/{replyId}", "/{replyId}"),
    ("/files/{fileId}/realtime", "/realtime"),
    ("/files/{fileId}/properties", "/properties"),
    ("/files/{fileId}/properties/{propertyKey}", "/{propertyKey}"),
    ("/files/trash", "/trash"),
    ("/files/{folderId}/children", "/{folderId}/children"),
    ("/files/{folderId}/children/{childId}", "/{childId}"),
    ("/about", "About"),
    ("/changes", "Changes"),
    ("/changes/{changeId}", "/{changeId}"),
    ("/changes/watch", "/watch"),
    ("/permissionIds/{email}", "/permissionIds/{email}"),
    ("/apps", "Apps"),
    ("/apps/{appId}", "/{appId}"),
    ("/channels/stop", "/channels/stop"),
    ("/teamdrives", "Teamdrives"),
    ("/teamdrives/{teamDriveId}", "/{teamDriveId}"),
];

/// Expected (path, label) rows in alphabetical order, relative labels
const ALPHABETICAL_ORDER: [(&str, &str); 32] = [
    ("/about", "About"),
    ("/apps", "Apps"),
    ("/apps/{appId}", "/{appId}"),
    ("/changes", "Changes"),
    ("/changes/watch", "/watch"),
    ("/changes/{changeId}", "/{changeId}"),
    ("/channels/stop", "/channels/stop"),
    ("/files", "Files"),
    ("/files/trash", "/trash"),
    ("/files/{fileId}", "Get file"),
    ("/files/{fileId}/comments", "/comments"),
    ("/files/{fileId}/comments/{commentId}", "/{commentId}"),
    ("/files/{fileId}/comments/{commentId}/replies", "/replies"),
    ("/files/{fileId}/comments/{commentId}/replies/{replyId}", "/{replyId}"),
    ("/files/{fileId}/copy", "/copy"),
    ("/files/{fileId}/parents", "/parents"),
    ("/files/{fileId}/parents/{parentId}", "/{parentId}"),
    ("/files/{fileId}/permissions", "/permissions"),
    ("/files/{fileId}/permissions/{permissionId}", "/{permissionId}"),
    ("/files/{fileId}/properties", "/properties"),
    ("/files/{fileId}/properties/{propertyKey}", "/{propertyKey}"),
    ("/files/{fileId}/realtime", "/realtime"),
    ("/files/{fileId}/revisions", "/revisions"),
    ("/files/{fileId}/revisions/{revisionId}", "/{revisionId}"),
    ("/files/{fileId}/touch", "/touch"),
    ("/files/{fileId}/trash", "/trash"),
    ("/files/{fileId}/untrash", "/untrash"),
    ("/files/{folderId}/children", "/{folderId}/children"),
    ("/files/{folderId}/children/{childId}", "/{childId}"),
    ("/permissionIds/{email}", "/permissionIds/{email}"),
    ("/teamdrives", "Teamdrives"),
    ("/teamdrives/{teamDriveId}", "/{teamDriveId}"),
];

fn rows(tree: &NavigationTree) -> Vec<(String, String)> {
    tree.entries()
        .iter()
        .map(|entry| (entry.path.to_string(), entry.label.clone()))
        .collect()
}

fn expected(table: &[(&str, &str)]) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(path, label)| ((*path).to_string(), (*label).to_string()))
        .collect()
}

#[test]
fn lists_all_endpoints_in_declaration_order() {
    init_tracing();
    let tree = NavigationTree::new(google_drive_api());
    assert_eq!(rows(&tree), expected(&DECLARATION_ORDER));
}

#[test]
fn lists_endpoints_alphabetically_when_rearranged() {
    init_tracing();
    let mut tree = NavigationTree::new(google_drive_api());
    tree.set_rearrange_endpoints(true);
    assert_eq!(rows(&tree), expected(&ALPHABETICAL_ORDER));
}

#[test]
fn full_path_mode_labels_every_entry_with_its_path() {
    init_tracing();
    let mut tree = NavigationTree::new(google_drive_api());
    tree.set_render_full_paths(true);

    let entries = tree.entries();
    assert_eq!(entries.len(), 32);
    for entry in entries.iter() {
        assert_eq!(entry.label, entry.path.to_string());
    }
}

#[test]
fn toggling_modes_back_restores_original_rows() {
    let mut tree = NavigationTree::new(google_drive_api());

    tree.set_rearrange_endpoints(true);
    tree.set_render_full_paths(true);
    tree.set_rearrange_endpoints(false);
    tree.set_render_full_paths(false);

    assert_eq!(rows(&tree), expected(&DECLARATION_ORDER));
}

#[test]
fn endpoints_section_open_by_default_others_closed() {
    let tree = NavigationTree::new(google_drive_api());
    assert_eq!(tree.section_state(Section::Endpoints), SectionState::Open);
    for section in [
        Section::Summary,
        Section::Documentation,
        Section::Types,
        Section::Security,
    ] {
        assert_eq!(tree.section_state(section), SectionState::Closed, "{section:?}");
    }
}

#[test]
fn endpoints_section_toggles_both_ways() {
    let mut tree = NavigationTree::new(google_drive_api());

    assert_eq!(tree.toggle_section(Section::Endpoints), SectionState::Closed);
    assert_eq!(tree.section_state(Section::Endpoints), SectionState::Closed);

    assert_eq!(tree.toggle_section(Section::Endpoints), SectionState::Open);
    assert_eq!(tree.section_state(Section::Endpoints), SectionState::Open);
}

#[test]
fn closed_sections_reopen_independently() {
    let mut tree = NavigationTree::new(google_drive_api());

    tree.open_section(Section::Documentation);
    assert_eq!(tree.section_state(Section::Documentation), SectionState::Open);
    assert_eq!(tree.section_state(Section::Types), SectionState::Closed);

    tree.open_section(Section::Types);
    tree.open_section(Section::Security);
    assert_eq!(tree.section_state(Section::Types), SectionState::Open);
    assert_eq!(tree.section_state(Section::Security), SectionState::Open);
}

#[test]
fn closing_endpoints_section_keeps_entry_list() {
    let mut tree = NavigationTree::new(google_drive_api());
    tree.close_section(Section::Endpoints);
    assert_eq!(tree.entries().len(), 32);
}

#[test]
fn documentation_items_listed_in_order() {
    let tree = NavigationTree::new(google_drive_api());
    let titles: Vec<&str> = tree.documentation().iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Headline", "Upload files", "Search for file"]);
}

#[test]
fn type_items_listed_in_order_with_duplicates() {
    let tree = NavigationTree::new(google_drive_api());
    let names: Vec<&str> = tree.types().iter().map(|t| t.name.as_str()).collect();

    assert_eq!(names.len(), 50);
    assert_eq!(names[0], "TeamDrive");
    assert_eq!(names[49], "PropertyList");

    // The source document reuses some inline types.
    assert_eq!(names.iter().filter(|n| **n == "User").count(), 4);
}

#[test]
fn security_section_lists_single_scheme() {
    let tree = NavigationTree::new(google_drive_api());
    assert_eq!(tree.security_labels(), vec!["oauth_2_0 - OAuth 2.0".to_string()]);
}

#[test]
fn summary_label_can_be_overridden_or_disabled() {
    let mut tree = NavigationTree::new(google_drive_api());
    assert_eq!(tree.summary_label(), Some("Summary"));

    tree.set_summary_label("My summary label");
    assert_eq!(tree.summary_label(), Some("My summary label"));

    tree.set_summary_enabled(false);
    assert_eq!(tree.summary_label(), None);
    assert!(!tree.summary_enabled());
}

#[test]
fn operations_opened_expands_every_entry() {
    let mut tree = NavigationTree::new(google_drive_api());
    assert!(tree.entries().iter().all(|e| !e.expanded));

    tree.set_operations_opened(true);
    assert!(tree.entries().iter().all(|e| e.expanded));

    tree.set_operations_opened(false);
    assert!(tree.entries().iter().all(|e| !e.expanded));
}

#[test]
fn overview_suppressed_when_no_overview_set() {
    let mut tree = NavigationTree::new(google_drive_api());
    assert!(tree.show_overview());

    tree.set_no_overview(true);
    assert!(!tree.show_overview());
}
