//! Testing fixtures for the API navigation workspace
//!
//! Shared models and logging setup. The Google Drive fixture mirrors the
//! document used by the viewer's own test suite: 32 endpoints, 3
//! documentation pages, 50 declared types and one security scheme.

#![allow(missing_docs)]

use std::sync::Once;

use apinav_model::{ApiModel, DocumentationItem, SecurityItem, TypeItem};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize test logging once per process
///
/// Filter level via `RUST_LOG`, e.g. `RUST_LOG=apinav_tree=debug`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Endpoint paths and display names of the Google Drive API document,
/// in declaration order
pub const GOOGLE_DRIVE_ENDPOINTS: [(&str, Option<&str>); 32] = [
    ("/files", Some("Files")),
    ("/files/{fileId}", Some("Get file")),
    ("/files/{fileId}/copy", None),
    ("/files/{fileId}/touch", None),
    ("/files/{fileId}/trash", None),
    ("/files/{fileId}/untrash", None),
    ("/files/{fileId}/parents", None),
    ("/files/{fileId}/parents/{parentId}", None),
    ("/files/{fileId}/permissions", None),
    ("/files/{fileId}/permissions/{permissionId}", None),
    ("/files/{fileId}/revisions", None),
    ("/files/{fileId}/revisions/{revisionId}", None),
    ("/files/{fileId}/comments", None),
    ("/files/{fileId}/comments/{commentId}", None),
    ("/files/{fileId}/comments/{commentId}/replies", None),
    ("/files/{fileId}/comments/{commentId}/replies/{replyId}", None),
    ("/files/{fileId}/realtime", None),
    ("/files/{fileId}/properties", None),
    ("/files/{fileId}/properties/{propertyKey}", None),
    ("/files/trash", None),
    ("/files/{folderId}/children", None),
    ("/files/{folderId}/children/{childId}", None),
    ("/about", Some("About")),
    ("/changes", Some("Changes")),
    ("/changes/{changeId}", None),
    ("/changes/watch", None),
    ("/permissionIds/{email}", None),
    ("/apps", Some("Apps")),
    ("/apps/{appId}", None),
    ("/channels/stop", None),
    ("/teamdrives", Some("Teamdrives")),
    ("/teamdrives/{teamDriveId}", None),
];

/// Documentation page titles of the Google Drive document
pub const GOOGLE_DRIVE_DOCUMENTATION: [&str; 3] = ["Headline", "Upload files", "Search for file"];

/// Declared type names of the Google Drive document
///
/// Names repeat (`User`, `Property`) because the source document reuses
/// inline type declarations.
pub const GOOGLE_DRIVE_TYPES: [&str; 50] = [
    "TeamDrive",
    "TeamDriveList",
    "Icon",
    "App",
    "AppList",
    "Parent",
    "ParentList",
    "Child",
    "ChildrenList",
    "Change",
    "ChangeList",
    "Watch",
    "WatchResponse",
    "Thumbnail",
    "Owners",
    "Labels",
    "Resource",
    "FileList",
    "User",
    "DriveFile",
    "FileCapabilities",
    "Picture",
    "Property",
    "File",
    "Permission",
    "PermissionInsert",
    "PermissionList",
    "PermissionId",
    "RevisionInsert",
    "Revision",
    "RevisionBase",
    "User",
    "RevisionList",
    "ExportFormat",
    "AdditionalRoleInfo",
    "About",
    "UploadSize",
    "ImportFormat",
    "ServiceQuota",
    "User",
    "Feature",
    "ReplyList",
    "ReplyWritable",
    "CommentList",
    "CommentWritable",
    "Reply",
    "User",
    "Comment",
    "Property",
    "PropertyList",
];

/// The Google Drive API model
///
/// # Panics
/// Panics if the fixture tables are internally inconsistent; they are
/// constants, so that would be a fixture bug.
#[must_use]
pub fn google_drive_api() -> ApiModel {
    let mut builder = ApiModel::builder();
    for (path, name) in GOOGLE_DRIVE_ENDPOINTS {
        builder = match name {
            Some(name) => builder.named_path(path, name).unwrap(),
            None => builder.path(path).unwrap(),
        };
    }
    for title in GOOGLE_DRIVE_DOCUMENTATION {
        builder = builder.documentation(DocumentationItem::new(title));
    }
    for name in GOOGLE_DRIVE_TYPES {
        builder = builder.type_item(TypeItem::new(name));
    }
    builder = builder.security(SecurityItem::new("oauth_2_0", "OAuth 2.0"));
    builder.build().unwrap()
}

/// A minimal three-endpoint model for focused tests
///
/// # Panics
/// Panics only on a fixture bug (the paths are constant and valid).
#[must_use]
pub fn files_api() -> ApiModel {
    ApiModel::builder()
        .named_path("/files", "Files")
        .unwrap()
        .named_path("/files/{fileId}", "Get file")
        .unwrap()
        .path("/files/{fileId}/copy")
        .unwrap()
        .build()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_drive_fixture_counts() {
        let model = google_drive_api();
        assert_eq!(model.endpoint_count(), 32);
        assert_eq!(model.documentation().len(), 3);
        assert_eq!(model.types().len(), 50);
        assert_eq!(model.security().len(), 1);
    }

    #[test]
    fn files_fixture_counts() {
        assert_eq!(files_api().endpoint_count(), 3);
    }
}
