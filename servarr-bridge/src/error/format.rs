//! Canonical user-facing error strings.
//!
//! The phrasings are matched textually by acceptance tests, so they must not
//! drift.

use std::fmt;

use super::DataNotFoundError;
use super::ResponseBody;

/// Create action.
pub const CREATE: &str = "create";
/// Read action.
pub const READ: &str = "read";
/// Update action.
pub const UPDATE: &str = "update";
/// Delete action.
pub const DELETE: &str = "delete";
/// List action.
pub const LIST: &str = "list";

/// Summary for failures reported by the API client.
pub const CLIENT_ERROR: &str = "Client Error";
/// Summary for resource state failures.
pub const RESOURCE_ERROR: &str = "Resource Error";
/// Summary for data source lookup failures.
pub const DATA_SOURCE_ERROR: &str = "Data Source Error";
/// Summary for malformed import identifiers.
pub const UNEXPECTED_IMPORT_IDENTIFIER: &str = "Unexpected Import Identifier";
/// Summary for a resource configured with the wrong provider data.
pub const UNEXPECTED_RESOURCE_CONFIGURE_TYPE: &str = "Unexpected Resource Configure Type";
/// Summary for a data source configured with the wrong provider data.
pub const UNEXPECTED_DATA_SOURCE_CONFIGURE_TYPE: &str = "Unexpected DataSource Configure Type";

/// Formats a failed data source lookup.
///
/// ```
/// use servarr_bridge::not_found;
///
/// assert_eq!(
///     not_found("radarr_tag", "label", "test"),
///     "Unable to find radarr_tag, got error: data source not found: no radarr_tag with label 'test'"
/// );
/// ```
pub fn not_found(kind: &str, field: &str, search: &str) -> String {
    format!(
        "Unable to find {}, got error: {}",
        kind,
        DataNotFoundError::new(kind, field, search)
    )
}

/// Formats a failed client call.
///
/// When `err` carries a response body, the body is appended after a
/// `Details:` line; otherwise only the error itself is shown.
///
/// ```
/// use servarr_bridge::client_error;
/// use servarr_bridge::error::{ApiError, CREATE};
///
/// let err = ApiError::response(400, "400 Bad Request", "[]");
/// assert_eq!(
///     client_error(CREATE, "radarr_tag", &err),
///     "Unable to create radarr_tag, got error: 400 Bad Request\nDetails:\n[]"
/// );
///
/// assert_eq!(
///     client_error(CREATE, "radarr_tag", "connection refused"),
///     "Unable to create radarr_tag, got error: connection refused"
/// );
/// ```
pub fn client_error<E>(action: &str, name: &str, err: &E) -> String
where
    E: fmt::Display + ResponseBody + ?Sized,
{
    match err.response_body() {
        Some(body) => format!(
            "Unable to {} {}, got error: {}\nDetails:\n{}",
            action,
            name,
            err,
            String::from_utf8_lossy(body)
        ),
        None => format!("Unable to {} {}, got error: {}", action, name, err),
    }
}
