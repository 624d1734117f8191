//! Summary and detail pairs for the caller's diagnostics channel

use std::fmt;

use super::ResponseBody;
use super::CLIENT_ERROR;
use super::DATA_SOURCE_ERROR;

/// A reportable error: a category summary plus a formatted detail.
///
/// The summary is one of the category constants in this module
/// (e.g. [`CLIENT_ERROR`]); the detail is built by
/// [`client_error`](super::client_error) or [`not_found`](super::not_found).
///
/// ```
/// use servarr_bridge::error::{Diagnostic, READ};
///
/// let diag = Diagnostic::client(READ, "radarr_tag", "timeout");
/// assert_eq!(diag.summary, "Client Error");
/// assert_eq!(diag.detail, "Unable to read radarr_tag, got error: timeout");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Short category summary.
    pub summary: &'static str,
    /// Full user-facing message.
    pub detail: String,
}

impl Diagnostic {
    /// Creates a diagnostic from a summary and detail.
    pub fn new(summary: &'static str, detail: impl Into<String>) -> Self {
        Self {
            summary,
            detail: detail.into(),
        }
    }

    /// Reports a failed client call under [`CLIENT_ERROR`].
    pub fn client<E>(action: &str, name: &str, err: &E) -> Self
    where
        E: fmt::Display + ResponseBody + ?Sized,
    {
        Self::new(CLIENT_ERROR, super::client_error(action, name, err))
    }

    /// Reports a failed data source lookup under [`DATA_SOURCE_ERROR`].
    pub fn not_found(kind: &str, field: &str, search: &str) -> Self {
        Self::new(DATA_SOURCE_ERROR, super::not_found(kind, field, search))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.summary, self.detail)
    }
}
