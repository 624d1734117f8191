//! Lookup failures in data sources

/// A data source lookup matched no entity.
///
/// ```
/// use servarr_bridge::error::DataNotFoundError;
///
/// let err = DataNotFoundError::new("radarr_tag", "label", "test");
/// assert_eq!(err.to_string(), "data source not found: no radarr_tag with label 'test'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("data source not found: no {kind} with {field} '{search}'")]
pub struct DataNotFoundError {
    /// The resource kind searched for (e.g. `radarr_tag`).
    pub kind: String,
    /// The attribute searched on.
    pub field: String,
    /// The searched value.
    pub search: String,
}

impl DataNotFoundError {
    /// Creates a new not-found error.
    pub fn new(kind: impl Into<String>, field: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            field: field.into(),
            search: search.into(),
        }
    }
}

impl super::ResponseBody for DataNotFoundError {}
