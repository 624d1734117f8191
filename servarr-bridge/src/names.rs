//! Bidirectional mapping between API field names and schema attribute names.
//!
//! The mapping is total: any name that is not listed maps to itself. Lookups
//! are exact, case-sensitive string comparisons over a short ordered list.
//!
//! # Example
//!
//! ```
//! use servarr_bridge::names::{to_api, to_schema};
//!
//! assert_eq!(to_schema("seedCriteria.seedTime"), "seedTime");
//! assert_eq!(to_api("seedTime"), "seedCriteria.seedTime");
//! assert_eq!(to_schema("baseUrl"), "baseUrl");
//! ```

use std::sync::OnceLock;

/// The authoritative `(api_name, schema_name)` table.
pub const DEFAULT_NAME_MAP: &[(&str, &str)] = &[
    ("tags", "fieldTags"),
    ("seedCriteria.seedTime", "seedTime"),
    ("seedCriteria.seedRatio", "seedRatio"),
    ("seedCriteria.seasonPackSeedTime", "seasonPackSeedTime"),
    ("filterCriteria.minVoteAverage", "minVoteAverage"),
    ("filterCriteria.minVotes", "minVotes"),
    ("filterCriteria.includeGenreIds", "includeGenreIds"),
    ("filterCriteria.excludeGenreIds", "excludeGenreIds"),
    ("filterCriteria.languageCode", "languageCode"),
    ("filterCriteria.certification", "tmdbCertification"),
    ("listType", "userListType"),
];

static GLOBAL: OnceLock<NameMap> = OnceLock::new();

/// Rewrites an API field name into its schema attribute name using the
/// global map.
pub fn to_schema(api_name: &str) -> &str {
    NameMap::global().to_schema(api_name)
}

/// Rewrites a schema attribute name into its API field name using the
/// global map.
pub fn to_api(schema_name: &str) -> &str {
    NameMap::global().to_api(schema_name)
}

/// An ordered list of `(api_name, schema_name)` pairs.
///
/// `NameMap::default()` holds [`DEFAULT_NAME_MAP`]. Resources that need a
/// different view can derive one with the builder methods, which keep the
/// list injective in both directions.
///
/// ```
/// use servarr_bridge::NameMap;
///
/// // A resource without a `fieldTags` attribute keeps `tags` as-is.
/// let names = NameMap::default().without_api_name("tags");
/// assert_eq!(names.to_schema("tags"), "tags");
/// assert_eq!(names.to_schema("listType"), "userListType");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMap {
    entries: Vec<(String, String)>,
}

impl Default for NameMap {
    fn default() -> Self {
        Self {
            entries: DEFAULT_NAME_MAP
                .iter()
                .map(|(api, schema)| (api.to_string(), schema.to_string()))
                .collect(),
        }
    }
}

impl NameMap {
    /// Returns the process-wide map, built from [`DEFAULT_NAME_MAP`] on first
    /// access.
    pub fn global() -> &'static NameMap {
        GLOBAL.get_or_init(NameMap::default)
    }

    /// Creates a map with no entries, under which every name is its own image.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a pair, replacing any existing pair that shares either name.
    pub fn with_entry(mut self, api_name: impl Into<String>, schema_name: impl Into<String>) -> Self {
        let api_name = api_name.into();
        let schema_name = schema_name.into();
        self.entries
            .retain(|(api, schema)| *api != api_name && *schema != schema_name);
        self.entries.push((api_name, schema_name));
        self
    }

    /// Removes the pair whose API name is `api_name`, if any.
    pub fn without_api_name(mut self, api_name: &str) -> Self {
        self.entries.retain(|(api, _)| api != api_name);
        self
    }

    /// Returns the schema name paired with `api_name`, or `api_name` itself.
    pub fn to_schema<'a>(&'a self, api_name: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(api, _)| api == api_name)
            .map_or(api_name, |(_, schema)| schema.as_str())
    }

    /// Returns the API name paired with `schema_name`, or `schema_name` itself.
    pub fn to_api<'a>(&'a self, schema_name: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(_, schema)| schema == schema_name)
            .map_or(schema_name, |(api, _)| api.as_str())
    }

    /// Returns the pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(api, schema)| (api.as_str(), schema.as_str()))
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no pairs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
