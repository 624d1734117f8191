//! Bulk transfer of a whole field bag, driven by per-kind name lists

use super::FieldBridge;
use crate::model::AttrKind;
use crate::model::Field;
use crate::model::Resource;

/// Schema attribute names grouped by kind.
///
/// A resource declares which of its attributes live in the API's dynamic
/// field bag and what kind each one is. Names are schema names; the bridge
/// applies the name map on both directions.
///
/// # Example
///
/// ```
/// use servarr_bridge::FieldLists;
///
/// let lists = FieldLists::new()
///     .strings(["baseUrl", "apiKey"])
///     .int64s(["seedTime", "minimumSeeders"])
///     .float64s(["seedRatio"])
///     .int64_sets(["categories"]);
///
/// assert_eq!(lists.len(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldLists {
    /// String attributes.
    pub strings: Vec<String>,
    /// Boolean attributes.
    pub bools: Vec<String>,
    /// 64-bit integer attributes.
    pub int64s: Vec<String>,
    /// 64-bit float attributes.
    pub float64s: Vec<String>,
    /// Set-of-string attributes.
    pub string_sets: Vec<String>,
    /// Set-of-int64 attributes.
    pub int64_sets: Vec<String>,
}

impl FieldLists {
    /// Creates empty lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds string attributes.
    pub fn strings<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.strings.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds boolean attributes.
    pub fn bools<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.bools.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds integer attributes.
    pub fn int64s<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.int64s.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds float attributes.
    pub fn float64s<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.float64s.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds string set attributes.
    pub fn string_sets<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.string_sets.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds integer set attributes.
    pub fn int64_sets<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.int64_sets.extend(names.into_iter().map(Into::into));
        self
    }

    /// Returns the kind declared for `schema_name`, if listed.
    ///
    /// When a name is listed more than once the first list wins, in the
    /// order strings, bools, int64s, float64s, string sets, int64 sets.
    pub fn kind_of(&self, schema_name: &str) -> Option<AttrKind> {
        self.iter()
            .find(|(name, _)| *name == schema_name)
            .map(|(_, kind)| kind)
    }

    /// Iterates over every `(schema_name, kind)` pair in list order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, AttrKind)> {
        tagged(&self.strings, AttrKind::String)
            .chain(tagged(&self.bools, AttrKind::Bool))
            .chain(tagged(&self.int64s, AttrKind::Int64))
            .chain(tagged(&self.float64s, AttrKind::Float64))
            .chain(tagged(&self.string_sets, AttrKind::StringSet))
            .chain(tagged(&self.int64_sets, AttrKind::Int64Set))
    }

    /// Returns the total number of listed names.
    pub fn len(&self) -> usize {
        self.strings.len()
            + self.bools.len()
            + self.int64s.len()
            + self.float64s.len()
            + self.string_sets.len()
            + self.int64_sets.len()
    }

    /// Returns `true` if no names are listed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn tagged(names: &[String], kind: AttrKind) -> impl Iterator<Item = (&str, AttrKind)> {
    names.iter().map(move |name| (name.as_str(), kind))
}

impl FieldBridge<'_> {
    /// Writes every listed field of an API field bag into `resource`.
    ///
    /// Fields whose mapped name is not listed are ignored, so one unexpected
    /// entry never stops the rest of the bag from being applied.
    pub fn write_fields<R: Resource + ?Sized>(&self, fields: &[Field], resource: &mut R, lists: &FieldLists) {
        for field in fields {
            let schema_name = self.names().to_schema(field.get_name());
            let Some(kind) = lists.kind_of(schema_name) else {
                log::trace!("field '{}' is not managed, skipping", field.get_name());
                continue;
            };

            log::trace!("writing field '{}' as {}", field.get_name(), kind);
            match kind {
                AttrKind::String => self.write_string(field, resource),
                AttrKind::Bool => self.write_bool(field, resource),
                AttrKind::Int64 => self.write_int64(field, resource),
                AttrKind::Float64 => self.write_float64(field, resource),
                AttrKind::StringSet => self.write_string_set(field, resource),
                AttrKind::Int64Set => self.write_int64_set(field, resource),
            }
        }
    }

    /// Reads every listed attribute of `resource` into a new API field bag.
    ///
    /// Null, unknown and empty-set attributes emit nothing.
    pub fn read_fields<R: Resource + ?Sized>(&self, resource: &R, lists: &FieldLists) -> Vec<Field> {
        lists
            .iter()
            .filter_map(|(name, kind)| {
                log::trace!("reading attribute '{}' as {}", name, kind);
                match kind {
                    AttrKind::String => self.read_string(name, resource),
                    AttrKind::Bool => self.read_bool(name, resource),
                    AttrKind::Int64 => self.read_int64(name, resource),
                    AttrKind::Float64 => self.read_float64(name, resource),
                    AttrKind::StringSet => self.read_string_set(name, resource),
                    AttrKind::Int64Set => self.read_int64_set(name, resource),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::BoolAttr;
    use crate::model::Float64Attr;
    use crate::model::Int64Attr;
    use crate::model::Int64SetAttr;
    use crate::model::Set;
    use crate::model::StringAttr;

    #[derive(Debug, Default)]
    struct Indexer {
        base_url: StringAttr,
        enable_rss: BoolAttr,
        seed_time: Int64Attr,
        seed_ratio: Float64Attr,
        categories: Int64SetAttr,
    }

    crate::resource!(Indexer {
        base_url => "BaseURL",
        enable_rss => "EnableRss",
        seed_time => "SeedTime",
        seed_ratio => "SeedRatio",
        categories => "Categories",
    });

    fn lists() -> FieldLists {
        FieldLists::new()
            .strings(["baseUrl"])
            .bools(["enableRss"])
            .int64s(["seedTime"])
            .float64s(["seedRatio"])
            .int64_sets(["categories"])
    }

    #[test]
    fn test_kind_of() {
        let lists = lists();
        assert_eq!(lists.kind_of("seedRatio"), Some(AttrKind::Float64));
        assert_eq!(lists.kind_of("seedCriteria.seedRatio"), None);
        assert!(!lists.is_empty());
    }

    #[test]
    fn test_write_fields() {
        let fields = vec![
            Field::new("baseUrl", "https://indexer.example"),
            Field::new("enableRss", true),
            Field::new("seedCriteria.seedTime", 90),
            Field::new("seedCriteria.seedRatio", 1.5),
            Field::new("categories", json!([2000, 2040])),
            Field::new("apiPath", "/api"),
        ];

        let mut indexer = Indexer::default();
        FieldBridge::default().write_fields(&fields, &mut indexer, &lists());

        assert_eq!(indexer.base_url.get().map(String::as_str), Some("https://indexer.example"));
        assert_eq!(indexer.enable_rss.get(), Some(&true));
        assert_eq!(indexer.seed_time.get(), Some(&90));
        assert_eq!(indexer.seed_ratio.get(), Some(&1.5));
        assert_eq!(indexer.categories.get(), Some(&Set::new([2000, 2040])));
    }

    #[test]
    fn test_read_fields_skips_null() {
        let indexer = Indexer {
            base_url: StringAttr::value("https://indexer.example".to_string()),
            seed_time: Int64Attr::value(90),
            categories: Int64SetAttr::value(Set::default()),
            ..Default::default()
        };

        let fields = FieldBridge::default().read_fields(&indexer, &lists());

        assert_eq!(
            fields,
            vec![
                Field::new("baseUrl", "https://indexer.example"),
                Field::new("seedCriteria.seedTime", 90),
            ]
        );
    }
}
