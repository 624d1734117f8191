//! Copying single values between API fields and resource attributes.
//!
//! Write operations take an API field, rewrite its name through the
//! [`NameMap`], and store the narrowed value in the resource attribute whose
//! identifier matches case-insensitively. Read operations take a schema name,
//! read the attribute, and emit a field under the mapped API name.
//!
//! Nothing here returns an error. A value of the wrong shape is stored as the
//! zero value of the target kind, and a null, unknown or empty attribute
//! emits no field. Schema mismatches are reported elsewhere by the caller.

pub mod convert;
mod fields;

pub use fields::*;

use serde_json::Value as Json;

use crate::model::Attr;
use crate::model::AttrKind;
use crate::model::AttrValue;
use crate::model::Field;
use crate::model::Resource;
use crate::model::Set;
use crate::names::NameMap;

/// Moves values between API fields and resources under one [`NameMap`].
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use servarr_bridge::{FieldBridge, NameMap};
/// use servarr_bridge::model::{Field, StringSetAttr};
///
/// #[derive(Debug, Default)]
/// struct Notification {
///     tags: StringSetAttr,
/// }
///
/// servarr_bridge::resource!(Notification { tags => "Tags" });
///
/// // This resource has no `fieldTags` attribute, so it keeps `tags` unmapped.
/// let names = NameMap::default().without_api_name("tags");
/// let bridge = FieldBridge::new(&names);
///
/// let mut notification = Notification::default();
/// bridge.write_string_set(&Field::new("tags", json!(["4k"])), &mut notification);
/// assert_eq!(notification.tags.get().map(|s| s.len()), Some(1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldBridge<'a> {
    names: &'a NameMap,
}

impl Default for FieldBridge<'static> {
    fn default() -> Self {
        Self::new(NameMap::global())
    }
}

impl<'a> FieldBridge<'a> {
    /// Creates a bridge over the given name map.
    pub fn new(names: &'a NameMap) -> Self {
        Self { names }
    }

    /// Returns the name map in use.
    pub fn names(&self) -> &'a NameMap {
        self.names
    }

    // =========================================================================
    // Writes (API field -> resource attribute)
    // =========================================================================

    /// Stores the field's value, rendered as text, in a string attribute.
    pub fn write_string<R: Resource + ?Sized>(&self, field: &Field, resource: &mut R) {
        let value = field.get_value().map(convert::to_text).unwrap_or_default();
        self.store(field, resource, AttrValue::String(Attr::value(value)));
    }

    /// Stores the field's boolean value, or `false`.
    pub fn write_bool<R: Resource + ?Sized>(&self, field: &Field, resource: &mut R) {
        let value = narrow(field, AttrKind::Bool, convert::to_bool);
        self.store(field, resource, AttrValue::Bool(Attr::value(value)));
    }

    /// Stores the field's number truncated toward zero, or `0`.
    pub fn write_int64<R: Resource + ?Sized>(&self, field: &Field, resource: &mut R) {
        let value = narrow(field, AttrKind::Int64, convert::to_i64);
        self.store(field, resource, AttrValue::Int64(Attr::value(value)));
    }

    /// Stores the field's number, or `0.0`.
    pub fn write_float64<R: Resource + ?Sized>(&self, field: &Field, resource: &mut R) {
        let value = narrow(field, AttrKind::Float64, convert::to_f64);
        self.store(field, resource, AttrValue::Float64(Attr::value(value)));
    }

    /// Stores the field's array as a set of strings, or an empty set.
    pub fn write_string_set<R: Resource + ?Sized>(&self, field: &Field, resource: &mut R) {
        let value = narrow(field, AttrKind::StringSet, convert::to_string_set);
        self.store(field, resource, AttrValue::StringSet(Attr::value(value)));
    }

    /// Stores the field's array as a set of integers, or an empty set.
    pub fn write_int64_set<R: Resource + ?Sized>(&self, field: &Field, resource: &mut R) {
        let value = narrow(field, AttrKind::Int64Set, convert::to_i64_set);
        self.store(field, resource, AttrValue::Int64Set(Attr::value(value)));
    }

    // =========================================================================
    // Reads (resource attribute -> API field)
    // =========================================================================

    /// Emits a string field, unless the attribute is null or unknown.
    pub fn read_string<R: Resource + ?Sized>(&self, name: &str, resource: &R) -> Option<Field> {
        match self.load(name, resource, AttrKind::String)? {
            AttrValue::String(Attr::Value(v)) => Some(self.emit(name, v)),
            _ => None,
        }
    }

    /// Emits a boolean field, unless the attribute is null or unknown.
    pub fn read_bool<R: Resource + ?Sized>(&self, name: &str, resource: &R) -> Option<Field> {
        match self.load(name, resource, AttrKind::Bool)? {
            AttrValue::Bool(Attr::Value(v)) => Some(self.emit(name, v)),
            _ => None,
        }
    }

    /// Emits an integer field, unless the attribute is null or unknown.
    pub fn read_int64<R: Resource + ?Sized>(&self, name: &str, resource: &R) -> Option<Field> {
        match self.load(name, resource, AttrKind::Int64)? {
            AttrValue::Int64(Attr::Value(v)) => Some(self.emit(name, v)),
            _ => None,
        }
    }

    /// Emits a float field, unless the attribute is null or unknown.
    ///
    /// Non-finite floats have no JSON form and are sent as `null`.
    pub fn read_float64<R: Resource + ?Sized>(&self, name: &str, resource: &R) -> Option<Field> {
        match self.load(name, resource, AttrKind::Float64)? {
            AttrValue::Float64(Attr::Value(v)) => Some(self.emit(name, v)),
            _ => None,
        }
    }

    /// Emits a string array field, unless the set is empty.
    pub fn read_string_set<R: Resource + ?Sized>(&self, name: &str, resource: &R) -> Option<Field> {
        match self.load(name, resource, AttrKind::StringSet)? {
            AttrValue::StringSet(Attr::Value(set)) => self.emit_set(name, set),
            _ => None,
        }
    }

    /// Emits an integer array field, unless the set is empty.
    pub fn read_int64_set<R: Resource + ?Sized>(&self, name: &str, resource: &R) -> Option<Field> {
        match self.load(name, resource, AttrKind::Int64Set)? {
            AttrValue::Int64Set(Attr::Value(set)) => self.emit_set(name, set),
            _ => None,
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn store<R: Resource + ?Sized>(&self, field: &Field, resource: &mut R, value: AttrValue) {
        let schema_name = self.names.to_schema(field.get_name());
        let kind = value.kind();

        let Some(ident) = resource.resolve(schema_name) else {
            log::debug!(
                "no attribute matches field '{}' (schema name '{}'), skipping",
                field.get_name(),
                schema_name
            );
            return;
        };

        if !resource.set_attribute(ident, value) {
            log::debug!("attribute '{}' is not of kind {}, skipping", ident, kind);
        }
    }

    fn load<R: Resource + ?Sized>(&self, name: &str, resource: &R, kind: AttrKind) -> Option<AttrValue> {
        let Some(value) = resource.resolve(name).and_then(|ident| resource.attribute(ident)) else {
            log::debug!("no attribute matches schema name '{}'", name);
            return None;
        };

        if value.kind() != kind {
            log::debug!(
                "attribute '{}' is {}, expected {}",
                name,
                value.kind(),
                kind
            );
            return None;
        }

        Some(value)
    }

    fn emit(&self, name: &str, value: impl Into<Json>) -> Field {
        Field::new(self.names.to_api(name), value)
    }

    fn emit_set<T: Into<Json>>(&self, name: &str, set: Set<T>) -> Option<Field> {
        if set.is_empty() {
            return None;
        }

        let items: Vec<Json> = set.into_iter().map(Into::into).collect();
        Some(self.emit(name, items))
    }
}

/// Narrows the field value, falling back to the kind's zero value.
fn narrow<T: Default>(field: &Field, kind: AttrKind, f: impl Fn(&Json) -> Option<T>) -> T {
    match field.get_value().and_then(f) {
        Some(v) => v,
        None => {
            log::debug!(
                "field '{}' does not carry a {} value, storing the zero value",
                field.get_name(),
                kind
            );
            T::default()
        }
    }
}

// =============================================================================
// Free functions over the global name map
// =============================================================================

/// Writes a string field into `resource` using the global name map.
pub fn write_string_field<R: Resource + ?Sized>(field: &Field, resource: &mut R) {
    FieldBridge::default().write_string(field, resource)
}

/// Reads a string attribute from `resource` using the global name map.
pub fn read_string_field<R: Resource + ?Sized>(name: &str, resource: &R) -> Option<Field> {
    FieldBridge::default().read_string(name, resource)
}

/// Writes a boolean field into `resource` using the global name map.
pub fn write_bool_field<R: Resource + ?Sized>(field: &Field, resource: &mut R) {
    FieldBridge::default().write_bool(field, resource)
}

/// Reads a boolean attribute from `resource` using the global name map.
pub fn read_bool_field<R: Resource + ?Sized>(name: &str, resource: &R) -> Option<Field> {
    FieldBridge::default().read_bool(name, resource)
}

/// Writes an integer field into `resource` using the global name map.
pub fn write_int64_field<R: Resource + ?Sized>(field: &Field, resource: &mut R) {
    FieldBridge::default().write_int64(field, resource)
}

/// Reads an integer attribute from `resource` using the global name map.
pub fn read_int64_field<R: Resource + ?Sized>(name: &str, resource: &R) -> Option<Field> {
    FieldBridge::default().read_int64(name, resource)
}

/// Writes a float field into `resource` using the global name map.
pub fn write_float64_field<R: Resource + ?Sized>(field: &Field, resource: &mut R) {
    FieldBridge::default().write_float64(field, resource)
}

/// Reads a float attribute from `resource` using the global name map.
pub fn read_float64_field<R: Resource + ?Sized>(name: &str, resource: &R) -> Option<Field> {
    FieldBridge::default().read_float64(name, resource)
}

/// Writes a string set field into `resource` using the global name map.
pub fn write_string_set_field<R: Resource + ?Sized>(field: &Field, resource: &mut R) {
    FieldBridge::default().write_string_set(field, resource)
}

/// Reads a string set attribute from `resource` using the global name map.
pub fn read_string_set_field<R: Resource + ?Sized>(name: &str, resource: &R) -> Option<Field> {
    FieldBridge::default().read_string_set(name, resource)
}

/// Writes an integer set field into `resource` using the global name map.
pub fn write_int64_set_field<R: Resource + ?Sized>(field: &Field, resource: &mut R) {
    FieldBridge::default().write_int64_set(field, resource)
}

/// Reads an integer set attribute from `resource` using the global name map.
pub fn read_int64_set_field<R: Resource + ?Sized>(name: &str, resource: &R) -> Option<Field> {
    FieldBridge::default().read_int64_set(name, resource)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::BoolAttr;
    use crate::model::Float64Attr;
    use crate::model::Int64Attr;
    use crate::model::Int64SetAttr;
    use crate::model::StringAttr;
    use crate::model::StringSetAttr;

    #[derive(Debug, Default, PartialEq)]
    struct Fields {
        str: StringAttr,
        bool: BoolAttr,
        int: Int64Attr,
        float: Float64Attr,
        set: StringSetAttr,
        int_set: Int64SetAttr,
        field_tags: StringSetAttr,
    }

    crate::resource!(Fields {
        str => "Str",
        bool => "Bool",
        int => "Int",
        float => "Float",
        set => "Set",
        int_set => "IntSet",
        field_tags => "FieldTags",
    });

    #[test]
    fn test_write_string_renders_numbers() {
        let mut resource = Fields::default();
        write_string_field(&Field::new("str", json!(8080)), &mut resource);
        assert_eq!(resource.str, StringAttr::value("8080".to_string()));
    }

    #[test]
    fn test_write_bool_falls_back_to_false() {
        let mut resource = Fields::default();
        write_bool_field(&Field::new("bool", json!("yes")), &mut resource);
        assert_eq!(resource.bool, BoolAttr::value(false));

        write_bool_field(&Field::new("bool", json!(true)), &mut resource);
        assert_eq!(resource.bool, BoolAttr::value(true));
    }

    #[test]
    fn test_write_int_falls_back_to_zero() {
        let mut resource = Fields::default();
        write_int64_field(&Field::new("int", json!("ten")), &mut resource);
        assert_eq!(resource.int, Int64Attr::value(0));
    }

    #[test]
    fn test_write_without_value_stores_zero() {
        let mut resource = Fields::default();
        let field = Field {
            name: Some("float".to_string()),
            value: None,
        };
        write_float64_field(&field, &mut resource);
        assert_eq!(resource.float, Float64Attr::value(0.0));
    }

    #[test]
    fn test_write_unmatched_name_is_ignored() {
        let mut resource = Fields::default();
        write_int64_field(&Field::new("missing", json!(1)), &mut resource);
        assert_eq!(resource, Fields::default());
    }

    #[test]
    fn test_write_kind_mismatch_is_ignored() {
        let mut resource = Fields::default();
        write_int64_field(&Field::new("str", json!(1)), &mut resource);
        assert!(resource.str.is_null());
    }

    #[test]
    fn test_write_tags_goes_to_field_tags() {
        let mut resource = Fields::default();
        write_string_set_field(&Field::new("tags", json!(["a"])), &mut resource);
        assert_eq!(
            resource.field_tags,
            StringSetAttr::value(Set::new(["a".to_string()]))
        );
    }

    #[test]
    fn test_write_int_set_from_non_array() {
        let mut resource = Fields::default();
        write_int64_set_field(&Field::new("intSet", json!(5)), &mut resource);
        assert_eq!(resource.int_set, Int64SetAttr::value(Set::default()));
    }

    #[test]
    fn test_read_unknown_is_silent() {
        let resource = Fields {
            bool: BoolAttr::unknown(),
            float: Float64Attr::unknown(),
            ..Default::default()
        };
        assert_eq!(read_bool_field("bool", &resource), None);
        assert_eq!(read_float64_field("float", &resource), None);
    }

    #[test]
    fn test_read_empty_string_is_emitted() {
        let resource = Fields {
            str: StringAttr::value(String::new()),
            ..Default::default()
        };
        assert_eq!(read_string_field("str", &resource), Some(Field::new("str", "")));
    }

    #[test]
    fn test_read_int_set() {
        let resource = Fields {
            int_set: Int64SetAttr::value(Set::new([35, 18])),
            ..Default::default()
        };
        let field = read_int64_set_field("intSet", &resource).unwrap();
        assert_eq!(field.get_value(), Some(&json!([18, 35])));
    }

    #[test]
    fn test_read_empty_set_is_silent() {
        let resource = Fields {
            set: StringSetAttr::value(Set::default()),
            int_set: Int64SetAttr::null(),
            ..Default::default()
        };
        assert_eq!(read_string_set_field("set", &resource), None);
        assert_eq!(read_int64_set_field("intSet", &resource), None);
    }

    #[test]
    fn test_read_wrong_kind_is_silent() {
        let resource = Fields {
            str: StringAttr::value("x".to_string()),
            ..Default::default()
        };
        assert_eq!(read_int64_field("str", &resource), None);
    }

    #[test]
    fn test_read_float() {
        let resource = Fields {
            float: Float64Attr::value(1.5),
            ..Default::default()
        };
        assert_eq!(read_float64_field("float", &resource), Some(Field::new("float", 1.5)));
    }

    #[test]
    fn test_read_field_tags_maps_back_to_tags() {
        let resource = Fields {
            field_tags: StringSetAttr::value(Set::new(["b".to_string()])),
            ..Default::default()
        };
        let field = read_string_set_field("fieldTags", &resource).unwrap();
        assert_eq!(field.get_name(), "tags");
    }
}
