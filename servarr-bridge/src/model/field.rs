//! Dynamic configuration field as returned by the API client

use serde::Deserialize;
use serde::Serialize;

/// A single `(name, value)` entry of an entity's dynamic configuration bag.
///
/// The value is untyped over the wire: numbers arrive as 64-bit floats and
/// sequences arrive as arrays of untyped elements.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use servarr_bridge::model::Field;
///
/// let field: Field = serde_json::from_value(json!({"name": "seedCriteria.seedTime", "value": 50})).unwrap();
/// assert_eq!(field.get_name(), "seedCriteria.seedTime");
/// assert_eq!(field.get_value(), Some(&json!(50)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// The API name of the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The untyped field value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl Field {
    /// Creates a field with the given name and value.
    pub fn new(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }

    /// Returns the field name, or the empty string when unset.
    pub fn get_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Sets the field name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Returns the field value, if set.
    pub fn get_value(&self) -> Option<&serde_json::Value> {
        self.value.as_ref()
    }

    /// Sets the field value.
    pub fn set_value(&mut self, value: impl Into<serde_json::Value>) {
        self.value = Some(value.into());
    }
}
