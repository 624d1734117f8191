//! Name-driven access to resource attributes

use super::AttrType;
use super::AttrValue;

/// A declarative resource instance whose attributes can be reached by name.
///
/// Implementations are normally generated with [`resource!`](crate::resource),
/// which turns the attribute list into a `match` dispatch table.
pub trait Resource {
    /// Returns the attribute identifiers, in declaration order.
    fn attribute_names(&self) -> &'static [&'static str];

    /// Returns a copy of the attribute with exactly this identifier.
    fn attribute(&self, name: &str) -> Option<AttrValue>;

    /// Replaces the attribute with exactly this identifier.
    ///
    /// Returns `false` and leaves the resource untouched when the identifier is
    /// unknown or `value` is not of the attribute's declared kind.
    fn set_attribute(&mut self, name: &str, value: AttrValue) -> bool;

    /// Finds the identifier matching `name` case-insensitively.
    fn resolve(&self, name: &str) -> Option<&'static str> {
        self.attribute_names()
            .iter()
            .copied()
            .find(|ident| eq_fold(ident, name))
    }
}

fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[doc(hidden)]
pub fn attr_value_of<T: AttrType + Clone>(slot: &T) -> AttrValue {
    slot.clone().into_attr_value()
}

#[doc(hidden)]
pub fn assign_attr<T: AttrType>(slot: &mut T, value: AttrValue) -> bool {
    match T::from_attr_value(value) {
        Some(v) => {
            *slot = v;
            true
        }
        None => false,
    }
}

/// Implements [`Resource`] for a struct of attribute containers.
///
/// Each entry maps a struct field to the identifier the bridge matches
/// against (case-insensitively) when resolving schema names.
///
/// ```
/// use servarr_bridge::model::{Int64Attr, Resource, StringAttr};
///
/// #[derive(Debug, Default)]
/// struct Tag {
///     id: Int64Attr,
///     label: StringAttr,
/// }
///
/// servarr_bridge::resource!(Tag {
///     id => "ID",
///     label => "Label",
/// });
///
/// let tag = Tag::default();
/// assert_eq!(tag.resolve("label"), Some("Label"));
/// assert_eq!(tag.resolve("name"), None);
/// ```
#[macro_export]
macro_rules! resource {
    ($ty:ty { $($field:ident => $ident:literal),* $(,)? }) => {
        impl $crate::model::Resource for $ty {
            fn attribute_names(&self) -> &'static [&'static str] {
                &[$($ident),*]
            }

            fn attribute(&self, name: &str) -> ::core::option::Option<$crate::model::AttrValue> {
                match name {
                    $($ident => ::core::option::Option::Some($crate::model::attr_value_of(&self.$field)),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn set_attribute(&mut self, name: &str, value: $crate::model::AttrValue) -> bool {
                match name {
                    $($ident => $crate::model::assign_attr(&mut self.$field, value),)*
                    _ => {
                        let _ = value;
                        false
                    }
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::model::BoolAttr;
    use crate::model::Int64Attr;
    use crate::model::Resource;
    use crate::model::StringAttr;

    #[derive(Debug, Default)]
    struct Download {
        enable: BoolAttr,
        seed_time: Int64Attr,
        url: StringAttr,
    }

    crate::resource!(Download {
        enable => "Enable",
        seed_time => "SeedTime",
        url => "URL",
    });

    #[test]
    fn test_resolve_ignores_case() {
        let download = Download::default();
        assert_eq!(download.resolve("seedTime"), Some("SeedTime"));
        assert_eq!(download.resolve("url"), Some("URL"));
        assert_eq!(download.resolve("seed_time"), None);
    }

    #[test]
    fn test_attribute_requires_exact_identifier() {
        let download = Download::default();
        assert!(download.attribute("Enable").is_some());
        assert!(download.attribute("enable").is_none());
    }

    #[test]
    fn test_set_attribute_checks_kind() {
        let mut download = Download::default();

        assert!(!download.set_attribute("SeedTime", BoolAttr::value(true).into()));
        assert!(download.seed_time.is_null());

        assert!(download.set_attribute("SeedTime", Int64Attr::value(10).into()));
        assert_eq!(download.seed_time.get(), Some(&10));
    }

    #[test]
    fn test_set_attribute_unknown_name() {
        let mut download = Download::default();
        assert!(!download.set_attribute("Missing", BoolAttr::value(true).into()));
        assert_eq!(download.attribute_names(), &["Enable", "SeedTime", "URL"]);
    }
}
