//! Tri-state schema attribute containers

/// A schema attribute slot.
///
/// Every attribute of a declarative resource is either null (not set),
/// unknown (to be computed later), or a concrete value of its declared kind.
///
/// # Example
///
/// ```
/// use servarr_bridge::model::StringAttr;
///
/// let name = StringAttr::value("Radarr".to_string());
/// assert_eq!(name.get().map(String::as_str), Some("Radarr"));
///
/// let empty = StringAttr::null();
/// assert!(empty.is_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Attr<T> {
    /// The attribute was not set.
    Null,
    /// The value will be known after apply.
    Unknown,
    /// A concrete value.
    Value(T),
}

impl<T> Default for Attr<T> {
    fn default() -> Self {
        Attr::Null
    }
}

impl<T> Attr<T> {
    /// Creates a null attribute.
    pub fn null() -> Self {
        Attr::Null
    }

    /// Creates an unknown attribute.
    pub fn unknown() -> Self {
        Attr::Unknown
    }

    /// Creates a concrete attribute.
    pub fn value(value: T) -> Self {
        Attr::Value(value)
    }

    /// Returns `true` if the attribute is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Attr::Null)
    }

    /// Returns `true` if the attribute is unknown.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Attr::Unknown)
    }

    /// Returns the concrete value, if any.
    pub fn get(&self) -> Option<&T> {
        match self {
            Attr::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Consumes the attribute and returns the concrete value, if any.
    pub fn into_inner(self) -> Option<T> {
        match self {
            Attr::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Attr<T> {
    fn from(v: T) -> Self {
        Attr::Value(v)
    }
}

/// String attribute.
pub type StringAttr = Attr<String>;
/// Boolean attribute.
pub type BoolAttr = Attr<bool>;
/// 64-bit integer attribute.
pub type Int64Attr = Attr<i64>;
/// 64-bit float attribute.
pub type Float64Attr = Attr<f64>;
/// Set-of-string attribute.
pub type StringSetAttr = Attr<Set<String>>;
/// Set-of-int64 attribute.
pub type Int64SetAttr = Attr<Set<i64>>;

/// An unordered collection of attribute elements.
///
/// Elements are kept sorted, so two sets compare equal when they hold the
/// same elements the same number of times, regardless of insertion order.
///
/// ```
/// use servarr_bridge::model::Set;
///
/// let a: Set<i64> = [3, 1, 2].into_iter().collect();
/// let b = Set::new([1, 2, 3]);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Set<T> {
    elements: Vec<T>,
}

impl<T: Ord> Set<T> {
    /// Creates a set from the given elements.
    pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
        let mut elements: Vec<T> = elements.into_iter().collect();
        elements.sort();
        Self { elements }
    }

    /// Returns `true` if the set contains `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.elements.binary_search(value).is_ok()
    }
}

impl<T> Set<T> {
    /// Returns `true` if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
