//! Permission identity and the deduplicated permission set.
//!
//! A permission is an atomic named capability with no behavior beyond
//! identity. Role-types attach ordered lists of permissions to their roles;
//! resolution collects those lists into a [`PermissionSet`].

use std::fmt;
use std::slice;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// An atomic named capability.
///
/// Implemented by closed permission enumerations. Every variant carries a
/// stable snake_case wire name, unique within the enumeration.
///
/// # Examples
///
/// ```
/// use rolekit::Permission;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum ProductPermission {
///     CreateProduct,
///     DeleteProduct,
/// }
///
/// impl Permission for ProductPermission {
///     fn variants() -> &'static [Self] {
///         &[Self::CreateProduct, Self::DeleteProduct]
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::CreateProduct => "create_product",
///             Self::DeleteProduct => "delete_product",
///         }
///     }
/// }
///
/// assert_eq!(
///     ProductPermission::from_name("delete_product"),
///     Some(ProductPermission::DeleteProduct)
/// );
/// assert_eq!(ProductPermission::DeleteProduct.description(), "Delete product");
/// ```
pub trait Permission: Copy + Eq + fmt::Debug + 'static {
    /// Every declared permission, in declaration order.
    fn variants() -> &'static [Self];

    /// The stable wire name of this permission.
    fn name(&self) -> &'static str;

    /// Human-readable label; defaults to the humanized wire name.
    fn description(&self) -> String {
        humanize(self.name())
    }

    /// Look up a permission by its wire name.
    fn from_name(name: &str) -> Option<Self> {
        Self::variants().iter().copied().find(|p| p.name() == name)
    }
}

/// Turn a snake_case wire name into a sentence-case label.
///
/// `"mark_as_sold_out"` becomes `"Mark as sold out"`.
pub(crate) fn humanize(name: &str) -> String {
    let mut label = String::with_capacity(name.len());

    for (i, word) in name.split(['_', '-']).filter(|w| !w.is_empty()).enumerate() {
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                label.extend(first.to_uppercase());
                label.push_str(chars.as_str());
            }
        } else {
            label.push(' ');
            label.push_str(word);
        }
    }

    label
}

/// A deduplicated set of permissions preserving first-occurrence order.
///
/// The resolver accumulates permission lists into this container; a
/// permission inserted twice keeps its first position. Equality is set
/// equality and ignores order.
#[derive(Debug, Clone)]
pub struct PermissionSet<P: Permission> {
    items: Vec<P>,
}

impl<P: Permission> PermissionSet<P> {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert a permission, keeping the set deduplicated.
    ///
    /// Returns `true` if the permission was not already present.
    pub fn insert(&mut self, permission: P) -> bool {
        if self.contains(permission) {
            return false;
        }
        self.items.push(permission);
        true
    }

    /// Insert every permission of a slice, skipping duplicates.
    pub fn extend_from_slice(&mut self, permissions: &[P]) {
        for &permission in permissions {
            self.insert(permission);
        }
    }

    /// Check if this set includes the given permission.
    #[must_use]
    pub fn contains(&self, permission: P) -> bool {
        self.items.contains(&permission)
    }

    /// Check if this set includes every permission of `other`.
    #[must_use]
    pub fn contains_all(&self, other: &Self) -> bool {
        other.iter().all(|p| self.contains(p))
    }

    /// Number of distinct permissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no permissions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the permissions in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = P> + '_ {
        self.items.iter().copied()
    }

    /// View the set as an ordered slice.
    #[must_use]
    pub fn as_slice(&self) -> &[P] {
        &self.items
    }

    /// The wire names of every permission, in set order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.items.iter().map(P::name).collect()
    }

    /// The union of two sets; shared permissions keep their position in
    /// `self`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.extend_from_slice(other.as_slice());
        merged
    }
}

impl<P: Permission> Default for PermissionSet<P> {
    fn default() -> Self {
        Self::new()
    }
}

// Set equality: the dedup invariant makes equal length plus containment
// sufficient.
impl<P: Permission> PartialEq for PermissionSet<P> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.contains_all(other)
    }
}

impl<P: Permission> Eq for PermissionSet<P> {}

impl<P: Permission> FromIterator<P> for PermissionSet<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<P: Permission> Extend<P> for PermissionSet<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for permission in iter {
            self.insert(permission);
        }
    }
}

impl<P: Permission> IntoIterator for PermissionSet<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, P: Permission> IntoIterator for &'a PermissionSet<P> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Serializes transparently as a sequence of its elements.
impl<P: Permission + Serialize> Serialize for PermissionSet<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

/// Deserializes from a sequence, silently collapsing duplicates so the dedup
/// invariant holds for any input.
impl<'de, P: Permission + Deserialize<'de>> Deserialize<'de> for PermissionSet<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<P>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
