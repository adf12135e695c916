//! Ordered collections of role handles.

use std::ops::Index;
use std::slice;

use crate::role::{Role, RoleType};

/// An ordered collection of [`Role`] handles.
///
/// [`RoleType::all`] builds one covering every declared role; collections
/// keep insertion order.
#[derive(Debug, Clone)]
pub struct RoleCollection<R: RoleType> {
    roles: Vec<Role<R>>,
}

impl<R: RoleType> RoleCollection<R> {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { roles: Vec::new() }
    }

    /// Number of roles held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the collection holds no roles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// The role at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Role<R>> {
        self.roles.get(index)
    }

    /// Iterate over the roles in order.
    pub fn iter(&self) -> slice::Iter<'_, Role<R>> {
        self.roles.iter()
    }

    /// The handle wrapping the given role value, if present.
    #[must_use]
    pub fn find(&self, value: R) -> Option<&Role<R>> {
        self.roles.iter().find(|role| role.value() == value)
    }

    /// Check if the collection holds the given role value.
    #[must_use]
    pub fn contains(&self, value: R) -> bool {
        self.find(value).is_some()
    }

    /// Iterate over the roles granting the given permission.
    pub fn with_permission(
        &self,
        permission: R::Permission,
    ) -> impl Iterator<Item = &Role<R>> {
        self.roles.iter().filter(move |role| role.has(permission))
    }

    /// The wire names of every role, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.roles.iter().map(Role::name).collect()
    }
}

impl<R: RoleType> Default for RoleCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RoleType> Index<usize> for RoleCollection<R> {
    type Output = Role<R>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.roles[index]
    }
}

impl<R: RoleType> FromIterator<Role<R>> for RoleCollection<R> {
    fn from_iter<I: IntoIterator<Item = Role<R>>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

impl<R: RoleType> IntoIterator for RoleCollection<R> {
    type Item = Role<R>;
    type IntoIter = std::vec::IntoIter<Role<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.roles.into_iter()
    }
}

impl<'a, R: RoleType> IntoIterator for &'a RoleCollection<R> {
    type Item = &'a Role<R>;
    type IntoIter = slice::Iter<'a, Role<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.roles.iter()
    }
}
