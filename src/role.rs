//! Role-type declarations and the permission-caching role handle.

use std::fmt;

use crate::collection::RoleCollection;
use crate::error::{Result, RoleError};
use crate::permission::{humanize, Permission, PermissionSet};
use crate::resolver;

/// A closed family of roles sharing one permission enumeration and one
/// grants table.
///
/// Implementors declare their roles as enum variants and wire them to
/// permission lists through [`grants`](Self::grants). The table is ordered:
/// with [`USES_HIERARCHY`](Self::USES_HIERARCHY) enabled, entries rank from
/// most to least privileged and every role inherits the permissions of all
/// entries below its own.
///
/// A role may be declared without a grants entry; it simply resolves to no
/// permissions. Identifiers that match neither a declared role nor a grants
/// key are rejected with [`RoleError::InvalidRole`].
pub trait RoleType: Copy + Eq + fmt::Debug + 'static {
    /// The permission enumeration this role family grants.
    type Permission: Permission;

    /// Treat the grants table as a privilege ladder.
    ///
    /// When enabled, resolving a role also collects the permissions of every
    /// grants entry declared after it.
    const USES_HIERARCHY: bool = false;

    /// Whether detaching a role from a holder should also drop the stored
    /// link record, for stores that keep one per assignment.
    const DELETE_PIVOT_ON_REMOVE: bool = false;

    /// Every declared role, in declaration order.
    fn variants() -> &'static [Self];

    /// The stable wire name of this role.
    fn name(&self) -> &'static str;

    /// The ordered role-to-permissions table.
    ///
    /// Order is the hierarchy: the first entry is the most privileged.
    fn grants() -> &'static [(Self, &'static [Self::Permission])];

    /// Human-readable label; defaults to the humanized wire name.
    fn description(&self) -> String {
        humanize(self.name())
    }

    /// Look up a role by its wire name.
    ///
    /// Both declared roles and grants-table keys are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`RoleError::InvalidRole`] when the name matches neither.
    fn from_name(name: &str) -> Result<Self> {
        Self::variants()
            .iter()
            .chain(Self::grants().iter().map(|(role, _)| role))
            .copied()
            .find(|role| role.name() == name)
            .ok_or_else(|| RoleError::InvalidRole {
                name: name.to_owned(),
            })
    }

    /// Resolve the combined permission set of the given roles.
    fn permissions<I>(roles: I) -> PermissionSet<Self::Permission>
    where
        I: IntoIterator<Item = Self>,
    {
        resolver::resolve(roles)
    }

    /// Resolve a combined permission set from role wire names.
    ///
    /// # Errors
    ///
    /// Returns [`RoleError::InvalidRole`] on the first unknown name; no
    /// partial set is produced.
    fn resolve_names<I, S>(names: I) -> Result<PermissionSet<Self::Permission>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        resolver::resolve_names::<Self, _, _>(names)
    }

    /// Every declared role as a [`Role`] handle with its permissions cached.
    fn all() -> RoleCollection<Self> {
        Self::variants().iter().copied().map(Role::new).collect()
    }

    /// Whether this role family treats its grants table as a hierarchy.
    #[must_use]
    fn uses_hierarchy() -> bool {
        Self::USES_HIERARCHY
    }

    /// Whether removing a role should also delete its stored link record.
    #[must_use]
    fn delete_pivot_on_remove() -> bool {
        Self::DELETE_PIVOT_ON_REMOVE
    }
}

/// A role handle carrying its resolved permission set.
///
/// The set is computed once at construction, so [`has`](Self::has) checks
/// are lookups rather than repeated table walks.
#[derive(Debug, Clone)]
pub struct Role<R: RoleType> {
    value: R,
    permissions: PermissionSet<R::Permission>,
}

impl<R: RoleType> Role<R> {
    /// Wrap a role value, resolving and caching its permission set.
    #[must_use]
    pub fn new(value: R) -> Self {
        Self {
            value,
            permissions: resolver::resolve([value]),
        }
    }

    /// Build a role handle from a wire name.
    ///
    /// # Errors
    ///
    /// Returns [`RoleError::InvalidRole`] when the name is not a role of
    /// this family.
    pub fn from_name(name: &str) -> Result<Self> {
        R::from_name(name).map(Self::new)
    }

    /// The underlying role value.
    #[must_use]
    pub fn value(&self) -> R {
        self.value
    }

    /// The stable wire name of this role.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.value.name()
    }

    /// Human-readable label of this role.
    #[must_use]
    pub fn description(&self) -> String {
        self.value.description()
    }

    /// The cached permission set of this role.
    #[must_use]
    pub fn permissions(&self) -> &PermissionSet<R::Permission> {
        &self.permissions
    }

    /// Check if this role grants the given permission.
    #[must_use]
    pub fn has(&self, permission: R::Permission) -> bool {
        self.permissions.contains(permission)
    }
}

// The cached set is a pure function of the value, so comparing values is
// enough.
impl<R: RoleType> PartialEq for Role<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: RoleType> Eq for Role<R> {}
