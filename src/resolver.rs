//! Permission resolution over a role family's grants table.

use crate::error::Result;
use crate::permission::PermissionSet;
use crate::role::RoleType;

/// Resolve the combined permission set of the given roles.
///
/// Resolution order:
/// 1. Walk the input roles in order.
/// 2. A role without a grants entry contributes nothing and is skipped.
/// 3. A matched role contributes its own permission list; with
///    [`RoleType::USES_HIERARCHY`] enabled it also contributes every list
///    declared after its entry.
/// 4. Duplicates collapse to their first occurrence.
///
/// An empty input yields an empty set.
pub fn resolve<R, I>(roles: I) -> PermissionSet<R::Permission>
where
    R: RoleType,
    I: IntoIterator<Item = R>,
{
    let grants = R::grants();
    let mut set = PermissionSet::new();

    for role in roles {
        let Some(tier) = grants.iter().position(|(granted, _)| *granted == role) else {
            tracing::trace!(role = role.name(), "role has no grants entry; skipping");
            continue;
        };

        if R::USES_HIERARCHY {
            for &(_, permissions) in &grants[tier..] {
                set.extend_from_slice(permissions);
            }
        } else {
            set.extend_from_slice(grants[tier].1);
        }
    }

    set
}

/// Resolve role wire names into a combined permission set.
///
/// # Errors
///
/// Returns [`RoleError::InvalidRole`](crate::error::RoleError::InvalidRole)
/// for the first name matching neither a declared role nor a grants key;
/// nothing is resolved in that case.
pub fn resolve_names<R, I, S>(names: I) -> Result<PermissionSet<R::Permission>>
where
    R: RoleType,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let roles = names
        .into_iter()
        .map(|name| R::from_name(name.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    Ok(resolve(roles))
}
