//! Typed role-to-permission resolution with optional tier hierarchies.
//!
//! Role families are closed enums wired to ordered grants tables. Resolution
//! unions the permission lists of the given roles into a deduplicated
//! [`PermissionSet`]; a family with [`RoleType::USES_HIERARCHY`] enabled
//! treats its table as a privilege ladder in which every role also inherits
//! the permissions of the entries declared after it.
//!
//! # Example
//!
//! ```
//! use rolekit::{Permission, Role, RoleType};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum PagePermission {
//!     Delete,
//!     Edit,
//!     Create,
//!     View,
//! }
//!
//! impl Permission for PagePermission {
//!     fn variants() -> &'static [Self] {
//!         &[Self::Delete, Self::Edit, Self::Create, Self::View]
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         match self {
//!             Self::Delete => "delete",
//!             Self::Edit => "edit",
//!             Self::Create => "create",
//!             Self::View => "view",
//!         }
//!     }
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum PageRole {
//!     Admin,
//!     Editor,
//!     Viewer,
//! }
//!
//! impl RoleType for PageRole {
//!     type Permission = PagePermission;
//!
//!     const USES_HIERARCHY: bool = true;
//!
//!     fn variants() -> &'static [Self] {
//!         &[Self::Admin, Self::Editor, Self::Viewer]
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         match self {
//!             Self::Admin => "admin",
//!             Self::Editor => "editor",
//!             Self::Viewer => "viewer",
//!         }
//!     }
//!
//!     fn grants() -> &'static [(Self, &'static [Self::Permission])] {
//!         &[
//!             (
//!                 Self::Admin,
//!                 &[PagePermission::Delete, PagePermission::Edit, PagePermission::Create],
//!             ),
//!             (Self::Editor, &[PagePermission::Edit, PagePermission::Create]),
//!             (Self::Viewer, &[PagePermission::View]),
//!         ]
//!     }
//! }
//!
//! let editor = Role::new(PageRole::Editor);
//! assert!(editor.has(PagePermission::Edit));
//! assert!(editor.has(PagePermission::View));
//! assert!(!editor.has(PagePermission::Delete));
//!
//! let resolved = PageRole::resolve_names(["editor"]).unwrap();
//! assert_eq!(resolved.names(), ["edit", "create", "view"]);
//! ```

pub mod collection;
pub mod error;
pub mod permission;
pub mod resolver;
pub mod role;

pub use collection::RoleCollection;
pub use error::{Result, RoleError};
pub use permission::{Permission, PermissionSet};
pub use role::{Role, RoleType};
