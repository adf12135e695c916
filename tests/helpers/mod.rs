#![allow(dead_code)]

use rolekit::{Permission, RoleType};
use serde::{Deserialize, Serialize};

/// Permissions of a small marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPermission {
    DeleteProduct,
    MarkAsSoldOut,
    EditProduct,
    CreateProduct,
    BuyProduct,
    DeleteTransaction,
    ViewTransaction,
}

impl Permission for MarketPermission {
    fn variants() -> &'static [Self] {
        &[
            Self::DeleteProduct,
            Self::MarkAsSoldOut,
            Self::EditProduct,
            Self::CreateProduct,
            Self::BuyProduct,
            Self::DeleteTransaction,
            Self::ViewTransaction,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::DeleteProduct => "delete_product",
            Self::MarkAsSoldOut => "mark_as_sold_out",
            Self::EditProduct => "edit_product",
            Self::CreateProduct => "create_product",
            Self::BuyProduct => "buy_product",
            Self::DeleteTransaction => "delete_transaction",
            Self::ViewTransaction => "view_transaction",
        }
    }
}

/// Marketplace roles ranked super admin over admin over customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerchantRole {
    SuperAdmin,
    Admin,
    Customer,
}

impl RoleType for MerchantRole {
    type Permission = MarketPermission;

    const USES_HIERARCHY: bool = true;
    const DELETE_PIVOT_ON_REMOVE: bool = true;

    fn variants() -> &'static [Self] {
        &[Self::SuperAdmin, Self::Admin, Self::Customer]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }

    fn grants() -> &'static [(Self, &'static [Self::Permission])] {
        &[
            (
                Self::SuperAdmin,
                &[
                    MarketPermission::DeleteProduct,
                    MarketPermission::DeleteTransaction,
                    MarketPermission::ViewTransaction,
                ],
            ),
            (
                Self::Admin,
                &[
                    MarketPermission::MarkAsSoldOut,
                    MarketPermission::EditProduct,
                    MarketPermission::CreateProduct,
                ],
            ),
            (
                Self::Customer,
                &[MarketPermission::BuyProduct, MarketPermission::ViewTransaction],
            ),
        ]
    }
}

/// Back-office roles with independent grants; support has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffRole {
    Admin,
    Editor,
    Support,
}

impl RoleType for StaffRole {
    type Permission = MarketPermission;

    fn variants() -> &'static [Self] {
        &[Self::Admin, Self::Editor, Self::Support]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Support => "support",
        }
    }

    fn grants() -> &'static [(Self, &'static [Self::Permission])] {
        &[
            (
                Self::Admin,
                &[
                    MarketPermission::DeleteProduct,
                    MarketPermission::EditProduct,
                    MarketPermission::CreateProduct,
                ],
            ),
            (
                Self::Editor,
                &[
                    MarketPermission::EditProduct,
                    MarketPermission::CreateProduct,
                    MarketPermission::MarkAsSoldOut,
                ],
            ),
        ]
    }
}

/// Review roles whose grants table ranks the roles differently from their
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewRole {
    Screener,
    Approver,
}

impl RoleType for ReviewRole {
    type Permission = MarketPermission;

    const USES_HIERARCHY: bool = true;

    fn variants() -> &'static [Self] {
        &[Self::Screener, Self::Approver]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Screener => "screener",
            Self::Approver => "approver",
        }
    }

    fn grants() -> &'static [(Self, &'static [Self::Permission])] {
        &[
            (Self::Approver, &[MarketPermission::DeleteTransaction]),
            (Self::Screener, &[MarketPermission::ViewTransaction]),
        ]
    }
}
