//! Access control models: roles, menu labels, menus and role → menu grants.

use courtside_core::menu_tree::MenuEntry;
use courtside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// A row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub role_name: String,
    pub description: Option<String>,
    pub role_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRole {
    #[validate(length(min = 1, max = 50, message = "is required (max 50 characters)"))]
    pub role_name: String,
    #[validate(length(max = 255))]
    pub description: Option<String>,
    pub role_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRole {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub role_name: Option<String>,
    #[validate(length(max = 255))]
    pub description: Option<String>,
    pub role_status: Option<bool>,
}

// ---------------------------------------------------------------------------
// Menu labels (sidebar section headings)
// ---------------------------------------------------------------------------

/// A row from the `menu_labels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuLabel {
    pub id: DbId,
    pub label_name: String,
    pub label_order: i32,
    pub label_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMenuLabel {
    #[validate(length(min = 1, max = 100, message = "is required (max 100 characters)"))]
    pub label_name: String,
    pub label_order: Option<i32>,
    pub label_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMenuLabel {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub label_name: Option<String>,
    pub label_order: Option<i32>,
    pub label_status: Option<bool>,
}

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

/// A row from `menus`, with parent menu and label names joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Menu {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    pub parent_name: Option<String>,
    pub label_id: Option<DbId>,
    pub label_name: Option<String>,
    pub menu_name: String,
    pub menu_path: Option<String>,
    pub menu_icon: Option<String>,
    pub menu_order: i32,
    pub menu_status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMenu {
    pub parent_id: Option<DbId>,
    pub label_id: Option<DbId>,
    #[validate(length(min = 1, max = 100, message = "is required (max 100 characters)"))]
    pub menu_name: String,
    #[validate(length(max = 255))]
    pub menu_path: Option<String>,
    pub menu_icon: Option<String>,
    pub menu_order: Option<i32>,
    pub menu_status: Option<bool>,
}

/// `parent_id: null` moves the menu to the root; `label_id: null` unlabels it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMenu {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub parent_id: Option<Option<DbId>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub label_id: Option<Option<DbId>>,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub menu_name: Option<String>,
    #[validate(length(max = 255))]
    pub menu_path: Option<String>,
    pub menu_icon: Option<String>,
    pub menu_order: Option<i32>,
    pub menu_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuFilter {
    pub parent_id: Option<DbId>,
    pub label_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Role → menu grants
// ---------------------------------------------------------------------------

/// Body of `PUT /roles/{id}/menus`: the complete new set of granted menus.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceRoleMenus {
    pub menu_ids: Vec<DbId>,
}

/// The menus granted to a role.
#[derive(Debug, Clone, Serialize)]
pub struct RoleMenus {
    pub role_id: DbId,
    pub menu_ids: Vec<DbId>,
}

/// A granted, active menu joined with its label, as loaded for the sidebar.
#[derive(Debug, Clone, FromRow)]
pub struct MenuRow {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    pub menu_name: String,
    pub menu_path: Option<String>,
    pub menu_icon: Option<String>,
    pub menu_order: i32,
    pub label_id: Option<DbId>,
    pub label_name: Option<String>,
}

impl From<MenuRow> for MenuEntry {
    fn from(row: MenuRow) -> Self {
        MenuEntry {
            id: row.id,
            parent_id: row.parent_id,
            menu_name: row.menu_name,
            menu_path: row.menu_path,
            menu_icon: row.menu_icon,
            menu_order: row.menu_order,
            label_id: row.label_id,
            label_name: row.label_name,
        }
    }
}
