//! Well-known role name constants.
//!
//! Must match the seed data in `20250101000001_create_access_control.sql`.

pub const ROLE_ADMIN: &str = "admin";
