//! Request guards. [`auth::AuthUser`] protects the `/admin/v1` surface.

pub mod auth;
