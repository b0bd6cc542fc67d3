//! Pure domain logic for the Courtside venue backend.
//!
//! Nothing in this crate performs I/O; the `db` and `api` crates build on the
//! types and rules defined here.

pub mod analytics;
pub mod error;
pub mod menu_tree;
pub mod pagination;
pub mod roles;
pub mod status;
pub mod types;
pub mod upload;
pub mod validation;
