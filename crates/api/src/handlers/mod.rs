//! Request handlers.
//!
//! [`crud`], [`status`] and [`public`] are generic over
//! [`Resource`](courtside_db::resource::Resource) and are instantiated once per
//! entity in [`routes`](crate::routes). The remaining modules cover endpoints
//! with bespoke behaviour. Handlers delegate to `courtside_db` repositories
//! and map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod crud;
pub mod dashboard;
pub mod public;
pub mod roles;
pub mod status;
pub mod upload;
pub mod users;
pub mod visitor_logs;
