pub mod admin;
pub mod health;
pub mod public;
pub mod resource;

pub use admin::admin_routes;
pub use public::public_routes;
