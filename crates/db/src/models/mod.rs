//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the select list
//!   (including joined display columns)
//! - A `Deserialize` + `Validate` create DTO
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//! - A `Deserialize` list filter when the resource supports column filters

pub mod access;
pub mod branch;
pub mod collaboration;
pub mod contact;
pub mod court;
pub mod dashboard;
pub mod event;
pub mod facility;
pub mod program;
pub mod schedule;
pub mod testimonial;
pub mod trainer;
pub mod trial_class;
pub mod user;
pub mod visitor_log;
