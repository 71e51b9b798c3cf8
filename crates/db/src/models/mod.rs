//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row (foreign keys as ids)
//! - A populated `*Detail` DTO where the API resolves foreign users
//! - `Deserialize` + `Validate` input DTOs; unknown fields are rejected

pub mod discussion;
pub mod fields;
pub mod notification;
pub mod project;
pub mod task;
pub mod user;
