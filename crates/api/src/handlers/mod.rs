//! Request handlers, one module per resource.

pub mod auth;
pub mod discussion;
pub mod notification;
pub mod profile;
pub mod project;
pub mod task;
