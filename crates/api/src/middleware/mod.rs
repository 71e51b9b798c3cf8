//! Request middleware and extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`dev_errors::expose_internal_errors`] -- Adds internal error detail to
//!   500 responses in development.

pub mod auth;
pub mod dev_errors;
