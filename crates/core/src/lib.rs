//! Domain types and pure rules for SynergySphere.
//!
//! Nothing in this crate performs I/O. The database and HTTP layers build on
//! these types and call the rules after loading the data they need.

pub mod access;
pub mod error;
pub mod notification_type;
pub mod task_events;
pub mod task_status;
pub mod types;
