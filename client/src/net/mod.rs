//! Networking modules for the community message backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the two REST calls and `types` defines the wire schema.

pub mod api;
pub mod types;
