//! Data access for the portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the entity records, `mock` holds the fixtures that stand in
//! for persistence, and `api` wraps them in async calls shaped like the real
//! backend endpoints.

pub mod api;
pub mod mock;
pub mod types;
