//! Utility helpers shared across portal pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns (clipboard, current date) sit behind the `hydrate`
//! feature here so pages and forms stay testable natively.

pub mod clipboard;
pub mod dates;
pub mod password_policy;
pub mod qr;
