//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (record lists, open dialogs,
//! simulated calls) and delegates rendering details to `components`.

pub mod admin_register;
pub mod audits;
pub mod available_badges;
pub mod badges;
pub mod companies;
pub mod criteria;
pub mod dashboard;
pub mod digital_badges;
pub mod forgot_password;
pub mod industry_dashboard;
pub mod landing;
pub mod login;
pub mod profiles;
pub mod reset_password;
