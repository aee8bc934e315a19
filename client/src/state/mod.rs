//! Page and form state for the portal.
//!
//! DESIGN
//! ======
//! Form drafts are plain structs with pure methods; pages wrap them in
//! `RwSignal`s. Nothing in this module touches the DOM.

pub mod assessments;
pub mod auth;
pub mod badge_form;
pub mod company_form;
pub mod criterion_form;
pub mod password_reset;
pub mod profiles;
pub mod records;
pub mod validation;
