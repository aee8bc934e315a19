//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render forms, cards and page chrome. Pages own the record
//! lists; components receive data as props and report edits via callbacks.

pub mod auth_form;
pub mod company_form;
pub mod criterion_form;
pub mod digital_badge_card;
pub mod dynamic_form;
pub mod nav_card;
pub mod page_header;
pub mod policy_checklist;
