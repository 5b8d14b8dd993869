//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, home-page sections and message entries.
//! Each owns its local state; none read shared context.

pub mod footer;
pub mod home_sections;
pub mod lazy_section;
pub mod message_item;
pub mod navbar;
