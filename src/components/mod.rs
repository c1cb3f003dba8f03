//! Reusable UI components.

pub mod mission_card;
pub mod navbar;
pub mod notifications_dropdown;
pub mod require_auth;
pub mod stat_card;
