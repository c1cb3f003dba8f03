//! Small browser-facing utilities shared across pages and components.

pub mod storage;
pub mod theme;
