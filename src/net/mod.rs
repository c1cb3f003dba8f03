//! Network layer: typed REST wrappers over the backend API.
//!
//! `http` owns request configuration and error classification; `api` holds
//! one-to-one endpoint wrappers; `types` mirrors the backend schemas.

pub mod api;
pub mod http;
pub mod types;
