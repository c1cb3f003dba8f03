//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `notifications`, `ui`) so individual
//! components can depend on small focused models. Each state struct is a
//! plain value held in an `RwSignal` provided via context; the transition
//! logic lives on the struct itself so it stays testable off-wasm.

pub mod notifications;
pub mod session;
pub mod ui;
