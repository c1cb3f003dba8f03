//! Page components, one module per route.

pub mod dashboard;
pub mod forum;
pub mod landing;
pub mod leaderboard;
pub mod login;
pub mod mission_detail;
pub mod missions;
pub mod register;
pub mod resources;
