//! REST endpoint wrappers.
//!
//! One function per backend endpoint, no client-side orchestration: pages
//! and the session store decide what to do with results. Errors come back
//! as [`ApiError`](crate::net::http::ApiError) already classified by the
//! transport layer.

use crate::net::http;
use crate::net::http::ApiError;
use crate::net::types::{
    ForumComment, ForumPost, LeaderboardResponse, Mission, MissionDifficulty, MissionSubmission,
    NewForumPost, Notification, RegisterRequest, Resource, TokenResponse, User,
};

// ---------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------

/// Exchange credentials for a bearer token. The backend consumes the
/// OAuth2 password form, with the email in the `username` field.
pub async fn login(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    http::post_form("/auth/login", &[("username", email), ("password", password)]).await
}

/// Create a new account. The session store chains this into a normal login.
pub async fn register(data: &RegisterRequest) -> Result<User, ApiError> {
    http::post_json("/auth/register", data).await
}

/// Fetch the profile behind the stored bearer token.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    http::get_json("/auth/me").await
}

// ---------------------------------------------------------------------
// Missions
// ---------------------------------------------------------------------

/// List missions, optionally filtered by difficulty.
pub async fn fetch_missions(difficulty: Option<MissionDifficulty>) -> Result<Vec<Mission>, ApiError> {
    let mut params = Vec::new();
    if let Some(d) = difficulty {
        params.push(("difficulty", d.as_query().to_owned()));
    }
    http::get_json_with_query("/missions", &params).await
}

pub async fn fetch_mission(id: i64) -> Result<Mission, ApiError> {
    http::get_json(&format!("/missions/{id}")).await
}

/// Submit a text answer for a mission.
pub async fn submit_mission(id: i64, text: &str) -> Result<MissionSubmission, ApiError> {
    http::post_json(
        &format!("/missions/{id}/submit"),
        &serde_json::json!({ "submission_text": text }),
    )
    .await
}

// ---------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------

/// Ranked team leaderboard. `period` is one of the backend's
/// `daily`/`weekly`/`monthly`/`all-time` windows.
pub async fn fetch_leaderboard(period: &str) -> Result<LeaderboardResponse, ApiError> {
    let params = [("period", period.to_owned())];
    http::get_json_with_query("/leaderboard", &params).await
}

// ---------------------------------------------------------------------
// Forum
// ---------------------------------------------------------------------

pub async fn fetch_forum_posts() -> Result<Vec<ForumPost>, ApiError> {
    http::get_json("/forum/posts").await
}

pub async fn create_forum_post(post: &NewForumPost) -> Result<ForumPost, ApiError> {
    http::post_json("/forum/posts", post).await
}

pub async fn fetch_post_comments(post_id: i64) -> Result<Vec<ForumComment>, ApiError> {
    http::get_json(&format!("/forum/posts/{post_id}/comments")).await
}

pub async fn create_post_comment(post_id: i64, content: &str) -> Result<ForumComment, ApiError> {
    http::post_json(
        &format!("/forum/posts/{post_id}/comments"),
        &serde_json::json!({ "content": content }),
    )
    .await
}

// ---------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------

pub async fn fetch_notifications() -> Result<Vec<Notification>, ApiError> {
    http::get_json("/notifications").await
}

pub async fn fetch_unread_count() -> Result<u32, ApiError> {
    #[derive(serde::Deserialize)]
    struct UnreadCount {
        count: u32,
    }
    let body: UnreadCount = http::get_json("/notifications/unread/count").await?;
    Ok(body.count)
}

pub async fn mark_notification_read(id: i64) -> Result<Notification, ApiError> {
    http::put_empty(&format!("/notifications/{id}/read")).await
}

/// Mark every notification read; returns the number updated.
pub async fn mark_all_notifications_read() -> Result<u32, ApiError> {
    #[derive(serde::Deserialize)]
    struct Updated {
        updated: u32,
    }
    let body: Updated = http::put_empty("/notifications/read-all").await?;
    Ok(body.updated)
}

// ---------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------

pub async fn fetch_resources() -> Result<Vec<Resource>, ApiError> {
    http::get_json("/resources").await
}
