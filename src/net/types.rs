//! Data models mirroring the backend's REST schemas.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role attached to every account; drives which pages and actions a user
/// sees after login.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Student => "Élève",
            UserRole::Teacher => "Enseignant",
            UserRole::Admin => "Administrateur",
        }
    }
}

/// Authenticated user profile as returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub school_id: Option<i64>,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Bearer credential issued by `POST /auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Registration payload for `POST /auth/register`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<i64>,
}

/// Mission category (e.g. collect, repair, awareness).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl MissionDifficulty {
    pub fn label(self) -> &'static str {
        match self {
            MissionDifficulty::Easy => "Facile",
            MissionDifficulty::Medium => "Moyen",
            MissionDifficulty::Hard => "Difficile",
        }
    }

    /// Query-string value the backend filter expects.
    pub fn as_query(self) -> &'static str {
        match self {
            MissionDifficulty::Easy => "easy",
            MissionDifficulty::Medium => "medium",
            MissionDifficulty::Hard => "hard",
        }
    }
}

/// An e-waste mission students can complete for points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub difficulty: MissionDifficulty,
    pub points: i64,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub category: Option<Category>,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "En attente",
            SubmissionStatus::Approved => "Approuvée",
            SubmissionStatus::Rejected => "Refusée",
        }
    }
}

/// A student's answer to a mission, reviewed by a teacher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionSubmission {
    pub id: i64,
    pub mission_id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub submission_text: Option<String>,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub points_awarded: Option<i64>,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

/// One ranked row of the team leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub team_id: i64,
    pub team_name: String,
    #[serde(default)]
    pub school_name: Option<String>,
    pub total_points: i64,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub completed_missions: u32,
}

/// Paged leaderboard response, optionally carrying the caller's own team.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    #[serde(default)]
    pub entries: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub current_user_team: Option<LeaderboardEntry>,
    #[serde(default)]
    pub total_teams: u32,
}

/// Forum discussion thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub author_id: i64,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for creating a forum post.
#[derive(Clone, Debug, Serialize)]
pub struct NewForumPost {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// Comment under a forum post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForumComment {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub author_id: i64,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// In-app notification (badge earned, submission reviewed, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub notification_type: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Educational resource (article, video, PDF) listed on the resources page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
}
