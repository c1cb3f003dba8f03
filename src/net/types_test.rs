use super::*;

// =============================================================
// Backend-shaped payloads deserialize
// =============================================================

#[test]
fn user_deserializes_from_auth_me_payload() {
    let raw = r#"{
        "id": 1,
        "username": "user",
        "email": "user@example.com",
        "full_name": "User One",
        "role": "student",
        "school_id": 3,
        "points": 420,
        "level": 4,
        "profile_photo": null,
        "created_at": "2026-01-05T10:00:00Z"
    }"#;
    let user: User = serde_json::from_str(raw).expect("user");
    assert_eq!(user.id, 1);
    assert_eq!(user.role, UserRole::Student);
    assert_eq!(user.points, 420);
}

#[test]
fn user_tolerates_missing_optional_fields() {
    let raw = r#"{"id": 2, "username": "t", "email": "t@x.fr", "full_name": "T"}"#;
    let user: User = serde_json::from_str(raw).expect("minimal user");
    assert_eq!(user.role, UserRole::Student);
    assert_eq!(user.points, 0);
    assert!(user.school_id.is_none());
}

#[test]
fn user_roles_map_to_lowercase_wire_values() {
    assert_eq!(
        serde_json::from_str::<UserRole>("\"teacher\"").expect("role"),
        UserRole::Teacher
    );
    assert_eq!(
        serde_json::to_string(&UserRole::Admin).expect("role"),
        "\"admin\""
    );
}

#[test]
fn token_response_needs_only_access_token() {
    let token: TokenResponse =
        serde_json::from_str(r#"{"access_token": "abc"}"#).expect("token");
    assert_eq!(token.access_token, "abc");
    assert!(token.token_type.is_none());
}

#[test]
fn register_request_omits_absent_school() {
    let req = RegisterRequest {
        username: "eco".to_owned(),
        email: "eco@x.fr".to_owned(),
        password: "secret123".to_owned(),
        full_name: "Eco User".to_owned(),
        role: UserRole::Student,
        school_id: None,
    };
    let raw = serde_json::to_string(&req).expect("register");
    assert!(!raw.contains("school_id"));
    assert!(raw.contains("\"role\":\"student\""));
}

#[test]
fn mission_deserializes_with_nested_category() {
    let raw = r#"{
        "id": 5,
        "title": "Collecte de piles",
        "description": "Ramasser 20 piles usagées",
        "category_id": 2,
        "difficulty": "medium",
        "points": 50,
        "is_active": true,
        "category": {"id": 2, "name": "Collecte"}
    }"#;
    let mission: Mission = serde_json::from_str(raw).expect("mission");
    assert_eq!(mission.difficulty, MissionDifficulty::Medium);
    assert_eq!(mission.category.as_ref().map(|c| c.id), Some(2));
    assert!(mission.is_active);
}

#[test]
fn mission_defaults_to_active_when_flag_absent() {
    let raw = r#"{"id": 1, "title": "t", "description": "d", "points": 10}"#;
    let mission: Mission = serde_json::from_str(raw).expect("mission");
    assert!(mission.is_active);
    assert_eq!(mission.difficulty, MissionDifficulty::Easy);
}

#[test]
fn submission_status_defaults_to_pending() {
    let raw = r#"{"id": 9, "mission_id": 5, "student_id": 1, "submission_text": "fait"}"#;
    let submission: MissionSubmission = serde_json::from_str(raw).expect("submission");
    assert_eq!(submission.status, SubmissionStatus::Pending);
}

#[test]
fn leaderboard_response_deserializes_entries() {
    let raw = r#"{
        "entries": [
            {"rank": 1, "team_id": 4, "team_name": "Les Recycleurs",
             "school_name": "Lycée Pasteur", "total_points": 900,
             "member_count": 5, "completed_missions": 12}
        ],
        "total_teams": 8
    }"#;
    let board: LeaderboardResponse = serde_json::from_str(raw).expect("leaderboard");
    assert_eq!(board.entries.len(), 1);
    assert_eq!(board.entries[0].rank, 1);
    assert!(board.current_user_team.is_none());
}

#[test]
fn notification_unread_by_default() {
    let raw = r#"{"id": 3, "title": "Badge obtenu", "message": "Bravo!"}"#;
    let n: Notification = serde_json::from_str(raw).expect("notification");
    assert!(!n.is_read);
}

#[test]
fn forum_post_counts_default_to_zero() {
    let raw = r#"{"id": 1, "title": "Où déposer ?", "content": "...", "author_id": 2}"#;
    let post: ForumPost = serde_json::from_str(raw).expect("post");
    assert_eq!(post.comment_count, 0);
    assert!(post.author.is_none());
}

#[test]
fn forum_comments_deserialize_with_optional_author() {
    let raw = r#"[
        {"id": 1, "post_id": 9, "content": "En salle B12.", "author_id": 3,
         "author": {"id": 3, "username": "m", "email": "m@x.fr", "full_name": "Mme Martin"}},
        {"id": 2, "post_id": 9, "content": "Merci !", "author_id": 4}
    ]"#;
    let comments: Vec<ForumComment> = serde_json::from_str(raw).expect("comments");
    assert_eq!(comments.len(), 2);
    assert_eq!(
        comments[0].author.as_ref().map(|a| a.full_name.as_str()),
        Some("Mme Martin")
    );
    assert!(comments[1].author.is_none());
}

// =============================================================
// UI labels
// =============================================================

#[test]
fn difficulty_query_values_match_backend_filter() {
    assert_eq!(MissionDifficulty::Easy.as_query(), "easy");
    assert_eq!(MissionDifficulty::Hard.as_query(), "hard");
}

#[test]
fn labels_are_nonempty() {
    for role in [UserRole::Student, UserRole::Teacher, UserRole::Admin] {
        assert!(!role.label().is_empty());
    }
    for status in [
        SubmissionStatus::Pending,
        SubmissionStatus::Approved,
        SubmissionStatus::Rejected,
    ] {
        assert!(!status.label().is_empty());
    }
}
