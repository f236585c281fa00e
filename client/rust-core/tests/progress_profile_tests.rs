mod common;

use chrono::{DateTime, Utc};
use codequest_client::gateway::ops;
use codequest_client::models::progress::{ProgressStatus, ProgressUpdate};
use codequest_client::Error;
use common::{anonymous_state, authed_state, MockGateway, TEST_TOKEN};
use serde_json::json;
use uuid::Uuid;

fn remote_progress(status: &str, completed_at: Option<&str>) -> serde_json::Value {
    json!({
        "id": "p1",
        "user_id": "user-1",
        "lesson_id": "py-001",
        "status": status,
        "score": 85,
        "attempts": 2,
        "completed_at": completed_at,
    })
}

#[tokio::test]
async fn completion_is_stamped_with_the_local_clock() {
    let gateway = MockGateway::new();
    gateway.respond(
        ops::UPDATE_LESSON_PROGRESS,
        remote_progress("completed", Some("2023-01-01T00:00:00Z")),
    );
    let state = authed_state(gateway.clone());

    let before = Utc::now();
    state
        .progress
        .update_lesson_progress(
            "user-1",
            "py-001",
            ProgressStatus::Completed,
            ProgressUpdate {
                score: Some(95),
                attempts: Some(3),
                ..ProgressUpdate::default()
            },
        )
        .await
        .unwrap();
    let after = Utc::now();

    let args = gateway.last_args(ops::UPDATE_LESSON_PROGRESS).unwrap();
    let progress = &args["progress"];
    assert_eq!(progress["status"], "completed");
    assert_eq!(progress["score"], 95);
    assert_eq!(progress["attempts"], 3);
    assert_eq!(args["accessToken"], TEST_TOKEN);

    // The timestamp sent to the backend came from our clock, not theirs
    let stamped: DateTime<Utc> = progress["completed_at"]
        .as_str()
        .expect("completed_at must be set for completed status")
        .parse()
        .unwrap();
    assert!(stamped >= before && stamped <= after);
}

#[tokio::test]
async fn non_completed_submissions_carry_no_timestamp() {
    let gateway = MockGateway::new();
    gateway.respond(
        ops::UPDATE_LESSON_PROGRESS,
        remote_progress("in_progress", None),
    );
    let state = authed_state(gateway.clone());

    state
        .progress
        .update_lesson_progress(
            "user-1",
            "py-001",
            ProgressStatus::InProgress,
            ProgressUpdate {
                score: Some(85),
                attempts: Some(2),
                ..ProgressUpdate::default()
            },
        )
        .await
        .unwrap();

    let args = gateway.last_args(ops::UPDATE_LESSON_PROGRESS).unwrap();
    assert!(args["progress"]["completed_at"].is_null());
}

#[tokio::test]
async fn attempts_default_to_one_when_not_provided() {
    let gateway = MockGateway::new();
    gateway.respond(
        ops::UPDATE_LESSON_PROGRESS,
        remote_progress("in_progress", None),
    );
    let state = authed_state(gateway.clone());
    let user_id = format!("progress-user-{}", Uuid::new_v4());

    state
        .progress
        .update_lesson_progress(
            &user_id,
            "py-001",
            ProgressStatus::InProgress,
            ProgressUpdate {
                score: Some(85),
                ..ProgressUpdate::default()
            },
        )
        .await
        .unwrap();

    let args = gateway.last_args(ops::UPDATE_LESSON_PROGRESS).unwrap();
    assert_eq!(args["progress"]["attempts"], 1);
    assert_eq!(args["progress"]["user_id"], user_id.as_str());
}

#[tokio::test]
async fn progress_reads_decode_the_remote_records() -> anyhow::Result<()> {
    let gateway = MockGateway::new();
    gateway.respond(
        ops::GET_USER_PROGRESS,
        json!([
            remote_progress("completed", Some("2023-01-01T00:00:00Z")),
            remote_progress("in_progress", None),
        ]),
    );
    let state = authed_state(gateway.clone());

    let records = state.progress.user_progress("user-1").await?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].status, ProgressStatus::Completed);
    assert_eq!(records[1].completed_at, None);

    let args = gateway.last_args(ops::GET_USER_PROGRESS).unwrap();
    assert_eq!(args["userId"], "user-1");
    Ok(())
}

#[tokio::test]
async fn progress_without_credential_is_a_fatal_precondition() {
    let gateway = MockGateway::new();
    let state = anonymous_state(gateway.clone());

    let result = state.progress.user_progress("user-1").await;
    assert!(matches!(result, Err(Error::MissingCredential)));

    let result = state
        .progress
        .update_lesson_progress(
            "user-1",
            "py-001",
            ProgressStatus::InProgress,
            ProgressUpdate::default(),
        )
        .await;
    assert!(matches!(result, Err(Error::MissingCredential)));

    assert_eq!(gateway.total_calls(), 0);
}

#[tokio::test]
async fn profile_nulls_are_default_filled() {
    let gateway = MockGateway::new();
    gateway.respond(
        ops::GET_USER_PROFILE,
        json!({
            "id": "user-1",
            "email": "student@example.com",
            "username": null,
            "total_xp": null,
            "level": null,
            "current_streak_days": null,
            "longest_streak_days": null,
        }),
    );
    let state = authed_state(gateway);

    let profile = state.profile.user_profile("user-1").await.unwrap();
    assert_eq!(profile.total_xp, 0);
    assert_eq!(profile.level, 1);
    assert_eq!(profile.current_streak_days, 0);
    assert_eq!(profile.longest_streak_days, 0);
}

#[tokio::test]
async fn statistics_decode_with_missing_fields_defaulted() {
    let gateway = MockGateway::new();
    gateway.respond(
        ops::GET_USER_STATISTICS,
        json!({
            "total_lessons_completed": 12,
            "total_minutes_spent": 340,
        }),
    );
    let state = authed_state(gateway);

    let stats = state.profile.user_statistics("user-1").await.unwrap();
    assert_eq!(stats.total_lessons_completed, 12);
    assert_eq!(stats.total_minutes_spent, 340);
    assert_eq!(stats.total_courses_completed, 0);
    assert_eq!(stats.average_score, 0.0);
}

#[tokio::test]
async fn avatar_and_username_updates_pass_identifiers_through() {
    let gateway = MockGateway::new();
    gateway.respond(ops::UPDATE_USER_AVATAR, json!(null));
    gateway.respond(ops::UPDATE_USER_USERNAME, json!(null));
    let state = authed_state(gateway.clone());

    state
        .profile
        .update_avatar("user-1", "https://cdn.example.com/a.png")
        .await
        .unwrap();
    state.profile.update_username("user-1", "new-name").await.unwrap();

    let args = gateway.last_args(ops::UPDATE_USER_AVATAR).unwrap();
    assert_eq!(args["avatarUrl"], "https://cdn.example.com/a.png");

    let args = gateway.last_args(ops::UPDATE_USER_USERNAME).unwrap();
    assert_eq!(args["username"], "new-name");
    assert_eq!(args["accessToken"], TEST_TOKEN);
}

#[tokio::test]
async fn achievements_decode_and_require_a_session() {
    let gateway = MockGateway::new();
    gateway.respond(
        ops::GET_AVAILABLE_ACHIEVEMENTS,
        json!([
            {
                "id": "ach-1",
                "title": "First steps",
                "description": "Complete your first lesson",
                "category": "courses",
                "requirement": 1,
                "xp_reward": 25,
            },
        ]),
    );
    gateway.respond(ops::CHECK_AND_UNLOCK_ACHIEVEMENTS, json!([]));

    let state = authed_state(gateway.clone());
    let achievements = state.achievements.available().await.unwrap();
    assert_eq!(achievements.len(), 1);
    assert_eq!(achievements[0].xp_reward, 25);

    let unlocked = state.achievements.check_and_unlock("user-1").await.unwrap();
    assert!(unlocked.is_empty());

    let anonymous = anonymous_state(MockGateway::new());
    let result = anonymous.achievements.available().await;
    assert!(matches!(result, Err(Error::MissingCredential)));
}
