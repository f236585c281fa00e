use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile as served by the backend. Numeric gamification fields are
/// default-filled on decode (xp and streaks to zero, level to one) because
/// the backend returns them as nulls for accounts that have not completed
/// anything yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, alias = "avatarUrl", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, alias = "totalXp", deserialize_with = "null_to_default")]
    pub total_xp: u32,
    #[serde(default = "default_level", deserialize_with = "null_to_level")]
    pub level: u32,
    #[serde(
        default,
        alias = "currentStreakDays",
        deserialize_with = "null_to_default"
    )]
    pub current_streak_days: u32,
    #[serde(
        default,
        alias = "longestStreakDays",
        deserialize_with = "null_to_default"
    )]
    pub longest_streak_days: u32,
    #[serde(default, alias = "joinedAt", skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

fn default_level() -> u32 {
    1
}

// The backend sends explicit nulls, which serde's `default` alone does not
// cover for non-Option fields.
fn null_to_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<u32> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or(0))
}

fn null_to_level<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<u32> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or(1))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserStatistics {
    #[serde(default, alias = "totalLessonsCompleted")]
    pub total_lessons_completed: u32,
    #[serde(default, alias = "totalCoursesCompleted")]
    pub total_courses_completed: u32,
    #[serde(default, alias = "totalMinutesSpent")]
    pub total_minutes_spent: u32,
    #[serde(default, alias = "averageScore")]
    pub average_score: f64,
    #[serde(default, alias = "lessonsThisWeek")]
    pub lessons_this_week: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Courses,
    Streak,
    Xp,
    Special,
    Speed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, alias = "iconUrl", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub category: AchievementCategory,
    pub requirement: u32,
    #[serde(default, alias = "xpReward")]
    pub xp_reward: u32,
}

/// Result of `login_user` / `register_user`. Tokens are present on a
/// successful login; registration may omit them when the backend requires
/// email confirmation first.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
    #[serde(default, alias = "accessToken")]
    pub access_token: Option<String>,
    #[serde(default, alias = "refreshToken")]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

#[derive(Debug, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
}
