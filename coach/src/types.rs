use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of categories habits are grouped under in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Morning,
    Evening,
    #[default]
    Productivity,
    Health,
    Social,
    Learning,
    Mindfulness,
    Financial,
}

impl HabitCategory {
    pub const ALL: [Self; 8] = [
        Self::Morning,
        Self::Evening,
        Self::Productivity,
        Self::Health,
        Self::Social,
        Self::Learning,
        Self::Mindfulness,
        Self::Financial,
    ];
}

/// How often a habit recurs. Informational only; nothing schedules on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    OneTime,
}

/// A user-tracked recurring action.
///
/// Invariants: `id` is unique within a store and immutable after creation;
/// `streak` never goes negative (`u32` plus a floor-at-zero decrement).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: HabitCategory,
    pub frequency: Frequency,
    pub completed: bool,
    pub streak: u32,
    pub created_at: DateTime<Utc>,
}

/// The fields a caller (or the model) supplies when creating a habit.
/// Everything else is defaulted at creation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HabitDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<HabitCategory>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
}

impl HabitDraft {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Normalize the draft into a full habit: fresh id, stamped creation
    /// time, not completed, zero streak, defaulted category and frequency.
    #[must_use]
    pub fn into_habit(self) -> Habit {
        Habit {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            frequency: self.frequency.unwrap_or_default(),
            completed: false,
            streak: 0,
            created_at: Utc::now(),
        }
    }
}

/// A longer-term objective tracked by percentage progress.
///
/// Invariant: `progress` stays within `0..=100` after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub timeline: String,
    pub progress: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalDraft {
    pub title: String,
    #[serde(default)]
    pub timeline: String,
}

impl GoalDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, timeline: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            timeline: timeline.into(),
        }
    }

    #[must_use]
    pub fn into_goal(self) -> Goal {
        Goal {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            timeline: self.timeline,
            progress: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
    Tool,
}

/// One turn in the coaching conversation. Ephemeral: lives only for the
/// current session, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            tool_call_id: None,
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            tool_call_id: None,
        }
    }
}
