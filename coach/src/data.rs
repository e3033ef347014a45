//! Static catalog data: category labels, per-category habit suggestions,
//! example chat prompts, and the sample state a fresh session starts with.

use crate::{Frequency, Goal, Habit, HabitCategory, HabitDraft};
use uuid::Uuid;

/// A catalog entry pairing a category key with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: HabitCategory,
    pub label: &'static str,
}

pub const CATEGORIES: [Category; 8] = [
    Category {
        key: HabitCategory::Morning,
        label: "Morning Routine",
    },
    Category {
        key: HabitCategory::Evening,
        label: "Evening Routine",
    },
    Category {
        key: HabitCategory::Productivity,
        label: "Productivity",
    },
    Category {
        key: HabitCategory::Health,
        label: "Health & Wellness",
    },
    Category {
        key: HabitCategory::Social,
        label: "Social Skills",
    },
    Category {
        key: HabitCategory::Learning,
        label: "Learning & Development",
    },
    Category {
        key: HabitCategory::Mindfulness,
        label: "Mindfulness",
    },
    Category {
        key: HabitCategory::Financial,
        label: "Financial Health",
    },
];

#[must_use]
pub fn category_label(category: HabitCategory) -> &'static str {
    CATEGORIES
        .iter()
        .find(|c| c.key == category)
        .map_or("Other", |c| c.label)
}

/// Curated starter habits shown when the user browses a category.
#[must_use]
pub fn habit_suggestions(category: HabitCategory) -> &'static [&'static str] {
    match category {
        HabitCategory::Morning => &[
            "Wake up at 6 AM consistently",
            "Drink a glass of water immediately after waking up",
            "15 minutes of meditation or mindfulness",
            "Morning exercise (yoga, jogging, stretching)",
            "Plan your day and set 3 main goals",
            "Read 10 pages of a book",
            "Healthy breakfast with protein",
        ],
        HabitCategory::Evening => &[
            "Digital detox 1 hour before bed",
            "Gratitude journaling",
            "Prepare for next day (clothes, meals)",
            "Review daily accomplishments",
            "Reading before bed (no screens)",
            "Evening reflection and planning",
            "Relaxation techniques (deep breathing)",
        ],
        HabitCategory::Productivity => &[
            "Pomodoro technique (25min work, 5min break)",
            "Time blocking for important tasks",
            "Weekly review and planning session",
            "Single-tasking instead of multitasking",
            "Declutter workspace daily",
            "Set clear daily priorities",
            "Use a task management system",
        ],
        HabitCategory::Health => &[
            "30 minutes of daily exercise",
            "Drink 8 glasses of water",
            "Healthy meal preparation",
            "Regular sleep schedule",
            "Daily stretching routine",
        ],
        HabitCategory::Social => &[
            "Practice active listening in conversations",
            "Start one small conversation with a stranger",
            "Give a genuine compliment to someone",
            "Join a new social group or club",
            "Call a friend or family member",
        ],
        HabitCategory::Learning => &[
            "Read 20 pages daily",
            "Learn a new skill for 30 minutes",
            "Practice a language daily",
            "Watch educational content",
            "Take online courses regularly",
        ],
        HabitCategory::Mindfulness => &[
            "Practice 10 minutes of focused breathing",
            "Mindful eating for one meal",
            "Go for a walk without any devices",
            "Write down three things you're grateful for",
            "Do a 5-minute body scan meditation",
        ],
        HabitCategory::Financial => &[
            "Track your daily expenses",
            "Read one article about personal finance",
            "Set aside a small amount for savings",
            "Review your monthly budget",
            "Plan meals to reduce food spending",
        ],
    }
}

/// Example prompts surfaced in the chat UI.
pub const CHAT_EXAMPLES: [&str; 6] = [
    "Add a new habit to read 10 pages a day",
    "Set a goal to learn Next.js in 1 month",
    "Help me build better social skills",
    "I need help with time management",
    "How to develop a consistent exercise habit?",
    "Suggest ways to improve my current sleep routine",
];

#[must_use]
pub fn sample_habits() -> Vec<Habit> {
    let seed = |title: &str, category, description: &str, completed, streak| Habit {
        completed,
        streak,
        ..HabitDraft {
            title: title.to_string(),
            description: Some(description.to_string()),
            category: Some(category),
            frequency: Some(Frequency::Daily),
        }
        .into_habit()
    };

    vec![
        seed(
            "15 minutes of meditation",
            HabitCategory::Morning,
            "Using a guided meditation app.",
            true,
            5,
        ),
        seed(
            "30 minutes of daily exercise",
            HabitCategory::Health,
            "A mix of cardio and strength training.",
            false,
            2,
        ),
        seed(
            "Read 20 pages daily",
            HabitCategory::Learning,
            "Reading a non-fiction book.",
            true,
            12,
        ),
        seed(
            "Digital detox 1 hour before bed",
            HabitCategory::Evening,
            "No screens before sleeping.",
            false,
            0,
        ),
    ]
}

#[must_use]
pub fn sample_goals() -> Vec<Goal> {
    let seed = |title: &str, timeline: &str, progress| Goal {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        timeline: timeline.to_string(),
        progress,
    };

    vec![
        seed("Run a 5k marathon", "3 months", 40),
        seed("Finish online course on React", "1 month", 75),
        seed("Save $1000 for vacation", "6 months", 20),
    ]
}
