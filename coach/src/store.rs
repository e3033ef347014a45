use crate::{data, Goal, GoalDraft, Habit, HabitCategory, HabitDraft};

/// The single source of truth for habits and goals within a session.
///
/// The store exclusively owns both collections; every mutation goes through
/// the methods here. It is held in memory only and mutated from a single
/// task, so there is no synchronization discipline to follow. Mutations are
/// total: an id that matches nothing is a no-op signalled by the `bool`
/// return, never a panic.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    habits: Vec<Habit>,
    goals: Vec<Goal>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the sample habits and goals a fresh
    /// session starts with.
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self {
            habits: data::sample_habits(),
            goals: data::sample_goals(),
        }
    }

    #[must_use]
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Normalize the draft into a full habit and append it.
    pub fn add_habit(&mut self, draft: HabitDraft) -> &Habit {
        self.habits.push(draft.into_habit());
        &self.habits[self.habits.len() - 1]
    }

    /// Merge already-normalized habits (e.g. from the advice gateway) into
    /// the collection. Habits whose id is already present are skipped so id
    /// uniqueness holds.
    pub fn extend_habits(&mut self, habits: Vec<Habit>) {
        for habit in habits {
            if self.habits.iter().any(|h| h.id == habit.id) {
                continue;
            }
            self.habits.push(habit);
        }
    }

    /// Flip the completion state of the habit with the given id. Completing
    /// bumps the streak; un-completing decrements it, never below zero.
    /// Returns `false` (and changes nothing) when the id matches no habit.
    pub fn toggle_habit(&mut self, id: &str) -> bool {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return false;
        };
        habit.completed = !habit.completed;
        if habit.completed {
            habit.streak += 1;
        } else {
            habit.streak = habit.streak.saturating_sub(1);
        }
        true
    }

    /// Normalize the draft into a goal with zero progress and append it.
    pub fn add_goal(&mut self, draft: GoalDraft) -> &Goal {
        self.goals.push(draft.into_goal());
        &self.goals[self.goals.len() - 1]
    }

    /// Set a goal's progress, clamped to `0..=100`. Returns `false` (and
    /// changes nothing) when the id matches no goal.
    pub fn update_goal_progress(&mut self, id: &str, progress: i64) -> bool {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return false;
        };
        goal.progress = u8::try_from(progress.clamp(0, 100)).unwrap_or(100);
        true
    }

    /// Percentage of habits currently completed, rounded to the nearest
    /// whole number. Zero for an empty collection.
    #[must_use]
    pub fn completion_rate(&self) -> u8 {
        let total = self.habits.len();
        if total == 0 {
            return 0;
        }
        let completed = self.habits.iter().filter(|h| h.completed).count();
        u8::try_from((completed * 100 + total / 2) / total).unwrap_or(100)
    }

    /// The largest streak across all habits; zero for an empty collection.
    #[must_use]
    pub fn longest_streak(&self) -> u32 {
        self.habits.iter().map(|h| h.streak).max().unwrap_or(0)
    }

    /// Habits in the given category, in insertion order.
    #[must_use]
    pub fn habits_by_category(&self, category: HabitCategory) -> Vec<&Habit> {
        self.habits
            .iter()
            .filter(|h| h.category == category)
            .collect()
    }
}
