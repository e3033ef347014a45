//! The UI-facing boundary over the [`Coach`] gateway. Every function here
//! is total: failures are logged and converted into a fixed, user-friendly
//! fallback so no error ever reaches the render path.

use crate::{Advice, AdviceInput, Coach, Goal, Habit};

pub const FALLBACK_ADVICE: &str = "Sorry, I had trouble connecting to the AI service. Please check your API key and try again.";
pub const FALLBACK_DAILY_PLAN: &str =
    "I'm sorry, but I couldn't generate a daily plan at this moment. Please check your goals and try again.";
pub const FALLBACK_SUGGESTIONS: &str = "I'm having trouble coming up with suggestions right now. Please tell me more about your habit and I'll try again.";

/// The shape handed back to the UI: the reply text plus any habits the
/// model proposed, already normalized. On failure the reply is
/// [`FALLBACK_ADVICE`] and the habit list is empty.
#[derive(Debug, Clone)]
pub struct AdviceOutput {
    pub response: String,
    pub updated_habits: Vec<Habit>,
}

pub async fn get_personalized_advice(
    coach: &Coach,
    user_input: impl Into<String>,
    habits: &[Habit],
) -> AdviceOutput {
    let input = AdviceInput {
        user_input: user_input.into(),
        habits: habits.to_vec(),
    };
    match coach.personalized_advice(input).await {
        Ok(Advice {
            response,
            updated_habits,
        }) => AdviceOutput {
            response,
            updated_habits,
        },
        Err(error) => {
            tracing::error!(%error, "personalized advice failed");
            AdviceOutput {
                response: FALLBACK_ADVICE.to_string(),
                updated_habits: Vec::new(),
            }
        }
    }
}

pub async fn generate_daily_plan(coach: &Coach, goals: &[Goal]) -> String {
    match coach.daily_plan(goals).await {
        Ok(plan) => plan,
        Err(error) => {
            tracing::error!(%error, "daily plan generation failed");
            FALLBACK_DAILY_PLAN.to_string()
        }
    }
}

pub async fn get_habit_suggestions(
    coach: &Coach,
    habit_name: &str,
    current_method: &str,
) -> String {
    match coach.improve_habit(habit_name, current_method).await {
        Ok(suggestions) => suggestions,
        Err(error) => {
            tracing::error!(%error, "habit suggestions failed");
            FALLBACK_SUGGESTIONS.to_string()
        }
    }
}
