//! Deterministic prompt construction for the three coaching flows. Keeping
//! the strings in one place keeps the gateway's requests reproducible for a
//! given store state and user input.

use crate::{Goal, Habit};

pub const COACH_SYSTEM_PROMPT: &str = "You are GPT-Life, an AI life coach. Your role is to provide advice, answer questions, and help users manage their habits.";

/// The user-turn prompt for the personalized-advice flow. Embeds the
/// current habit titles and descriptions so the model can reason about what
/// the user already tracks, and pins the reply to a single JSON object.
#[must_use]
pub fn advice_prompt(habits: &[Habit], user_input: &str) -> String {
    let habit_lines = if habits.is_empty() {
        "No habits defined yet.".to_string()
    } else {
        habits
            .iter()
            .map(|h| format!("- {} ({})", h.title, h.description))
            .collect::<Vec<_>>()
            .join("\n")
    };

    [
        "The user's current habits are:".to_string(),
        habit_lines,
        String::new(),
        format!("User's request: \"{user_input}\""),
        String::new(),
        "Based on the user's request:".to_string(),
        "1. Provide a conversational and encouraging response in the 'response' field.".to_string(),
        "2. If the user asks to add, create, or set a new habit, define it in the 'updatedHabits' array.".to_string(),
        "3. Infer the category and frequency if not specified, but default to 'daily' for frequency.".to_string(),
        "4. Do not modify existing habits unless explicitly asked.".to_string(),
        "5. If you are just providing advice or answering a question, the 'updatedHabits' array should be empty.".to_string(),
        String::new(),
        "Your entire output must be a single JSON object with two keys: \"response\" (string) and \"updatedHabits\" (an array of habits). A habit object should have: 'title', 'description', 'category' (one of: morning, evening, productivity, health, social, learning, mindfulness, financial), 'frequency' ('daily', 'weekly', 'monthly', or 'one-time').".to_string(),
        "Example habit object: { \"title\": \"Run three times a week\", \"description\": \"Morning runs on M, W, F\", \"category\": \"health\", \"frequency\": \"weekly\" }".to_string(),
    ]
    .join("\n")
}

/// Plain-text daily plan built around the user's goal titles.
#[must_use]
pub fn daily_plan_prompt(goals: &[Goal]) -> String {
    let goal_titles = goals
        .iter()
        .map(|g| g.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Create a comprehensive daily plan for someone with these goals: {goal_titles}.\n\
         Include morning routine, work/study blocks, breaks, evening routine, and self-care activities.\n\
         Make it realistic and time-specific. The output should be plain text."
    )
}

/// Plain-text suggestions for doing an existing habit better.
#[must_use]
pub fn improve_habit_prompt(habit_name: &str, current_method: &str) -> String {
    format!(
        "You are an AI habit coach. A user has the habit '{habit_name}' and currently does it like this: {current_method}.\n\
         Please suggest 3 improved methods or techniques to make this habit more effective, sustainable, and rewarding.\n\
         Provide specific, actionable suggestions as plain text."
    )
}
