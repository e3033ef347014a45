use crate::{prompts, CoachError, Goal, Habit, HabitDraft};
use gptlife_llm::{ChatInput, ChatModel, ChatTurn, ResponseFormat};
use serde::Deserialize;
use std::sync::Arc;

/// Input for the personalized-advice flow: the user's free-text request
/// plus the current habits as context.
#[derive(Debug, Clone, Default)]
pub struct AdviceInput {
    pub user_input: String,
    pub habits: Vec<Habit>,
}

/// The gateway's reply: a conversational response and zero or more fully
/// normalized habits the model proposed creating.
#[derive(Debug, Clone)]
pub struct Advice {
    pub response: String,
    pub updated_habits: Vec<Habit>,
}

/// The validated shape the model is instructed to reply with.
#[derive(Debug, Deserialize)]
struct AdviceReply {
    response: String,
    #[serde(default, rename = "updatedHabits")]
    updated_habits: Vec<HabitDraft>,
}

/// The AI advice gateway: translates user requests plus habit context into
/// coaching replies by delegating to a [`ChatModel`].
///
/// This is the only place external I/O happens. Each operation is one
/// request/response exchange; the gateway keeps no state between calls.
pub struct Coach {
    model: Arc<dyn ChatModel>,
    temperature: f64,
    max_tokens: u32,
}

impl Coach {
    #[must_use]
    pub fn new(params: CoachParams) -> Self {
        Self {
            model: params.model,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        }
    }

    pub fn builder(model: Arc<dyn ChatModel>) -> CoachParams {
        CoachParams::new(model)
    }

    /// Ask the model for advice on the user's request, optionally yielding
    /// new habits. The model is pinned to a JSON-object reply which is
    /// validated here in one place; drafts it proposes are normalized into
    /// full habits before being returned.
    pub async fn personalized_advice(&self, input: AdviceInput) -> Result<Advice, CoachError> {
        let output = self
            .model
            .complete(ChatInput {
                messages: vec![
                    ChatTurn::system(prompts::COACH_SYSTEM_PROMPT),
                    ChatTurn::user(prompts::advice_prompt(&input.habits, &input.user_input)),
                ],
                temperature: Some(self.temperature),
                max_tokens: Some(self.max_tokens),
                response_format: ResponseFormat::JsonObject,
                ..Default::default()
            })
            .await?;

        let reply = parse_advice_reply(&output.text)?;

        tracing::debug!(
            provider = self.model.provider(),
            proposed_habits = reply.updated_habits.len(),
            "parsed advice reply"
        );

        Ok(Advice {
            response: reply.response,
            updated_habits: reply
                .updated_habits
                .into_iter()
                .map(HabitDraft::into_habit)
                .collect(),
        })
    }

    /// A plain-text daily plan built around the user's goals.
    pub async fn daily_plan(&self, goals: &[Goal]) -> Result<String, CoachError> {
        let output = self
            .model
            .complete(ChatInput {
                messages: vec![ChatTurn::user(prompts::daily_plan_prompt(goals))],
                temperature: Some(self.temperature),
                max_tokens: Some(self.max_tokens),
                ..Default::default()
            })
            .await?;
        Ok(output.text)
    }

    /// Plain-text suggestions for making an existing habit more effective.
    pub async fn improve_habit(
        &self,
        habit_name: &str,
        current_method: &str,
    ) -> Result<String, CoachError> {
        let output = self
            .model
            .complete(ChatInput {
                messages: vec![ChatTurn::user(prompts::improve_habit_prompt(
                    habit_name,
                    current_method,
                ))],
                temperature: Some(self.temperature),
                max_tokens: Some(self.max_tokens),
                ..Default::default()
            })
            .await?;
        Ok(output.text)
    }
}

/// Parameters for building a [`Coach`].
/// # Default values
/// - `temperature`: 0.7
/// - `max_tokens`: 512
pub struct CoachParams {
    pub model: Arc<dyn ChatModel>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl CoachParams {
    #[must_use]
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            model,
            temperature: 0.7,
            max_tokens: 512,
        }
    }

    #[must_use]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub fn build(self) -> Coach {
        Coach::new(self)
    }
}

/// Parse the model's advice reply. Models do not always honor the JSON
/// pin exactly, so besides a bare object this accepts a fenced ```json
/// block and an object embedded in surrounding prose. Anything else is a
/// malformed reply.
fn parse_advice_reply(text: &str) -> Result<AdviceReply, CoachError> {
    let trimmed = text.trim();

    let candidate = strip_code_fence(trimmed);
    if let Ok(reply) = serde_json::from_str::<AdviceReply>(candidate) {
        return Ok(reply);
    }

    if let (Some(start), Some(end)) = (candidate.find('{'), candidate.rfind('}')) {
        if start < end {
            if let Ok(reply) = serde_json::from_str::<AdviceReply>(&candidate[start..=end]) {
                return Ok(reply);
            }
        }
    }

    Err(CoachError::MalformedReply(format!(
        "no valid advice object in reply: {}",
        truncate_for_log(trimmed)
    )))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = rest.split_once('\n').map_or(rest, |(_, body)| body);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn truncate_for_log(text: &str) -> &str {
    let cut = text
        .char_indices()
        .nth(120)
        .map_or(text.len(), |(index, _)| index);
    &text[..cut]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Frequency, HabitCategory};

    #[test]
    fn parses_a_bare_json_reply() {
        let reply = parse_advice_reply(
            r#"{"response": "Nice goal!", "updatedHabits": [{"title": "Run", "category": "health", "frequency": "weekly"}]}"#,
        )
        .unwrap();
        assert_eq!(reply.response, "Nice goal!");
        assert_eq!(reply.updated_habits.len(), 1);
        assert_eq!(reply.updated_habits[0].category, Some(HabitCategory::Health));
        assert_eq!(reply.updated_habits[0].frequency, Some(Frequency::Weekly));
    }

    #[test]
    fn parses_a_fenced_reply() {
        let text = "```json\n{\"response\": \"ok\", \"updatedHabits\": []}\n```";
        let reply = parse_advice_reply(text).unwrap();
        assert_eq!(reply.response, "ok");
        assert!(reply.updated_habits.is_empty());
    }

    #[test]
    fn parses_an_object_embedded_in_prose() {
        let text = "Here you go! {\"response\": \"ok\", \"updatedHabits\": []} Anything else?";
        let reply = parse_advice_reply(text).unwrap();
        assert_eq!(reply.response, "ok");
    }

    #[test]
    fn missing_updated_habits_defaults_to_empty() {
        let reply = parse_advice_reply(r#"{"response": "just advice"}"#).unwrap();
        assert!(reply.updated_habits.is_empty());
    }

    #[test]
    fn plain_prose_is_a_malformed_reply() {
        let result = parse_advice_reply("Sure, just drink more water!");
        assert!(matches!(result, Err(CoachError::MalformedReply(_))));
    }

    #[test]
    fn invalid_json_is_a_malformed_reply() {
        let result = parse_advice_reply("{\"response\": ");
        assert!(matches!(result, Err(CoachError::MalformedReply(_))));
    }
}
