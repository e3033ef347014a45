use gptlife_coach::{
    generate_daily_plan, get_habit_suggestions, get_personalized_advice, AdviceInput, AppState,
    Coach, CoachError, Frequency, GoalDraft, HabitCategory, HabitDraft, MessageRole,
    CoachSession, FALLBACK_ADVICE, FALLBACK_DAILY_PLAN, FALLBACK_SUGGESTIONS,
};
use gptlife_llm::{
    testing::{MockChatModel, MockCompleteResult},
    ChatError, ChatRole, ResponseFormat,
};
use std::sync::Arc;

fn coach_with(model: &Arc<MockChatModel>) -> Coach {
    Coach::builder(model.clone()).build()
}

#[tokio::test]
async fn advice_normalizes_proposed_habits() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue(MockCompleteResult::text(
        r#"{"response": "Great idea! I've added it.", "updatedHabits": [{"title": "Run three times a week", "description": "Morning runs", "category": "health", "frequency": "weekly"}]}"#,
    ));
    let coach = coach_with(&model);

    let advice = coach
        .personalized_advice(AdviceInput {
            user_input: "Add a running habit".to_string(),
            habits: Vec::new(),
        })
        .await
        .unwrap();

    assert_eq!(advice.response, "Great idea! I've added it.");
    assert_eq!(advice.updated_habits.len(), 1);
    let habit = &advice.updated_habits[0];
    assert!(!habit.id.is_empty());
    assert_eq!(habit.title, "Run three times a week");
    assert_eq!(habit.category, HabitCategory::Health);
    assert_eq!(habit.frequency, Frequency::Weekly);
    assert!(!habit.completed);
    assert_eq!(habit.streak, 0);
}

#[tokio::test]
async fn advice_request_pins_json_and_embeds_habit_context() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue(MockCompleteResult::text(
        r#"{"response": "ok", "updatedHabits": []}"#,
    ));
    let coach = coach_with(&model);

    let mut state = AppState::new();
    state.add_habit(HabitDraft::new("Read 20 pages daily"));

    coach
        .personalized_advice(AdviceInput {
            user_input: "help me focus".to_string(),
            habits: state.habits().to_vec(),
        })
        .await
        .unwrap();

    let inputs = model.tracked_inputs();
    assert_eq!(inputs.len(), 1);
    let input = &inputs[0];
    assert_eq!(input.response_format, ResponseFormat::JsonObject);
    assert_eq!(input.messages.len(), 2);
    assert_eq!(input.messages[0].role, ChatRole::System);
    assert_eq!(input.messages[1].role, ChatRole::User);
    assert!(input.messages[1].content.contains("Read 20 pages daily"));
    assert!(input.messages[1].content.contains("help me focus"));
}

#[tokio::test]
async fn advice_surfaces_malformed_reply_as_error() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue(MockCompleteResult::text("Sure, just drink more water!"));
    let coach = coach_with(&model);

    let result = coach.personalized_advice(AdviceInput::default()).await;
    assert!(matches!(result, Err(CoachError::MalformedReply(_))));
}

#[tokio::test]
async fn advice_boundary_returns_fallback_on_transport_failure() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue(MockCompleteResult::error(ChatError::StatusCode(
        reqwest::StatusCode::BAD_GATEWAY,
        "upstream unavailable".to_string(),
    )));
    let coach = coach_with(&model);

    let output = get_personalized_advice(&coach, "anything", &[]).await;
    assert_eq!(output.response, FALLBACK_ADVICE);
    assert!(output.updated_habits.is_empty());
}

#[tokio::test]
async fn advice_boundary_returns_fallback_on_invalid_json() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue(MockCompleteResult::text("{\"response\": "));
    let coach = coach_with(&model);

    let output = get_personalized_advice(&coach, "anything", &[]).await;
    assert_eq!(output.response, FALLBACK_ADVICE);
    assert!(output.updated_habits.is_empty());
}

#[tokio::test]
async fn daily_plan_flows_text_through_and_falls_back_on_error() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue(MockCompleteResult::text("6 AM: wake up. 7 AM: run."));
    model.enqueue(MockCompleteResult::error(ChatError::Invariant(
        "mock",
        "boom".to_string(),
    )));
    let coach = coach_with(&model);

    let mut state = AppState::new();
    state.add_goal(GoalDraft::new("Run a 5k marathon", "3 months"));

    let plan = generate_daily_plan(&coach, state.goals()).await;
    assert_eq!(plan, "6 AM: wake up. 7 AM: run.");
    assert!(model.tracked_inputs()[0].messages[0]
        .content
        .contains("Run a 5k marathon"));

    let fallback = generate_daily_plan(&coach, state.goals()).await;
    assert_eq!(fallback, FALLBACK_DAILY_PLAN);
}

#[tokio::test]
async fn habit_suggestions_fall_back_on_error() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue(MockCompleteResult::error(ChatError::Invariant(
        "mock",
        "boom".to_string(),
    )));
    let coach = coach_with(&model);

    let suggestions = get_habit_suggestions(&coach, "meditation", "10 minutes at night").await;
    assert_eq!(suggestions, FALLBACK_SUGGESTIONS);
}

#[tokio::test]
async fn session_merges_proposed_habits_and_records_the_transcript() {
    let model = Arc::new(MockChatModel::new());
    model.enqueue(MockCompleteResult::text(
        r#"{"response": "Added a reading habit for you.", "updatedHabits": [{"title": "Read 10 pages a day"}]}"#,
    ));
    model.enqueue(MockCompleteResult::error(ChatError::Invariant(
        "mock",
        "boom".to_string(),
    )));

    let mut session = CoachSession::new(coach_with(&model), AppState::new());

    let reply = session.send("Add a new habit to read 10 pages a day").await;
    assert_eq!(reply.role, MessageRole::Assistant);
    assert_eq!(reply.content, "Added a reading habit for you.");
    assert_eq!(session.state().habits().len(), 1);
    assert_eq!(session.state().habits()[0].title, "Read 10 pages a day");

    // A failed turn still produces an assistant message and leaves state alone.
    let reply = session.send("And another").await;
    assert_eq!(reply.content, FALLBACK_ADVICE);
    assert_eq!(session.state().habits().len(), 1);
    assert_eq!(session.transcript().len(), 4);
    assert_eq!(session.transcript()[0].role, MessageRole::User);
}
