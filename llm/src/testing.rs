//! A scriptable [`ChatModel`] for tests: queue results, then inspect the
//! inputs the code under test sent.

use crate::{ChatError, ChatInput, ChatModel, ChatOutput, ChatResult};
use std::{collections::VecDeque, sync::Mutex};

/// Result for a mocked `complete` call.
/// It can either be a full output or an error to return.
pub enum MockCompleteResult {
    Output(ChatOutput),
    Error(ChatError),
}

impl MockCompleteResult {
    /// Construct a result that yields the provided output.
    #[must_use]
    pub fn output(output: ChatOutput) -> Self {
        Self::Output(output)
    }

    /// Construct a result that yields the provided reply text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Output(ChatOutput::text_only(text))
    }

    /// Construct a result that yields the provided error.
    #[must_use]
    pub fn error(error: ChatError) -> Self {
        Self::Error(error)
    }
}

impl From<ChatOutput> for MockCompleteResult {
    fn from(output: ChatOutput) -> Self {
        Self::Output(output)
    }
}

impl From<ChatResult<ChatOutput>> for MockCompleteResult {
    fn from(result: ChatResult<ChatOutput>) -> Self {
        match result {
            Ok(output) => Self::Output(output),
            Err(error) => Self::Error(error),
        }
    }
}

#[derive(Default)]
struct MockChatModelState {
    mocked_results: VecDeque<MockCompleteResult>,
    tracked_inputs: Vec<ChatInput>,
}

/// A mock chat model for testing that tracks inputs and yields predefined
/// outputs.
pub struct MockChatModel {
    provider: &'static str,
    model_id: String,
    state: Mutex<MockChatModelState>,
}

impl Default for MockChatModel {
    fn default() -> Self {
        Self {
            provider: "mock",
            model_id: "mock-model".to_string(),
            state: Mutex::new(MockChatModelState::default()),
        }
    }
}

impl MockChatModel {
    /// Construct a new mock chat model instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result to be returned by the next `complete` call.
    pub fn enqueue(&self, result: impl Into<MockCompleteResult>) -> &Self {
        self.state
            .lock()
            .expect("mock state lock poisoned")
            .mocked_results
            .push_back(result.into());
        self
    }

    /// Inputs captured from `complete` calls, in call order.
    #[must_use]
    pub fn tracked_inputs(&self) -> Vec<ChatInput> {
        self.state
            .lock()
            .expect("mock state lock poisoned")
            .tracked_inputs
            .clone()
    }

    /// Clear tracked inputs and any unconsumed queued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state lock poisoned");
        state.mocked_results.clear();
        state.tracked_inputs.clear();
    }
}

#[async_trait::async_trait]
impl ChatModel for MockChatModel {
    fn provider(&self) -> &'static str {
        self.provider
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn complete(&self, input: ChatInput) -> ChatResult<ChatOutput> {
        let mut state = self.state.lock().expect("mock state lock poisoned");
        state.tracked_inputs.push(input);
        match state.mocked_results.pop_front() {
            Some(MockCompleteResult::Output(output)) => Ok(output),
            Some(MockCompleteResult::Error(error)) => Err(error),
            None => Err(ChatError::Invariant(
                self.provider,
                "No mocked results queued".to_string(),
            )),
        }
    }
}
