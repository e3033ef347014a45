use crate::{actions, AppState, ChatMessage, Coach};

/// One user's coaching session: the in-memory state store, the ephemeral
/// chat transcript, and the gateway that talks to the model.
///
/// `send` drives a full chat turn the way the chat UI does: record the
/// user's message, fetch advice (with the boundary's fallback on failure),
/// merge any proposed habits into the store, record and return the
/// assistant's reply. It never fails; the caller decides when the session
/// ends and the transcript is dropped with it.
pub struct CoachSession {
    state: AppState,
    transcript: Vec<ChatMessage>,
    coach: Coach,
}

impl CoachSession {
    #[must_use]
    pub fn new(coach: Coach, state: AppState) -> Self {
        Self {
            state,
            transcript: Vec::new(),
            coach,
        }
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Run one chat turn end to end and return the assistant's reply.
    pub async fn send(&mut self, text: impl Into<String>) -> &ChatMessage {
        let text = text.into();
        self.transcript.push(ChatMessage::user(text.clone()));

        let output =
            actions::get_personalized_advice(&self.coach, text, self.state.habits()).await;
        self.state.extend_habits(output.updated_habits);

        self.transcript.push(ChatMessage::assistant(output.response));
        &self.transcript[self.transcript.len() - 1]
    }
}
