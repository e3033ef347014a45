use crate::{ChatInput, ChatOutput, ChatResult};

/// A chat-completion model hosted by some provider.
///
/// Implementations are stateless between calls: each `complete` is one
/// synchronous request/response exchange with no session reuse.
#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    fn provider(&self) -> &'static str;
    fn model_id(&self) -> String;
    async fn complete(&self, input: ChatInput) -> ChatResult<ChatOutput>;
}
