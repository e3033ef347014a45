use crate::{
    openai::{OpenAiChatModel, OpenAiChatModelOptions},
    ChatInput, ChatModel, ChatOutput, ChatResult,
};

const PROVIDER: &str = "openrouter";
const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// A model hosted on OpenRouter. The wire protocol is OpenAI-compatible,
/// so this is the OpenAI client pointed at the OpenRouter endpoint.
pub struct OpenRouterChatModel {
    inner: OpenAiChatModel,
}

#[derive(Clone, Default)]
pub struct OpenRouterChatModelOptions {
    pub api_key: String,
    pub base_url: Option<String>,
}

impl OpenRouterChatModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: OpenRouterChatModelOptions) -> Self {
        let OpenRouterChatModelOptions { api_key, base_url } = options;
        Self {
            inner: OpenAiChatModel::with_provider(
                PROVIDER,
                model_id,
                OpenAiChatModelOptions {
                    base_url: Some(base_url.unwrap_or_else(|| OPENROUTER_BASE_URL.to_string())),
                    api_key,
                    ..Default::default()
                },
            ),
        }
    }
}

#[async_trait::async_trait]
impl ChatModel for OpenRouterChatModel {
    fn provider(&self) -> &'static str {
        self.inner.provider()
    }

    fn model_id(&self) -> String {
        self.inner.model_id()
    }

    async fn complete(&self, input: ChatInput) -> ChatResult<ChatOutput> {
        self.inner.complete(input).await
    }
}
