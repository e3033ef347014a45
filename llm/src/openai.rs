use crate::{
    client_utils, ChatError, ChatInput, ChatModel, ChatOutput, ChatResult, ChatRole, ChatTurn,
    ResponseFormat, TokenUsage,
};
use reqwest::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Client,
};
use std::{collections::HashMap, time::Duration};

const PROVIDER: &str = "openai";

/// Every in-flight request is bounded; a stuck provider surfaces as a
/// transport error instead of hanging the caller.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A chat-completion model reachable over the OpenAI `/chat/completions`
/// wire protocol. Also covers OpenAI-compatible providers via `base_url`.
pub struct OpenAiChatModel {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
    provider: &'static str,
}

#[derive(Clone, Default)]
pub struct OpenAiChatModelOptions {
    pub base_url: Option<String>,
    pub api_key: String,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl OpenAiChatModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: OpenAiChatModelOptions) -> Self {
        Self::with_provider(PROVIDER, model_id, options)
    }

    pub(crate) fn with_provider(
        provider: &'static str,
        model_id: impl Into<String>,
        options: OpenAiChatModelOptions,
    ) -> Self {
        let OpenAiChatModelOptions {
            base_url,
            api_key,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(|| {
            Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default()
        });
        let headers = headers.unwrap_or_default();

        Self {
            model_id: model_id.into(),
            api_key,
            base_url,
            client,
            headers,
            provider,
        }
    }

    fn request_headers(&self) -> ChatResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        let auth_header =
            HeaderValue::from_str(&format!("Bearer {}", self.api_key)).map_err(|error| {
                ChatError::InvalidInput(format!("Invalid API key header value: {error}"))
            })?;
        headers.insert(header::AUTHORIZATION, auth_header);

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                ChatError::InvalidInput(format!("Invalid header name '{key}': {error}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                ChatError::InvalidInput(format!("Invalid header value for '{key}': {error}"))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl ChatModel for OpenAiChatModel {
    fn provider(&self) -> &'static str {
        self.provider
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn complete(&self, input: ChatInput) -> ChatResult<ChatOutput> {
        let request = api::CreateChatCompletionRequest::from_input(&self.model_id, input);
        let headers = self.request_headers()?;

        tracing::debug!(
            provider = self.provider,
            model_id = %self.model_id,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let response: api::ChatCompletion = client_utils::send_json(
            &self.client,
            &format!("{}/chat/completions", self.base_url),
            &request,
            headers,
        )
        .await?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            ChatError::Invariant(self.provider, "No choices in response".to_string())
        })?;

        let text = choice.message.content.unwrap_or_default();
        let usage = response.usage.map(|usage| TokenUsage {
            input_tokens: usage.prompt_tokens,
            output_tokens: usage.completion_tokens,
        });

        Ok(ChatOutput { text, usage })
    }
}

/// The subset of the `/chat/completions` wire format this client uses.
mod api {
    use super::{ChatInput, ChatRole, ChatTurn, ResponseFormat};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize)]
    pub struct CreateChatCompletionRequest {
        pub model: String,
        pub messages: Vec<ChatCompletionMessage>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub max_tokens: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub temperature: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub top_p: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub response_format: Option<WireResponseFormat>,
    }

    impl CreateChatCompletionRequest {
        pub fn from_input(model_id: &str, input: ChatInput) -> Self {
            let ChatInput {
                messages,
                temperature,
                top_p,
                max_tokens,
                response_format,
            } = input;

            Self {
                model: model_id.to_string(),
                messages: messages
                    .into_iter()
                    .map(ChatCompletionMessage::from)
                    .collect(),
                max_tokens,
                temperature,
                top_p,
                response_format: match response_format {
                    ResponseFormat::Text => None,
                    ResponseFormat::JsonObject => Some(WireResponseFormat {
                        format_type: "json_object".to_string(),
                    }),
                },
            }
        }
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ChatCompletionMessage {
        pub role: String,
        pub content: String,
    }

    impl From<ChatTurn> for ChatCompletionMessage {
        fn from(turn: ChatTurn) -> Self {
            Self {
                role: match turn.role {
                    ChatRole::System => "system".to_string(),
                    ChatRole::User => "user".to_string(),
                    ChatRole::Assistant => "assistant".to_string(),
                },
                content: turn.content,
            }
        }
    }

    #[derive(Debug, Serialize)]
    pub struct WireResponseFormat {
        #[serde(rename = "type")]
        pub format_type: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct ChatCompletion {
        pub choices: Vec<ChatCompletionChoice>,
        pub usage: Option<CompletionUsage>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ChatCompletionChoice {
        pub message: ChatCompletionResponseMessage,
    }

    #[derive(Debug, Deserialize)]
    pub struct ChatCompletionResponseMessage {
        pub content: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CompletionUsage {
        pub prompt_tokens: u32,
        pub completion_tokens: u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_openai_wire_shape() {
        let input = ChatInput {
            messages: vec![
                ChatTurn::system("You are a coach."),
                ChatTurn::user("Help me focus."),
            ],
            temperature: Some(0.7),
            max_tokens: Some(512),
            response_format: ResponseFormat::JsonObject,
            ..Default::default()
        };

        let request = api::CreateChatCompletionRequest::from_input("gpt-4o-mini", input);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "You are a coach."},
                    {"role": "user", "content": "Help me focus."},
                ],
                "max_tokens": 512,
                "temperature": 0.7,
                "response_format": {"type": "json_object"},
            })
        );
    }

    #[test]
    fn text_format_omits_response_format_field() {
        let request = api::CreateChatCompletionRequest::from_input(
            "gpt-4o-mini",
            ChatInput {
                messages: vec![ChatTurn::user("hello")],
                ..Default::default()
            },
        );
        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("response_format").is_none());
        assert!(value.get("temperature").is_none());
    }

    #[test]
    fn completion_response_parses_content_and_usage() {
        let body = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "Try a morning routine."},
                    "finish_reason": "stop",
                }
            ],
            "usage": {"prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49},
        });

        let completion: super::api::ChatCompletion = serde_json::from_value(body).unwrap();
        let choice = completion.choices.into_iter().next().unwrap();
        assert_eq!(choice.message.content.as_deref(), Some("Try a morning routine."));
        assert_eq!(
            completion.usage.map(|u| (u.prompt_tokens, u.completion_tokens)),
            Some((42, 7))
        );
    }
}
