//! ChatProvider implementation for the chat completions endpoint.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};
use travel_core::{ChatError, ChatProvider, ChatRequest, ChatResponse};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::OpenAiBrainConfig;

/// A [`ChatProvider`] that calls an OpenAI-compatible API.
pub struct OpenAiChatProvider {
    client: Client,
    config: OpenAiBrainConfig,
}

impl OpenAiChatProvider {
    /// Create a new provider with the given configuration.
    pub fn new(config: OpenAiBrainConfig) -> Result<Self, ChatError> {
        if config.api_key.is_empty() {
            return Err(ChatError::Configuration("API key is empty".to_string()));
        }

        let client = Client::builder().build().map_err(|e| {
            ChatError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(
            "OpenAiChatProvider initialized with model: {} at {}",
            config.model, config.api_url
        );

        Ok(Self { client, config })
    }

    /// Create a provider from environment variables.
    pub fn from_env() -> Result<Self, ChatError> {
        Self::new(OpenAiBrainConfig::from_env()?)
    }

    /// Get the current configuration.
    pub fn config(&self) -> &OpenAiBrainConfig {
        &self.config
    }

    async fn chat_completion(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatCompletionResponse, ChatError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);
        let model = if request.model.is_empty() {
            self.config.model.as_str()
        } else {
            request.model.as_str()
        };

        let body = ChatCompletionRequest {
            model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: self.config.max_tokens,
            tools: request.tools.as_deref(),
            tool_choice: request.tool_choice.as_ref(),
        };

        info!(
            model = %model,
            messages = request.messages.len(),
            tools = request.tools.as_ref().map_or(0, Vec::len),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(ChatError::ProcessingFailed(format!(
                    "API error ({}{}): {}",
                    status.as_u16(),
                    api_error
                        .error
                        .error_type
                        .map(|t| format!(", {}", t))
                        .unwrap_or_default(),
                    api_error.error.message
                )));
            }

            return Err(ChatError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            ChatError::ProcessingFailed(format!("Failed to parse response: {}", e))
        })?;

        debug!(
            "Received completion {:?} from {:?}",
            completion.id, completion.model
        );

        Ok(completion)
    }
}

/// Take the first choice of a completion.
fn into_chat_response(completion: ChatCompletionResponse) -> Result<ChatResponse, ChatError> {
    let usage = completion.usage;
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ChatError::ProcessingFailed("No choices in response".to_string()))?;

    debug!("Finish reason: {:?}", choice.finish_reason);

    Ok(ChatResponse {
        content: choice.message.content,
        tool_calls: choice.message.tool_calls.unwrap_or_default(),
        usage,
    })
}

#[async_trait]
impl ChatProvider for OpenAiChatProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        request.validate()?;

        let result = self
            .chat_completion(request)
            .await
            .and_then(into_chat_response);

        match &result {
            Ok(response) => {
                if let Some(usage) = response.usage {
                    info!(
                        prompt_tokens = usage.prompt_tokens,
                        completion_tokens = usage.completion_tokens,
                        total_tokens = usage.total_tokens,
                        tool_calls = response.tool_calls.len(),
                        "Chat completion finished"
                    );
                }
            }
            Err(e) => {
                warn!(
                    error = %e,
                    messages = request.messages.len(),
                    "Chat completion failed"
                );
            }
        }

        result
    }

    fn name(&self) -> &str {
        "OpenAiChatProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use travel_core::{ChatMessage, ToolChoice, ToolSchema};

    fn completion(json: &str) -> ChatCompletionResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_response() {
        let response = into_chat_response(completion(
            r#"{
                "id": "chatcmpl-1",
                "model": "gpt-4o",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "Hi there"}, "finish_reason": "stop"}],
                "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
            }"#,
        ))
        .unwrap();

        assert_eq!(response.visible_text(), Some("Hi there"));
        assert!(response.tool_calls.is_empty());
        assert_eq!(response.usage.map(|u| u.total_tokens), Some(13));
    }

    #[test]
    fn test_tool_call_response_keeps_order() {
        let response = into_chat_response(completion(
            r#"{
                "choices": [{
                    "message": {
                        "role": "assistant",
                        "content": null,
                        "tool_calls": [
                            {"id": "call_a", "type": "function", "function": {"name": "search_flights", "arguments": "{\"origin\":\"LAX\"}"}},
                            {"id": "call_b", "type": "function", "function": {"name": "get_trip_details", "arguments": "{}"}}
                        ]
                    },
                    "finish_reason": "tool_calls"
                }]
            }"#,
        ))
        .unwrap();

        assert_eq!(response.content, None);
        let names: Vec<_> = response
            .tool_calls
            .iter()
            .map(|c| c.function.name.as_str())
            .collect();
        assert_eq!(names, vec!["search_flights", "get_trip_details"]);
    }

    #[test]
    fn test_empty_choices_is_error() {
        let result = into_chat_response(completion(r#"{"choices": []}"#));
        assert!(matches!(result, Err(ChatError::ProcessingFailed(_))));
    }

    #[test]
    fn test_request_body_shape() {
        let messages = vec![ChatMessage::system("prompt"), ChatMessage::user("hi")];
        let tools = vec![ToolSchema::function(
            "get_trip_details",
            "Get trips",
            serde_json::json!({"type": "object", "properties": {}}),
        )];
        let choice = ToolChoice::Mode("auto".to_string());
        let body = ChatCompletionRequest {
            model: "gpt-4o",
            messages: &messages,
            temperature: 0.7,
            max_tokens: None,
            tools: Some(&tools),
            tool_choice: Some(&choice),
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["tools"][0]["type"], "function");
        assert_eq!(json["tools"][0]["function"]["name"], "get_trip_details");
        assert_eq!(json["tool_choice"], "auto");
        assert!(json.get("max_tokens").is_none());
    }

    #[tokio::test]
    async fn test_complete_rejects_orphan_tool_message_before_network() {
        let provider = OpenAiChatProvider::new(
            OpenAiBrainConfig::builder()
                .api_key("sk-test")
                .api_url("http://127.0.0.1:9")
                .build(),
        )
        .unwrap();
        let request = ChatRequest::new(
            vec![ChatMessage::tool_result("call_x", "{}")],
            "gpt-4o",
            0.7,
        );

        let result = provider.complete(&request).await;
        assert!(matches!(result, Err(ChatError::InvalidConversation(_))));
    }

    #[test]
    fn test_new_rejects_empty_key() {
        assert!(matches!(
            OpenAiChatProvider::new(OpenAiBrainConfig::default()),
            Err(ChatError::Configuration(_))
        ));
    }
}
