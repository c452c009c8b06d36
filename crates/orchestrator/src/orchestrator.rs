//! Chat orchestrator that runs one exchange per inbound frame.

use std::fmt;
use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info, warn};
use travel_core::{
    ChatError, ChatMessage, ChatProvider, ChatRequest, ChatResponse, Role, ToolCall,
    DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
use travel_tools::ToolRegistry;

use crate::error::OrchestratorError;
use crate::events::{ChatPayload, ServerEvent};
use crate::prompt::system_prompt;
use crate::sink::ChatSink;

/// Acknowledgment sent before the model is contacted.
pub const PROCESSING_NOTICE: &str = "Processing your request...";

/// Sent before each tool call is dispatched.
pub const BROWSING_NOTICE: &str = "Browsing for options...";

/// Sent when a tool call cannot be dispatched at all.
pub const DISPATCH_FAILED_NOTICE: &str =
    "I encountered an error while processing your request. Let me help you try again.";

/// Where an exchange currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    AwaitingModel,
    DispatchingTools,
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConversationState::Idle => "idle",
            ConversationState::AwaitingModel => "awaiting_model",
            ConversationState::DispatchingTools => "dispatching_tools",
        };
        f.write_str(name)
    }
}

/// Coordinates the model and the booking tools for chat connections.
///
/// The orchestrator holds no per-connection state: each inbound frame
/// carries the whole conversation, so one instance serves every connection.
pub struct ChatOrchestrator {
    provider: Arc<dyn ChatProvider>,
    tools: Arc<ToolRegistry>,
    default_model: String,
}

impl ChatOrchestrator {
    pub fn new(provider: Arc<dyn ChatProvider>, tools: Arc<ToolRegistry>) -> Self {
        Self {
            provider,
            tools,
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Model used when a frame does not name one.
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Handle one inbound text frame end-to-end.
    ///
    /// Failures inside the exchange are reported to the client as an `error`
    /// event and the connection stays usable. `Err` is returned only when the
    /// client can no longer be reached.
    pub async fn handle_frame(
        &self,
        frame: &str,
        sink: &dyn ChatSink,
    ) -> Result<(), OrchestratorError> {
        let outcome = match ChatPayload::from_frame(frame) {
            Ok(payload) => self.converse(payload, sink).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => Ok(()),
            Err(e) if e.is_disconnect() => Err(e),
            Err(e) => {
                warn!("Error in chat exchange: {}", e);
                sink.send(ServerEvent::error(e.to_string())).await
            }
        }
    }

    async fn converse(
        &self,
        payload: ChatPayload,
        sink: &dyn ChatSink,
    ) -> Result<(), OrchestratorError> {
        let mut messages = payload.conversation()?;
        if !messages.iter().any(|m| m.role == Role::System) {
            messages.insert(
                0,
                ChatMessage::system(system_prompt(Local::now().date_naive())),
            );
        }

        let model = payload
            .model
            .unwrap_or_else(|| self.default_model.clone());
        let temperature = payload.temperature.unwrap_or(DEFAULT_TEMPERATURE);

        let mut request =
            ChatRequest::new(messages, model, temperature).with_tools(self.tools.schemas());
        if let Some(choice) = payload.tool_choice {
            request = request.with_tool_choice(choice);
        }

        info!(
            "Processing chat frame with {} messages for model {}",
            request.messages.len(),
            request.model
        );

        sink.send(ServerEvent::received(PROCESSING_NOTICE)).await?;

        let response = self.complete(&request).await?;
        forward_text(&response, sink).await?;

        if !response.tool_calls.is_empty() {
            transition(ConversationState::DispatchingTools);
            for call in response.tool_calls {
                self.run_tool_call(&mut request, call, sink).await?;
            }
        }

        transition(ConversationState::Idle);
        Ok(())
    }

    /// Dispatch one tool call and, when it succeeds, let the model answer
    /// with its result.
    async fn run_tool_call(
        &self,
        request: &mut ChatRequest,
        call: ToolCall,
        sink: &dyn ChatSink,
    ) -> Result<(), OrchestratorError> {
        if !call.is_function() {
            debug!("Skipping tool call {} of type {}", call.id, call.call_type);
            return Ok(());
        }

        let name = call.function.name.clone();
        info!(tool = %name, call_id = %call.id, "Dispatching tool call");
        sink.send(ServerEvent::assistant(BROWSING_NOTICE)).await?;

        let output = match self
            .tools
            .dispatch(&name, &call.function.arguments)
            .await
        {
            Ok(output) => output,
            Err(e) => {
                warn!(tool = %name, error = %e, "Tool dispatch failed");
                return sink
                    .send(ServerEvent::assistant(DISPATCH_FAILED_NOTICE))
                    .await;
            }
        };

        if let Some(error) = output.error {
            info!(tool = %name, "Tool reported an error: {}", error);
            return sink
                .send(ServerEvent::assistant(format!(
                    "I encountered an error: {}. Let me help you try again.",
                    error
                )))
                .await;
        }

        let call_id = call.id.clone();
        request
            .messages
            .push(ChatMessage::assistant_tool_calls(vec![call]));
        request
            .messages
            .push(ChatMessage::tool_result(call_id, output.content));

        let follow_up = self.complete(request).await?;
        if !follow_up.tool_calls.is_empty() {
            info!(
                "Follow-up completion requested {} more tool calls; not dispatching",
                follow_up.tool_calls.len()
            );
        }
        forward_text(&follow_up, sink).await
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, OrchestratorError> {
        transition(ConversationState::AwaitingModel);
        request.validate().map_err(ChatError::from)?;
        debug!(
            "Calling {} with {} messages",
            self.provider.name(),
            request.messages.len()
        );
        Ok(self.provider.complete(request).await?)
    }
}

fn transition(state: ConversationState) {
    debug!("Conversation state: {}", state);
}

async fn forward_text(response: &ChatResponse, sink: &dyn ChatSink) -> Result<(), OrchestratorError> {
    match response.visible_text() {
        Some(text) => sink.send(ServerEvent::assistant(text)).await,
        None => Ok(()),
    }
}
