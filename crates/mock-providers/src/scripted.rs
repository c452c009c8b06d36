//! Scripted chat provider - replays queued responses in order.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use travel_core::{ChatError, ChatProvider, ChatRequest, ChatResponse};

enum Step {
    Respond(ChatResponse),
    Fail(String),
}

/// A chat provider that answers from a script.
///
/// Each call to `complete` pops the next scripted step. When the script is
/// exhausted the provider fails with `ProcessingFailed`. Every request is
/// recorded, so tests can inspect what the conversation looked like at each
/// turn.
#[derive(Default)]
pub struct ScriptedChatProvider {
    script: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedChatProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn then(self, response: ChatResponse) -> Self {
        self.push(Step::Respond(response));
        self
    }

    /// Queue a provider failure.
    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.push(Step::Fail(message.into()));
        self
    }

    fn push(&self, step: Step) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(step);
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Number of scripted steps not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.lock().map(|script| script.len()).unwrap_or(0)
    }
}

#[async_trait]
impl ChatProvider for ScriptedChatProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let step = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front());

        match step {
            Some(Step::Respond(response)) => Ok(response),
            Some(Step::Fail(message)) => Err(ChatError::ProcessingFailed(message)),
            None => Err(ChatError::ProcessingFailed(
                "chat script exhausted".to_string(),
            )),
        }
    }

    fn name(&self) -> &str {
        "ScriptedChatProvider"
    }
}
