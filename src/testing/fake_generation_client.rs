use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::GenerationClient;

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Echo,
    Fail(String),
}

/// Generation client that records every prompt it receives.
#[derive(Debug, Clone)]
pub struct FakeGenerationClient {
    pub prompts: Arc<Mutex<Vec<String>>>,
    reply: Reply,
}

impl Default for FakeGenerationClient {
    fn default() -> Self {
        Self::replying("fake answer")
    }
}

impl FakeGenerationClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { prompts: Arc::new(Mutex::new(vec![])), reply: Reply::Text(text.into()) }
    }

    /// Replies with the visitor question found in the prompt.
    pub fn echoing() -> Self {
        Self { prompts: Arc::new(Mutex::new(vec![])), reply: Reply::Echo }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { prompts: Arc::new(Mutex::new(vec![])), reply: Reply::Fail(message.into()) }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Echo => Ok(prompt
                .split("VISITOR QUESTION:\n")
                .nth(1)
                .and_then(|rest| rest.lines().next())
                .unwrap_or_default()
                .to_string()),
            Reply::Fail(message) => {
                Err(AppError::GenerationApi { message: message.clone(), status: None })
            }
        }
    }
}
