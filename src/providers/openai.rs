//! OpenAI completions client for the summarize operation.

use serde::{Deserialize, Serialize};

use crate::error::{BawiError, Result};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";
const COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Bounded output length
const MAX_TOKENS: u32 = 150;

/// Build the fixed summarization prompt around arbitrary input text
pub fn build_prompt(text: &str) -> String {
    format!(
        "Summarize and extract action items from the following:\n\n{}\n\nSummary:",
        text
    )
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

/// OpenAI API client (API key)
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Complete the summarization prompt; returns the trimmed summary text
    pub async fn summarize(&self, text: &str) -> Result<String> {
        let prompt = build_prompt(text);
        let request = CompletionRequest {
            model: COMPLETION_MODEL,
            prompt: &prompt,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BawiError::provider(
                "OpenAI",
                format!("completion failed ({}): {}", status, body),
            ));
        }

        let completion: CompletionResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| BawiError::provider("OpenAI", "empty completion response"))?;

        Ok(choice.text.trim().to_string())
    }
}
