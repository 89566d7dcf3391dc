use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use prep_core::prompt::{build_solution_prompt, build_tutor_prompt};
use prep_core::reply::{ParsedReply, parse_reply};

use crate::error::TutorError;

/// Connection settings for the hosted model service.
#[derive(Clone, Debug)]
pub struct TutorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl TutorConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("PREP_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("PREP_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("PREP_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// How a single model invocation behaves.
///
/// This is the only dispatch between the plain and the streamed/tooled
/// invocation styles; there is no second code path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Stream the reply and concatenate chunks instead of one blocking read.
    pub stream: bool,
    /// Let the model augment the answer with web search.
    pub web_search: bool,
    /// Ask for plain-text output.
    pub plain_text: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            stream: false,
            web_search: false,
            plain_text: true,
        }
    }
}

impl GenerationOptions {
    /// The richer tutor path: streamed and search-augmented.
    #[must_use]
    pub fn streamed() -> Self {
        Self {
            stream: true,
            web_search: true,
            plain_text: true,
        }
    }
}

/// Boundary to the hosted model service.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one prompt and return the full reply text.
    ///
    /// # Errors
    ///
    /// Returns `TutorError` if the request fails or the reply is empty.
    async fn generate(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, TutorError>;
}

/// `ModelClient` over an OpenAI-style chat-completions endpoint.
pub struct HttpModelClient {
    client: Client,
    config: TutorConfig,
}

impl HttpModelClient {
    #[must_use]
    pub fn new(config: TutorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn request_payload(&self, prompt: &str, options: GenerationOptions) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: 0.2,
            stream: options.stream,
            tools: options.web_search.then(|| vec![ChatTool { kind: "web_search" }]),
            response_format: options.plain_text.then_some(ResponseFormat { kind: "text" }),
        }
    }

    async fn post(&self, payload: &ChatRequest) -> Result<reqwest::Response, TutorError> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TutorError::HttpStatus(response.status()));
        }
        Ok(response)
    }

    async fn generate_blocking(&self, payload: ChatRequest) -> Result<String, TutorError> {
        let response = self.post(&payload).await?;
        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(TutorError::EmptyResponse)?;
        finish_reply(content)
    }

    /// Consume an SSE stream, concatenating chunk deltas in arrival order.
    async fn generate_streamed(&self, payload: ChatRequest) -> Result<String, TutorError> {
        let response = self.post(&payload).await?;
        let mut stream = response.bytes_stream();
        let mut full_text = String::new();
        let mut buffer = String::new();

        while let Some(chunk) = stream.next().await {
            let bytes = chunk?;
            buffer.push_str(&String::from_utf8_lossy(&bytes));

            while let Some(newline) = buffer.find('\n') {
                let line = buffer[..newline].trim().to_string();
                buffer.drain(..=newline);
                if !append_sse_line(&line, &mut full_text) {
                    return finish_reply(full_text);
                }
            }
        }

        // Flush a final line the stream ended without terminating.
        let leftover = buffer.trim().to_string();
        if !leftover.is_empty() {
            append_sse_line(&leftover, &mut full_text);
        }
        finish_reply(full_text)
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn generate(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, TutorError> {
        let payload = self.request_payload(prompt, options);
        debug!(model = %self.config.model, stream = options.stream, "sending model request");
        if options.stream {
            self.generate_streamed(payload).await
        } else {
            self.generate_blocking(payload).await
        }
    }
}

/// Apply one SSE line to the accumulated text. Returns `false` on `[DONE]`.
fn append_sse_line(line: &str, full_text: &mut String) -> bool {
    let Some(data) = line.strip_prefix("data:").map(str::trim) else {
        return true;
    };
    if data == "[DONE]" {
        return false;
    }
    if let Some(delta) = chunk_delta(data) {
        full_text.push_str(&delta);
    }
    true
}

/// Extract the content delta from one streamed chunk, if it has any.
fn chunk_delta(data: &str) -> Option<String> {
    let chunk: ChatStreamChunk = serde_json::from_str(data).ok()?;
    chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content)
}

fn finish_reply(text: String) -> Result<String, TutorError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TutorError::EmptyResponse);
    }
    Ok(trimmed.to_string())
}

/// Tutor-facing wrapper over the model boundary.
///
/// Stays disabled (every call returns `TutorError::Disabled`) when no API
/// key is configured; an invalid key surfaces later as an HTTP status from
/// the model service, rendered like any other model error.
#[derive(Clone)]
pub struct TutorService {
    client: Option<Arc<dyn ModelClient>>,
}

impl TutorService {
    /// Build from environment; the service stays disabled without an API key.
    #[must_use]
    pub fn from_env() -> Self {
        let client = TutorConfig::from_env()
            .map(|config| Arc::new(HttpModelClient::new(config)) as Arc<dyn ModelClient>);
        Self { client }
    }

    #[must_use]
    pub fn new(client: Option<Arc<dyn ModelClient>>) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Answer a free-text coding question, split into labeled sections.
    ///
    /// # Errors
    ///
    /// Returns `TutorError::Disabled` without configuration,
    /// `TutorError::Prompt` for an empty question, and transport errors
    /// otherwise. Errors are rendered to the user at the view boundary and
    /// never retried.
    pub async fn ask(
        &self,
        question: &str,
        options: GenerationOptions,
    ) -> Result<ParsedReply, TutorError> {
        let client = self.client.as_ref().ok_or(TutorError::Disabled)?;
        let prompt = build_tutor_prompt(question)?;
        let text = client
            .generate(&prompt, options)
            .await
            .inspect_err(|err| warn!(%err, "tutor request failed"))?;
        Ok(parse_reply(&text))
    }

    /// Model-generated solution for a practice-question title.
    ///
    /// # Errors
    ///
    /// Returns `TutorError::Disabled` without configuration, and transport
    /// errors otherwise.
    pub async fn solve(&self, title: &str) -> Result<String, TutorError> {
        let client = self.client.as_ref().ok_or(TutorError::Disabled)?;
        let prompt = build_solution_prompt(title);
        client
            .generate(&prompt, GenerationOptions::default())
            .await
            .inspect_err(|err| warn!(%err, "solution request failed"))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<ChatTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatTool {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageBody,
}

#[derive(Debug, Deserialize)]
struct ChatMessageBody {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatStreamChunk {
    choices: Vec<ChatStreamChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatStreamChoice {
    delta: ChatDelta,
}

#[derive(Debug, Deserialize)]
struct ChatDelta {
    content: Option<String>,
}
