use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{Pun, PunBot};
use crate::config::PunbotConfig;
use crate::error::{PunError, Result};

const SYSTEM_PROMPT: &str = "You are the resident pun master of the SciPy conference. \
During lightning talks you answer almost any theme with an award-winning pun. \
Talks are mostly about Python, Linux, science and the people who do it. \
Given a theme, reply with one coherent pun as a JSON object with exactly these keys: \
\"emoji\" (a single emoji for the whole pun), \
\"pun_statement\" (the pun, with the pun core in *italics*) and \
\"explanation\" (why the pun is a pun).";

const TEMPERATURE: f32 = 0.9;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Chat-completions client for any OpenAI-compatible endpoint
#[derive(Debug, Clone)]
pub struct OpenAiPunBot {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiPunBot {
    pub fn new(config: &PunbotConfig) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.api_base()),
            model: config.model_name().to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl PunBot for OpenAiPunBot {
    fn pun(&self, topic: &str) -> Result<Pun> {
        let theme = if topic.trim().is_empty() {
            "any theme you like"
        } else {
            topic
        };
        let request = ChatRequest {
            model: &self.model,
            temperature: TEMPERATURE,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: theme,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        tracing::debug!("asking {} for a pun about {:?}", self.model, theme);
        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        let response: ChatResponse = builder.send()?.error_for_status()?.json()?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| PunError::BotReplyError {
                message: "reply had no message content".to_string(),
            })?;

        parse_pun(&content)
    }
}

/// Parse the model's message into a pun, tolerating a markdown code fence.
pub fn parse_pun(content: &str) -> Result<Pun> {
    let pun: Pun = serde_json::from_str(strip_code_fence(content))?;
    if pun.pun_statement.trim().is_empty() {
        return Err(PunError::BotReplyError {
            message: "pun_statement is empty".to_string(),
        });
    }
    Ok(pun)
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let body = rest.strip_suffix("```").unwrap_or(rest);
            // Drop a language tag such as ```json
            match body.find('\n') {
                Some(newline) if !body[..newline].trim_start().starts_with('{') => {
                    body[newline + 1..].trim()
                }
                _ => body.trim(),
            }
        }
        None => trimmed,
    }
}
