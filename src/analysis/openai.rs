//! Chat-completions analyst for OpenAI-compatible endpoints.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::{
    prompts::{draft_analysis_prompt, draft_strategy_prompt, AnalysisContext, ChatPrompt},
    DraftAnalyst,
};
use crate::{
    config::AnalystConfig,
    core::http::{bearer_headers, build_client},
    fantasy::ProjectedPlayerRecord,
    Result,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Analyst backed by `POST {base_url}/chat/completions`.
///
/// Without an API key every call returns `None` without touching the network.
#[derive(Debug, Clone)]
pub struct OpenAiAnalyst {
    client: Client,
    config: Option<AnalystConfig>,
}

impl OpenAiAnalyst {
    pub fn new(config: Option<AnalystConfig>) -> Result<Self> {
        Ok(Self {
            client: build_client(REQUEST_TIMEOUT)?,
            config,
        })
    }

    /// An analyst that never calls out.
    pub fn disabled() -> Result<Self> {
        Self::new(None)
    }

    async fn complete(&self, config: &AnalystConfig, prompt: &ChatPrompt) -> Result<Option<String>> {
        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let body = ChatRequest {
            model: &config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens: prompt.max_tokens,
            temperature: prompt.temperature,
        };

        debug!(%url, model = %config.model, "requesting chat completion");
        let res = self
            .client
            .post(&url)
            .headers(bearer_headers(&config.api_key)?)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        Ok(res
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content))
    }

    async fn ask(&self, prompt: ChatPrompt, what: &str) -> Option<String> {
        let config = self.config.as_ref()?;
        match self.complete(config, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "{what} unavailable");
                None
            }
        }
    }
}

impl DraftAnalyst for OpenAiAnalyst {
    fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    async fn draft_analysis(
        &self,
        recommendations: &[ProjectedPlayerRecord],
        context: &AnalysisContext,
    ) -> Option<String> {
        self.ask(draft_analysis_prompt(recommendations, context), "draft analysis")
            .await
    }

    async fn draft_strategy(
        &self,
        already_drafted: &[String],
        num_teams: u32,
        draft_position: u32,
    ) -> Option<String> {
        self.ask(
            draft_strategy_prompt(already_drafted, num_teams, draft_position),
            "draft strategy",
        )
        .await
    }
}
