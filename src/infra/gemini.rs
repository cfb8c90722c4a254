use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::infra::config::AppConfig;

/// 外部文本生成能力：模型标识 + 提示词 -> 自由文本
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> anyhow::Result<String>;
}

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    role: &'static str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: String,
}

/// Gemini generateContent 客户端；凭证在构造时注入，不使用全局状态
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_key.clone(), config.base_url.clone())
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

/// 拼接首个候选的全部文本片段；没有任何文本视为上游响应缺失
fn extract_text(response: GeminiResponse) -> anyhow::Result<String> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(anyhow!("Gemini 响应中没有可用的文本"));
    }
    Ok(text)
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> anyhow::Result<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Gemini 请求发送失败")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API 返回错误: {} - {}", status, body);
            return Err(anyhow!("Gemini API error {}: {}", status, body));
        }

        let parsed: GeminiResponse = response.json().await.context("Gemini 响应解析失败")?;
        debug!("收到 Gemini 响应, 候选数: {}", parsed.candidates.len());
        extract_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(v: serde_json::Value) -> GeminiResponse {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn joins_parts_of_first_candidate() {
        let resp = decode(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Hello | " }, { "text": "tip" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }));
        assert_eq!(extract_text(resp).unwrap(), "Hello | tip");
    }

    #[test]
    fn missing_candidates_is_an_error() {
        assert!(extract_text(decode(json!({}))).is_err());
        assert!(extract_text(decode(json!({ "candidates": [{ "finishReason": "SAFETY" }] }))).is_err());
    }

    #[test]
    fn endpoint_includes_model() {
        let client = GeminiClient::new("k", "http://localhost:1/v1beta");
        assert_eq!(
            client.endpoint("gemini-1.5-flash"),
            "http://localhost:1/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_shape() {
        let req = GeminiRequest {
            contents: vec![GeminiContent { role: "user", parts: vec![GeminiPart { text: "p" }] }],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "p" }] }] })
        );
    }
}
