use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::languages;
use crate::core::prompt::build_prompt;
use crate::core::reply::parse_reply;
use crate::error::GatewayError;
use crate::infra::gemini::TextGenerator;
use crate::models::context::{ChatMessage, ChatRequest, ChatResponse};

/// 聊天网关：校验语言 -> 组装提示词 -> 调用上游 -> 解析 -> 追加对话记录
pub struct ChatGateway {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl ChatGateway {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    pub fn supported_languages(&self) -> Vec<String> {
        languages::supported_languages()
    }

    #[instrument(skip(self, request), fields(language = %request.language, history = request.chat_history.len()))]
    pub async fn handle(&self, request: ChatRequest) -> Result<ChatResponse, GatewayError> {
        if !languages::is_supported(&request.language) {
            warn!("拒绝不支持的语言: {}", request.language);
            return Err(GatewayError::InvalidLanguage);
        }

        let prompt = build_prompt(&request.language, &request.query);
        let text = self.generator.generate(&self.model, &prompt).await.map_err(|e| {
            warn!("上游生成失败: {:#}", e);
            GatewayError::from(e)
        })?;

        let parsed = parse_reply(&text);
        info!("生成回复完成, tips 数量: {}", parsed.tips.len());

        let mut chat_history = request.chat_history;
        chat_history.push(ChatMessage::user(request.query));
        chat_history.push(ChatMessage::assistant(parsed.response.clone()));

        Ok(ChatResponse {
            response: parsed.response,
            tips: parsed.tips,
            chat_history,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StubGenerator;
    use super::*;
    use crate::models::context::ChatRole;

    fn request(language: &str, query: &str, history: Vec<ChatMessage>) -> ChatRequest {
        ChatRequest {
            language: language.to_string(),
            query: query.to_string(),
            chat_history: history,
        }
    }

    #[tokio::test]
    async fn invalid_language_never_reaches_upstream() {
        let stub = StubGenerator::replying("unused");
        let gateway = ChatGateway::new(stub.clone(), "m");

        let err = gateway.handle(request("klingon", "hi", vec![])).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidLanguage));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn appends_query_and_reply_to_history() {
        let stub = StubGenerator::replying("Stay safe. | Avoid dark alleys | Share your location");
        let gateway = ChatGateway::new(stub.clone(), "m");
        let history = vec![ChatMessage::user("earlier"), ChatMessage::assistant("before")];

        let resp = gateway
            .handle(request("ENGLISH", "walking home late", history.clone()))
            .await
            .unwrap();

        assert_eq!(resp.response, "Stay safe.");
        assert_eq!(resp.tips, vec!["Avoid dark alleys", "Share your location"]);
        assert_eq!(resp.chat_history.len(), history.len() + 2);
        assert_eq!(&resp.chat_history[..2], &history[..]);
        assert_eq!(resp.chat_history[2], ChatMessage::user("walking home late"));
        assert_eq!(resp.chat_history[3].role, ChatRole::Assistant);
        assert_eq!(resp.chat_history[3].content, "Stay safe.");
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn language_is_forwarded_as_given() {
        let stub = StubGenerator::replying("ok");
        let gateway = ChatGateway::new(stub.clone(), "m");

        gateway.handle(request("Hindi", "q", vec![])).await.unwrap();
        let prompt = stub.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Language: Hindi"));
    }

    #[tokio::test]
    async fn upstream_failure_is_reported_verbatim() {
        let stub = StubGenerator::failing("connection reset");
        let gateway = ChatGateway::new(stub, "m");

        let err = gateway.handle(request("tamil", "q", vec![])).await.unwrap_err();
        match err {
            GatewayError::Upstream(msg) => assert_eq!(msg, "connection reset"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
