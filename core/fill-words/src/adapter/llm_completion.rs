//! 単発 LLM 完了の標準実装（LlmProvider で 1 回リクエストして本文を返す）

use common::error::Error;
use common::ports::outbound::LlmProvider;
use std::sync::Arc;

use crate::ports::outbound::LlmCompletion;

/// LlmProvider を使う単発完了アダプタ
pub struct ProviderLlmCompletion {
    provider: Arc<dyn LlmProvider>,
}

impl ProviderLlmCompletion {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }
}

impl LlmCompletion for ProviderLlmCompletion {
    fn complete(&self, system_instruction: Option<&str>, user_message: &str) -> Result<String, Error> {
        let payload = self
            .provider
            .make_request_payload(user_message, system_instruction)?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        let response_json = self.provider.make_http_request(&request_json)?;
        match self.provider.parse_response_text(&response_json)? {
            Some(text) => Ok(text.trim().to_string()),
            None => Err(Error::model_output(
                format!("{} returned no message content", self.provider.name()),
                response_json,
            )),
        }
    }
}
