//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイント（SiliconFlow 等）を指定可能。非ストリーミングのみ。

use crate::domain::ModelName;
use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.siliconflow.cn/v1";
pub const DEFAULT_MODEL: &str = "Qwen/Qwen2.5-7B-Instruct";

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    client: reqwest::blocking::Client,
    model: ModelName,
    base_url: String,
    api_key: Option<String>,
    temperature: Option<f64>,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名（None のとき DEFAULT_MODEL）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key` - Bearer トークン（None のとき Authorization を付けない）
    /// * `temperature` - 温度（None のときペイロードに含めない）
    /// * `timeout` - 1 リクエストあたりの上限時間
    pub fn new(
        model: Option<ModelName>,
        base_url: Option<String>,
        api_key: Option<String>,
        temperature: Option<f32>,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let model = model.unwrap_or_else(|| ModelName::new(DEFAULT_MODEL));
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            model,
            base_url,
            api_key,
            temperature: temperature.map(f64::from),
        })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

/// エラーレスポンス本文から `error.message`（SiliconFlow はトップレベル `message`）を取り出す。
/// 無ければ HTTP ステータスと本文
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v["error"]["message"]
                .as_str()
                .or_else(|| v["message"].as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body))
}

impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        let mut messages: Vec<Value> = Vec::new();
        if let Some(s) = system_instruction {
            messages.push(json!({ "role": "system", "content": s }));
        }
        messages.push(json!({ "role": "user", "content": query }));

        let mut payload = json!({
            "model": self.model.as_ref(),
            "messages": messages,
            "stream": false
        });
        if let Some(t) = self.temperature {
            payload["temperature"] = json!(t);
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let mut builder = self
            .client
            .post(self.url())
            .header("Content-Type", "application/json")
            .body(request_json.to_string());

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .map_err(|e| Error::http(format!("Chat completions request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(format!(
                "Chat completions error: {}",
                error_message(status, &response_text)
            )));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        let text = v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string());
        Ok(text)
    }
}
