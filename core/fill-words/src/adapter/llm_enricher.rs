//! LLM で単語をエンリッチする WordEnricher 実装
//!
//! プロンプトで厳密な JSON を要求し、応答をそのまま、失敗したらコードフェンスを剥がしてパースする。

use crate::domain::{Enrichment, Word};
use crate::ports::outbound::{LlmCompletion, WordEnricher};
use common::error::Error;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// 先頭の ``` と言語タグ（json 等）
const FENCE_OPEN: &str = r"^`*\s*(?:[A-Za-z][A-Za-z0-9_+-]*)?\s*";
/// 末尾の ```
const FENCE_CLOSE: &str = r"\s*`*$";

/// IELTS 単語の詳解を 1 行の JSON で返させるプロンプト
pub fn build_prompt(word: &Word) -> String {
    format!(
        "请以 JSON 格式返回 IELTS 单词“{}”的信息，严格不要换行、不要其他字符：\n\
         {{\"definition\": \"<中文详解，可含多个词性；例：v. （使）发芽；开始生长>\", \
         \"synonyms\": [\"syn1\", \"syn2\", \"syn3\"], \
         \"antonyms\": [\"ant1\", \"ant2\", \"ant3\"]}}",
        word
    )
}

/// 文字列 1 つ、または文字列の配列
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextOrList {
    List(Vec<String>),
    Text(String),
}

impl TextOrList {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::List(v) => v,
            Self::Text(s) => vec![s],
        }
    }
}

/// モデル応答の形（余分なキーは無視）
#[derive(Debug, Deserialize)]
struct ModelReply {
    #[serde(default)]
    definition: Option<TextOrList>,
    #[serde(default)]
    synonyms: Option<TextOrList>,
    #[serde(default)]
    antonyms: Option<TextOrList>,
}

impl ModelReply {
    fn into_enrichment(self) -> Enrichment {
        let definition = self.definition.map(|d| d.into_vec().join("; "));
        Enrichment::from_parts(
            definition,
            self.synonyms.map(TextOrList::into_vec),
            self.antonyms.map(TextOrList::into_vec),
        )
    }
}

/// LlmCompletion を使う WordEnricher
pub struct LlmWordEnricher {
    completion: Arc<dyn LlmCompletion>,
    system_instruction: Option<String>,
    fence_open: Regex,
    fence_close: Regex,
}

impl LlmWordEnricher {
    pub fn new(
        completion: Arc<dyn LlmCompletion>,
        system_instruction: Option<String>,
    ) -> Result<Self, Error> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| Error::system(format!("Invalid regex {}: {}", pattern, e)))
        };
        Ok(Self {
            completion,
            system_instruction,
            fence_open: compile(FENCE_OPEN)?,
            fence_close: compile(FENCE_CLOSE)?,
        })
    }

    /// ```json ... ``` の囲みと言語タグを剥がす
    fn strip_code_fence<'a>(&self, text: &'a str) -> &'a str {
        let text = text.trim();
        let start = self.fence_open.find(text).map(|m| m.end()).unwrap_or(0);
        let rest = &text[start..];
        let end = self.fence_close.find(rest).map(|m| m.start()).unwrap_or(rest.len());
        rest[..end].trim()
    }

    /// モデルの生出力を Enrichment にする。JSON オブジェクトとして読めなければ Error::ModelOutput
    pub fn parse_model_output(&self, raw: &str) -> Result<Enrichment, Error> {
        let value = match serde_json::from_str::<Value>(raw.trim()) {
            Ok(v) => v,
            Err(_) => serde_json::from_str::<Value>(self.strip_code_fence(raw))
                .map_err(|e| Error::model_output(e.to_string(), raw))?,
        };
        if !value.is_object() {
            return Err(Error::model_output("expected a JSON object", raw));
        }
        let reply: ModelReply =
            serde_json::from_value(value).map_err(|e| Error::model_output(e.to_string(), raw))?;
        Ok(reply.into_enrichment())
    }
}

impl WordEnricher for LlmWordEnricher {
    fn enrich(&self, word: &Word) -> Result<Enrichment, Error> {
        let raw = self
            .completion
            .complete(self.system_instruction.as_deref(), &build_prompt(word))?;
        self.parse_model_output(&raw)
    }
}
