//! Notion データベースを EntryStore として使うアダプタ
//!
//! 取得は POST /databases/{id}/query、書き戻しは PATCH /pages/{id}。

use crate::domain::{Enrichment, Entry, PageId};
use crate::ports::outbound::EntryStore;
use common::error::Error;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

pub const NOTION_BASE_URL: &str = "https://api.notion.com/v1";
pub const NOTION_VERSION: &str = "2022-06-28";
/// Notion の page_size 上限
pub const MAX_PAGE_SIZE: usize = 100;

const PROP_NAME: &str = "Name";
const PROP_DEFINITION: &str = "Definition";
const PROP_SYNONYMS: &str = "Synonyms";
const PROP_ANTONYMS: &str = "Antonyms";

/// Notion API クライアント（HTTP クライアントは生成時に 1 回だけ作る）
pub struct NotionEntryStore {
    client: reqwest::blocking::Client,
    base_url: String,
    token: String,
    database_id: String,
}

impl NotionEntryStore {
    pub fn new(
        token: impl Into<String>,
        database_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: NOTION_BASE_URL.to_string(),
            token: token.into(),
            database_id: database_id.into(),
        })
    }

    /// テスト用: ベース URL を差し替える
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn query_url(&self) -> String {
        format!("{}/databases/{}/query", self.base_url, self.database_id)
    }

    fn page_url(&self, id: &PageId) -> String {
        format!("{}/pages/{}", self.base_url, id)
    }

    /// 共通ヘッダを付けて送信し、2xx なら本文を返す
    fn send(&self, builder: reqwest::blocking::RequestBuilder, what: &str) -> Result<String, Error> {
        let response = builder
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .map_err(|e| Error::http(format!("Notion {} request failed: {}", what, e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read Notion {} response: {}", what, e)))?;

        if !status.is_success() {
            return Err(Error::http(format!(
                "Notion {} error: {}",
                what,
                error_message(status, &body)
            )));
        }
        Ok(body)
    }
}

impl EntryStore for NotionEntryStore {
    fn fetch_blank(&self, limit: usize) -> Result<Vec<Entry>, Error> {
        let builder = self.client.post(self.query_url()).json(&query_payload(limit));
        let body = self.send(builder, "query")?;
        let mut entries = parse_query_response(&body)?;
        entries.truncate(limit);
        Ok(entries)
    }

    fn write_back(&self, id: &PageId, enrichment: &Enrichment) -> Result<(), Error> {
        let builder = self
            .client
            .patch(self.page_url(id))
            .json(&update_payload(enrichment));
        self.send(builder, "update")?;
        Ok(())
    }
}

/// Definition が空の行を絞り込むクエリ（page_size は Notion の上限で切る）
pub fn query_payload(limit: usize) -> Value {
    json!({
        "filter": {
            "property": PROP_DEFINITION,
            "rich_text": { "is_empty": true }
        },
        "page_size": limit.min(MAX_PAGE_SIZE)
    })
}

/// 3 列を上書きする部分更新ペイロード
pub fn update_payload(enrichment: &Enrichment) -> Value {
    json!({
        "properties": {
            PROP_DEFINITION: rich_text(&enrichment.definition),
            PROP_SYNONYMS: rich_text(&enrichment.synonyms),
            PROP_ANTONYMS: rich_text(&enrichment.antonyms)
        }
    })
}

/// rich_text 配列。空文字は空配列（= 列を空にする）
fn rich_text(text: &str) -> Value {
    if text.is_empty() {
        json!({ "rich_text": [] })
    } else {
        json!({ "rich_text": [{ "text": { "content": text } }] })
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    results: Vec<PageObject>,
}

#[derive(Debug, Deserialize)]
struct PageObject {
    id: String,
    #[serde(default)]
    properties: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct TextSegment {
    #[serde(default)]
    plain_text: String,
}

/// クエリ結果からエントリを取り出す。Name タイトルが無い・空のページはエラー
pub fn parse_query_response(body: &str) -> Result<Vec<Entry>, Error> {
    let response: QueryResponse = serde_json::from_str(body)
        .map_err(|e| Error::json(format!("Failed to parse Notion query response: {}", e)))?;

    response
        .results
        .into_iter()
        .map(|page| -> Result<Entry, Error> {
            let title = page
                .properties
                .get(PROP_NAME)
                .and_then(|p| p.get("title"))
                .ok_or_else(|| {
                    Error::json(format!("page {} has no {} title property", page.id, PROP_NAME))
                })?;
            let segments: Vec<TextSegment> = serde_json::from_value(title.clone()).map_err(|e| {
                Error::json(format!("page {} has a malformed {} title: {}", page.id, PROP_NAME, e))
            })?;
            let word: String = segments.into_iter().map(|s| s.plain_text).collect();
            let word = word.trim();
            if word.is_empty() {
                return Err(Error::json(format!(
                    "page {} has an empty {} title",
                    page.id, PROP_NAME
                )));
            }
            Ok(Entry::new(page.id.clone(), word))
        })
        .collect()
}

/// Notion のエラー本文 `{"object":"error","code":..,"message":..}` から要点を取り出す
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let Ok(v) = serde_json::from_str::<Value>(body) else {
        return format!("HTTP {}: {}", status, body);
    };
    match (v["code"].as_str(), v["message"].as_str()) {
        (Some(code), Some(msg)) => format!("HTTP {} {}: {}", status.as_u16(), code, msg),
        (None, Some(msg)) => format!("HTTP {}: {}", status.as_u16(), msg),
        _ => format!("HTTP {}: {}", status, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_payload_filters_blank_definition() {
        let p = query_payload(20);
        assert_eq!(p["filter"]["property"], "Definition");
        assert_eq!(p["filter"]["rich_text"]["is_empty"], true);
        assert_eq!(p["page_size"], 20);
    }

    #[test]
    fn test_query_payload_caps_page_size() {
        assert_eq!(query_payload(500)["page_size"], 100);
    }

    #[test]
    fn test_update_payload_sets_three_properties() {
        let e = Enrichment {
            definition: "v. （使）发芽；开始生长".to_string(),
            synonyms: "bud, germinate".to_string(),
            antonyms: "-".to_string(),
        };
        let p = update_payload(&e);
        assert_eq!(
            p["properties"]["Definition"]["rich_text"][0]["text"]["content"],
            "v. （使）发芽；开始生长"
        );
        assert_eq!(
            p["properties"]["Synonyms"]["rich_text"][0]["text"]["content"],
            "bud, germinate"
        );
        assert_eq!(p["properties"]["Antonyms"]["rich_text"][0]["text"]["content"], "-");
    }

    #[test]
    fn test_rich_text_empty_clears_field() {
        let v = rich_text("");
        assert_eq!(v["rich_text"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_parse_query_response_extracts_id_and_word() {
        let body = r#"{
            "object": "list",
            "results": [
                {"id": "p1", "properties": {"Name": {"title": [{"plain_text": "sprout"}]}}},
                {"id": "p2", "properties": {"Name": {"title": [{"plain_text": "ice "}, {"plain_text": "cream"}]}}}
            ],
            "has_more": false
        }"#;
        let entries = parse_query_response(body).unwrap();
        assert_eq!(entries, vec![Entry::new("p1", "sprout"), Entry::new("p2", "ice cream")]);
    }

    #[test]
    fn test_parse_query_response_empty() {
        let entries = parse_query_response(r#"{"results": []}"#).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_query_response_empty_title_is_error() {
        let body = r#"{"results": [{"id": "p1", "properties": {"Name": {"title": []}}}]}"#;
        let err = parse_query_response(body).unwrap_err();
        assert!(err.to_string().contains("p1"));
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_parse_query_response_missing_name_is_error() {
        let body = r#"{"results": [{"id": "p1", "properties": {}}]}"#;
        assert!(parse_query_response(body).is_err());
    }

    #[test]
    fn test_parse_query_response_not_a_list() {
        let err = parse_query_response(r#"{"object":"error"}"#).unwrap_err();
        assert!(err.to_string().contains("Notion query response"));
    }

    #[test]
    fn test_error_message_from_notion_error_body() {
        let body = r#"{"object":"error","status":401,"code":"unauthorized","message":"API token is invalid."}"#;
        let msg = error_message(reqwest::StatusCode::UNAUTHORIZED, body);
        assert_eq!(msg, "HTTP 401 unauthorized: API token is invalid.");
        let msg = error_message(reqwest::StatusCode::BAD_GATEWAY, "oops");
        assert!(msg.contains("oops"));
    }

    #[test]
    fn test_urls() {
        let store = NotionEntryStore::new("secret", "db123", Duration::from_secs(30))
            .unwrap()
            .with_base_url("http://localhost:9999/v1/");
        assert_eq!(store.query_url(), "http://localhost:9999/v1/databases/db123/query");
        assert_eq!(
            store.page_url(&PageId::new("p1")),
            "http://localhost:9999/v1/pages/p1"
        );
    }
}
