//! LLM プロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLM プロバイダのトレイト
///
/// 単発の非ストリーミング完了のみを扱う。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `query` - ユーザークエリ（user ロール 1 件として送る）
    /// * `system_instruction` - システム指示（オプション）
    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error>;

    /// HTTP リクエストを実行してレスポンス本文を取得
    ///
    /// 非 2xx は Error::Http。タイムアウトも Error::Http として返す。
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出（存在しない場合は None）
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
