//! エンリッチ結果（定義・類義語・反義語）
//!
//! 永続化されず、Enricher が作って Writer がすぐ消費する。

/// 欠落・空のフィールドに入れるプレースホルダ
pub const PLACEHOLDER: &str = "-";

/// 書き戻す 3 つの文字列。どれも空にはならない（空なら PLACEHOLDER）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub definition: String,
    pub synonyms: String,
    pub antonyms: String,
}

impl Enrichment {
    /// 生の値から組み立てる。リストは ", " で結合し、欠落・空は PLACEHOLDER にする
    pub fn from_parts(
        definition: Option<String>,
        synonyms: Option<Vec<String>>,
        antonyms: Option<Vec<String>>,
    ) -> Self {
        Self {
            definition: or_placeholder(definition.unwrap_or_default().trim().to_string()),
            synonyms: join_or_placeholder(synonyms.unwrap_or_default()),
            antonyms: join_or_placeholder(antonyms.unwrap_or_default()),
        }
    }
}

fn or_placeholder(s: String) -> String {
    if s.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        s
    }
}

fn join_or_placeholder(items: Vec<String>) -> String {
    let items: Vec<&str> = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    or_placeholder(items.join(", "))
}
