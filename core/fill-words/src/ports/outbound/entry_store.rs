//! エントリストア Outbound ポート（Notion データベース）

use crate::domain::{Enrichment, Entry, PageId};
use common::error::Error;

/// 語彙エントリの取得と書き戻し
pub trait EntryStore: Send + Sync {
    /// Definition が空のエントリを最大 `limit` 件、ストアの並び順のまま返す。
    /// ページングはしない（1 ページのみ）。
    fn fetch_blank(&self, limit: usize) -> Result<Vec<Entry>, Error>;

    /// Definition / Synonyms / Antonyms を上書きする
    fn write_back(&self, id: &PageId, enrichment: &Enrichment) -> Result<(), Error>;
}
