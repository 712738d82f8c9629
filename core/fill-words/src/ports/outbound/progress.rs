//! 進捗表示 Outbound ポート
//!
//! 構造化ログとは別チャネル（人間向けの stdout 出力）。

use crate::domain::{RunSummary, Word};

pub trait ProgressReporter: Send + Sync {
    /// `index` は 1 始まり
    fn entry_started(&self, index: usize, total: usize, word: &Word);

    fn finished(&self, summary: &RunSummary);
}
