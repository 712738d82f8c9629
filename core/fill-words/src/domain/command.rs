//! fill-words コマンドの enum（Command Pattern）

use crate::domain::RunSettings;

/// fill-words の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum FillCommand {
    /// ヘルプ表示
    Help,
    /// 空エントリを埋める
    Fill(RunSettings),
}
