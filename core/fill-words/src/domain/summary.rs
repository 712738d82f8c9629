//! 実行結果のサマリ

/// 1 回の実行の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSummary {
    /// Definition が空のエントリが 1 件もなかった（エラーではない）
    NothingToDo,
    /// 書き戻した件数
    Processed(usize),
}

impl RunSummary {
    pub fn processed(&self) -> usize {
        match self {
            Self::NothingToDo => 0,
            Self::Processed(n) => *n,
        }
    }
}
