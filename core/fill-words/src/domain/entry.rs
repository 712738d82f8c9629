//! 語彙エントリ（Notion データベースの 1 行）

/// Notion ページ ID（不透明な識別子）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for PageId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 見出し語（Name 列のタイトル）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word(String);

impl Word {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for Word {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Definition が空のエントリ。存在と ID は外部ストアが所有する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: PageId,
    pub word: Word,
}

impl Entry {
    pub fn new(id: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            id: PageId::new(id),
            word: Word::new(word),
        }
    }
}
