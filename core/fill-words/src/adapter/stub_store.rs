//! テスト用: メモリ上のエントリを返し、書き戻しを記録する EntryStore 実装


#[cfg(test)]
pub use stub::StubEntryStore;
