//! Outbound ポート: アプリが外界（エントリストア・LLM・スリープ・進捗表示）を使うための trait

pub mod entry_store;
pub mod llm_completion;
pub mod progress;
pub mod sleeper;
pub mod word_enricher;

pub use entry_store::EntryStore;
pub use llm_completion::LlmCompletion;
pub use progress::ProgressReporter;
pub use sleeper::Sleeper;
pub use word_enricher::WordEnricher;
