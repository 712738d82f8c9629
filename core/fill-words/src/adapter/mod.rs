//! アダプタ（Outbound ポートの標準実装とテスト用 Stub）

pub mod env_file;
pub mod llm_completion;
pub mod llm_enricher;
pub mod notion_store;
pub mod std_sleeper;
pub mod stdout_progress;
pub mod stub_llm;
pub mod stub_store;

pub use env_file::load_env_file;
pub use llm_completion::ProviderLlmCompletion;
pub use llm_enricher::LlmWordEnricher;
pub use notion_store::NotionEntryStore;
pub use std_sleeper::StdSleeper;
pub use stdout_progress::StdoutProgress;
