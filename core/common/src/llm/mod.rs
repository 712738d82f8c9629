//! LLM プロバイダの実装
//!
//! 現状は OpenAI Chat Completions 互換エンドポイント（SiliconFlow 等）のみ。

pub mod openai_compat;
pub mod provider;

pub use openai_compat::OpenAiCompatProvider;
pub use provider::LlmProvider;
