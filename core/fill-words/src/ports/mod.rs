//! Ports & Adapters のポート定義
//!
//! - inbound: CLI がアプリを呼び出す入り口
//! - outbound: アプリが外界（Notion・LLM・時間・表示）に依頼するための trait

pub mod inbound;
pub mod outbound;
