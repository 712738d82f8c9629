//! fill-words 共通ライブラリ
//!
//! `fill-words` コマンドが使うエラー型・ドメイン型・LLM プロバイダ・ポートとアダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// LLM プロバイダ
pub mod llm;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;
