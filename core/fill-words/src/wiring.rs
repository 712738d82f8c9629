//! 配線: 環境変数と CLI 設定から標準アダプタを組み立てる

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use common::adapter::{FileJsonLog, StderrLog, StdFileSystem, TeeLog};
use common::domain::ModelName;
use common::error::Error;
use common::llm::openai_compat::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use common::llm::OpenAiCompatProvider;
use common::ports::outbound::{EnvResolver, Log, LogLevel, LogRecord};

use crate::adapter::{
    LlmWordEnricher, NotionEntryStore, ProviderLlmCompletion, StdSleeper, StdoutProgress,
};
use crate::cli::Config;
use crate::domain::settings::DEFAULT_TIMEOUT_SECS;
use crate::usecase::FillWordsUseCase;

pub const ENV_LLM_API_KEY: &str = "SF_API_KEY";
pub const ENV_NOTION_TOKEN: &str = "NOTION_TOKEN";
pub const ENV_DATABASE_ID: &str = "DATABASE_ID";
pub const ENV_MODEL: &str = "FILL_WORDS_MODEL";
pub const ENV_BASE_URL: &str = "FILL_WORDS_BASE_URL";

/// 起動時に必須のシークレット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secrets {
    pub llm_api_key: String,
    pub notion_token: String,
    pub database_id: String,
}

/// シークレットを解決する。欠けているものはまとめて 1 つの Error::Env で報告する
pub fn resolve_secrets(env: &dyn EnvResolver) -> Result<Secrets, Error> {
    let llm_api_key = env.var(ENV_LLM_API_KEY);
    let notion_token = env.var(ENV_NOTION_TOKEN);
    let database_id = env.var(ENV_DATABASE_ID);
    match (llm_api_key, notion_token, database_id) {
        (Some(llm_api_key), Some(notion_token), Some(database_id)) => Ok(Secrets {
            llm_api_key,
            notion_token,
            database_id,
        }),
        (a, b, c) => {
            let missing: Vec<&str> = [
                (a.is_none(), ENV_LLM_API_KEY),
                (b.is_none(), ENV_NOTION_TOKEN),
                (c.is_none(), ENV_DATABASE_ID),
            ]
            .into_iter()
            .filter(|(is_missing, _)| *is_missing)
            .map(|(_, name)| name)
            .collect();
            Err(Error::env(format!(
                "missing required environment variables: {} (set them or use --env-file)",
                missing.join(", ")
            )))
        }
    }
}

/// HTTP クライアントの設定（CLI > 環境変数 > デフォルト）
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub model: ModelName,
    pub base_url: String,
    pub timeout: Duration,
    pub temperature: Option<f32>,
    pub system_instruction: Option<String>,
}

pub fn resolve_client_settings(config: &Config, env: &dyn EnvResolver) -> ClientSettings {
    let model = config
        .model
        .clone()
        .or_else(|| env.var(ENV_MODEL).map(ModelName::new))
        .unwrap_or_else(|| ModelName::new(DEFAULT_MODEL));
    let base_url = config
        .base_url
        .clone()
        .or_else(|| env.var(ENV_BASE_URL))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
    ClientSettings {
        model,
        base_url,
        timeout,
        temperature: config.temperature,
        system_instruction: config.system.clone(),
    }
}

/// Runner が失敗時に残すレコードの kind。main が stderr に表示するので StderrLog からは外す
pub const ERROR_RECORD_KIND: &str = "error";

pub fn stderr_log(verbose: bool) -> StderrLog {
    StderrLog::for_verbosity(verbose).skip_kind(ERROR_RECORD_KIND)
}

/// stderr と（ホームが解決できれば）JSONL ファイルへ書く logger
pub fn wire_logger(verbose: bool, env: &dyn EnvResolver) -> Arc<dyn Log> {
    let mut logs: Vec<Arc<dyn Log>> = vec![Arc::new(stderr_log(verbose))];
    if let Ok(home) = env.resolve_home_dir() {
        logs.push(Arc::new(FileJsonLog::new(
            Arc::new(StdFileSystem),
            home.log_file(),
        )));
    }
    Arc::new(TeeLog::new(logs))
}

/// 読み込んだ .env のパスを残すレコード
pub fn env_file_record(path: &Path) -> LogRecord {
    LogRecord::new(LogLevel::Info, "env file loaded")
        .layer("cli")
        .kind("config")
        .field("path", path.display().to_string())
}

/// 配線済みアプリケーション
pub struct App {
    pub fill_words: FillWordsUseCase,
    pub logger: Arc<dyn Log>,
}

/// 標準アダプタで App を組み立てる。シークレットが欠けていれば HTTP を呼ぶ前に失敗する
pub fn wire_app(config: &Config, env: &dyn EnvResolver, logger: Arc<dyn Log>) -> Result<App, Error> {
    let secrets = resolve_secrets(env)?;
    let client = resolve_client_settings(config, env);

    let provider = Arc::new(OpenAiCompatProvider::new(
        Some(client.model),
        Some(client.base_url),
        Some(secrets.llm_api_key),
        client.temperature,
        client.timeout,
    )?);
    let completion = Arc::new(ProviderLlmCompletion::new(provider));
    let enricher = Arc::new(LlmWordEnricher::new(completion, client.system_instruction)?);
    let store = Arc::new(NotionEntryStore::new(
        secrets.notion_token,
        secrets.database_id,
        client.timeout,
    )?);

    let fill_words = FillWordsUseCase::new(
        store,
        enricher,
        Arc::new(StdSleeper),
        Arc::new(StdoutProgress),
        Arc::clone(&logger),
    );
    Ok(App { fill_words, logger })
}
