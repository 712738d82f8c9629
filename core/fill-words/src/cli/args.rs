use crate::domain::settings::{DEFAULT_DELAY_MS, DEFAULT_LIMIT};
use crate::domain::{FillCommand, RunSettings};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::ModelName;
use common::error::Error;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: debug ログまで stderr に出す
    pub verbose: bool,
    /// -n / --limit: 1 回で取得する空エントリの上限
    pub limit: Option<usize>,
    /// -d / --delay-ms: 書き込み後の待ち時間
    pub delay_ms: Option<u64>,
    /// -t / --timeout-secs: HTTP リクエスト 1 回あたりの上限
    pub timeout_secs: Option<u64>,
    pub model: Option<ModelName>,
    pub base_url: Option<String>,
    /// -S / --system: システムメッセージとして送る指示
    pub system: Option<String>,
    /// --temperature: サンプリング温度（未指定ならサーバ側のデフォルト）
    pub temperature: Option<f32>,
    /// --env-file: 読み込む .env（未指定ならカレントの .env があれば読む）
    pub env_file: Option<PathBuf>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

/// 0.0..=2.0 の温度だけ受け付ける
fn parse_temperature(s: &str) -> Result<f32, String> {
    let t: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=2.0).contains(&t) {
        Ok(t)
    } else {
        Err(format!("{} is not in 0.0..=2.0", s))
    }
}

pub(crate) fn build_clap_command() -> clap::Command {
    clap::Command::new("fill-words")
        .about("Fill blank Definition/Synonyms/Antonyms of Notion vocabulary entries using an LLM")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit debug logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("limit")
                .short('n')
                .long("limit")
                .value_name("N")
                .help("Maximum number of blank entries to fetch (default 500)")
                .value_parser(value_parser!(u64).range(1..))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("delay-ms")
                .short('d')
                .long("delay-ms")
                .value_name("MS")
                .help("Delay after each write in milliseconds (default 1200)")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("timeout-secs")
                .short('t')
                .long("timeout-secs")
                .value_name("SECS")
                .help("Timeout for each HTTP request in seconds (default 30)")
                .value_parser(value_parser!(u64).range(1..))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Chat model name (default Qwen/Qwen2.5-7B-Instruct)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("base-url")
                .long("base-url")
                .value_name("url")
                .help("OpenAI-compatible API base URL (default https://api.siliconflow.cn/v1)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("system")
                .short('S')
                .long("system")
                .value_name("instruction")
                .help("System instruction sent before the prompt")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("temperature")
                .long("temperature")
                .value_name("T")
                .help("Sampling temperature, 0.0 to 2.0 (default: server default)")
                .value_parser(parse_temperature)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("env-file")
                .long("env-file")
                .value_name("path")
                .help("Load secrets from this .env file")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        limit: matches.get_one::<u64>("limit").map(|n| *n as usize),
        delay_ms: matches.get_one::<u64>("delay-ms").copied(),
        timeout_secs: matches.get_one::<u64>("timeout-secs").copied(),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
        base_url: matches.get_one::<String>("base-url").cloned(),
        system: matches.get_one::<String>("system").cloned(),
        temperature: matches.get_one::<f32>("temperature").copied(),
        env_file: matches.get_one::<PathBuf>("env-file").cloned(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[cfg(test)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "fill-words", &mut std::io::stdout());
}

/// Config を FillCommand に変換する（未指定の値はデフォルト）
pub fn config_to_command(config: &Config) -> FillCommand {
    if config.help {
        return FillCommand::Help;
    }
    FillCommand::Fill(RunSettings {
        limit: config.limit.unwrap_or(DEFAULT_LIMIT),
        delay: Duration::from_millis(config.delay_ms.unwrap_or(DEFAULT_DELAY_MS)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_no_args() {
        let config = parse_args_from(&["fill-words"]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_args_help() {
        assert!(parse_args_from(&["fill-words", "-h"]).unwrap().help);
        assert!(parse_args_from(&["fill-words", "--help"]).unwrap().help);
    }

    #[test]
    fn test_parse_args_all_options() {
        let config = parse_args_from(&[
            "fill-words",
            "-v",
            "-n",
            "3",
            "--delay-ms",
            "0",
            "-t",
            "10",
            "-m",
            "deepseek-ai/DeepSeek-V3",
            "--base-url",
            "http://localhost:8000/v1",
            "--env-file",
            "/tmp/vocab.env",
        ])
        .unwrap();
        assert!(config.verbose);
        assert_eq!(config.limit, Some(3));
        assert_eq!(config.delay_ms, Some(0));
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(config.model.as_deref(), Some("deepseek-ai/DeepSeek-V3"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8000/v1"));
        assert_eq!(config.env_file, Some(PathBuf::from("/tmp/vocab.env")));
    }

    #[test]
    fn test_parse_args_system_and_temperature() {
        let config = parse_args_from(&[
            "fill-words",
            "-S",
            "You are a lexicographer.",
            "--temperature",
            "0.2",
        ])
        .unwrap();
        assert_eq!(config.system.as_deref(), Some("You are a lexicographer."));
        assert_eq!(config.temperature, Some(0.2));
    }

    #[test]
    fn test_parse_args_temperature_out_of_range_rejected() {
        let err = parse_args_from(&["fill-words", "--temperature", "3"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
        assert!(parse_args_from(&["fill-words", "--temperature", "warm"]).is_err());
    }

    #[test]
    fn test_parse_args_zero_limit_rejected() {
        let err = parse_args_from(&["fill-words", "--limit", "0"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_args_zero_timeout_rejected() {
        assert!(parse_args_from(&["fill-words", "-t", "0"]).is_err());
    }

    #[test]
    fn test_parse_args_non_numeric_delay_rejected() {
        let err = parse_args_from(&["fill-words", "-d", "soon"]).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let err = parse_args_from(&["fill-words", "--unknown"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_args_positional_rejected() {
        assert!(parse_args_from(&["fill-words", "sprout"]).is_err());
    }

    #[test]
    fn test_config_to_command_defaults() {
        let cmd = config_to_command(&Config::default());
        assert_eq!(
            cmd,
            FillCommand::Fill(RunSettings {
                limit: 500,
                delay: Duration::from_millis(1200),
            })
        );
    }

    #[test]
    fn test_config_to_command_overrides() {
        let config = Config {
            limit: Some(3),
            delay_ms: Some(0),
            ..Default::default()
        };
        let cmd = config_to_command(&config);
        assert_eq!(
            cmd,
            FillCommand::Fill(RunSettings {
                limit: 3,
                delay: Duration::ZERO,
            })
        );
    }

    #[test]
    fn test_config_to_command_help_wins() {
        let config = Config {
            help: true,
            limit: Some(3),
            ..Default::default()
        };
        assert_eq!(config_to_command(&config), FillCommand::Help);
    }
}
