mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use common::adapter::StdEnvResolver;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::FillCommand;
use ports::inbound::UseCaseRunner;
use wiring::{env_file_record, wire_app, wire_logger, App, ERROR_RECORD_KIND};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let settings = match config_to_command(&config) {
            FillCommand::Help => {
                print_help();
                return Ok(0);
            }
            FillCommand::Fill(settings) => settings,
        };

        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle"),
        );

        let result = self.app.fill_words.run(&settings);

        match &result {
            Ok(summary) => {
                let _ = self.app.logger.log(
                    &LogRecord::new(LogLevel::Info, "command finished")
                        .layer("cli")
                        .kind("lifecycle")
                        .field("processed", summary.processed())
                        .field("exit_code", 0),
                );
            }
            Err(e) => {
                let _ = self.app.logger.log(
                    &LogRecord::new(LogLevel::Error, e.to_string())
                        .layer("cli")
                        .kind(ERROR_RECORD_KIND)
                        .field("exit_code", e.exit_code()),
                );
            }
        }
        result.map(|_| 0)
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("fill-words: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    if config.help {
        print_help();
        return Ok(0);
    }

    let env_file = adapter::load_env_file(config.env_file.as_deref())?;
    let env = StdEnvResolver;
    let logger = wire_logger(config.verbose, &env);
    if let Some(path) = env_file {
        let _ = logger.log(&env_file_record(&path));
    }
    let app = wire_app(&config, &env, logger)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: fill-words [options]");
}

fn print_help() {
    println!("Usage: fill-words [options]");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -n, --limit <N>            Maximum number of blank entries to fetch (default 500; Notion returns at most 100 per page)");
    println!("  -d, --delay-ms <MS>        Delay after each write in milliseconds (default 1200)");
    println!("  -t, --timeout-secs <SECS>  Timeout for each HTTP request (default 30)");
    println!("  -m, --model <model>        Chat model name (default Qwen/Qwen2.5-7B-Instruct)");
    println!("  --base-url <url>           OpenAI-compatible API base URL (default https://api.siliconflow.cn/v1)");
    println!("  -S, --system <instruction> System instruction sent before the prompt");
    println!("  --temperature <T>          Sampling temperature, 0.0 to 2.0 (default: server default)");
    println!("  --env-file <path>          Load secrets from this .env file (default: .env in the current directory, if present)");
    println!("  -v, --verbose              Emit debug logs to stderr");
    println!("  --generate <shell>         Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Environment:");
    println!("  SF_API_KEY           API key for the chat completions endpoint (required)");
    println!("  NOTION_TOKEN         Notion integration token (required)");
    println!("  DATABASE_ID          Notion vocabulary database ID (required)");
    println!("  FILL_WORDS_MODEL     Default model when -m is not given");
    println!("  FILL_WORDS_BASE_URL  Default base URL when --base-url is not given");
    println!("  FILL_WORDS_HOME      Directory for log.jsonl. If unset, $XDG_CONFIG_HOME/fill-words");
    println!("                       (e.g. ~/.config/fill-words) is used.");
    println!();
    println!("Description:");
    println!("  Fetch entries whose Definition is empty, ask the LLM for a definition,");
    println!("  synonyms and antonyms, and write them back. The first failure stops the run.");
    println!();
    println!("Examples:");
    println!("  fill-words");
    println!("  fill-words -n 20 --delay-ms 500");
    println!("  fill-words --env-file ~/vocab/.env -m deepseek-ai/DeepSeek-V3");
}
