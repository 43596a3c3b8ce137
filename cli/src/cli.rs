//! CLI command definitions

use bridge_domain::Level;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for logbridge
#[derive(Parser, Debug)]
#[command(name = "logbridge")]
#[command(author, version, about = "Send log messages through the configured logging engine")]
#[command(long_about = r#"
logbridge routes messages through the `log` facade into a logging engine
that is bound on first use.

Built-in engines:
  tracing   Forward to the tracing subscriber on stderr
  jsonl     Append one JSON record per line to engine.path

Configuration files are loaded from (in priority order):
1. LOGBRIDGE_* env vars  e.g. LOGBRIDGE_ENGINE__NAME=jsonl
2. --config <path>       Explicit config file
3. ./logbridge.toml      Project-level config
4. ~/.config/logbridge/config.toml   Global config

Example:
  logbridge "service started"
  logbridge --level warn --target app::db "pool exhausted"
  logbridge --engine jsonl --engine-path out.jsonl "hello" "world"
"#)]
pub struct Cli {
    /// Messages to log, one record each
    pub messages: Vec<String>,

    /// Level for the messages
    #[arg(short, long, default_value = "info", value_parser = parse_level)]
    pub level: Level,

    /// Logger name (the `log` target) for the messages
    #[arg(short, long, default_value = "logbridge::cli")]
    pub target: String,

    /// Engine to bind (overrides engine.name)
    #[arg(short, long, value_name = "NAME")]
    pub engine: Option<String>,

    /// Output path for file-backed engines (overrides engine.path)
    #[arg(long, value_name = "PATH")]
    pub engine_path: Option<PathBuf>,

    /// Verbosity of logbridge's own diagnostics (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective config, then exit
    #[arg(long)]
    pub show_config: bool,
}

fn parse_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|e: bridge_domain::DomainError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["logbridge", "hello"]).unwrap();
        assert_eq!(cli.messages, vec!["hello".to_string()]);
        assert_eq!(cli.level, Level::Info);
        assert_eq!(cli.target, "logbridge::cli");
        assert!(cli.engine.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "logbridge",
            "--level",
            "WARN",
            "--engine",
            "jsonl",
            "--engine-path",
            "out.jsonl",
            "-vv",
            "a",
            "b",
        ])
        .unwrap();
        assert_eq!(cli.level, Level::Warn);
        assert_eq!(cli.engine.as_deref(), Some("jsonl"));
        assert_eq!(cli.engine_path, Some(PathBuf::from("out.jsonl")));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.messages.len(), 2);
    }

    #[test]
    fn test_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["logbridge", "--level", "loud", "x"]).is_err());
    }
}
