use std::env;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// Prompt shown before every line when `MINSH_PROMPT` is not set.
pub const DEFAULT_PROMPT: &str = "$ ";

/// Log level used when `MINSH_LOG` is missing or unreadable.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// Startup settings, taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    /// Reads `MINSH_PROMPT` and `MINSH_LOG` from the process environment.
    pub fn from_env() -> Self {
        Config::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(prompt) = lookup("MINSH_PROMPT") {
            config.prompt = prompt;
        }
        if let Some(level) = lookup("MINSH_LOG")
            && let Ok(level) = LevelFilter::from_str(level.trim())
        {
            config.log_level = level;
        }
        config
    }
}
