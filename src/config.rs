use crate::error::MyLangError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompt: String,
    pub debug_prefix: String,
    pub exit_commands: Vec<String>,
    pub output: OutputFormat,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: String::from(">> "),
            debug_prefix: String::from("debug:"),
            exit_commands: vec![String::from("exit"), String::from("quit")],
            output: OutputFormat::Text,
            log_level: String::from("warn"),
        }
    }
}

impl Config {
    /// Loads the config file, falling back to defaults when none exists.
    pub fn load() -> Result<Self, MyLangError> {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, MyLangError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), MyLangError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Writes a default config unless a file is already there. The existing
    /// file is never parsed, so a broken one can still be located and fixed.
    pub fn init_at(path: &Path) -> Result<bool, MyLangError> {
        if path.exists() {
            return Ok(false);
        }
        Config::default().save_to(path)?;
        Ok(true)
    }

    pub fn get_home_dir() -> PathBuf {
        if let Ok(custom_dir) = env::var("MYLANG_HOME") {
            return PathBuf::from(custom_dir);
        }

        let home = if cfg!(windows) {
            env::var("USERPROFILE")
        } else {
            env::var("HOME")
        };
        PathBuf::from(home.unwrap_or_else(|_| String::from("."))).join(".mylang")
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_home_dir().join("config.json")
    }

    /// `MYLANG_LOG` wins over the configured level.
    pub fn log_filter(&self) -> String {
        env::var("MYLANG_LOG").unwrap_or_else(|_| self.log_level.clone())
    }

    pub fn is_exit_command(&self, line: &str) -> bool {
        self.exit_commands.iter().any(|command| command == line)
    }
}
