use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::CliError;

pub const LOG_KEY: &str = "TRACKER_FILTER_LOG";
pub const PATH_SEPARATOR_KEY: &str = "TRACKER_FIELD_PATH_SEPARATOR";
pub const OUTPUT_PRETTY_KEY: &str = "TRACKER_OUTPUT_PRETTY";

/// Environment variable manager that loads from system and .env files
#[derive(Debug, Clone, Default)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

/// Settings resolved from the environment, with defaults for anything unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_directive: String,
    pub path_separator: String,
    pub pretty_output: bool,
}

impl EnvManager {
    pub fn from_system() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Load variables from a .env file. Values in the file win over the process environment.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read env file {}: {}", path.display(), e))
        })?;

        self.parse_env_content(&content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn settings(&self) -> Result<Settings, CliError> {
        let pretty_output = match self.get(OUTPUT_PRETTY_KEY) {
            None => true,
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(CliError::Config(format!(
                        "{OUTPUT_PRETTY_KEY} must be true or false, got `{raw}`"
                    )));
                }
            },
        };

        let path_separator = self.get(PATH_SEPARATOR_KEY).unwrap_or(".");
        if path_separator.is_empty() {
            return Err(CliError::Config(format!(
                "{PATH_SEPARATOR_KEY} must not be empty"
            )));
        }

        Ok(Settings {
            log_directive: self.get(LOG_KEY).unwrap_or("info").to_string(),
            path_separator: path_separator.to_string(),
            pretty_output,
        })
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();

                if key.is_empty() {
                    return Err(CliError::Config(format!(
                        "Invalid env file: empty key at line {}",
                        line_num + 1
                    )));
                }

                self.vars
                    .insert(key.to_string(), Self::unquote_value(value));
            } else {
                return Err(CliError::Config(format!(
                    "Invalid env file: malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            }
        }

        Ok(())
    }

    fn unquote_value(value: &str) -> String {
        let value = value.trim();

        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            return value[1..value.len() - 1].to_string();
        }

        value.to_string()
    }
}
