use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translation_config: TranslationConfig,
    #[serde(default)]
    pub speech_config: SpeechConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding `index.html` and the UI assets
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "static".to_string()
}

/// How the translation bridge process is launched.
///
/// `command` is the program followed by its leading arguments; the text and
/// the target language are appended as the last two arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_bridge_command")]
    pub command: Vec<String>,
    #[serde(default)]
    pub working_dir: Option<String>,
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    /// Stdout lines starting with any of these are bridge noise, not output
    #[serde(default = "default_diagnostic_prefixes")]
    pub diagnostic_prefixes: Vec<String>,
    #[serde(default = "default_bridge_timeout")]
    pub timeout_secs: u64,
}

fn default_bridge_command() -> Vec<String> {
    vec!["node".to_string(), "bridge/translate.mjs".to_string()]
}

fn default_source_locale() -> String {
    "en".to_string()
}

pub fn default_diagnostic_prefixes() -> Vec<String> {
    [
        "[dotenv",
        "(node:",
        "npm WARN",
        "Warning:",
        "(Use `node --trace-warnings",
        "DEBUG",
        "INFO",
        "WARN",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

fn default_bridge_timeout() -> u64 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_speech_api_url")]
    pub api_url: String,
    /// Empty disables synthesis; filled from `MURF_API_KEY` when unset
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_voice")]
    pub default_voice: String,
    /// Extra or overriding language -> voice id entries
    #[serde(default)]
    pub voices: HashMap<String, String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub sample_rate: Option<u32>,
    #[serde(default = "default_speech_timeout")]
    pub timeout_secs: u64,
}

fn default_speech_api_url() -> String {
    "https://api.murf.ai/v1/speech/generate".to_string()
}

pub fn default_voice() -> String {
    "en-US-marcus".to_string()
}

fn default_speech_timeout() -> u64 {
    30
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }
        let content = substitute_env_vars(&fs::read_to_string(path)?);

        let path_lower = path.to_lowercase();
        let config: Config = if path_lower.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Fill secrets and deploy-time knobs from the process environment.
    pub fn apply_env_overrides(&mut self) {
        // An unresolved `${...}` placeholder counts as unset
        if self.speech_config.api_key.is_empty() || self.speech_config.api_key.starts_with("${") {
            self.speech_config.api_key.clear();
            if let Ok(key) = std::env::var("MURF_API_KEY") {
                self.speech_config.api_key = key;
            }
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.system_config.port = port;
        }
    }
}

/// Replace `${VAR_NAME}` with the variable's value; unknown variables are left as-is.
pub fn substitute_env_vars(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("static regex");
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            command: default_bridge_command(),
            working_dir: None,
            source_locale: default_source_locale(),
            diagnostic_prefixes: default_diagnostic_prefixes(),
            timeout_secs: default_bridge_timeout(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_url: default_speech_api_url(),
            api_key: String::new(),
            default_voice: default_voice(),
            voices: HashMap::new(),
            format: None,
            sample_rate: None,
            timeout_secs: default_speech_timeout(),
        }
    }
}
