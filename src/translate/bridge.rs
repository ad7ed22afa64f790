use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::interface::{TranslationError, Translator};
use super::output::{extract_translation, last_error_line};
use crate::config::TranslationConfig;

/// Translator that shells out to the localization SDK bridge script
pub struct BridgeTranslator {
    program: String,
    args: Vec<String>,
    working_dir: Option<String>,
    source_locale: String,
    diagnostic_prefixes: Vec<String>,
    timeout: Duration,
}

impl BridgeTranslator {
    pub fn new(config: &TranslationConfig) -> Result<Self, TranslationError> {
        let (program, args) = config
            .command
            .split_first()
            .ok_or(TranslationError::NoCommand)?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            working_dir: config.working_dir.clone(),
            source_locale: config.source_locale.clone(),
            diagnostic_prefixes: config.diagnostic_prefixes.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    fn command(&self, text: &str, target_lang: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(text)
            .arg(target_lang)
            .env("LINGO_SOURCE_LOCALE", &self.source_locale)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

#[async_trait]
impl Translator for BridgeTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError> {
        debug!(
            "Running translation bridge: program={}, target={}",
            self.program, target_lang
        );

        let output = timeout(self.timeout, self.command(text, target_lang).output())
            .await
            .map_err(|_| TranslationError::Timeout(self.timeout.as_secs()))??;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let message = last_error_line(&stderr)
                .unwrap_or_else(|| format!("exited with {}", output.status));
            warn!("Translation bridge failed: {}", message);
            return Err(TranslationError::ProcessFailed(message));
        }

        if !stderr.trim().is_empty() {
            debug!("Translation bridge stderr: {}", stderr.trim());
        }

        extract_translation(&stdout, &self.diagnostic_prefixes).ok_or_else(|| {
            warn!("Translation bridge produced no usable output");
            TranslationError::EmptyOutput
        })
    }
}
