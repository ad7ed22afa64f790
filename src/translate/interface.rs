use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while obtaining a translation from the bridge process
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The bridge ran but exited with a failure status
    #[error("translation process failed: {0}")]
    ProcessFailed(String),

    /// The bridge exited cleanly but printed nothing usable
    #[error("translation process returned no text")]
    EmptyOutput,

    #[error("failed to run translation process: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("translation process timed out after {0}s")]
    Timeout(u64),

    #[error("translation bridge command is empty")]
    NoCommand,
}

impl TranslationError {
    /// Whether the bridge itself reported the failure, as opposed to a local fault
    pub fn is_process_error(&self) -> bool {
        matches!(self, Self::ProcessFailed(_) | Self::EmptyOutput)
    }
}

/// Translator interface - the real work happens in an external SDK
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into the language identified by `target_lang`
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError>;
}
