use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body understood by the speech vendor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    pub text: String,
    pub voice_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
}

/// The part of the vendor response we care about
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechResponse {
    pub audio_file: Option<String>,
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("speech API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("speech API response had no audio file")]
    MissingAudio,
}

/// Speech synthesis interface
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` in `language` and return a URL to the generated audio.
    ///
    /// `Ok(None)` means synthesis is switched off, not that it failed.
    async fn synthesize(&self, text: &str, language: &str) -> Result<Option<String>, SpeechError>;

    fn is_enabled(&self) -> bool;
}
