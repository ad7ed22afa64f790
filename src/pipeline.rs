use serde::{Deserialize, Serialize};
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

pub const DEFAULT_TARGET_LANGUAGE: &str = "hi";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateAndSpeakRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateAndSpeakResponse {
    pub success: bool,
    pub translated_text: String,
    pub original_text: String,
    pub audio_url: Option<String>,
}

impl TranslateAndSpeakRequest {
    /// The text to translate, or `MissingText` when absent or blank
    pub fn text(&self) -> Result<&str, ApiError> {
        match self.text.as_deref() {
            Some(t) if !t.trim().is_empty() => Ok(t),
            _ => Err(ApiError::MissingText),
        }
    }

    pub fn target_language(&self) -> &str {
        self.target_language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_TARGET_LANGUAGE)
    }
}

/// Translate the request text, then voice the translation.
///
/// Translation failure aborts the request; synthesis failure only drops the audio URL.
pub async fn translate_and_speak(
    state: &AppState,
    request: &TranslateAndSpeakRequest,
) -> Result<TranslateAndSpeakResponse, ApiError> {
    let text = request.text()?;
    let target = request.target_language();

    let span = tracing::info_span!(
        "translate_and_speak",
        request_id = %Uuid::new_v4(),
        target = %target
    );

    async move {
        let translated_text = state.translator.translate(text, target).await?;
        info!("Translated {} chars", text.chars().count());

        let audio_url = match state.synthesizer.synthesize(&translated_text, target).await {
            Ok(url) => url,
            Err(e) => {
                warn!("Speech synthesis failed, returning text only: {}", e);
                None
            }
        };

        Ok::<_, ApiError>(TranslateAndSpeakResponse {
            success: true,
            translated_text,
            original_text: text.to_string(),
            audio_url,
        })
    }
    .instrument(span)
    .await
}
