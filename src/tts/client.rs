use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::interface::{SpeechError, SpeechRequest, SpeechResponse, SpeechSynthesizer};
use super::voice_map::VoiceMap;
use crate::config::SpeechConfig;

/// Client for the Murf speech generation API
pub struct MurfClient {
    client: Client,
    api_url: String,
    api_key: String,
    voices: VoiceMap,
    format: Option<String>,
    sample_rate: Option<u32>,
}

impl MurfClient {
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            voices: VoiceMap::new(config.default_voice.clone(), &config.voices),
            format: config.format.clone(),
            sample_rate: config.sample_rate,
        })
    }

    pub fn voices(&self) -> &VoiceMap {
        &self.voices
    }

    fn build_request(&self, text: &str, language: &str) -> SpeechRequest {
        SpeechRequest {
            text: text.to_string(),
            voice_id: self.voices.voice_for(language).to_string(),
            format: self.format.clone(),
            sample_rate: self.sample_rate,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for MurfClient {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Option<String>, SpeechError> {
        if !self.is_enabled() {
            debug!("No speech API key configured, skipping synthesis");
            return Ok(None);
        }

        let request = self.build_request(text, language);
        debug!(
            "Sending speech request: voice={}, chars={}",
            request.voice_id,
            text.chars().count()
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: SpeechResponse = response.json().await?;
        match result.audio_file {
            Some(url) if !url.is_empty() => {
                debug!("Speech synthesis successful: {}", url);
                Ok(Some(url))
            }
            _ => Err(SpeechError::MissingAudio),
        }
    }

    fn is_enabled(&self) -> bool {
        !self.api_key.is_empty()
    }
}
