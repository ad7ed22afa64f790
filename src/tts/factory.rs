use std::sync::Arc;
use anyhow::Result;
use tracing::{info, warn};
use crate::config::SpeechConfig;
use super::client::MurfClient;
use super::interface::SpeechSynthesizer;

/// Factory for creating the speech synthesizer
pub struct TTSFactory;

impl TTSFactory {
    /// Create the speech client from configuration.
    ///
    /// A missing API key still yields a client; it just reports itself disabled.
    pub fn create_tts(speech_config: &SpeechConfig) -> Result<Arc<dyn SpeechSynthesizer>> {
        let client = MurfClient::new(speech_config)?;
        if client.is_enabled() {
            info!(
                "Speech synthesis enabled: api_url={}, default_voice={}",
                speech_config.api_url,
                client.voices().default_voice()
            );
        } else {
            warn!("MURF_API_KEY not set, audio generation disabled");
        }
        Ok(Arc::new(client))
    }
}
