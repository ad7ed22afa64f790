use std::sync::Arc;

use crate::config::Config;
use crate::translate::{BridgeTranslator, Translator};
use crate::tts::{SpeechSynthesizer, TTSFactory};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<dyn Translator>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = Arc::new(BridgeTranslator::new(&config.translation_config)?);
        let synthesizer = TTSFactory::create_tts(&config.speech_config)?;
        Ok(Self::with_services(config, translator, synthesizer))
    }

    pub fn with_services(
        config: Config,
        translator: Arc<dyn Translator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            translator,
            synthesizer,
        }
    }
}
