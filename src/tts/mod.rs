pub mod interface;
pub mod voice_map;
pub mod client;
pub mod factory;

pub use interface::{SpeechError, SpeechRequest, SpeechResponse, SpeechSynthesizer};
pub use voice_map::VoiceMap;
pub use client::MurfClient;
pub use factory::TTSFactory;
