pub mod interface;
pub mod output;
pub mod bridge;

pub use interface::{TranslationError, Translator};
pub use output::extract_translation;
pub use bridge::BridgeTranslator;
