use std::collections::HashMap;

/// Built-in language -> vendor voice table
const BUILTIN_VOICES: &[(&str, &str)] = &[
    ("hi", "hi-IN-aravind"),
    ("en", "en-US-marcus"),
    ("es", "es-ES-enrique"),
    ("fr", "fr-FR-axel"),
    ("de", "de-DE-matthias"),
    ("it", "it-IT-lorenzo"),
    ("pt", "pt-BR-heitor"),
    ("ja", "ja-JP-kenji"),
    ("ko", "ko-KR-gyeong"),
    ("zh", "zh-CN-tao"),
    ("ta", "ta-IN-murali"),
    ("bn", "bn-IN-abhik"),
];

#[derive(Debug, Clone)]
pub struct VoiceMap {
    voices: HashMap<String, String>,
    default_voice: String,
}

impl VoiceMap {
    /// Built-in table with `overrides` layered on top.
    pub fn new(default_voice: impl Into<String>, overrides: &HashMap<String, String>) -> Self {
        let mut voices: HashMap<String, String> = BUILTIN_VOICES
            .iter()
            .map(|(lang, voice)| (lang.to_string(), voice.to_string()))
            .collect();
        for (lang, voice) in overrides {
            voices.insert(normalize(lang), voice.clone());
        }
        Self {
            voices,
            default_voice: default_voice.into(),
        }
    }

    /// Voice for `language`, trying the full code, then its base language, then the default.
    pub fn voice_for(&self, language: &str) -> &str {
        let code = normalize(language);
        if let Some(voice) = self.voices.get(&code) {
            return voice;
        }
        code.split('-')
            .next()
            .and_then(|base| self.voices.get(base))
            .map(String::as_str)
            .unwrap_or(&self.default_voice)
    }

    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_lowercase().replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> VoiceMap {
        VoiceMap::new("en-US-marcus", &HashMap::new())
    }

    #[test]
    fn hindi_maps_to_aravind() {
        assert_eq!(builtin().voice_for("hi"), "hi-IN-aravind");
    }

    #[test]
    fn unmapped_language_uses_default_voice() {
        assert_eq!(builtin().voice_for("xx"), "en-US-marcus");
        assert_eq!(builtin().voice_for(""), "en-US-marcus");
    }

    #[test]
    fn region_code_falls_back_to_base_language() {
        assert_eq!(builtin().voice_for("pt-PT"), "pt-BR-heitor");
        assert_eq!(builtin().voice_for("ZH_cn"), "zh-CN-tao");
    }

    #[test]
    fn overrides_win_over_builtin_entries() {
        let mut overrides = HashMap::new();
        overrides.insert("HI".to_string(), "hi-IN-shweta".to_string());
        overrides.insert("pt-PT".to_string(), "pt-PT-custom".to_string());
        let map = VoiceMap::new("en-US-natalie", &overrides);

        assert_eq!(map.voice_for("hi"), "hi-IN-shweta");
        assert_eq!(map.voice_for("pt-pt"), "pt-PT-custom");
        assert_eq!(map.voice_for("pt-BR"), "pt-BR-heitor");
        assert_eq!(map.voice_for("sv"), "en-US-natalie");
    }
}
