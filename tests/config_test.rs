use std::io::Write;

use lingovoice_backend::Config;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn given_yaml_file_when_loading_then_reads_all_sections() {
    let file = write_temp(
        ".yaml",
        r#"
system_config:
  port: 8123
  static_dir: ui
translation_config:
  command: ["python3", "bridge.py"]
  source_locale: de
  diagnostic_prefixes: ["LOG:"]
speech_config:
  default_voice: en-UK-ruby
  voices:
    hi: hi-IN-shweta
"#,
    );

    let config = Config::load(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.system_config.port, 8123);
    assert_eq!(config.system_config.static_dir, "ui");
    assert_eq!(config.translation_config.command, vec!["python3", "bridge.py"]);
    assert_eq!(config.translation_config.source_locale, "de");
    assert_eq!(config.translation_config.diagnostic_prefixes, vec!["LOG:"]);
    assert_eq!(config.translation_config.timeout_secs, 60);
    assert_eq!(config.speech_config.default_voice, "en-UK-ruby");
    assert_eq!(config.speech_config.voices["hi"], "hi-IN-shweta");
}

#[test]
fn given_json_file_with_env_placeholder_when_loading_then_substitutes_variable() {
    std::env::set_var("LINGOVOICE_TEST_SPEECH_URL", "http://tts.internal/generate");
    let file = write_temp(
        ".json",
        r#"{ "speech_config": { "api_url": "${LINGOVOICE_TEST_SPEECH_URL}" } }"#,
    );

    let config = Config::load(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.speech_config.api_url, "http://tts.internal/generate");
    assert_eq!(config.system_config.port, 5000);
}

#[test]
fn given_empty_yaml_mapping_when_loading_then_all_defaults() {
    let file = write_temp(".yaml", "{}\n");

    let config = Config::load(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.translation_config.command, vec!["node", "bridge/translate.mjs"]);
    assert_eq!(
        config.speech_config.api_url,
        "https://api.murf.ai/v1/speech/generate"
    );
}

#[test]
fn given_malformed_yaml_when_loading_then_error() {
    let file = write_temp(".yaml", "system_config: [unclosed\n");

    assert!(Config::load(file.path().to_str().unwrap()).is_err());
}
