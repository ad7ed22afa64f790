/// Pick the translated text out of the bridge's stdout.
///
/// Blank lines and lines that start with one of `diagnostic_prefixes` are
/// dropped; the last remaining line wins. Returns `None` when nothing is left.
pub fn extract_translation<S: AsRef<str>>(stdout: &str, diagnostic_prefixes: &[S]) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_diagnostic(line, diagnostic_prefixes))
        .last()
        .map(str::to_string)
}

fn is_diagnostic<S: AsRef<str>>(line: &str, prefixes: &[S]) -> bool {
    prefixes.iter().any(|p| line.starts_with(p.as_ref()))
}

/// Last non-empty line of stderr, used as the failure message.
pub fn last_error_line(stderr: &str) -> Option<String> {
    stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_diagnostic_prefixes;

    #[test]
    fn returns_last_line_after_dotenv_noise() {
        let stdout = "[dotenv@17.2.1] injecting env (2) from .env\n\
                      नमस्ते दुनिया\n\
                      (node:4242) ExperimentalWarning: fetch is experimental\n";
        let out = extract_translation(stdout, &default_diagnostic_prefixes());
        assert_eq!(out.as_deref(), Some("नमस्ते दुनिया"));
    }

    #[test]
    fn keeps_only_the_final_real_line() {
        let stdout = "first draft\nsecond draft\n";
        let out = extract_translation(stdout, &default_diagnostic_prefixes());
        assert_eq!(out.as_deref(), Some("second draft"));
    }

    #[test]
    fn all_diagnostic_lines_yield_none() {
        let stdout = "[dotenv@17.2.1] injecting env\nWarning: something\n\n";
        assert_eq!(extract_translation(stdout, &default_diagnostic_prefixes()), None);
    }

    #[test]
    fn output_without_trailing_newline_and_crlf() {
        let stdout = "[dotenv] loaded\r\nHola mundo  ";
        let out = extract_translation(stdout, &["[dotenv"]);
        assert_eq!(out.as_deref(), Some("Hola mundo"));
    }

    #[test]
    fn empty_prefix_list_keeps_everything() {
        let prefixes: [&str; 0] = [];
        assert_eq!(
            extract_translation("[dotenv] x\n", &prefixes).as_deref(),
            Some("[dotenv] x")
        );
    }

    #[test]
    fn stderr_message_is_last_non_blank_line() {
        assert_eq!(
            last_error_line("SDK Error: quota\n\n").as_deref(),
            Some("SDK Error: quota")
        );
        assert_eq!(last_error_line("  \n"), None);
    }
}
