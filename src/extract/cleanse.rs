use regex::Regex;

/// Removes every strip character from the whole block, then splits it into
/// lines. Empty input yields no lines.
pub fn cleanse(text: &str, strip_pattern: Option<&Regex>) -> Vec<String> {
    let cleaned = match strip_pattern {
        Some(pattern) => pattern.replace_all(text, ""),
        None => text.into(),
    };

    cleaned.lines().map(ToOwned::to_owned).collect()
}
