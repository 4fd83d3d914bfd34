use std::sync::LazyLock;

use regex::Regex;

/// 至少两个单词字符组成的词元
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"));

/// 小写化后切分词元，单字符词元被丢弃
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_drops_short_tokens() {
        assert_eq!(
            tokenize("I want to learn JavaScript & React!"),
            vec!["want", "to", "learn", "javascript", "react"]
        );
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        assert_eq!(tokenize("node.js, c++ ci/cd"), vec!["node", "js", "ci", "cd"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("a b c ! ?").is_empty());
    }

    #[test]
    fn test_tokenize_unicode_words() {
        assert_eq!(tokenize("Über café"), vec!["über", "café"]);
    }
}
