//! Normalization of caption phrases before they reach the overlay.

/// Phrases longer than this are cut down.
const MAX_WORDS: usize = 6;
/// Word count kept when a phrase is cut.
const TRUNCATED_WORDS: usize = 4;
/// Phrases shorter than this are replaced when a company name is known.
const MIN_WORDS: usize = 2;
/// Hard cap on characters, whatever the word count.
const MAX_CHARS: usize = 60;

/// Normalize overlay text.
///
/// Returns `None` for empty or whitespace-only input. Long phrases keep
/// their first four words; single words become "Discover {company}" when a
/// company name is available. The result never exceeds 60 characters.
pub fn normalize_overlay(text: &str, company_name: Option<&str>) -> Option<String> {
    normalize_words(text, company_name).map(cap_chars)
}

fn normalize_words(text: &str, company_name: Option<&str>) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }

    if words.len() > MAX_WORDS {
        return Some(words[..TRUNCATED_WORDS].join(" "));
    }

    if words.len() < MIN_WORDS {
        if let Some(name) = company_name.map(str::trim).filter(|n| !n.is_empty()) {
            return Some(format!("Discover {name}"));
        }
    }

    Some(text.trim().to_string())
}

fn cap_chars(text: String) -> String {
    match text.char_indices().nth(MAX_CHARS) {
        Some((end, _)) => text[..end].trim_end().to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_none() {
        assert_eq!(normalize_overlay("", Some("Acme")), None);
        assert_eq!(normalize_overlay(" \n\t ", None), None);
    }

    #[test]
    fn test_long_phrase_keeps_four_words() {
        assert_eq!(
            normalize_overlay("Seven words is far too many here", None).as_deref(),
            Some("Seven words is far")
        );
    }

    #[test]
    fn test_six_words_unchanged() {
        assert_eq!(
            normalize_overlay("  Six words is just fine here ", None).as_deref(),
            Some("Six words is just fine here")
        );
    }

    #[test]
    fn test_single_word_with_company() {
        assert_eq!(
            normalize_overlay("Hello", Some("Acme")).as_deref(),
            Some("Discover Acme")
        );
    }

    #[test]
    fn test_single_word_without_company() {
        assert_eq!(normalize_overlay("Hello", None).as_deref(), Some("Hello"));
        assert_eq!(normalize_overlay("Hello", Some("  ")).as_deref(), Some("Hello"));
    }

    #[test]
    fn test_typical_phrase_unchanged() {
        assert_eq!(
            normalize_overlay("Discover Our Brand", Some("Acme")).as_deref(),
            Some("Discover Our Brand")
        );
    }

    #[test]
    fn test_single_long_word_is_capped() {
        let word = "x".repeat(10_000);
        let capped = normalize_overlay(&word, None).unwrap();
        assert_eq!(capped.chars().count(), MAX_CHARS);
    }

    #[test]
    fn test_long_company_name_is_capped() {
        let name = "Ü".repeat(200);
        let capped = normalize_overlay("Hi", Some(&name)).unwrap();
        assert!(capped.starts_with("Discover ÜÜ"));
        assert_eq!(capped.chars().count(), MAX_CHARS);
    }

    #[test]
    fn test_cap_does_not_leave_trailing_space() {
        let text = format!("{} tail", "a".repeat(MAX_CHARS - 1));
        assert_eq!(normalize_overlay(&text, None).unwrap(), "a".repeat(MAX_CHARS - 1));
    }
}
