/// Upper-case the first character of `word` when it is a lower-case letter
/// with a single-char upper form. Anything else is returned unchanged.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if !first.is_lowercase() {
        return word.to_string();
    }

    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(ch), None) => {
            let mut result = String::with_capacity(word.len());
            result.push(ch);
            result.push_str(chars.as_str());
            result
        }
        _ => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalizes_first_letter_only() {
        assert_eq!(capitalize_first("hello"), "Hello");
        assert_eq!(capitalize_first("élan"), "Élan");
    }

    #[test]
    fn test_leaves_non_letters_and_capitals_alone() {
        assert_eq!(capitalize_first("Hello"), "Hello");
        assert_eq!(capitalize_first("'tis"), "'tis");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_skips_multi_char_upper_forms() {
        assert_eq!(capitalize_first("ßen"), "ßen");
    }
}
