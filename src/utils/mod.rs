pub mod regex;

/// Split a text at the points where the given function is true.
/// Keeps the separators. See https://stackoverflow.com/a/40296745.
pub fn split<F>(text: &str, split_func: F) -> Vec<&str>
where
    F: Fn(char) -> bool,
{
    let mut result = Vec::new();
    let mut last = 0;
    for (index, matched) in text.match_indices(split_func) {
        if last != index {
            result.push(&text[last..index]);
        }
        result.push(matched);
        last = index + matched.len();
    }
    if last < text.len() {
        result.push(&text[last..]);
    }

    result
}

/// Characters which always form a token of their own.
#[inline]
pub fn splitting_chars() -> &'static str {
    r##"«»'’`´‘[]{},.:;!?/\()<=>„“”"+#…*"##
}

/// Whether the string contains at least two characters and no lowercase character e. g. an acronym.
pub fn is_acronym(string: &str) -> bool {
    string.chars().nth(1).is_some()
        && string.chars().any(char::is_alphabetic)
        && !string.chars().any(|x| x.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_separators() {
        assert_eq!(
            split("hello, world", |c| c == ',' || c == ' '),
            vec!["hello", ",", " ", "world"]
        );
    }

    #[test]
    fn split_handles_leading_and_trailing_separators() {
        assert_eq!(split(" a ", char::is_whitespace), vec![" ", "a", " "]);
        assert!(split("", char::is_whitespace).is_empty());
    }

    #[test]
    fn acronyms() {
        assert!(is_acronym("NASA"));
        assert!(is_acronym("U2"));
        assert!(!is_acronym("I"));
        assert!(!is_acronym("Nasa"));
        assert!(!is_acronym("42"));
    }
}
