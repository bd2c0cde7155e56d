//! Splits raw identifier names into lowercase word tokens.
//!
//! This is the first half of the classification pipeline: `userName`,
//! `user_name` and `user-name` all segment to `["user", "name"]`, and each
//! token is then checked against the dictionary independently.

/// Returns true if the character is an ASCII uppercase letter
#[inline]
fn is_uppercase(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Returns true if the character is an ASCII lowercase letter
#[inline]
fn is_lowercase(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Returns true if the character separates words outright
#[inline]
fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c == ' '
}

/// Splits an identifier into lowercase word tokens.
///
/// Boundary rules, applied in a single linear scan:
/// - a lowercase letter immediately followed by an uppercase letter starts a
///   new token (`userName` -> ["user", "name"])
/// - underscores, hyphens and spaces are separators; consecutive separators
///   collapse (`user__name` -> ["user", "name"])
/// - digits never start or end a token by themselves (`user1Name` ->
///   ["user1name"], `base64Encoder` -> ["base64encoder"])
/// - an all-uppercase run has no internal boundaries, so acronyms stay whole
///   (`getUserID` -> ["get", "user", "id"])
///
/// Total over arbitrary strings: empty input yields an empty Vec, and
/// non-ASCII characters are lowercased and carried through without creating
/// boundaries.
pub fn segment_identifier(name: &str) -> Vec<String> {
    // Fast path: purely lowercase ASCII identifiers are already a single
    // normalized token. This is the overwhelmingly common case in real code.
    if !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase()) {
        return vec![name.to_string()];
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut prev_is_lower = false;

    for c in name.chars() {
        if is_separator(c) {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            prev_is_lower = false;
            continue;
        }

        // camelCase boundary: only a lowercase-letter to uppercase-letter
        // transition splits. Digit transitions do not.
        if prev_is_lower && is_uppercase(c) && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }

        for lower in c.to_lowercase() {
            current.push(lower);
        }
        prev_is_lower = is_lowercase(c);
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Returns true if the string contains at least one ASCII letter.
///
/// Identifiers without any letter (`_123`, `$$`) carry no linguistic content
/// and are exempt from classification.
pub fn has_alphabetic(name: &str) -> bool {
    name.bytes().any(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(name: &str) -> Vec<String> {
        segment_identifier(name)
    }

    #[test]
    fn splits_camel_case() {
        assert_eq!(seg("userName"), vec!["user", "name"]);
        assert_eq!(seg("firstName"), vec!["first", "name"]);
        assert_eq!(seg("isAuthenticated"), vec!["is", "authenticated"]);
    }

    #[test]
    fn splits_pascal_case() {
        assert_eq!(seg("UserController"), vec!["user", "controller"]);
        assert_eq!(seg("DatabaseConnection"), vec!["database", "connection"]);
    }

    #[test]
    fn splits_snake_case() {
        assert_eq!(seg("user_name"), vec!["user", "name"]);
        assert_eq!(seg("max_retry_count"), vec!["max", "retry", "count"]);
    }

    #[test]
    fn splits_kebab_case() {
        assert_eq!(seg("user-name"), vec!["user", "name"]);
        assert_eq!(seg("primary-button"), vec!["primary", "button"]);
    }

    #[test]
    fn splits_mixed_case() {
        assert_eq!(seg("getUserName"), vec!["get", "user", "name"]);
        assert_eq!(seg("handleClickEvent"), vec!["handle", "click", "event"]);
    }

    #[test]
    fn lowercase_input_is_a_single_token() {
        assert_eq!(seg("hello"), vec!["hello"]);
        assert_eq!(seg("world"), vec!["world"]);
    }

    #[test]
    fn single_character_parts() {
        assert_eq!(seg("aB"), vec!["a", "b"]);
        assert_eq!(seg("x_y"), vec!["x", "y"]);
    }

    #[test]
    fn consecutive_separators_collapse() {
        assert_eq!(seg("user__name"), vec!["user", "name"]);
        assert_eq!(seg("user--name"), vec!["user", "name"]);
        assert_eq!(seg("_leading_and_trailing_"), vec!["leading", "and", "trailing"]);
    }

    #[test]
    fn digits_stay_with_preceding_text() {
        assert_eq!(seg("user1Name"), vec!["user1name"]);
        assert_eq!(seg("base64Encoder"), vec!["base64encoder"]);
        assert_eq!(seg("a1B"), vec!["a1b"]);
        assert_eq!(seg("sha256"), vec!["sha256"]);
    }

    #[test]
    fn acronym_runs_stay_whole() {
        assert_eq!(seg("getUserID"), vec!["get", "user", "id"]);
        assert_eq!(seg("ABC"), vec!["abc"]);
        assert_eq!(seg("parseXMLDocument"), vec!["parse", "xmldocument"]);
    }

    #[test]
    fn handles_edge_cases() {
        assert_eq!(seg(""), Vec::<String>::new());
        assert_eq!(seg("a"), vec!["a"]);
        assert_eq!(seg("_"), Vec::<String>::new());
        assert_eq!(seg("---"), Vec::<String>::new());
    }

    #[test]
    fn splits_complex_identifiers() {
        assert_eq!(
            seg("emailAddressValidator"),
            vec!["email", "address", "validator"]
        );
        assert_eq!(
            seg("performAsyncOperation"),
            vec!["perform", "async", "operation"]
        );
    }

    #[test]
    fn non_ascii_letters_do_not_split() {
        // Unicode letters are lowercased and carried through; only ASCII
        // case transitions create boundaries.
        assert_eq!(seg("añoNuevo"), vec!["año", "nuevo"]);
        assert_eq!(seg("Überweisung"), vec!["überweisung"]);
    }

    #[test]
    fn punctuation_passes_through() {
        assert_eq!(seg("$$"), vec!["$$"]);
        assert_eq!(seg("_123"), vec!["123"]);
    }

    #[test]
    fn detects_alphabetic_content() {
        assert!(has_alphabetic("userName"));
        assert!(has_alphabetic("x"));
        assert!(!has_alphabetic("_123"));
        assert!(!has_alphabetic("$$"));
        assert!(!has_alphabetic(""));
    }
}
