//! Minimal POSIX shell quoting for the diagnostic command line.
//!
//! The wrapper prints the exact command it executes so that a failed link can
//! be re-run by hand. Quoting only has to be safe to paste back into a POSIX
//! shell; it is not a general-purpose escaper.

/// Characters that never need quoting in a token.
fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '_' | '-')
}

/// Quotes one token for a POSIX shell.
pub fn quote(token: &str) -> String {
    if !token.is_empty() && token.chars().all(is_safe) {
        return token.to_string();
    }
    // Single quotes pass everything literally except the quote itself,
    // which is spliced in as '"'"'.
    format!("'{}'", token.replace('\'', r#"'"'"'"#))
}

/// Joins tokens into one shell-parseable line.
pub fn join(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| quote(t))
        .collect::<Vec<_>>()
        .join(" ")
}
