// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! RFC 9110 `token` checks, used to validate method names.

pub fn is_tchar(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '-'
                | '.'
                | '^'
                | '_'
                | '`'
                | '|'
                | '~'
        )
}

/// Return the first invalid character in `s` according to the `token` grammar,
/// or `None` if the entire string is valid.
pub fn find_invalid_token_char(s: &str) -> Option<char> {
    s.chars().find(|&c| !is_tchar(c))
}

/// Validate an HTTP method name. Returns `Err(reason)` when it is empty or
/// contains a character outside the `token` grammar.
pub fn validate_method_token(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("method is empty".into());
    }
    match find_invalid_token_char(s) {
        Some(c) => Err(format!("invalid character {:?} in method '{}'", c, s)),
        None => Ok(()),
    }
}
