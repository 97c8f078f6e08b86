// SPDX-License-Identifier: MPL-2.0
//! Message sanitization.
//!
//! Error text shown to users often echoes what the backend returned. Before
//! such text is recorded as a diagnostic event, credentials and personal
//! data are replaced by placeholders.

use std::sync::LazyLock;

use regex::Regex;

static BEARER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bbearer\s+[A-Za-z0-9\-._~+/]+=*").expect("token regex should compile")
});

static EMAIL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}")
        .expect("email regex should compile")
});

/// Sanitizes a message by removing sensitive information.
///
/// Currently removes:
/// - bearer tokens (`Bearer eyJ...` becomes `Bearer <token>`)
/// - e-mail addresses (replaced by `<email>`)
///
/// # Examples
///
/// ```
/// use dorm_notices::diagnostics::sanitize_message;
///
/// let msg = "No account for jane.doe@campus.edu";
/// assert_eq!(sanitize_message(msg), "No account for <email>");
///
/// let msg = "Rejected header Bearer abc.def-123";
/// assert_eq!(sanitize_message(msg), "Rejected header Bearer <token>");
///
/// assert_eq!(sanitize_message("Room is full"), "Room is full");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    let without_tokens = BEARER_TOKEN.replace_all(message, "Bearer <token>");
    EMAIL_ADDRESS
        .replace_all(&without_tokens, "<email>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_email_occurrence() {
        let msg = "a@b.io and c.d@example.org are both taken";
        assert_eq!(sanitize_message(msg), "<email> and <email> are both taken");
    }

    #[test]
    fn token_match_is_case_insensitive() {
        assert_eq!(
            sanitize_message("authorization: bearer XYZ=="),
            "authorization: Bearer <token>"
        );
    }

    #[test]
    fn leaves_plain_text_untouched() {
        let msg = "Change request #42 was rejected by the supervisor";
        assert_eq!(sanitize_message(msg), msg);
    }

    #[test]
    fn lone_at_sign_is_not_an_email() {
        assert_eq!(sanitize_message("meet @ 5pm"), "meet @ 5pm");
    }
}
