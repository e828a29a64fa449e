//! Contact Message
//!
//! Validation and `mailto:` composition for the contact form. Nothing is sent
//! over the network; the visitor's mail client takes over.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Unreserved characters (RFC 3986) stay as-is, everything else is escaped
const MAILTO_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("Please tell me your name.")]
    MissingName,
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("The message is empty.")]
    MissingMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Check fields in display order, reporting the first problem
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactFormError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactFormError::MissingMessage);
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Hello from {}", self.name.trim())
    }

    pub fn body(&self) -> String {
        format!("{}\n\n{} <{}>", self.message.trim(), self.name.trim(), self.email.trim())
    }
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Build the `mailto:` URL for a validated message
pub fn mailto_href(to: &str, msg: &ContactMessage) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        utf8_percent_encode(&msg.subject(), MAILTO_ESCAPE),
        utf8_percent_encode(&msg.body(), MAILTO_ESCAPE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn test_valid_message() {
        assert_eq!(message().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        let msg = ContactMessage { name: "  ".to_string(), ..message() };
        assert_eq!(msg.validate(), Err(ContactFormError::MissingName));

        let msg = ContactMessage { message: "\n".to_string(), ..message() };
        assert_eq!(msg.validate(), Err(ContactFormError::MissingMessage));
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["", "jane", "jane@", "@example.com", "jane@example", "jane doe@example.com", "a@b@c.com", "jane@.com"] {
            let msg = ContactMessage { email: email.to_string(), ..message() };
            assert_eq!(msg.validate(), Err(ContactFormError::InvalidEmail), "email {:?}", email);
        }
    }

    #[test]
    fn test_mailto_is_encoded() {
        let href = mailto_href("hello@alexmorgan.dev", &message());
        assert_eq!(
            href,
            "mailto:hello@alexmorgan.dev?subject=Hello%20from%20Jane%20Doe\
             &body=Let%27s%20build%20something.%0A%0AJane%20Doe%20%3Cjane%40example.com%3E"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ContactFormError::MissingName.to_string(), "Please tell me your name.");
    }
}
