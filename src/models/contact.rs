// SPDX-License-Identifier: MIT

//! Contact message domain model and validation helpers (UI-agnostic).

use email_address::EmailAddress;

/// Minimum name length in characters (not bytes; names are often Arabic).
pub const MIN_NAME_CHARS: usize = 2;
/// Minimum message length in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Raw, unvalidated field buffers bound to the contact form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// A validated, trimmed message ready for the relay. Transient: built per
/// submission attempt and never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a single field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    TooShort { min: usize },
    InvalidEmail,
}

/// Per-field validation outcome for the three contact inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Validate a draft synchronously, before any network call is considered.
///
/// Pure and locale-independent: errors carry typed reasons, and the view maps
/// them to localized text. Returns the trimmed message on success.
pub fn validate(draft: &ContactDraft) -> Result<ContactMessage, FieldErrors> {
    let name = draft.name.trim();
    let email = draft.email.trim();
    let message = draft.message.trim();

    let mut errors = FieldErrors::default();
    if name.chars().count() < MIN_NAME_CHARS {
        errors.name = Some(FieldError::TooShort {
            min: MIN_NAME_CHARS,
        });
    }
    if EmailAddress::parse_with_options(email, Default::default()).is_err() {
        errors.email = Some(FieldError::InvalidEmail);
    }
    if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.message = Some(FieldError::TooShort {
            min: MIN_MESSAGE_CHARS,
        });
    }

    if errors.is_empty() {
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn valid_draft_is_trimmed_and_accepted() {
        let msg = validate(&draft("  Jo ", " jo@x.com ", " Hello there, testing "))
            .expect("draft should validate");

        assert_eq!(msg.name, "Jo");
        assert_eq!(msg.email, "jo@x.com");
        assert_eq!(msg.message, "Hello there, testing");
    }

    #[test]
    fn one_char_name_is_rejected() {
        let errors = validate(&draft("J", "jo@x.com", "Hello there, testing"))
            .expect_err("short name should fail");

        assert_eq!(errors.name, Some(FieldError::TooShort { min: 2 }));
        assert!(errors.email.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn arabic_name_counts_characters_not_bytes() {
        // Two Arabic letters are four UTF-8 bytes but still a valid name.
        let res = validate(&draft("لي", "jo@x.com", "Hello there, testing"));

        assert!(res.is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["", "plainaddress", "no-at.example.com", "a@b@c", "a @b.co"] {
            let errors = validate(&draft("Jo", bad, "Hello there, testing"))
                .expect_err("bad email should fail");
            assert_eq!(errors.email, Some(FieldError::InvalidEmail), "input: {bad}");
        }
    }

    #[test]
    fn short_message_is_rejected() {
        let errors =
            validate(&draft("Jo", "jo@x.com", "too short")).expect_err("9 chars should fail");

        assert_eq!(errors.message, Some(FieldError::TooShort { min: 10 }));
    }

    #[test]
    fn whitespace_padding_does_not_satisfy_minimums() {
        let errors = validate(&draft("J        ", "jo@x.com", "  hi     ")).unwrap_err();

        assert!(errors.name.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn all_fields_invalid_reports_every_error() {
        let errors = validate(&draft("", "nope", "short")).unwrap_err();

        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn clear_resets_all_buffers() {
        let mut d = draft("Jo", "jo@x.com", "Hello there, testing");
        d.clear();

        assert_eq!(d, ContactDraft::default());
    }
}
