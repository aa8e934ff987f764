use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub const MAX_NAME_LEN: usize = 256;
pub const MAX_EMAIL_LEN: usize = 256;
pub const MAX_MESSAGE_LEN: usize = 4096;

/// A contact-form triple that has passed input validation.
///
/// All three fields are non-empty after trimming. The email is checked for
/// presence only, not RFC correctness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewSubmission {
    /// Validates raw form input.
    ///
    /// # Errors
    /// Returns a human-readable description if a field is empty,
    /// whitespace-only, or exceeds its length bound.
    pub fn parse(name: String, email: String, message: String) -> Result<Self, String> {
        let name = name.trim().to_string();
        let email = email.trim().to_string();
        let message = message.trim().to_string();

        if name.is_empty() {
            return Err("name must not be empty".to_string());
        }
        if email.is_empty() {
            return Err("email must not be empty".to_string());
        }
        if message.is_empty() {
            return Err("message must not be empty".to_string());
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(format!("name must not exceed {MAX_NAME_LEN} characters"));
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(format!("email must not exceed {MAX_EMAIL_LEN} characters"));
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(format!("message must not exceed {MAX_MESSAGE_LEN} characters"));
        }

        Ok(Self { name, email, message })
    }
}

/// The record appended to the contact store. The store assigns its own id;
/// this side never reads it back.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "timestamp", with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
}

impl ContactMessage {
    #[must_use]
    pub fn new(submission: NewSubmission, submitted_at: OffsetDateTime) -> Self {
        Self {
            name: submission.name,
            email: submission.email,
            message: submission.message,
            submitted_at,
        }
    }

    /// The submission instant in its ISO-8601 (RFC 3339) string form.
    #[must_use]
    pub fn submitted_at_rfc3339(&self) -> String {
        self.submitted_at.format(&Rfc3339).unwrap_or_else(|_| self.submitted_at.to_string())
    }
}
