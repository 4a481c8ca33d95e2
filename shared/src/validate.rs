//! Form validation for the settings and support pages.
//!
//! Rules are surfaced as typed errors so components can render them inline
//! instead of discarding invalid submissions.

use crate::TicketPriority;
use thiserror::Error;

/// Minimum length for a new password.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Please enter your current password")]
    MissingCurrent,
    #[error("New passwords do not match")]
    Mismatch,
    #[error("New password must be at least {MIN_PASSWORD_LEN} characters")]
    TooShort,
}

/// Checks a password-change submission. The mismatch rule runs before the
/// length rule, so mismatched short passwords report the mismatch.
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), PasswordError> {
    if current.is_empty() {
        return Err(PasswordError::MissingCurrent);
    }
    if new != confirm {
        return Err(PasswordError::Mismatch);
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("Please enter a subject")]
    MissingSubject,
    #[error("Please choose a category")]
    MissingCategory,
    #[error("Please choose a priority")]
    MissingPriority,
    #[error("Please describe the issue")]
    MissingDescription,
}

/// A new-ticket form as entered: selects start out unselected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketDraft {
    pub subject: String,
    pub category: String,
    pub priority: Option<TicketPriority>,
    pub description: String,
}

/// All four ticket fields are required.
pub fn validate_ticket(draft: &TicketDraft) -> Result<(), TicketError> {
    if draft.subject.trim().is_empty() {
        return Err(TicketError::MissingSubject);
    }
    if draft.category.is_empty() {
        return Err(TicketError::MissingCategory);
    }
    if draft.priority.is_none() {
        return Err(TicketError::MissingPriority);
    }
    if draft.description.trim().is_empty() {
        return Err(TicketError::MissingDescription);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_change_accepts_matching_long_passwords() {
        assert_eq!(
            validate_password_change("old-secret", "hunter22hunter", "hunter22hunter"),
            Ok(())
        );
    }

    #[test]
    fn test_password_mismatch_reported_before_length() {
        // Both rules are violated; the mismatch wins.
        assert_eq!(
            validate_password_change("old-secret", "abc", "abd"),
            Err(PasswordError::Mismatch)
        );
        assert_eq!(
            validate_password_change("old-secret", "short", "short"),
            Err(PasswordError::TooShort)
        );
        assert_eq!(
            validate_password_change("", "hunter22hunter", "hunter22hunter"),
            Err(PasswordError::MissingCurrent)
        );
    }

    #[test]
    fn test_password_boundary_length() {
        assert_eq!(
            validate_password_change("old", "exactly8", "exactly8"),
            Ok(())
        );
        assert_eq!(
            validate_password_change("old", "seven77", "seven77"),
            Err(PasswordError::TooShort)
        );
    }

    #[test]
    fn test_ticket_requires_every_field() {
        let complete = TicketDraft {
            subject: "Unable to transfer funds".to_string(),
            category: "Technical Issue".to_string(),
            priority: Some(TicketPriority::High),
            description: "Transfers fail with an error".to_string(),
        };
        assert_eq!(validate_ticket(&complete), Ok(()));

        let mut draft = complete.clone();
        draft.subject = "   ".to_string();
        assert_eq!(validate_ticket(&draft), Err(TicketError::MissingSubject));

        let mut draft = complete.clone();
        draft.category.clear();
        assert_eq!(validate_ticket(&draft), Err(TicketError::MissingCategory));

        let mut draft = complete.clone();
        draft.priority = None;
        assert_eq!(validate_ticket(&draft), Err(TicketError::MissingPriority));

        let mut draft = complete;
        draft.description.clear();
        assert_eq!(
            validate_ticket(&draft),
            Err(TicketError::MissingDescription)
        );
    }
}
