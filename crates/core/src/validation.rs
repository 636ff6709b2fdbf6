//! Field validation helpers
//!
//! Pure predicates behind the report form's inline checks. None of these are
//! authoritative; the server re-validates every submission.

use thiserror::Error;

use crate::config::ValidationRules;
use crate::models::Attachment;

/// Why a picked image was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("File size must be less than {limit_mb}MB")]
    TooLarge { size: u64, limit_mb: u64 },

    #[error("Only image files (PNG, JPG, GIF, WEBP) are allowed")]
    UnsupportedType(String),
}

/// Strip everything but ASCII digits (applied on every keystroke)
pub fn sanitize_prn(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Empty passes; a present value must be digits only
pub fn is_valid_prn(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Empty passes; a present value must end with the institutional domain
pub fn is_institutional_email(raw: &str, domain: &str) -> bool {
    let email = normalize_email(raw);
    email.is_empty() || email.ends_with(&domain.to_lowercase())
}

/// Selection-time check of an image attachment
pub fn check_attachment(
    attachment: &Attachment,
    rules: &ValidationRules,
) -> Result<(), AttachmentError> {
    if attachment.size > rules.max_upload_bytes {
        return Err(AttachmentError::TooLarge {
            size: attachment.size,
            limit_mb: rules.max_upload_bytes / (1024 * 1024),
        });
    }

    if !rules
        .allowed_image_types
        .iter()
        .any(|t| t.eq_ignore_ascii_case(&attachment.content_type))
    {
        return Err(AttachmentError::UnsupportedType(
            attachment.content_type.clone(),
        ));
    }

    Ok(())
}

/// Normalize a `?room=` deep-link value (`vy-404` -> `VY404`).
///
/// Returns `None` unless the code carries the building prefix and at least
/// one more character after it.
pub fn parse_room_param(raw: &str, prefix: &str) -> Option<String> {
    let code: String = raw.trim().to_uppercase().replace('-', "");
    let prefix = prefix.to_uppercase();

    if code.starts_with(&prefix) && code.len() >= prefix.len() + 2 {
        Some(code)
    } else {
        None
    }
}
