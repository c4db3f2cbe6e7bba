use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("{kind} {key} already exists")]
    DuplicateKey { kind: &'static str, key: u32 },

    #[error("CD {0} does not exist")]
    NotFound(u32),

    #[error("no tracks saved for CD {0}")]
    EmptyCollection(u32),

    #[error("track slot {slot} is out of range (1..={len})")]
    SlotOutOfRange { slot: usize, len: usize },
}

impl DomainError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Parses user or file input into a 1-based key (CD id or track position).
pub fn parse_key(field: &'static str, raw: &str) -> Result<u32, DomainError> {
    let key = raw
        .trim()
        .parse::<u32>()
        .map_err(|e| DomainError::validation(field, format!("'{raw}' is not an integer ({e})")))?;
    check_key(field, key)
}

pub(crate) fn check_key(field: &'static str, key: u32) -> Result<u32, DomainError> {
    if key < 1 {
        return Err(DomainError::validation(field, "must be greater than 0"));
    }
    Ok(key)
}

/// Rejects text that would break the comma separated storage line.
pub(crate) fn check_text(field: &'static str, value: &str) -> Result<(), DomainError> {
    if let Some(c) = value.chars().find(|c| matches!(c, ',' | '\n' | '\r')) {
        return Err(DomainError::validation(
            field,
            format!("must not contain {c:?}"),
        ));
    }
    Ok(())
}
