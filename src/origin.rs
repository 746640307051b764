//! Origin of the relying party requesting authentication.

/// Scheme and authority of the relying party, used to separate signing domains.
///
/// The constructor checks only the syntax the signing protocol itself relies
/// on; callers are expected to have validated the origin against their own
/// policy before handing it over. The value is opaque from here on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(String);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OriginError {
    #[error("origin must use the https or wss scheme")]
    DisallowedScheme,

    #[error("origin must have a host")]
    EmptyHost,

    #[error("origin must not have a path, query or fragment")]
    NotAnOrigin,
}

impl Origin {
    /// Accepts an origin of the form `scheme://host[:port]`.
    pub fn new(origin: impl Into<String>) -> Result<Self, OriginError> {
        let origin = origin.into();

        let authority = origin
            .strip_prefix("https://")
            .or_else(|| origin.strip_prefix("wss://"))
            .ok_or(OriginError::DisallowedScheme)?;

        if authority.is_empty() {
            return Err(OriginError::EmptyHost);
        }
        if authority.chars().any(|c| matches!(c, '/' | '?' | '#')) {
            return Err(OriginError::NotAnOrigin);
        }

        Ok(Self(origin))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
