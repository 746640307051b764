//! Challenge nonce issued by the relying party's server.

/// Server-issued random value proving the freshness of an authentication attempt.
///
/// Validated on construction, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeNonce(String);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChallengeNonceError {
    #[error("challenge nonce must be at least {min} characters long", min = ChallengeNonce::MIN_LENGTH)]
    TooShort,

    #[error("challenge nonce cannot be longer than {max} characters", max = ChallengeNonce::MAX_LENGTH)]
    TooLong,
}

impl ChallengeNonce {
    /// A nonce must carry at least 256 bits of entropy and is usually
    /// Base64-encoded, so the minimum is the length of 32 Base64-encoded bytes.
    pub const MIN_LENGTH: usize = 44;

    /// Sanity cap on the nonce length.
    pub const MAX_LENGTH: usize = 128;

    /// Accepts the server-supplied nonce if it is within the length bounds.
    pub fn new(nonce: impl Into<String>) -> Result<Self, ChallengeNonceError> {
        let nonce = nonce.into();
        let length = nonce.chars().count();

        if length < Self::MIN_LENGTH {
            return Err(ChallengeNonceError::TooShort);
        }
        if length > Self::MAX_LENGTH {
            return Err(ChallengeNonceError::TooLong);
        }

        Ok(Self(nonce))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
