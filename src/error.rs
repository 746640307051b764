//! Error taxonomy of the authentication flow.

use crate::algorithm::UnknownAlgorithm;
use crate::challenge::ChallengeNonceError;
use crate::eid::VerifyPinError;
use crate::origin::OriginError;
use crate::pin::PinError;

/// Errors surfaced by an authentication attempt.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The challenge nonce argument was rejected.
    #[error("invalid challenge nonce: {0}")]
    ChallengeNonce(#[from] ChallengeNonceError),

    /// The origin argument was rejected.
    #[error("invalid origin: {0}")]
    Origin(#[from] OriginError),

    /// The supplied PIN was rejected before reaching the card.
    #[error("invalid PIN: {0}")]
    Pin(#[from] PinError),

    /// An identifier did not name a supported signature algorithm.
    #[error(transparent)]
    Algorithm(#[from] UnknownAlgorithm),

    /// The PIN was not accepted but the card allows further attempts; the UI
    /// has already been notified and the user may be prompted again.
    #[error("PIN verification failed, retry possible: {0}")]
    PinRetry(VerifyPinError),

    /// PIN verification failed with no retries left. Carries the card's
    /// failure unchanged; prompting again is pointless.
    #[error(transparent)]
    PinVerification(VerifyPinError),

    /// Reader or card failure unrelated to PIN entry.
    #[error("smart card failure: {0}")]
    Card(String),
}

impl Error {
    /// Whether the caller may retry the attempt with a fresh PIN entry.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PinRetry(_))
    }
}
