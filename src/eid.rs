//! Interface between the signing flow and the eID card.

use std::fmt;

use crate::algorithm::SigningAlgorithm;
use crate::pin::PinMaterial;

/// Status reported by the card or reader when PIN verification does not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinFailureStatus {
    /// The user dismissed the PIN prompt.
    UserCancelled,

    /// The user did not enter the PIN in time.
    Timeout,

    /// PIN verification is disabled on this card or reader.
    VerificationDisabled,

    /// The entered PIN was wrong.
    WrongPin,

    /// The PIN is blocked after too many wrong entries.
    Blocked,
}

impl fmt::Display for PinFailureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UserCancelled => "PIN entry cancelled",
            Self::Timeout => "PIN entry timed out",
            Self::VerificationDisabled => "PIN verification disabled",
            Self::WrongPin => "wrong PIN",
            Self::Blocked => "PIN blocked",
        })
    }
}

/// PIN verification failure, with the number of retries the card still allows.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("PIN verification failed: {status} ({retries} retries left)")]
pub struct VerifyPinError {
    pub status: PinFailureStatus,
    pub retries: u8,
}

/// Failure reported while signing with the authentication key.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    /// PIN verification did not complete.
    #[error(transparent)]
    VerifyPin(#[from] VerifyPinError),

    /// Reader or card failure unrelated to PIN entry.
    #[error("smart card failure: {0}")]
    Card(String),
}

/// Operations the signing flow needs from an eID card.
///
/// Implementations verify the PIN and sign on-card; neither the PIN nor the
/// private key crosses this boundary in the other direction.
pub trait ElectronicId {
    /// Signature algorithm of the authentication key on this card.
    fn auth_signature_algorithm(&self) -> SigningAlgorithm;

    /// Signs the digest with the authentication key, verifying the PIN
    /// on-card first.
    ///
    /// Ownership of the PIN buffer moves into the call; it is wiped when the
    /// call ends, on success and failure alike.
    fn sign_with_auth_key(&self, pin: PinMaterial, digest: &[u8]) -> Result<Vec<u8>, SignError>;
}
