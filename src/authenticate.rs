//! The authentication operation: prove possession of the authentication key
//! by signing a digest derived from the origin and the challenge nonce.

use crate::challenge::ChallengeNonce;
use crate::digest;
use crate::eid::{ElectronicId, PinFailureStatus, SignError, VerifyPinError};
use crate::error::Error;
use crate::origin::Origin;
use crate::pin::PinMaterial;
use crate::token::AuthenticationToken;
use crate::ui::UiNotifier;

#[cfg(feature = "tracing")]
use tracing::debug;

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($t: tt)*) => {};
}

/// How an attempt ended when no error was surfaced.
#[derive(Debug)]
pub enum Outcome {
    /// The card signed the challenge and the token was assembled.
    Completed(AuthenticationToken),

    /// The user cancelled PIN entry, or entry timed out. There is nothing
    /// to display.
    Cancelled,
}

/// One authentication attempt for a validated origin and challenge nonce.
///
/// Both inputs are immutable, so the attempt can be re-run with a fresh PIN
/// after a recoverable failure; the digest is recomputed per run and never
/// reused.
pub struct Authentication {
    origin: Origin,
    challenge_nonce: ChallengeNonce,
}

impl Authentication {
    pub fn new(origin: Origin, challenge_nonce: ChallengeNonce) -> Self {
        Self {
            origin,
            challenge_nonce,
        }
    }

    /// Runs the attempt against the card: derives the digest, signs it with
    /// the authentication key and assembles the token from the signature and
    /// the certificate.
    ///
    /// The PIN buffer moves into the signing call and is wiped when it
    /// returns, whichever way it returns. Cancelled or timed-out PIN entry
    /// ends the attempt with [`Outcome::Cancelled`]; every other PIN failure
    /// is reported to `ui` and surfaced as a recoverable or terminal error
    /// depending on the retries the card still allows.
    pub fn run<E, U>(
        &self,
        eid: &E,
        certificate_der: &[u8],
        pin: PinMaterial,
        ui: &mut U,
    ) -> Result<Outcome, Error>
    where
        E: ElectronicId,
        U: UiNotifier,
    {
        let algorithm = eid.auth_signature_algorithm();

        debug!("Signing the authentication value with {}", algorithm);

        let value = digest::authentication_value(
            algorithm.hash_algorithm(),
            &self.origin,
            &self.challenge_nonce,
        );

        match eid.sign_with_auth_key(pin, &value) {
            Ok(signature) => {
                debug!("Signature received, assembling the token");

                Ok(Outcome::Completed(AuthenticationToken::new(
                    algorithm,
                    certificate_der,
                    &signature,
                )))
            }
            Err(SignError::VerifyPin(failure)) => classify_pin_failure(failure, ui),
            Err(SignError::Card(reason)) => Err(Error::Card(reason)),
        }
    }
}

/// Maps a PIN verification failure to the attempt's result.
///
/// Cancellation and timeout end the attempt silently. Everything else is
/// reported to the UI first; then the retry count decides between a
/// recoverable error and propagating the card's failure as-is.
fn classify_pin_failure<U>(failure: VerifyPinError, ui: &mut U) -> Result<Outcome, Error>
where
    U: UiNotifier,
{
    match failure.status {
        PinFailureStatus::UserCancelled | PinFailureStatus::Timeout => {
            debug!("PIN entry did not complete, ending the attempt");

            return Ok(Outcome::Cancelled);
        }
        PinFailureStatus::VerificationDisabled => ui.pin_verification_disabled(),
        status => ui.pin_verification_failed(status, failure.retries),
    }

    if failure.retries > 0 {
        Err(Error::PinRetry(failure))
    } else {
        Err(Error::PinVerification(failure))
    }
}
