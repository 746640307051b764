//! Feedback channel towards whatever is displaying the PIN prompt.

use crate::eid::PinFailureStatus;

/// Receives PIN-entry feedback while an authentication attempt runs.
///
/// Calls are made synchronously, before the attempt returns to the caller.
pub trait UiNotifier {
    /// PIN verification turned out to be disabled on the card or reader;
    /// the user needs another way to authenticate.
    fn pin_verification_disabled(&mut self);

    /// PIN verification failed with `status` and the card still allows
    /// `retries` further attempts.
    fn pin_verification_failed(&mut self, status: PinFailureStatus, retries: u8);
}

/// Discards all feedback, for headless callers.
impl UiNotifier for () {
    fn pin_verification_disabled(&mut self) {}

    fn pin_verification_failed(&mut self, _: PinFailureStatus, _: u8) {}
}
