//! End-to-end tests of the authentication flow against stub cards.

use std::cell::RefCell;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use webeid::algorithm::SigningAlgorithm;
use webeid::eid::{ElectronicId, PinFailureStatus, SignError, VerifyPinError};
use webeid::ui::UiNotifier;
use webeid::{Authentication, ChallengeNonce, Error, Origin, Outcome, PinMaterial};

const CERTIFICATE: &[u8] = &[0x30, 0x82, 0x01, 0x0A, 0xAA, 0xAA, 0xAA, 0xAA];
const SIGNATURE: [u8; 64] = [0x01; 64];
const NONCE: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";

/// Card that accepts any PIN and returns a fixed signature, recording the
/// digest it was asked to sign.
struct StubCard {
    algorithm: SigningAlgorithm,
    signed: RefCell<Option<Vec<u8>>>,
}

impl StubCard {
    fn new(algorithm: SigningAlgorithm) -> Self {
        Self {
            algorithm,
            signed: RefCell::new(None),
        }
    }
}

impl ElectronicId for StubCard {
    fn auth_signature_algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    fn sign_with_auth_key(&self, _pin: PinMaterial, digest: &[u8]) -> Result<Vec<u8>, SignError> {
        *self.signed.borrow_mut() = Some(digest.to_vec());

        Ok(SIGNATURE.to_vec())
    }
}

/// Card whose PIN verification always fails with the configured status.
struct FailingCard {
    status: PinFailureStatus,
    retries: u8,
}

impl ElectronicId for FailingCard {
    fn auth_signature_algorithm(&self) -> SigningAlgorithm {
        SigningAlgorithm::ES256
    }

    fn sign_with_auth_key(&self, _pin: PinMaterial, _digest: &[u8]) -> Result<Vec<u8>, SignError> {
        Err(SignError::VerifyPin(VerifyPinError {
            status: self.status,
            retries: self.retries,
        }))
    }
}

/// Card that fails before PIN verification even starts.
struct BrokenReader;

impl ElectronicId for BrokenReader {
    fn auth_signature_algorithm(&self) -> SigningAlgorithm {
        SigningAlgorithm::ES256
    }

    fn sign_with_auth_key(&self, _pin: PinMaterial, _digest: &[u8]) -> Result<Vec<u8>, SignError> {
        Err(SignError::Card("reader unplugged".into()))
    }
}

#[derive(Default)]
struct RecordingUi {
    disabled: usize,
    failed: Vec<(PinFailureStatus, u8)>,
}

impl UiNotifier for RecordingUi {
    fn pin_verification_disabled(&mut self) {
        self.disabled += 1;
    }

    fn pin_verification_failed(&mut self, status: PinFailureStatus, retries: u8) {
        self.failed.push((status, retries));
    }
}

fn attempt() -> Authentication {
    let origin = Origin::new("https://example.com").unwrap();
    let nonce = ChallengeNonce::new(NONCE).unwrap();

    Authentication::new(origin, nonce)
}

fn pin() -> PinMaterial {
    let mut pin = PinMaterial::new();
    pin.append(b"1234").unwrap();

    pin
}

#[test]
fn a_completed_attempt_assembles_the_token() {
    let card = StubCard::new(SigningAlgorithm::ES256);
    let mut ui = RecordingUi::default();

    let outcome = attempt().run(&card, CERTIFICATE, pin(), &mut ui).unwrap();
    let token = match outcome {
        Outcome::Completed(token) => token,
        Outcome::Cancelled => panic!("the attempt should complete"),
    };

    assert_eq!(token.format, "web-eid:1.0");
    assert_eq!(token.algorithm, "ES256");
    assert_eq!(token.signature, BASE64.encode(SIGNATURE));
    assert_eq!(token.unverified_certificate, BASE64.encode(CERTIFICATE));
    assert_eq!(ui.disabled, 0);
    assert!(ui.failed.is_empty());
}

#[test]
fn the_card_is_asked_to_sign_the_separated_digest() {
    let card = StubCard::new(SigningAlgorithm::ES256);

    attempt().run(&card, CERTIFICATE, pin(), &mut ()).unwrap();

    let signed = card.signed.borrow().clone().unwrap();
    assert_eq!(
        signed,
        hex::decode("5d37a6d6023063e790452d00739ddbf89be763b8d365c00d1d33be89ddac1e59").unwrap()
    );
}

#[test]
fn the_token_algorithm_follows_the_card() {
    let card = StubCard::new(SigningAlgorithm::ES384);

    let outcome = attempt().run(&card, CERTIFICATE, pin(), &mut ()).unwrap();

    match outcome {
        Outcome::Completed(token) => assert_eq!(token.algorithm, "ES384"),
        Outcome::Cancelled => panic!("the attempt should complete"),
    }

    // ES384 selects SHA-384, so the signed value is 48 octets wide.
    assert_eq!(card.signed.borrow().as_ref().unwrap().len(), 48);
}

#[test]
fn wrong_pin_with_no_retries_is_terminal_and_notified_exactly_once() {
    let card = FailingCard {
        status: PinFailureStatus::WrongPin,
        retries: 0,
    };
    let mut ui = RecordingUi::default();

    let error = attempt()
        .run(&card, CERTIFICATE, pin(), &mut ui)
        .unwrap_err();

    assert_eq!(ui.failed, vec![(PinFailureStatus::WrongPin, 0)]);
    assert_eq!(ui.disabled, 0);
    assert!(!error.is_recoverable());
    match error {
        Error::PinVerification(failure) => {
            assert_eq!(failure.status, PinFailureStatus::WrongPin);
            assert_eq!(failure.retries, 0);
        }
        other => panic!("expected a terminal failure, got {:?}", other),
    }
}

#[test]
fn wrong_pin_with_retries_left_asks_for_another_attempt() {
    let card = FailingCard {
        status: PinFailureStatus::WrongPin,
        retries: 2,
    };
    let mut ui = RecordingUi::default();

    let error = attempt()
        .run(&card, CERTIFICATE, pin(), &mut ui)
        .unwrap_err();

    assert_eq!(ui.failed, vec![(PinFailureStatus::WrongPin, 2)]);
    assert!(error.is_recoverable());
}

#[test]
fn cancelled_pin_entry_ends_quietly() {
    let card = FailingCard {
        status: PinFailureStatus::UserCancelled,
        retries: 3,
    };
    let mut ui = RecordingUi::default();

    let outcome = attempt().run(&card, CERTIFICATE, pin(), &mut ui).unwrap();

    assert!(matches!(outcome, Outcome::Cancelled));
    assert_eq!(ui.disabled, 0);
    assert!(ui.failed.is_empty());
}

#[test]
fn timed_out_pin_entry_ends_quietly() {
    let card = FailingCard {
        status: PinFailureStatus::Timeout,
        retries: 3,
    };
    let mut ui = RecordingUi::default();

    let outcome = attempt().run(&card, CERTIFICATE, pin(), &mut ui).unwrap();

    assert!(matches!(outcome, Outcome::Cancelled));
    assert!(ui.failed.is_empty());
}

#[test]
fn disabled_verification_raises_the_dedicated_event() {
    let card = FailingCard {
        status: PinFailureStatus::VerificationDisabled,
        retries: 0,
    };
    let mut ui = RecordingUi::default();

    let error = attempt()
        .run(&card, CERTIFICATE, pin(), &mut ui)
        .unwrap_err();

    assert_eq!(ui.disabled, 1);
    assert!(ui.failed.is_empty());
    assert!(matches!(error, Error::PinVerification(_)));
}

#[test]
fn reader_failures_bypass_pin_classification() {
    let mut ui = RecordingUi::default();

    let error = attempt()
        .run(&BrokenReader, CERTIFICATE, pin(), &mut ui)
        .unwrap_err();

    assert!(matches!(error, Error::Card(_)));
    assert!(!error.is_recoverable());
    assert_eq!(ui.disabled, 0);
    assert!(ui.failed.is_empty());
}
