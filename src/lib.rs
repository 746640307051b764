//! Prove possession of an eID card's authentication key by signing a
//! relying-party challenge into a Web eID authentication token.
//!
//! ## Usage
//! ```rust,no_run
//! use webeid::{Authentication, ChallengeNonce, Origin, Outcome, PinMaterial};
//!
//! # struct Card;
//! # impl webeid::ElectronicId for Card {
//! #     fn auth_signature_algorithm(&self) -> webeid::algorithm::SigningAlgorithm {
//! #         webeid::algorithm::SigningAlgorithm::ES384
//! #     }
//! #     fn sign_with_auth_key(
//! #         &self,
//! #         _pin: PinMaterial,
//! #         _digest: &[u8],
//! #     ) -> Result<Vec<u8>, webeid::eid::SignError> {
//! #         Ok(Vec::new())
//! #     }
//! # }
//! # fn connect_card() -> Card { Card }
//! # fn read_auth_certificate() -> Vec<u8> { Vec::new() }
//! let origin = Origin::new("https://example.com").unwrap();
//! let nonce = ChallengeNonce::new("AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=").unwrap();
//!
//! let card = connect_card();
//! let certificate = read_auth_certificate();
//!
//! let mut pin = PinMaterial::new();
//! pin.append(b"1234").unwrap();
//!
//! let attempt = Authentication::new(origin, nonce);
//! match attempt.run(&card, &certificate, pin, &mut ()).unwrap() {
//!     Outcome::Completed(token) => println!("{}", serde_json::to_string(&token).unwrap()),
//!     Outcome::Cancelled => {}
//! }
//! ```

pub mod algorithm;
pub mod authenticate;
pub mod challenge;
pub mod digest;
pub mod eid;
pub mod error;
pub mod origin;
pub mod pin;
pub mod token;
pub mod ui;

pub use authenticate::{Authentication, Outcome};
pub use challenge::ChallengeNonce;
pub use eid::ElectronicId;
pub use error::Error;
pub use origin::Origin;
pub use pin::PinMaterial;
pub use token::AuthenticationToken;
