//! The authentication token returned to the relying party.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::algorithm::SigningAlgorithm;

/// Layout version tag of the token.
pub const TOKEN_FORMAT: &str = "web-eid:1.0";

/// Release URL identifying the application build that produced the token.
pub const APP_VERSION: &str = concat!(
    "https://web-eid.eu/web-eid-app/releases/",
    env!("CARGO_PKG_VERSION")
);

/// Signed authentication token, ready for serialization.
///
/// Written once on assembly and returned as-is. The serialized field names
/// are a wire contract; verifiers match them literally.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationToken {
    /// The authentication certificate, DER, base64-encoded. Verifying it is
    /// the relying party's job.
    pub unverified_certificate: String,

    /// Wire name of the signature algorithm.
    pub algorithm: &'static str,

    /// The signature, base64-encoded.
    pub signature: String,

    /// Token layout version.
    pub format: &'static str,

    /// Provenance of the application build that produced the token.
    pub app_version: &'static str,
}

impl AuthenticationToken {
    /// Assembles the token from the card's outputs. Pure construction, no
    /// validation.
    pub fn new(algorithm: SigningAlgorithm, certificate_der: &[u8], signature: &[u8]) -> Self {
        Self {
            unverified_certificate: BASE64.encode(certificate_der),
            algorithm: algorithm.name(),
            signature: BASE64.encode(signature),
            format: TOKEN_FORMAT,
            app_version: APP_VERSION,
        }
    }
}
