//! Derivation of the value the card signs for an authentication attempt.

use crate::algorithm::HashAlgorithm;
use crate::challenge::ChallengeNonce;
use crate::origin::Origin;

/// Computes the digest to be signed with the authentication key.
///
/// The origin and the nonce are hashed separately so that neither field can
/// be crafted to bleed into the other, and the concatenated digests are
/// hashed once more into a single fixed-size signing input:
///
/// ```text
/// H(H(origin) || H(nonce))
/// ```
///
/// Relying parties verify against this exact construction; it must not be
/// reordered or flattened.
pub fn authentication_value(
    hash: HashAlgorithm,
    origin: &Origin,
    challenge_nonce: &ChallengeNonce,
) -> Vec<u8> {
    let origin_hash = hash.digest(origin.as_str().as_bytes());
    let nonce_hash = hash.digest(challenge_nonce.as_str().as_bytes());

    let mut separated = origin_hash;
    separated.extend_from_slice(&nonce_hash);

    hash.digest(&separated)
}
