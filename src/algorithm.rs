//! Signature and hash algorithms of the authentication keys on supported cards.

use std::fmt;
use std::str::FromStr;

use ring::digest;

/// JSON Web Signature algorithm of an authentication key, as reported by the card.
///
/// The set is closed: the card selects the algorithm, the caller never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum SigningAlgorithm {
    RS256,
    PS256,
    ES256,
    ES384,
    ES512,
}

/// Hash the card applies to the data it signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

/// An identifier that does not name a supported signature algorithm.
/// Indicates a defective or unsupported card or build; never retried.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unsupported signature algorithm: {0}")]
pub struct UnknownAlgorithm(String);

impl SigningAlgorithm {
    /// Hash algorithm the card applies when signing with this key.
    pub fn hash_algorithm(self) -> HashAlgorithm {
        match self {
            Self::RS256 | Self::PS256 | Self::ES256 => HashAlgorithm::Sha256,
            Self::ES384 => HashAlgorithm::Sha384,
            Self::ES512 => HashAlgorithm::Sha512,
        }
    }

    /// Identifier of the algorithm on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Self::RS256 => "RS256",
            Self::PS256 => "PS256",
            Self::ES256 => "ES256",
            Self::ES384 => "ES384",
            Self::ES512 => "ES512",
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SigningAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RS256" => Ok(Self::RS256),
            "PS256" => Ok(Self::PS256),
            "ES256" => Ok(Self::ES256),
            "ES384" => Ok(Self::ES384),
            "ES512" => Ok(Self::ES512),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl HashAlgorithm {
    fn ring_algorithm(self) -> &'static digest::Algorithm {
        match self {
            Self::Sha256 => &digest::SHA256,
            Self::Sha384 => &digest::SHA384,
            Self::Sha512 => &digest::SHA512,
        }
    }

    /// Length of the digests this algorithm produces, in octets.
    pub fn output_len(self) -> usize {
        self.ring_algorithm().output_len
    }

    /// Hashes the data.
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        digest::digest(self.ring_algorithm(), data).as_ref().to_vec()
    }
}
