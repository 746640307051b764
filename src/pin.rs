//! PIN bytes captured from the user for one signing attempt.

use std::fmt;

use zeroize::{Zeroize, Zeroizing};

/// Longest PIN any supported card accepts.
pub const MAX_PIN_LENGTH: usize = 12;

/// Command header (5 bytes) plus the padded PIN block (16 bytes). Reserving
/// the whole transport buffer up front keeps the secret from moving through
/// a reallocation.
const CAPACITY: usize = 5 + 16;

/// Buffer holding the user's PIN for the duration of one signing call.
///
/// The contents are zeroed when the buffer is dropped and can be zeroed
/// earlier with [`wipe`](Self::wipe). `Debug` never prints the contents.
pub struct PinMaterial(Zeroizing<Vec<u8>>);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PinError {
    #[error("PIN cannot be longer than {max} bytes", max = MAX_PIN_LENGTH)]
    TooLong,

    #[error("padded PIN does not fit the transport buffer")]
    Overflow,
}

impl PinMaterial {
    /// Creates an empty buffer with the full transport capacity reserved.
    pub fn new() -> Self {
        Self(Zeroizing::new(Vec::with_capacity(CAPACITY)))
    }

    /// Appends PIN bytes, refusing input past the supported maximum.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), PinError> {
        if self.0.len() + bytes.len() > MAX_PIN_LENGTH {
            return Err(PinError::TooLong);
        }

        self.0.extend_from_slice(bytes);
        Ok(())
    }

    /// Pads the buffer with `filler` up to `length`, in place. Card
    /// implementations use this to build the verification block the card
    /// expects without copying the PIN.
    pub fn pad_to(&mut self, length: usize, filler: u8) -> Result<(), PinError> {
        if length > CAPACITY {
            return Err(PinError::Overflow);
        }

        while self.0.len() < length {
            self.0.push(filler);
        }
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Zeroes the contents and empties the buffer, keeping its capacity.
    pub fn wipe(&mut self) {
        self.0.zeroize();
    }
}

impl Default for PinMaterial {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PinMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PinMaterial([REDACTED])")
    }
}
