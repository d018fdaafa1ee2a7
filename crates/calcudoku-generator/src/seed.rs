//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines one generated puzzle.
///
/// Seeds display as 64 lowercase hex digits and parse back from the same
/// form, so they can be logged, shared, and replayed. The same seed always
/// reproduces the same puzzle, cage layout and identifiers included.
///
/// # Examples
///
/// ```
/// use calcudoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily-2026-08-23");
/// let replayed: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(replayed, seed);
/// # Ok::<(), calcudoku_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    ///
    /// Useful for human-memorable seeds such as daily puzzle names.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// First 12 hex digits of the seed, used in puzzle identifiers.
    pub(crate) fn hex_prefix(self) -> String {
        let mut hex = self.to_string();
        hex.truncate(12);
        hex
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors from parsing a [`PuzzleSeed`] from hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {length}")]
    InvalidLength {
        /// Number of bytes in the rejected text.
        length: usize,
    },
    /// The text contains a character that is not a hex digit.
    #[display("seed contains a character that is not a hex digit")]
    InvalidDigit,
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { length: s.len() });
        }
        // from_str_radix alone would also accept sign characters.
        if !s.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidDigit);
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|_| ParseSeedError::InvalidDigit)?;
        }
        Ok(Self(bytes))
    }
}
