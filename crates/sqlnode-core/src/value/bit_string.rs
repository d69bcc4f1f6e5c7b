//! Bit string values backing binary literals.

use core::fmt;

use crate::error::{Error, Result};

/// An ordered sequence of bits, most significant first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Parses a string of hex digits; each digit contributes four bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHex`] on the first non-hex character.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let mut bits = Vec::with_capacity(hex.len() * 4);
        for (offset, digit) in hex.chars().enumerate() {
            let nibble = digit
                .to_digit(16)
                .ok_or(Error::InvalidHex { digit, offset })?;
            bits.extend((0..4).rev().map(|shift| (nibble >> shift) & 1 == 1));
        }
        Ok(Self { bits })
    }

    /// Builds a bit string from whole bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let bits = bytes
            .iter()
            .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
            .collect();
        Self { bits }
    }

    /// Builds a bit string from explicit bits.
    #[must_use]
    pub const fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of bits.
    #[must_use]
    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }

    /// Number of whole bytes needed to hold the bits.
    #[must_use]
    pub fn byte_count(&self) -> usize {
        self.bits.len().div_ceil(8)
    }

    /// Upper-case hex, left-padded with zero bits to a whole number of digits.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let pad = (4 - self.bits.len() % 4) % 4;
        let padded: Vec<bool> = core::iter::repeat(false)
            .take(pad)
            .chain(self.bits.iter().copied())
            .collect();
        padded
            .chunks(4)
            .map(|nibble| {
                let n = nibble.iter().fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit));
                char::from_digit(n, 16).map_or('0', |c| c.to_ascii_uppercase())
            })
            .collect()
    }

    /// Concatenates bit strings in order.
    #[must_use]
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Self>) -> Self {
        Self {
            bits: parts
                .into_iter()
                .flat_map(|part| part.bits.iter().copied())
                .collect(),
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
