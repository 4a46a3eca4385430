//! Conversions between the canonical string, packed byte and numeric
//! representations of a hardware address.
//!
//! All functions are pure. Lengths are given in bits and must be a positive
//! multiple of 8.

use std::fmt::{self, Display};

use num::{BigInt, BigUint};

use crate::error::{Error, Result};

/// Separator between byte groups in the canonical form.
pub const CANONICAL_SEPARATOR: char = ':';

/// Hex rendering of a byte slice, optionally separated per byte.
pub(crate) struct HexSlice<'a> {
    bytes: &'a [u8],
    separator: Option<char>,
    uppercase: bool,
}

impl<'a> HexSlice<'a> {
    pub(crate) fn new<T>(data: &'a T, separator: Option<char>) -> HexSlice<'a>
    where
        T: ?Sized + AsRef<[u8]> + 'a,
    {
        HexSlice {
            bytes: data.as_ref(),
            separator,
            uppercase: false,
        }
    }

    pub(crate) fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }
}

impl<'a> Display for HexSlice<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, byte) in self.bytes.iter().enumerate() {
            match self.separator {
                Some(sep) if index > 0 => write!(f, "{sep}")?,
                _ => {}
            }
            if self.uppercase {
                write!(f, "{byte:02X}")?;
            } else {
                write!(f, "{byte:02x}")?;
            }
        }
        Ok(())
    }
}

/// Uppercase hex digits of `bytes` with no separators.
pub(crate) fn hex_upper(bytes: &[u8]) -> String {
    HexSlice::new(bytes, None).uppercase().to_string()
}

/// Returns the byte count for `length` bits.
pub fn byte_length(length: usize) -> Result<usize> {
    if length == 0 || length % 8 != 0 {
        return Err(Error::InvalidLength(length));
    }
    Ok(length / 8)
}

fn parse_byte(part: &str) -> Option<u8> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(part, 16).ok()
}

/// Splits a colon-separated canonical string into `length / 8` bytes.
pub fn canonical_to_packed(canonical: &str, length: usize) -> Result<Vec<u8>> {
    let expected = byte_length(length)?;
    let parts: Vec<&str> = canonical.split(CANONICAL_SEPARATOR).collect();
    if parts.len() != expected {
        return Err(Error::GroupCount {
            expected,
            found: parts.len(),
        });
    }

    parts
        .iter()
        .map(|part| parse_byte(part).ok_or_else(|| Error::InvalidCanonical(canonical.to_string())))
        .collect()
}

/// Renders `packed` as lowercase two-digit groups joined by `:`.
pub fn packed_to_canonical(packed: &[u8]) -> String {
    HexSlice::new(packed, Some(CANONICAL_SEPARATOR)).to_string()
}

/// Big-endian value of `packed`. Exact for every length.
pub fn packed_to_numeric(packed: &[u8]) -> BigUint {
    BigUint::from_bytes_be(packed)
}

/// Writes `numeric` into `length / 8` big-endian bytes.
///
/// Fails with a range error when the value is negative or needs more than
/// `length` bits.
pub fn numeric_to_packed(numeric: &BigInt, length: usize) -> Result<Vec<u8>> {
    let byte_len = byte_length(length)?;
    let value = numeric.to_biguint().ok_or(Error::NegativeNumeric)?;
    if value.bits() > length as u64 {
        return Err(Error::NumericOutOfRange(length));
    }

    let digits = value.to_bytes_be();
    let mut packed = vec![0u8; byte_len];
    packed[byte_len - digits.len()..].copy_from_slice(&digits);
    Ok(packed)
}

pub fn canon_to_numeric(canonical: &str, length: usize) -> Result<BigUint> {
    canonical_to_packed(canonical, length).map(|packed| packed_to_numeric(&packed))
}

pub fn numeric_to_canon(numeric: &BigInt, length: usize) -> Result<String> {
    numeric_to_packed(numeric, length).map(|packed| packed_to_canonical(&packed))
}
