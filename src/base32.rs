//! Transcode byte sequences to and from the `base32check` alphabet.
//!
//! Every symbol carries five bits, most significant bits first. The final
//! symbol is zero-padded on the right and no `=` padding is used, so one byte
//! becomes two symbols and five bytes become eight.
//!
//! ```
//! use base32check::base32::{decode, encode};
//! let encoded = encode(b"foobar");
//! assert_eq!(encoded, "vehk7cnpwb");
//! assert_eq!(decode(&encoded).unwrap(), b"foobar");
//! // Symbols are accepted in either case
//! assert_eq!(decode("VEHK7CNPWB").unwrap(), b"foobar");
//! ```

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

/// The 32 symbols, indexed by the five-bit value they encode.
pub const ALPHABET: &[u8; 32] = b"0pzqy9x8bf2tvrwds3jn54khce6mua7l";

static SYMBOLS: phf::Map<char, u8> = phf::phf_map! {
    '0' => 0, 'p' => 1, 'z' => 2, 'q' => 3, 'y' => 4, '9' => 5, 'x' => 6, '8' => 7,
    'b' => 8, 'f' => 9, '2' => 10, 't' => 11, 'v' => 12, 'r' => 13, 'w' => 14, 'd' => 15,
    's' => 16, '3' => 17, 'j' => 18, 'n' => 19, '5' => 20, '4' => 21, 'k' => 22, 'h' => 23,
    'c' => 24, 'e' => 25, '6' => 26, 'm' => 27, 'u' => 28, 'a' => 29, '7' => 30, 'l' => 31,
};

/// The errors that can be returned when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The string contains non-ASCII characters.
    NonAscii,
    /// No whole number of bytes fits the string length.
    InvalidLength,
    /// The character is not part of the alphabet.
    InvalidCharacter(char),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NonAscii => write!(f, "base32 string contains non-ASCII characters"),
            Self::InvalidLength => write!(f, "invalid base32 length"),
            Self::InvalidCharacter(c) => write!(f, "invalid base32 character {c:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Number of symbols needed to encode `len` bytes.
#[must_use]
pub const fn encoded_len(len: usize) -> usize {
    (len * 8).div_ceil(5)
}

/// Number of bytes carried by `len` symbols.
#[must_use]
pub const fn decoded_len(len: usize) -> usize {
    len * 5 / 8
}

/// Encodes a byte payload into a lowercase base32 string.
#[must_use]
pub fn encode(data: &[u8]) -> String {
    let mut encoded = String::with_capacity(encoded_len(data.len()));
    let mut buffer: u16 = 0;
    let mut bits = 0;

    for &byte in data {
        buffer = (buffer << 8) | u16::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            encoded.push(ALPHABET[usize::from((buffer >> bits) & 0x1f)] as char);
        }
        buffer &= (1 << bits) - 1;
    }
    if bits > 0 {
        encoded.push(ALPHABET[usize::from((buffer << (5 - bits)) & 0x1f)] as char);
    }
    encoded
}

/// Decodes a base32 string back into a byte payload.
///
/// # Examples
///
/// ```
/// use base32check::base32::{decode, Error};
/// assert_eq!(decode("000s908l").unwrap(), vec![0, 1, 2, 128, 255]);
/// assert_eq!(decode("000").unwrap_err(), Error::InvalidLength);
/// assert_eq!(decode("0o").unwrap_err(), Error::InvalidCharacter('o'));
/// ```
///
/// # Errors
///
/// If the string contains non-ASCII characters, characters outside the
/// alphabet, or has a length that no byte sequence encodes to, an error
/// will be returned.
pub fn decode(encoded: &str) -> Result<Vec<u8>, Error> {
    if !encoded.is_ascii() {
        return Err(Error::NonAscii);
    }
    if matches!(encoded.len() % 8, 1 | 3 | 6) {
        return Err(Error::InvalidLength);
    }

    let mut decoded = Vec::with_capacity(decoded_len(encoded.len()));
    let mut buffer: u16 = 0;
    let mut bits = 0;

    for c in encoded.chars() {
        let value = SYMBOLS
            .get(&c.to_ascii_lowercase())
            .copied()
            .ok_or(Error::InvalidCharacter(c))?;
        buffer = (buffer << 5) | u16::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            decoded.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }
    Ok(decoded)
}
