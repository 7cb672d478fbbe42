//! Check-encode byte payloads and verify them on the way back.
//!
//! A check-encoded string is the base32 rendering of a wire buffer made of an
//! optional version byte, the payload and one trailing checksum byte. The
//! checksum covers everything before it, so a version byte that was tampered
//! with is detected the same way as a corrupted payload.
//!
//! # Unversioned
//! ```
//! use base32check::check::{decode, encode};
//! let encoded = encode(b"abc");
//! assert_eq!(encoded, "v93xx0c");
//! assert_eq!(decode(&encoded).unwrap(), b"abc");
//! ```
//!
//! # Versioned
//! ```
//! use base32check::check::{decode_versioned, encode_versioned};
//! let encoded = encode_versioned(b"", 20);
//! assert_eq!(encoded, "zsx0");
//! assert_eq!(decode_versioned(&encoded).unwrap(), (vec![], 20));
//! ```
//!
//! # Prefixed
//! ```
//! use base32check::check::{decode_prefixed, encode_prefixed};
//! let encoded = encode_prefixed(b"abc");
//! assert_eq!(encoded, "iv93xx0c");
//! assert_eq!(decode_prefixed(&encoded).unwrap(), b"abc");
//! ```

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::base32;
use crate::checksum::checksum;

/// Marker character identifying a check-encoded string among other formats.
pub const PREFIX: char = 'i';

/// The errors that can be returned when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The string is not valid base32.
    Encoding(base32::Error),
    /// The decoded buffer is too short to hold the checksum byte, or the
    /// version and checksum bytes.
    InvalidFormat,
    /// The checksum byte doesn't validate.
    InvalidChecksum,
    /// The string does not start with [`PREFIX`].
    InvalidPrefix,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Encoding(e) => write!(f, "{e}"),
            Self::InvalidFormat => write!(f, "invalid format: checksum byte missing"),
            Self::InvalidChecksum => write!(f, "checksum error"),
            Self::InvalidPrefix => write!(f, "missing '{PREFIX}' prefix"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encoding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<base32::Error> for Error {
    fn from(e: base32::Error) -> Self {
        Self::Encoding(e)
    }
}

/// Assembles the wire buffer for `payload`, led by `version` if one is given.
///
/// The payload is copied into a new buffer; the caller's bytes are never
/// modified.
///
/// ```
/// use base32check::check::check_buffer;
/// assert_eq!(check_buffer(b"abc", None), b"abc\x03");
/// assert_eq!(check_buffer(b"", Some(20)), [20, 0x0c]);
/// ```
#[must_use]
pub fn check_buffer(payload: &[u8], version: Option<u8>) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(payload.len() + 2);
    buffer.extend(version);
    buffer.extend_from_slice(payload);
    buffer.push(checksum(&buffer));
    buffer
}

/// Check-encodes `payload` without a version byte.
#[must_use]
pub fn encode(payload: &[u8]) -> String {
    base32::encode(&check_buffer(payload, None))
}

/// Check-encodes `payload` behind a `version` byte.
#[must_use]
pub fn encode_versioned(payload: &[u8], version: u8) -> String {
    base32::encode(&check_buffer(payload, Some(version)))
}

/// Check-encodes `payload` without a version byte and prepends [`PREFIX`].
#[must_use]
pub fn encode_prefixed(payload: &[u8]) -> String {
    let buffer = check_buffer(payload, None);
    let mut encoded = String::with_capacity(base32::encoded_len(buffer.len()) + 1);
    encoded.push(PREFIX);
    encoded.push_str(&base32::encode(&buffer));
    encoded
}

/// Verifies the trailing checksum byte of an unversioned wire buffer and
/// returns the payload.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for an empty buffer and
/// [`Error::InvalidChecksum`] if the checksum doesn't match.
pub fn strip_checksum(mut buffer: Vec<u8>) -> Result<Vec<u8>, Error> {
    let Some((&expected, body)) = buffer.split_last() else {
        return Err(Error::InvalidFormat);
    };
    if checksum(body) != expected {
        return Err(Error::InvalidChecksum);
    }
    buffer.truncate(buffer.len() - 1);
    Ok(buffer)
}

/// Verifies the trailing checksum byte of a versioned wire buffer and returns
/// the payload together with its version byte.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the buffer is shorter than the version
/// and checksum bytes, and [`Error::InvalidChecksum`] if the checksum doesn't
/// match.
pub fn strip_versioned_checksum(buffer: Vec<u8>) -> Result<(Vec<u8>, u8), Error> {
    if buffer.len() < 2 {
        return Err(Error::InvalidFormat);
    }
    let mut body = strip_checksum(buffer)?;
    let version = body.remove(0);
    Ok((body, version))
}

/// Decodes a string produced by [`encode`] and verifies its checksum.
///
/// # Examples
///
/// ```
/// use base32check::check::{decode, Error};
/// use base32check::base32;
/// assert_eq!(decode("00").unwrap(), b"");
/// assert_eq!(decode("v93xx00").unwrap_err(), Error::InvalidChecksum);
/// assert_eq!(decode("").unwrap_err(), Error::InvalidFormat);
/// assert_eq!(
///     decode("v93").unwrap_err(),
///     Error::Encoding(base32::Error::InvalidLength)
/// );
/// ```
///
/// # Errors
///
/// Transcoding failures are returned as [`Error::Encoding`]; the buffer is
/// then checked as described in [`strip_checksum`].
pub fn decode(encoded: &str) -> Result<Vec<u8>, Error> {
    strip_checksum(base32::decode(encoded)?)
}

/// Decodes a string produced by [`encode_versioned`] and verifies its
/// checksum. Returns the payload and the version byte.
///
/// # Errors
///
/// Transcoding failures are returned as [`Error::Encoding`]; the buffer is
/// then checked as described in [`strip_versioned_checksum`].
pub fn decode_versioned(encoded: &str) -> Result<(Vec<u8>, u8), Error> {
    strip_versioned_checksum(base32::decode(encoded)?)
}

/// Decodes a string produced by [`encode_prefixed`].
///
/// # Errors
///
/// Returns [`Error::InvalidPrefix`] if the string doesn't start with
/// [`PREFIX`], otherwise fails like [`decode`].
pub fn decode_prefixed(encoded: &str) -> Result<Vec<u8>, Error> {
    decode(encoded.strip_prefix(PREFIX).ok_or(Error::InvalidPrefix)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VECTORS: [(&str, &str); 10] = [
        ("", "00"),
        (" ", "y080"),
        ("-", "95ys"),
        ("0", "x08s"),
        ("1", "xyy0"),
        ("-1", "95csx"),
        ("11", "xycs6"),
        ("abc", "v93xx0c"),
        ("1234598760", "xyeqxrp48yuqwr3s0u"),
        (
            "abcdefghijklmnopqrstuvwxyz",
            "v93xxeq9venks6t2rrkx6mndwpchyum5w4m8w7qedbz0",
        ),
    ];

    #[test]
    fn test_vectors() {
        for (payload, expected) in VECTORS {
            let encoded = encode(payload.as_bytes());
            assert_eq!(encoded, expected, "payload {payload:?}");
            assert_eq!(decode(&encoded).unwrap(), payload.as_bytes());
        }
    }

    #[test]
    fn test_zeros() {
        let payload = hex::decode("00000000000000007b").unwrap();
        assert_eq!(encode(&payload), "00000000000007cz");
        for len in 0..64 {
            let payload = vec![0u8; len];
            assert_eq!(decode(&encode(&payload)).unwrap(), payload);
        }
        let payload = "0".repeat(62);
        let encoded = encode(payload.as_bytes());
        assert!(encoded.starts_with("x0cq0vps"));
        assert!(encoded.ends_with("x0c0x"));
        assert_eq!(decode(&encoded).unwrap(), payload.as_bytes());
    }

    #[test]
    fn test_check_buffer() {
        let payload = b"hello".to_vec();
        let buffer = check_buffer(&payload, None);
        assert_eq!(buffer.len(), payload.len() + 1);
        assert_eq!(&buffer[..payload.len()], payload.as_slice());
        assert_eq!(payload, b"hello");

        let buffer = check_buffer(&payload, Some(1));
        assert_eq!(buffer.len(), payload.len() + 2);
        assert_eq!(buffer[0], 1);
        assert_eq!(buffer[buffer.len() - 1], checksum(&buffer[..buffer.len() - 1]));
    }

    #[test]
    fn test_checksum_error() {
        assert_eq!(decode("v93xx00").unwrap_err(), Error::InvalidChecksum);
        assert_eq!(decode("yqzx").unwrap_err(), Error::InvalidChecksum);
        assert_eq!(decode("p0").unwrap_err(), Error::InvalidChecksum);
    }

    #[test]
    fn test_checksum_byte_flips() {
        for (payload, _) in VECTORS {
            let buffer = check_buffer(payload.as_bytes(), None);
            let last = buffer.len() - 1;
            for bit in 0..8 {
                let mut corrupted = buffer.clone();
                corrupted[last] ^= 1 << bit;
                assert_eq!(
                    decode(&base32::encode(&corrupted)).unwrap_err(),
                    Error::InvalidChecksum
                );
            }
        }
    }

    #[test]
    fn test_payload_flips() {
        let buffer = check_buffer(b"abc", None);
        // Bits whose flip leaves the top chunk of the CRC unchanged go
        // unnoticed by a single checksum byte.
        let undetected = [4, 5, 6, 7, 20, 21];
        for bit in 0..(buffer.len() - 1) * 8 {
            let mut corrupted = buffer.clone();
            corrupted[bit / 8] ^= 0x80 >> (bit % 8);
            let result = decode(&base32::encode(&corrupted));
            if undetected.contains(&bit) {
                assert_ne!(result.unwrap(), b"abc");
            } else {
                assert_eq!(result.unwrap_err(), Error::InvalidChecksum, "bit {bit}");
            }
        }
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(decode("").unwrap_err(), Error::InvalidFormat);
        assert_eq!(decode_versioned("").unwrap_err(), Error::InvalidFormat);
        // a lone checksum byte is not enough once a version is expected
        assert_eq!(decode_versioned("00").unwrap_err(), Error::InvalidFormat);
        assert_eq!(strip_checksum(vec![]).unwrap_err(), Error::InvalidFormat);
        assert_eq!(
            strip_versioned_checksum(vec![0]).unwrap_err(),
            Error::InvalidFormat
        );
    }

    #[test]
    fn test_encoding_errors() {
        for len in [1, 3, 6] {
            let encoded = "0".repeat(len);
            assert_eq!(
                decode(&encoded).unwrap_err(),
                Error::Encoding(base32::Error::InvalidLength)
            );
            assert_eq!(
                decode_versioned(&encoded).unwrap_err(),
                Error::Encoding(base32::Error::InvalidLength)
            );
        }
        assert_eq!(
            decode("v93xx0o").unwrap_err(),
            Error::Encoding(base32::Error::InvalidCharacter('o'))
        );
        assert_eq!(
            decode("₿").unwrap_err(),
            Error::Encoding(base32::Error::NonAscii)
        );
    }

    #[test]
    fn test_versioned() {
        let encoded = encode_versioned(b"", 20);
        assert_eq!(encoded, "zsx0");
        assert_eq!(decode_versioned(&encoded).unwrap(), (vec![], 20));

        let tampered = "zsxs";
        assert_eq!(tampered.len(), encoded.len());
        assert_eq!(
            decode_versioned(tampered).unwrap_err(),
            Error::InvalidChecksum
        );

        assert_eq!(encode_versioned(b"abc", 0), "0pskyccw");
        assert_eq!(encode_versioned(b"abc", 255), "laskyccq");
        assert_eq!(encode_versioned(b"hello", 1), "095x2mqvruy0");
    }

    #[test]
    fn test_versioned_roundtrip() {
        let payloads: [&[u8]; 4] = [b"", &[0; 9], b"abc", b"1234598760"];
        for payload in payloads {
            for version in 0..=u8::MAX {
                let encoded = encode_versioned(payload, version);
                assert_eq!(
                    decode_versioned(&encoded).unwrap(),
                    (payload.to_vec(), version)
                );
            }
        }
    }

    #[test]
    fn test_version_is_covered() {
        let mut buffer = check_buffer(b"abc", Some(0));
        buffer[0] = 0x80;
        assert_eq!(
            strip_versioned_checksum(buffer).unwrap_err(),
            Error::InvalidChecksum
        );
    }

    #[test]
    fn test_unversioned_read_of_versioned() {
        // The checksum covers the whole body in both variants, so an
        // unversioned read keeps the version byte as part of the payload.
        let encoded = encode_versioned(b"abc", 0);
        assert_eq!(decode(&encoded).unwrap(), b"\x00abc");
    }

    #[test]
    fn test_prefixed() {
        assert_eq!(encode_prefixed(b""), "i00");
        assert_eq!(encode_prefixed(b"abc"), format!("{PREFIX}{}", encode(b"abc")));
        assert_eq!(decode_prefixed("iv93xx0c").unwrap(), b"abc");
        assert_eq!(decode_prefixed("v93xx0c").unwrap_err(), Error::InvalidPrefix);
        assert_eq!(decode_prefixed("").unwrap_err(), Error::InvalidPrefix);
        assert_eq!(decode_prefixed("i").unwrap_err(), Error::InvalidFormat);
        assert_eq!(decode_prefixed("iv93xx00").unwrap_err(), Error::InvalidChecksum);
    }

    #[test]
    fn test_deterministic() {
        let payload = b"abcdefghijklmnopqrstuvwxyz";
        assert_eq!(encode(payload), encode(payload));
        assert_eq!(check_buffer(payload, Some(7)), check_buffer(payload, Some(7)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::InvalidChecksum.to_string(), "checksum error");
        assert_eq!(
            Error::InvalidFormat.to_string(),
            "invalid format: checksum byte missing"
        );
        assert_eq!(
            Error::from(base32::Error::InvalidCharacter('o')).to_string(),
            "invalid base32 character 'o'"
        );
    }
}
