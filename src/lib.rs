//! `base32check` check-encodes binary payloads: a one-byte checksum derived
//! from the payload's CRC32 is appended and the result is rendered in a
//! human-typable base32 alphabet. Decoding verifies the checksum, so typos and
//! corruption are rejected instead of producing a wrong payload.
//!
//! # Encode binary data
//! ```
//! let encoded = base32check::encode(b"abc");
//! assert_eq!(encoded, "v93xx0c");
//! assert_eq!(base32check::decode(&encoded).unwrap(), b"abc");
//! ```
//!
//! # Carry a version byte
//!
//! The version byte is covered by the checksum as well.
//! ```
//! let encoded = base32check::encode_versioned(b"abc", 0);
//! assert_eq!(encoded, "0pskyccw");
//! assert_eq!(
//!     base32check::decode_versioned(&encoded).unwrap(),
//!     (b"abc".to_vec(), 0)
//! );
//! ```
//!
//! # Detect corruption
//! ```
//! use base32check::Error;
//! assert_eq!(base32check::decode("v93xx00").unwrap_err(), Error::InvalidChecksum);
//! assert_eq!(base32check::decode("").unwrap_err(), Error::InvalidFormat);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod base32;
pub mod check;
pub mod checksum;

pub use self::check::decode;
pub use self::check::decode_prefixed;
pub use self::check::decode_versioned;
pub use self::check::encode;
pub use self::check::encode_prefixed;
pub use self::check::encode_versioned;
pub use self::check::Error;

#[must_use]
pub fn crc32() -> crc::Crc<u32> {
    crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC)
}
