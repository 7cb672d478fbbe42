//! Derive the single checksum byte of a check-encoded buffer.
//!
//! The CRC32 of the input is written as a LEB128 varint and the last byte of
//! that varint is the checksum. This is not `crc32 % 256`: the last varint byte
//! holds the most significant non-zero seven-bit chunk of the CRC.
//!
//! ```
//! use base32check::checksum::checksum;
//! assert_eq!(checksum(b""), 0x00);
//! assert_eq!(checksum(b"abc"), 0x03);
//! ```

/// Maximum length of a varint-encoded `u32`.
pub const MAX_VARINT_LEN: usize = 5;

/// Encodes `value` as a little-endian base-128 varint.
///
/// Returns the buffer together with the number of bytes used.
///
/// ```
/// use base32check::checksum::encode_varint;
/// let (buf, len) = encode_varint(300);
/// assert_eq!(&buf[..len], &[0xac, 0x02]);
/// ```
#[must_use]
pub fn encode_varint(mut value: u32) -> ([u8; MAX_VARINT_LEN], usize) {
    let mut buf = [0; MAX_VARINT_LEN];
    let mut len = 0;
    while value > 0x7f {
        buf[len] = 0x80 | (value & 0x7f) as u8;
        value >>= 7;
        len += 1;
    }
    buf[len] = value as u8;
    (buf, len + 1)
}

/// Computes the checksum byte of `input`.
#[must_use]
pub fn checksum(input: &[u8]) -> u8 {
    let (buf, len) = encode_varint(crate::crc32().checksum(input));
    buf[len - 1]
}
