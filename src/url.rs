use std::io;
use std::io::prelude::*;

use crate::error::DecodeError;

const SPACE: u8 = 32;
const PERCENT: u8 = 37;
const PLUS: u8 = 43;
const ZERO: u8 = 48;
const NINE: u8 = 57;
const UA: u8 = 65;
const UF: u8 = 70;
const LA: u8 = 97;
const LF: u8 = 102;

/// ASCII hex digit, either case.
pub fn is_hex_digit(x: u8) -> bool {
	matches!(x, ZERO..=NINE | UA..=UF | LA..=LF)
}

fn nibble(x: u8) -> Result<u8, DecodeError> {
	match x {
		ZERO..=NINE => Ok(x - ZERO),
		UA..=UF => Ok(x - UA + 10),
		LA..=LF => Ok(x - LA + 10),
		_ => Err(DecodeError::InvalidHexDigit(x)),
	}
}

/// Combines two hex digits into one byte, high nibble first.
///
/// Fails on the first byte that is not a hex digit.
pub fn hex_to_byte(high: u8, low: u8) -> Result<u8, DecodeError> {
	Ok((nibble(high)? << 4) | nibble(low)?)
}

/// Reads the two hex digits following a `%` from a stream.
///
/// A short read is reported as `UnexpectedEof`. A non-hex byte is reported
/// as `InvalidData` carrying the `DecodeError`.
pub fn read_hex_pair<R: Read>(reader: &mut R) -> io::Result<u8> {
	let mut pair = [0u8; 2];
	reader.read_exact(&mut pair)?;
	hex_to_byte(pair[0], pair[1]).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn escape_at(str: &[u8], pos: usize) -> Option<u8> {
	match str.get(pos + 1..pos + 3) {
		Some(&[high, low]) if is_hex_digit(high) && is_hex_digit(low) => hex_to_byte(high, low).ok(),
		_ => None,
	}
}

/// Percent-decodes `str`.
///
/// `+` becomes a space and `%XX` becomes the byte it names. A `%` that is not
/// followed by two hex digits is copied as-is, and scanning resumes right
/// after it. Literal spaces are dropped; only `+` yields a space. Existing
/// callers depend on this, so check with them before changing it.
///
/// Never fails and never reads past the end of `str`.
pub fn decode_percent(str: &[u8]) -> Vec<u8> {
	let mut result: Vec<u8> = Vec::with_capacity(str.len());
	let mut pos = 0;
	while pos < str.len() {
		match str[pos] {
			SPACE => {},
			PLUS => { result.push(SPACE); },
			PERCENT => {
				match escape_at(str, pos) {
					Some(x) => {
						result.push(x);
						pos += 2;
					},
					None => {
						tracing::trace!(offset = pos, "malformed percent escape, copied literally");
						result.push(PERCENT);
					},
				}
			},
			x => { result.push(x); },
		}
		pos += 1;
	}
	result
}

/// Percent-decodes anything byte-like. See [`decode_percent`].
pub fn decode<T: AsRef<[u8]>>(input: T) -> Vec<u8> {
	decode_percent(input.as_ref())
}
