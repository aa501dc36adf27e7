/// Errors from the strict hex-pair conversion.
///
/// `decode` never returns this: malformed escapes are copied literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
	#[error("invalid hex digit: {:?}", as_char(.0))]
	InvalidHexDigit(u8),
}

fn as_char(b: &u8) -> char {
	char::from(*b)
}
