//! Lenient percent-decoding for query strings, form bodies and path segments.

pub mod error;
pub mod url;

pub use error::DecodeError;
pub use url::decode;
pub use url::decode_percent;
pub use url::hex_to_byte;
pub use url::is_hex_digit;
pub use url::read_hex_pair;
