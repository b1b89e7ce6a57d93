//! Character pools for random string generation.

use std::fmt;
use std::str::FromStr;

use crate::error::GenerationError;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const ALPHABETIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const NUMERIC: &[u8] = b"0123456789";
const HEX: &[u8] = b"0123456789abcdef";
const BASE64: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Printable ASCII from `!` (33) to `~` (126). Space is excluded.
const ASCII_PRINTABLE: [u8; 94] = {
    let mut pool = [0u8; 94];
    let mut i = 0;
    while i < pool.len() {
        pool[i] = 33 + i as u8;
        i += 1;
    }
    pool
};

/// Named character pool a random string is sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Alphanumeric,
    Alphabetic,
    Numeric,
    Hex,
    Base64,
    AsciiPrintable,
}

impl Charset {
    pub const ALL: [Charset; 6] = [
        Charset::Alphanumeric,
        Charset::Alphabetic,
        Charset::Numeric,
        Charset::Hex,
        Charset::Base64,
        Charset::AsciiPrintable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alphanumeric => "alphanumeric",
            Self::Alphabetic => "alphabetic",
            Self::Numeric => "numeric",
            Self::Hex => "hex",
            Self::Base64 => "base64",
            Self::AsciiPrintable => "ascii_printable",
        }
    }

    /// The characters of this pool. Every entry is a single-byte ASCII character.
    pub fn pool(&self) -> &'static [u8] {
        match self {
            Self::Alphanumeric => ALPHANUMERIC,
            Self::Alphabetic => ALPHABETIC,
            Self::Numeric => NUMERIC,
            Self::Hex => HEX,
            Self::Base64 => BASE64,
            Self::AsciiPrintable => &ASCII_PRINTABLE,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.pool().contains(&(c as u8))
    }
}

impl FromStr for Charset {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|charset| charset.as_str() == s)
            .ok_or_else(|| GenerationError::InvalidCharset(s.to_string()))
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(Charset::Alphanumeric.pool().len(), 62);
        assert_eq!(Charset::Alphabetic.pool().len(), 52);
        assert_eq!(Charset::Numeric.pool().len(), 10);
        assert_eq!(Charset::Hex.pool().len(), 16);
        assert_eq!(Charset::Base64.pool().len(), 64);
        assert_eq!(Charset::AsciiPrintable.pool().len(), 94);
    }

    #[test]
    fn test_ascii_printable_excludes_space() {
        let pool = Charset::AsciiPrintable.pool();
        assert_eq!(pool.first(), Some(&b'!'));
        assert_eq!(pool.last(), Some(&b'~'));
        assert!(!Charset::AsciiPrintable.contains(' '));
        assert!(Charset::AsciiPrintable.contains('"'));
    }

    #[test]
    fn test_pools_have_no_repeats() {
        for charset in Charset::ALL {
            let mut chars = charset.pool().to_vec();
            chars.sort_unstable();
            chars.dedup();
            assert_eq!(chars.len(), charset.pool().len(), "{charset} repeats a character");
        }
    }

    #[test]
    fn test_parse_round_trips_names() {
        for charset in Charset::ALL {
            assert_eq!(charset.as_str().parse::<Charset>(), Ok(charset));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "Alphanumeric".parse::<Charset>(),
            Err(GenerationError::InvalidCharset("Alphanumeric".into()))
        );
    }

    #[test]
    fn test_hex_pool_is_lowercase() {
        assert!(Charset::Hex.contains('f'));
        assert!(!Charset::Hex.contains('F'));
    }
}
