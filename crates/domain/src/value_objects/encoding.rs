//! Output formats for byte strings and UUIDs.

use std::fmt;
use std::str::FromStr;

use crate::error::GenerationError;

/// Text encoding applied to raw random bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteEncoding {
    /// Lowercase hexadecimal, two characters per byte
    Hex,
    /// Standard alphabet base64 with padding
    Base64,
}

impl ByteEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }
}

impl FromStr for ByteEncoding {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            other => Err(GenerationError::InvalidEncoding(other.to_string())),
        }
    }
}

impl fmt::Display for ByteEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Textual layout of a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UuidFormat {
    /// Hyphenated 8-4-4-4-12 groups
    Standard,
    /// 32 hex digits, no hyphens
    Compact,
}

impl UuidFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Compact => "compact",
        }
    }
}

impl FromStr for UuidFormat {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "compact" => Ok(Self::Compact),
            other => Err(GenerationError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for UuidFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
