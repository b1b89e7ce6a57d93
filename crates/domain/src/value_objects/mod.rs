//! Value objects - Immutable objects defined by their attributes

pub mod bounds;
mod charset;
mod encoding;
mod unit;

pub use bounds::Bounds;
pub use charset::Charset;
pub use encoding::{ByteEncoding, UuidFormat};
pub use unit::{unit_from_bits, UNIT_BITS};
