//! Mapping raw random bits onto the unit interval.

/// Number of mantissa bits in an `f64`, plus the implicit leading bit.
pub const UNIT_BITS: u32 = 53;

/// Map 64 random bits to a uniform `f64` in `[0, 1)`.
///
/// Only the top 53 bits are used, so every result is an exact multiple of
/// 2^-53 and 1.0 is never produced.
pub fn unit_from_bits(bits: u64) -> f64 {
    (bits >> (64 - UNIT_BITS)) as f64 / (1u64 << UNIT_BITS) as f64
}
