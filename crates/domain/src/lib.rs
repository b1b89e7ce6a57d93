//! SecureRand Domain - core types for random value generation
//!
//! - `requests` - per-operation parameters, defaults and validation
//! - `value_objects` - charsets, encodings, bounds and unit-interval mapping
//! - `envelope` - the uniform result wrapper
//! - `error` - the caller-input error taxonomy
//!
//! Nothing in this crate draws randomness or reads the clock; the engine
//! injects both.

pub mod envelope;
pub mod error;
pub mod requests;
pub mod value_objects;

pub use envelope::{format_timestamp, GeneratedValues, RandomEnvelope, ResultKind};
pub use error::GenerationError;
pub use requests::{
    BooleanRequest, BooleanSpec, BytesRequest, BytesSpec, ChoiceRequest, ChoiceSpec,
    FloatRequest, FloatSpec, IntegerRequest, IntegerSpec, StringRequest, StringSpec,
    UuidRequest, UuidSpec,
};
pub use value_objects::{unit_from_bits, Bounds, ByteEncoding, Charset, UuidFormat};
