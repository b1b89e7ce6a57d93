//! Request parameter types for the seven generation operations.
//!
//! Each request is the decoded `arguments` object of a tool call, with the
//! documented defaults filled in. Numeric fields are wide signed integers so
//! that zero or negative values reach `validate()` and fail with the proper
//! domain error. `validate()` turns a request into a spec the generator can
//! draw from without further checks.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};

mod boolean;
mod bytes;
mod choice;
mod float;
mod integer;
mod string;
mod uuid;

pub use boolean::{BooleanRequest, BooleanSpec};
pub use bytes::{BytesRequest, BytesSpec};
pub use choice::{ChoiceRequest, ChoiceSpec};
pub use float::{FloatRequest, FloatSpec};
pub use integer::{IntegerRequest, IntegerSpec};
pub use string::{StringRequest, StringSpec};
pub use uuid::{UuidRequest, UuidSpec};

fn default_one() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

/// Two to the 63rd, the first `f64` past `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Decode an integer parameter, also accepting a float with no fractional
/// part (`5.0`), which some clients send for every JSON number.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct WholeNumber;

    impl<'de> Visitor<'de> for WholeNumber {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if v.fract() == 0.0 && (-I64_LIMIT..I64_LIMIT).contains(&v) {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(WholeNumber)
}
