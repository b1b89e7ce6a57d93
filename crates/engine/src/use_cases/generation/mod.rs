//! Random value generation.
//!
//! Every operation validates its request first and only then draws from the
//! randomness port, so a rejected call consumes no entropy and produces no
//! partial output.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use serde_json::Value;

use securerand_domain::{
    unit_from_bits, BooleanRequest, ByteEncoding, BytesRequest, ChoiceRequest, FloatRequest,
    GeneratedValues, GenerationError, IntegerRequest, RandomEnvelope, ResultKind, StringRequest,
    UuidFormat, UuidRequest,
};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// Turns validated requests into random values wrapped in envelopes.
pub struct Generator {
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
}

impl Generator {
    pub fn new(random: Arc<dyn RandomPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { random, clock }
    }

    /// Uniform integers from `[min, max]`.
    pub fn integers(&self, request: &IntegerRequest) -> Result<RandomEnvelope, GenerationError> {
        let spec = request.validate()?;
        let values = (0..spec.count)
            .map(|_| self.random.gen_range(spec.min, spec.max))
            .collect();
        Ok(self.envelope(
            ResultKind::RandomIntegers,
            GeneratedValues::Integers(values),
            request,
        ))
    }

    /// Uniform floats from `[min, max)`, rounded to `precision` decimals.
    pub fn floats(&self, request: &FloatRequest) -> Result<RandomEnvelope, GenerationError> {
        let spec = request.validate()?;
        let values = (0..spec.count)
            .map(|_| spec.value_from_unit(self.unit()))
            .collect();
        Ok(self.envelope(
            ResultKind::RandomFloats,
            GeneratedValues::Floats(values),
            request,
        ))
    }

    /// `length` random bytes, encoded as one string.
    pub fn bytes(&self, request: &BytesRequest) -> Result<RandomEnvelope, GenerationError> {
        let spec = request.validate()?;
        let mut raw = vec![0u8; spec.length];
        self.random.fill_bytes(&mut raw);
        let value = match spec.encoding {
            ByteEncoding::Hex => hex::encode(&raw),
            ByteEncoding::Base64 => STANDARD.encode(&raw),
        };
        Ok(RandomEnvelope::with_value(
            ResultKind::RandomBytes,
            value,
            echo(request),
            self.clock.now(),
        ))
    }

    /// Version 4 UUIDs built from 16 random bytes each.
    pub fn uuids(&self, request: &UuidRequest) -> Result<RandomEnvelope, GenerationError> {
        let spec = request.validate()?;
        let values = (0..spec.count)
            .map(|_| {
                let mut bytes = [0u8; 16];
                self.random.fill_bytes(&mut bytes);
                // Sets the version nibble to 4 and the variant bits to 10xx
                let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
                match spec.format {
                    UuidFormat::Standard => uuid.hyphenated().to_string(),
                    UuidFormat::Compact => uuid.simple().to_string(),
                }
            })
            .collect();
        Ok(self.envelope(ResultKind::Uuids, GeneratedValues::Strings(values), request))
    }

    /// Strings whose characters are drawn independently from a charset pool.
    pub fn strings(&self, request: &StringRequest) -> Result<RandomEnvelope, GenerationError> {
        let spec = request.validate()?;
        let pool = spec.charset.pool();
        let values = (0..spec.count)
            .map(|_| {
                (0..spec.length)
                    .map(|_| char::from(pool[self.random.gen_index(pool.len())]))
                    .collect::<String>()
            })
            .collect();
        Ok(self.envelope(
            ResultKind::RandomStrings,
            GeneratedValues::Strings(values),
            request,
        ))
    }

    /// Picks from the caller's list, with or without replacement.
    ///
    /// Without replacement this runs `count` steps of a Fisher-Yates shuffle
    /// and returns the shuffled prefix, so the output order is itself random.
    pub fn choices(&self, request: &ChoiceRequest) -> Result<RandomEnvelope, GenerationError> {
        let spec = request.validate()?;
        let picks = if spec.allow_duplicates {
            (0..spec.count)
                .map(|_| spec.choices[self.random.gen_index(spec.choices.len())].clone())
                .collect()
        } else {
            let mut pool: Vec<&String> = spec.choices.iter().collect();
            for i in 0..spec.count {
                let j = i + self.random.gen_index(pool.len() - i);
                pool.swap(i, j);
            }
            pool.truncate(spec.count);
            pool.into_iter().cloned().collect()
        };
        Ok(self.envelope(
            ResultKind::RandomChoices,
            GeneratedValues::Strings(picks),
            request,
        ))
    }

    /// Booleans that are `true` with the requested probability.
    pub fn booleans(&self, request: &BooleanRequest) -> Result<RandomEnvelope, GenerationError> {
        let spec = request.validate()?;
        let values = (0..spec.count).map(|_| spec.decide(self.unit())).collect();
        Ok(self.envelope(
            ResultKind::RandomBooleans,
            GeneratedValues::Booleans(values),
            request,
        ))
    }

    fn unit(&self) -> f64 {
        unit_from_bits(self.random.next_u64())
    }

    fn envelope<P: Serialize>(
        &self,
        kind: ResultKind,
        values: GeneratedValues,
        request: &P,
    ) -> RandomEnvelope {
        RandomEnvelope::with_values(kind, values, echo(request), self.clock.now())
    }
}

/// Effective parameters as JSON for the envelope.
///
/// Requests hold only integers, finite floats, strings, booleans and string
/// lists, and `to_value` only fails on non-string map keys, so the fallback
/// is unreachable.
fn echo<P: Serialize>(request: &P) -> Value {
    serde_json::to_value(request).unwrap_or_default()
}
