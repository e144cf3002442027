/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Serde adapter for optional timestamps carried as epoch seconds.
//!
//! Whole seconds are written as integers. Fractional values are written as floats with
//! millisecond precision, and fractions read off the wire are rounded to the nearest
//! millisecond.
//!
//! ```
//! # use serde::{Deserialize, Serialize};
//! use smithy_types::Instant;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Job {
//!     #[serde(default, with = "smithy_types::instant::epoch_seconds")]
//!     created_on: Option<Instant>,
//! }
//! ```

use crate::Instant;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use std::fmt;

const MILLIS_PER_SECOND: i64 = 1000;
const NANOS_PER_MILLI: u32 = 1_000_000;

pub fn serialize<S>(value: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        None => serializer.serialize_none(),
        Some(instant) if !instant.has_nanos() => serializer.serialize_i64(instant.epoch_seconds()),
        Some(instant) => {
            serializer.serialize_f64(instant.epoch_millis() as f64 / MILLIS_PER_SECOND as f64)
        }
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionalEpochSecondsVisitor)
}

/// Rounds fractional epoch seconds to the nearest millisecond.
fn from_fractional_epoch_seconds(value: f64) -> Instant {
    let mut seconds = value.floor();
    let mut millis = ((value - seconds) * MILLIS_PER_SECOND as f64).round() as i64;
    if millis >= MILLIS_PER_SECOND {
        seconds += 1.0;
        millis = 0;
    }
    Instant::from_secs_and_nanos(seconds as i64, millis as u32 * NANOS_PER_MILLI)
}

struct OptionalEpochSecondsVisitor;

impl<'de> Visitor<'de> for OptionalEpochSecondsVisitor {
    type Value = Option<Instant>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("epoch seconds or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_f64(EpochSecondsVisitor).map(Some)
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number of seconds since the Unix epoch")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Instant::from_epoch_seconds(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value)
            .map(Instant::from_epoch_seconds)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if !value.is_finite() {
            return Err(E::invalid_value(de::Unexpected::Float(value), &self));
        }
        Ok(from_fractional_epoch_seconds(value))
    }
}
