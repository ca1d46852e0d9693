use std::cmp::Ordering;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Tag used for unreachable entries in serialized payloads.
pub const UNREACHABLE_TAG: &str = "unreachable";

/// Shortest distance between two vertices.
///
/// Unreachable pairs are an explicit variant rather than an infinite float, so
/// arithmetic on tentative distances can never leak into caller-visible values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// A finite path length.
    Finite(f64),
    /// No path exists.
    Unreachable,
}

impl Distance {
    /// Converts a tentative distance, where `+inf` marks "not reached yet".
    pub fn from_tentative(value: f64) -> Self {
        if value.is_finite() {
            Distance::Finite(value)
        } else {
            Distance::Unreachable
        }
    }

    /// Returns the finite length, or `None` when unreachable.
    pub fn finite(self) -> Option<f64> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Unreachable => None,
        }
    }

    /// Returns whether a path exists.
    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.partial_cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Some(Ordering::Less),
            (Distance::Unreachable, Distance::Finite(_)) => Some(Ordering::Greater),
            (Distance::Unreachable, Distance::Unreachable) => Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{value}"),
            Distance::Unreachable => f.write_str(UNREACHABLE_TAG),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(value) => serializer.serialize_f64(*value),
            Distance::Unreachable => serializer.serialize_str(UNREACHABLE_TAG),
        }
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistanceVisitor;

        impl<'de> Visitor<'de> for DistanceVisitor {
            type Value = Distance;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a finite number or the string \"{UNREACHABLE_TAG}\"")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Distance, E> {
                if value.is_finite() {
                    Ok(Distance::Finite(value))
                } else {
                    Err(E::custom("distance must be finite"))
                }
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Distance, E> {
                Ok(Distance::Finite(value as f64))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Distance, E> {
                Ok(Distance::Finite(value as f64))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Distance, E> {
                if value == UNREACHABLE_TAG {
                    Ok(Distance::Unreachable)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(DistanceVisitor)
    }
}
