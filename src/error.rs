//! Error types
//!
//! The tick itself cannot fail; these cover the few places where outside data
//! comes in (settings JSON, custom spawn tables).

use std::fmt;

use crate::sim::CollectibleKind;

/// Settings could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// JSON was malformed or had the wrong shape
    Parse(String),
    /// Settings file could not be read (native only)
    Io(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid settings JSON: {msg}"),
            Self::Io(msg) => write!(f, "cannot read settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// A spawn weight table was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnTableError {
    Empty,
    InvalidWeight { kind: CollectibleKind, weight: f32 },
    WeightsExceedOne { total: f32 },
}

impl fmt::Display for SpawnTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "spawn table has no entries"),
            Self::InvalidWeight { kind, weight } => {
                write!(f, "weight {weight} for {kind:?} is not a finite non-negative number")
            }
            Self::WeightsExceedOne { total } => {
                write!(f, "spawn weights sum to {total}, more than 1.0")
            }
        }
    }
}

impl std::error::Error for SpawnTableError {}
