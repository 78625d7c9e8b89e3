//! Weighted collectible selection
//!
//! Draws are resolved against cumulative bounds with a strict `draw < bound`
//! comparison, so a zero-weight entry can never be picked. A draw that falls
//! past every bound (rounding, or weights summing below 1.0) resolves to the
//! last entry.

use rand::Rng;

use super::state::CollectibleKind;
use crate::error::SpawnTableError;

/// Slack allowed when weights are summed in f32
const WEIGHT_EPSILON: f32 = 1e-4;

/// One row of the spawn table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnEntry {
    pub kind: CollectibleKind,
    pub weight: f32,
    /// Upper bound of this entry's slice of [0, 1)
    pub cumulative: f32,
}

/// Ordered rarity table
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTable {
    entries: Vec<SpawnEntry>,
    fallback: CollectibleKind,
}

impl SpawnTable {
    /// Build a table from (kind, weight) rows in draw order
    pub fn new(weights: &[(CollectibleKind, f32)]) -> Result<Self, SpawnTableError> {
        let Some(&(fallback, _)) = weights.last() else {
            return Err(SpawnTableError::Empty);
        };

        let mut cumulative = 0.0_f32;
        let mut entries = Vec::with_capacity(weights.len());
        for &(kind, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SpawnTableError::InvalidWeight { kind, weight });
            }
            cumulative += weight;
            entries.push(SpawnEntry {
                kind,
                weight,
                cumulative,
            });
        }

        if cumulative > 1.0 + WEIGHT_EPSILON {
            return Err(SpawnTableError::WeightsExceedOne { total: cumulative });
        }

        Ok(Self { entries, fallback })
    }

    /// Shell 60%, starfish 25%, pearl 10%, bubble pack 5%
    pub fn reef() -> Self {
        let rows = [
            (CollectibleKind::Shell, 0.60),
            (CollectibleKind::Starfish, 0.25),
            (CollectibleKind::Pearl, 0.10),
            (CollectibleKind::BubblePack, 0.05),
        ];
        let mut cumulative = 0.0;
        let entries = rows
            .into_iter()
            .map(|(kind, weight)| {
                cumulative += weight;
                SpawnEntry {
                    kind,
                    weight,
                    cumulative,
                }
            })
            .collect();
        Self {
            entries,
            fallback: CollectibleKind::BubblePack,
        }
    }

    pub fn entries(&self) -> &[SpawnEntry] {
        &self.entries
    }

    /// Kind chosen when a draw overshoots every bound
    pub fn fallback(&self) -> CollectibleKind {
        self.fallback
    }

    /// Resolve a uniform draw in [0, 1) to a kind
    pub fn select(&self, draw: f32) -> CollectibleKind {
        self.entries
            .iter()
            .find(|entry| draw < entry.cumulative)
            .map_or(self.fallback, |entry| entry.kind)
    }

    /// Draw a kind using `rng`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CollectibleKind {
        self.select(rng.random::<f32>())
    }
}

impl Default for SpawnTable {
    fn default() -> Self {
        Self::reef()
    }
}
