//! Equipment aggregation - Summing equipped item stats into character totals

use super::constants::{MAX_EQUIPPED, TOTAL_STATS_DECIMALS};
use super::StatVector;
use crate::error::ValidationError;
use crate::types::EquipmentSlot;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// An item occupying an equipment slot, with its already-computed stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub slot: EquipmentSlot,
    pub stats: StatVector,
    pub level: i32,
}

impl EquippedItem {
    pub fn new(slot: EquipmentSlot, stats: StatVector, level: i32) -> Self {
        EquippedItem { slot, stats, level }
    }
}

/// Aggregated stats for a full loadout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentStats {
    /// Component-wise sum of every equipped item, rounded to 2 decimals
    pub total_stats: StatVector,
    /// One entry per slot; empty slots hold the zero vector
    pub per_slot_contribution: HashMap<EquipmentSlot, StatVector>,
    /// Number of equipped items
    pub equipped_count: usize,
    /// Sum of equipped item levels
    pub total_level: i64,
}

impl EquipmentStats {
    /// Contribution of a single slot (zero if empty)
    pub fn slot(&self, slot: EquipmentSlot) -> StatVector {
        self.per_slot_contribution
            .get(&slot)
            .copied()
            .unwrap_or_default()
    }

    /// Average level across equipped items (0 with nothing equipped)
    pub fn average_level(&self) -> f64 {
        if self.equipped_count == 0 {
            return 0.0;
        }
        self.total_level as f64 / self.equipped_count as f64
    }
}

/// Aggregate a loadout into total stats and per-slot contributions
pub fn compute_equipment_stats(equipped: &[EquippedItem]) -> Result<EquipmentStats, ValidationError> {
    if equipped.len() > MAX_EQUIPPED {
        return Err(ValidationError::TooManyEquipped {
            count: equipped.len(),
            max: MAX_EQUIPPED,
        });
    }

    let mut seen = HashSet::new();
    for item in equipped {
        if !seen.insert(item.slot) {
            return Err(ValidationError::DuplicateSlot(item.slot));
        }
    }

    let mut per_slot_contribution: HashMap<EquipmentSlot, StatVector> = EquipmentSlot::all()
        .iter()
        .map(|slot| (*slot, StatVector::zero()))
        .collect();
    for item in equipped {
        per_slot_contribution.insert(item.slot, item.stats);
    }

    let total_stats = equipped
        .iter()
        .map(|item| item.stats)
        .sum::<StatVector>()
        .rounded(TOTAL_STATS_DECIMALS);
    let total_level: i64 = equipped.iter().map(|item| item.level as i64).sum();

    tracing::debug!(
        equipped = equipped.len(),
        total_level,
        offense_power = total_stats.offense_power,
        defense_power = total_stats.defense_power,
        "aggregated equipment stats"
    );

    Ok(EquipmentStats {
        total_stats,
        per_slot_contribution,
        equipped_count: equipped.len(),
        total_level,
    })
}
