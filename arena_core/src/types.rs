//! Core enums shared by the stats and combat engines

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four components of a stat vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    OffensePower,
    OffenseAccuracy,
    DefensePower,
    DefenseAccuracy,
}

impl StatKind {
    /// Get all stat kinds in display order
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::OffensePower,
            StatKind::OffenseAccuracy,
            StatKind::DefensePower,
            StatKind::DefenseAccuracy,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::OffensePower => "offense_power",
            StatKind::OffenseAccuracy => "offense_accuracy",
            StatKind::DefensePower => "defense_power",
            StatKind::DefenseAccuracy => "defense_accuracy",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equipment slot for gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipmentSlot {
    #[serde(rename = "weapon")]
    Weapon,
    #[serde(rename = "offhand")]
    Offhand,
    #[serde(rename = "head")]
    Head,
    #[serde(rename = "armor")]
    Armor,
    #[serde(rename = "feet")]
    Feet,
    #[serde(rename = "accessory_1")]
    Accessory1,
    #[serde(rename = "accessory_2")]
    Accessory2,
    #[serde(rename = "pet")]
    Pet,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Weapon,
            EquipmentSlot::Offhand,
            EquipmentSlot::Head,
            EquipmentSlot::Armor,
            EquipmentSlot::Feet,
            EquipmentSlot::Accessory1,
            EquipmentSlot::Accessory2,
            EquipmentSlot::Pet,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Offhand => "offhand",
            EquipmentSlot::Head => "head",
            EquipmentSlot::Armor => "armor",
            EquipmentSlot::Feet => "feet",
            EquipmentSlot::Accessory1 => "accessory_1",
            EquipmentSlot::Accessory2 => "accessory_2",
            EquipmentSlot::Pet => "pet",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentSlot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentSlot::all()
            .iter()
            .copied()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidSlot(s.to_string()))
    }
}

/// Item rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Rarity → stat multiplier
const RARITY_MULTIPLIERS: [(Rarity, f64); 5] = [
    (Rarity::Common, 1.0),
    (Rarity::Uncommon, 1.25),
    (Rarity::Rare, 1.5),
    (Rarity::Epic, 1.75),
    (Rarity::Legendary, 2.0),
];

impl Rarity {
    /// Get all rarities from lowest to highest tier
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
    }

    /// Scalar applied to an item's base stats
    pub fn multiplier(&self) -> f64 {
        RARITY_MULTIPLIERS[*self as usize].1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::all()
            .iter()
            .copied()
            .find(|rarity| rarity.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidRarity(s.to_string()))
    }
}

/// Outcome category of an attack, selected by where the aim angle lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitZone {
    Injure,
    Miss,
    Graze,
    Normal,
    Crit,
}

/// Hit zone → damage multiplier
const HIT_ZONE_MULTIPLIERS: [(HitZone, f64); 5] = [
    (HitZone::Injure, -0.5),
    (HitZone::Miss, 0.0),
    (HitZone::Graze, 0.6),
    (HitZone::Normal, 1.0),
    (HitZone::Crit, 1.6),
];

impl HitZone {
    /// Get all zones in band visitation order
    pub fn all() -> &'static [HitZone] {
        &[
            HitZone::Injure,
            HitZone::Miss,
            HitZone::Graze,
            HitZone::Normal,
            HitZone::Crit,
        ]
    }

    /// Base damage multiplier for this zone
    pub fn multiplier(&self) -> f64 {
        HIT_ZONE_MULTIPLIERS[*self as usize].1
    }

    /// Whether the attack connected with the defender
    pub fn is_hit(&self) -> bool {
        matches!(self, HitZone::Graze | HitZone::Normal | HitZone::Crit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HitZone::Injure => "injure",
            HitZone::Miss => "miss",
            HitZone::Graze => "graze",
            HitZone::Normal => "normal",
            HitZone::Crit => "crit",
        }
    }
}

impl fmt::Display for HitZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
