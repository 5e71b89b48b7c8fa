//! AttackResult - Outcome of resolving a single attack

use crate::types::HitZone;
use serde::{Deserialize, Serialize};

/// Output of the damage formula for one zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// Final damage, never below 1
    pub damage: i64,
    /// Zone multiplier applied to attack power
    pub base_multiplier: f64,
    /// Crit bonus roll as a fraction of attack power (0 outside crit)
    pub crit_bonus: f64,
}

/// Full result of an attack: where the aim landed and what it dealt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackResult {
    /// Sampled aim angle in degrees
    pub angle: f64,
    /// Zone the angle fell into
    pub zone: HitZone,
    /// Damage formula output
    pub outcome: DamageOutcome,
    /// Damage actually dealt to the defender.
    /// Injure and miss deal nothing; the formula's floor value is still
    /// reported in `outcome`.
    pub applied_damage: i64,
}

impl AttackResult {
    pub fn new(angle: f64, zone: HitZone, outcome: DamageOutcome) -> Self {
        let applied_damage = if zone.is_hit() { outcome.damage } else { 0 };
        AttackResult {
            angle,
            zone,
            outcome,
            applied_damage,
        }
    }

    /// Whether the attack connected
    pub fn is_hit(&self) -> bool {
        self.zone.is_hit()
    }

    pub fn is_critical(&self) -> bool {
        self.zone == HitZone::Crit
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        match self.zone {
            HitZone::Miss => format!("Miss at {:.0}°", self.angle),
            HitZone::Injure => format!("Injured at {:.0}°", self.angle),
            HitZone::Crit => format!(
                "CRIT at {:.0}°: {} damage (+{:.0}% bonus)",
                self.angle,
                self.applied_damage,
                self.outcome.crit_bonus * 100.0
            ),
            zone => format!(
                "{} at {:.0}°: {} damage",
                capitalize(zone.as_str()),
                self.angle,
                self.applied_damage
            ),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
