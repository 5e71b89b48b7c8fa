//! StatVector - The four-component combat stat record

use crate::types::StatKind;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Offensive and defensive power/accuracy
///
/// Components are unconstrained reals. Base templates are normalized to sum
/// to 1.0 and material modifiers to 0.0, but computed vectors (scaled by
/// level and rarity, adjusted by materials) can hold any value, including
/// negatives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatVector {
    #[serde(default)]
    pub offense_power: f64,
    #[serde(default)]
    pub offense_accuracy: f64,
    #[serde(default)]
    pub defense_power: f64,
    #[serde(default)]
    pub defense_accuracy: f64,
}

impl StatVector {
    pub fn new(
        offense_power: f64,
        offense_accuracy: f64,
        defense_power: f64,
        defense_accuracy: f64,
    ) -> Self {
        StatVector {
            offense_power,
            offense_accuracy,
            defense_power,
            defense_accuracy,
        }
    }

    /// The zero vector, used to fill unoccupied equipment slots
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::OffensePower => self.offense_power,
            StatKind::OffenseAccuracy => self.offense_accuracy,
            StatKind::DefensePower => self.defense_power,
            StatKind::DefenseAccuracy => self.defense_accuracy,
        }
    }

    pub fn set(&mut self, kind: StatKind, value: f64) {
        match kind {
            StatKind::OffensePower => self.offense_power = value,
            StatKind::OffenseAccuracy => self.offense_accuracy = value,
            StatKind::DefensePower => self.defense_power = value,
            StatKind::DefenseAccuracy => self.defense_accuracy = value,
        }
    }

    /// Sum of all four components
    pub fn total(&self) -> f64 {
        StatKind::all().iter().map(|k| self.get(*k)).sum()
    }

    /// Apply `f` to every component
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut out = *self;
        for kind in StatKind::all() {
            out.set(*kind, f(self.get(*kind)));
        }
        out
    }

    /// Round every component to `places` decimal places (for display and totals)
    pub fn rounded(&self, places: u32) -> Self {
        let factor = 10f64.powi(places as i32);
        self.map(|v| (v * factor).round() / factor)
    }

    /// Component-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: &StatVector, tolerance: f64) -> bool {
        StatKind::all()
            .iter()
            .all(|k| (self.get(*k) - other.get(*k)).abs() <= tolerance)
    }

    /// Iterate `(kind, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, f64)> + '_ {
        StatKind::all().iter().map(move |k| (*k, self.get(*k)))
    }
}

impl Add for StatVector {
    type Output = StatVector;

    fn add(self, rhs: StatVector) -> StatVector {
        StatVector {
            offense_power: self.offense_power + rhs.offense_power,
            offense_accuracy: self.offense_accuracy + rhs.offense_accuracy,
            defense_power: self.defense_power + rhs.defense_power,
            defense_accuracy: self.defense_accuracy + rhs.defense_accuracy,
        }
    }
}

impl AddAssign for StatVector {
    fn add_assign(&mut self, rhs: StatVector) {
        *self = *self + rhs;
    }
}

impl Sub for StatVector {
    type Output = StatVector;

    fn sub(self, rhs: StatVector) -> StatVector {
        StatVector {
            offense_power: self.offense_power - rhs.offense_power,
            offense_accuracy: self.offense_accuracy - rhs.offense_accuracy,
            defense_power: self.defense_power - rhs.defense_power,
            defense_accuracy: self.defense_accuracy - rhs.defense_accuracy,
        }
    }
}

impl Mul<f64> for StatVector {
    type Output = StatVector;

    fn mul(self, scalar: f64) -> StatVector {
        self.map(|v| v * scalar)
    }
}

impl Sum for StatVector {
    fn sum<I: Iterator<Item = StatVector>>(iter: I) -> StatVector {
        iter.fold(StatVector::zero(), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a StatVector> for StatVector {
    fn sum<I: Iterator<Item = &'a StatVector>>(iter: I) -> StatVector {
        iter.fold(StatVector::zero(), |acc, v| acc + *v)
    }
}
