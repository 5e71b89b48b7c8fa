//! Material modifiers - Zero-sum stat adjustments from crafting materials

use super::constants::MATERIAL_TOLERANCE;
use super::StatVector;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A crafting material's adjustment to an item's stats
///
/// A material moves power between components without adding any: its
/// modifier vector sums to zero (within tolerance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialModifier {
    /// Unique identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Per-component adjustment
    pub modifiers: StatVector,
}

impl MaterialModifier {
    pub fn new(id: &str, name: &str, modifiers: StatVector) -> Self {
        MaterialModifier {
            id: id.to_string(),
            name: name.to_string(),
            modifiers,
        }
    }

    /// Net change this material applies (zero for a balanced material)
    pub fn imbalance(&self) -> f64 {
        self.modifiers.total()
    }

    /// Check that this material's modifiers sum to zero
    pub fn validate(&self) -> Result<(), ValidationError> {
        let sum = self.imbalance();
        if sum.abs() > MATERIAL_TOLERANCE {
            return Err(ValidationError::UnbalancedMaterial {
                material: self.id.clone(),
                sum,
            });
        }
        Ok(())
    }
}

/// Validate a set of materials before they are accepted into game content
///
/// Each material is checked on its own. There is no check on the combined
/// total: balanced materials stay balanced when summed.
pub fn validate_material_modifiers(materials: &[MaterialModifier]) -> Result<(), ValidationError> {
    for material in materials {
        material.validate()?;
    }
    Ok(())
}
