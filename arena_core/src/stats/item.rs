//! Item stats - Scaling a base template by level, rarity and materials

use super::constants::{BASE_STATS_TARGET, BASE_STATS_TOLERANCE, MAX_MATERIALS};
use super::{MaterialModifier, StatVector};
use crate::error::ValidationError;
use crate::types::Rarity;
use serde::{Deserialize, Serialize};

/// An item type as stored in game content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Normalized stat shape, sums to 1.0
    pub base_stats: StatVector,
    /// Rarity tag as stored in content (parsed on use)
    pub rarity: String,
}

impl ItemDefinition {
    pub fn new(id: &str, name: &str, base_stats: StatVector, rarity: Rarity) -> Self {
        ItemDefinition {
            id: id.to_string(),
            name: name.to_string(),
            base_stats,
            rarity: rarity.as_str().to_string(),
        }
    }

    /// Parse the rarity tag
    pub fn rarity(&self) -> Result<Rarity, ValidationError> {
        self.rarity.parse()
    }
}

/// Check that a base template sums to 1.0 (within tolerance)
pub fn validate_base_stats(base: &StatVector) -> Result<(), ValidationError> {
    let sum = base.total();
    if (sum - BASE_STATS_TARGET).abs() > BASE_STATS_TOLERANCE {
        return Err(ValidationError::BaseStatsSum { sum });
    }
    Ok(())
}

fn validate_level(level: i32) -> Result<(), ValidationError> {
    if level < 1 {
        return Err(ValidationError::NonPositiveLevel(level));
    }
    Ok(())
}

/// Compute an item's live stats from its base template, level and materials
///
/// `result = base * level + Σ materials`, per component. No rounding is
/// applied; round for display.
///
/// Material balance is not re-checked here. Materials are validated when they
/// enter game content (see [`validate_material_modifiers`](super::validate_material_modifiers)).
pub fn compute_item_stats(
    base: &StatVector,
    level: i32,
    materials: &[MaterialModifier],
) -> Result<StatVector, ValidationError> {
    validate_level(level)?;
    validate_base_stats(base)?;
    if materials.len() > MAX_MATERIALS {
        return Err(ValidationError::TooManyMaterials {
            count: materials.len(),
            max: MAX_MATERIALS,
        });
    }

    let scaled = *base * level as f64;
    let adjustment: StatVector = materials.iter().map(|m| m.modifiers).sum();
    Ok(scaled + adjustment)
}

/// Scale a base template by rarity and level: `base * multiplier * level`
pub fn scale_base_stats(
    base: &StatVector,
    rarity: Rarity,
    level: i32,
) -> Result<StatVector, ValidationError> {
    validate_level(level)?;
    validate_base_stats(base)?;

    let multiplier = rarity.multiplier();
    Ok(base.map(|v| v * multiplier * level as f64))
}

/// Compute an item definition's stats at the given level, including its rarity
pub fn compute_item_stats_for_level(
    item: &ItemDefinition,
    level: i32,
) -> Result<StatVector, ValidationError> {
    let rarity = item.rarity()?;
    scale_base_stats(&item.base_stats, rarity, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword_base() -> StatVector {
        StatVector::new(0.5, 0.3, 0.1, 0.1)
    }

    fn material(id: &str, modifiers: StatVector) -> MaterialModifier {
        MaterialModifier::new(id, id, modifiers)
    }

    #[test]
    fn test_level_scaling() {
        let stats = compute_item_stats(&sword_base(), 10, &[]).unwrap();
        assert!(stats.approx_eq(&StatVector::new(5.0, 3.0, 1.0, 1.0), 1e-9));
    }

    #[test]
    fn test_level_one_is_template() {
        let stats = compute_item_stats(&sword_base(), 1, &[]).unwrap();
        assert_eq!(stats, sword_base());
    }

    #[test]
    fn test_materials_added_after_scaling() {
        let iron = material("iron", StatVector::new(-0.2, 0.0, 0.2, 0.0));
        let quartz = material("quartz", StatVector::new(0.0, 0.3, 0.0, -0.3));

        let stats = compute_item_stats(&sword_base(), 4, &[iron, quartz]).unwrap();
        // base * 4 = (2.0, 1.2, 0.4, 0.4)
        assert!(stats.approx_eq(&StatVector::new(1.8, 1.5, 0.6, 0.1), 1e-9));
    }

    #[test]
    fn test_materials_can_drive_component_negative() {
        let heavy = material("lead", StatVector::new(-2.0, 1.0, 1.0, 0.0));
        let stats = compute_item_stats(&sword_base(), 1, &[heavy]).unwrap();
        assert!((stats.offense_power + 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_three_materials_allowed() {
        let m = material("ash", StatVector::zero());
        assert!(compute_item_stats(&sword_base(), 1, &[m.clone(), m.clone(), m]).is_ok());
    }

    #[test]
    fn test_too_many_materials() {
        let m = material("ash", StatVector::zero());
        let result = compute_item_stats(&sword_base(), 1, &vec![m; 4]);
        assert_eq!(
            result,
            Err(ValidationError::TooManyMaterials { count: 4, max: 3 })
        );
    }

    #[test]
    fn test_non_positive_level() {
        assert_eq!(
            compute_item_stats(&sword_base(), 0, &[]),
            Err(ValidationError::NonPositiveLevel(0))
        );
        assert_eq!(
            compute_item_stats(&sword_base(), -3, &[]),
            Err(ValidationError::NonPositiveLevel(-3))
        );
    }

    #[test]
    fn test_base_sum_tolerance() {
        // 1.009 is inside the tolerance, 0.98 is not
        let loose = StatVector::new(0.509, 0.3, 0.1, 0.1);
        assert!(compute_item_stats(&loose, 1, &[]).is_ok());

        let bad = StatVector::new(0.48, 0.3, 0.1, 0.1);
        match compute_item_stats(&bad, 1, &[]) {
            Err(ValidationError::BaseStatsSum { sum }) => assert!((sum - 0.98).abs() < 1e-9),
            other => panic!("expected base sum error, got {:?}", other),
        }
    }

    #[test]
    fn test_rarity_scaling() {
        let item = ItemDefinition::new("sword", "Sword", sword_base(), Rarity::Legendary);
        let stats = compute_item_stats_for_level(&item, 3).unwrap();
        // 2.0 * 3 = 6x the template
        assert!(stats.approx_eq(&StatVector::new(3.0, 1.8, 0.6, 0.6), 1e-9));
    }

    #[test]
    fn test_common_rarity_matches_plain_scaling() {
        let item = ItemDefinition::new("sword", "Sword", sword_base(), Rarity::Common);
        for level in [1, 2, 7, 50] {
            assert_eq!(
                compute_item_stats_for_level(&item, level).unwrap(),
                compute_item_stats(&sword_base(), level, &[]).unwrap()
            );
        }
    }

    #[test]
    fn test_unknown_rarity() {
        let mut item = ItemDefinition::new("sword", "Sword", sword_base(), Rarity::Rare);
        item.rarity = "mythic".to_string();
        let err = compute_item_stats_for_level(&item, 1).unwrap_err();
        assert_eq!(err, ValidationError::InvalidRarity("mythic".to_string()));
        assert_eq!(err.to_string(), "invalid rarity: mythic");
    }

    #[test]
    fn test_rarity_path_validates_level_and_base() {
        let item = ItemDefinition::new("sword", "Sword", sword_base(), Rarity::Epic);
        assert!(matches!(
            compute_item_stats_for_level(&item, 0),
            Err(ValidationError::NonPositiveLevel(0))
        ));

        let lopsided = ItemDefinition::new("club", "Club", StatVector::new(2.0, 0.0, 0.0, 0.0), Rarity::Epic);
        assert!(matches!(
            compute_item_stats_for_level(&lopsided, 1),
            Err(ValidationError::BaseStatsSum { .. })
        ));
    }
}
