//! Integration test: Load content -> Craft items -> Equip -> Attack -> Rate
//!
//! This test validates the full flow from content definitions to combat resolution.

use arena_core::{
    calculate_combat_rating, combat_rating_with_fallback, compute_equipment_stats,
    compute_item_stats, compute_item_stats_for_level, default_content, resolve_attack,
    resolve_random_attack, EquipmentSlot, EquippedItem, HitZone, RatingAuthority, RatingError,
    RatingSource, StatVector, ValidationError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Rating service stand-in that is always down
struct OfflineRatings;

impl RatingAuthority for OfflineRatings {
    fn combat_rating(&self, _: f64, _: f64, _: f64) -> Result<f64, RatingError> {
        Err(RatingError::Unavailable("maintenance window".to_string()))
    }
}

fn hero_loadout() -> Vec<EquippedItem> {
    let content = default_content();

    // Crafted weapon: level scaling plus materials
    let sword = content.item("iron_sword").expect("bundled item");
    let steel = content.materials_by_id(&["tempered_steel"]).expect("bundled material");
    let weapon = compute_item_stats(&sword.base_stats, 10, &steel).expect("valid craft");

    let mut loadout = vec![EquippedItem::new(EquipmentSlot::Weapon, weapon, 10)];

    // Found gear: level and rarity scaling
    let found = [
        (EquipmentSlot::Offhand, "oak_buckler", 8),
        (EquipmentSlot::Head, "leather_cap", 6),
        (EquipmentSlot::Armor, "chain_hauberk", 9),
    ];
    for (slot, item_id, level) in found {
        let item = content.item(item_id).expect("bundled item");
        let stats = compute_item_stats_for_level(item, level).expect("valid item");
        loadout.push(EquippedItem::new(slot, stats, level));
    }

    loadout
}

#[test]
fn test_full_encounter_flow() {
    let content = default_content();
    let loadout = hero_loadout();
    let equipment = compute_equipment_stats(&loadout).unwrap();

    assert_eq!(equipment.equipped_count, 4);
    assert_eq!(equipment.total_level, 33);
    assert_eq!(equipment.per_slot_contribution.len(), 8);
    assert_eq!(equipment.slot(EquipmentSlot::Pet), StatVector::zero());

    // Iron sword (common) at level 10 + tempered steel: 5.5 + 0.3 offense power
    let weapon = equipment.slot(EquipmentSlot::Weapon);
    assert!((weapon.offense_power - 5.8).abs() < 1e-9);

    let enemy = StatVector::new(8.0, 4.0, 2.0, 3.0);
    let bands = content.encounter("training_yard").unwrap().bands;
    let mut rng = StdRng::seed_from_u64(1234);

    let hit = resolve_attack(&equipment.total_stats, &enemy, 200.0, &bands, &mut rng);
    assert_eq!(hit.zone, HitZone::Normal);
    let expected = (equipment.total_stats.offense_power - enemy.defense_power).round() as i64;
    assert_eq!(hit.applied_damage, expected.max(1));

    let miss = resolve_attack(&equipment.total_stats, &enemy, 31.0, &bands, &mut rng);
    assert_eq!(miss.zone, HitZone::Miss);
    assert_eq!(miss.applied_damage, 0);

    for _ in 0..50 {
        let result = resolve_random_attack(&equipment.total_stats, &enemy, &bands, &mut rng);
        assert!(result.outcome.damage >= 1);
    }

    let rating = combat_rating_with_fallback(
        &OfflineRatings,
        equipment.total_stats.offense_power,
        equipment.total_stats.defense_power,
        100.0,
    );
    assert_eq!(rating.source, RatingSource::Fallback);
    assert_eq!(
        rating.value,
        calculate_combat_rating(
            equipment.total_stats.offense_power,
            equipment.total_stats.defense_power,
            100.0
        )
    );
}

#[test]
fn test_equipment_limits() {
    let mut loadout: Vec<EquippedItem> = EquipmentSlot::all()
        .iter()
        .map(|slot| EquippedItem::new(*slot, StatVector::new(1.0, 1.0, 1.0, 1.0), 1))
        .collect();
    assert!(compute_equipment_stats(&loadout).is_ok());

    loadout.push(EquippedItem::new(EquipmentSlot::Pet, StatVector::zero(), 1));
    assert!(matches!(
        compute_equipment_stats(&loadout),
        Err(ValidationError::TooManyEquipped { count: 9, .. })
    ));

    let pair = vec![
        EquippedItem::new(EquipmentSlot::Feet, StatVector::zero(), 1),
        EquippedItem::new(EquipmentSlot::Feet, StatVector::zero(), 1),
    ];
    assert!(matches!(
        compute_equipment_stats(&pair),
        Err(ValidationError::DuplicateSlot(EquipmentSlot::Feet))
    ));
}

#[test]
fn test_encounter_bands_change_outcome() {
    let content = default_content();
    let yard = content.encounter("training_yard").unwrap().bands;
    let wisp = content.encounter("shadow_wisp").unwrap().bands;
    let attacker = StatVector::new(50.0, 0.0, 0.0, 0.0);
    let defender = StatVector::zero();
    let mut rng = StdRng::seed_from_u64(0);

    // 100° grazes in the yard but misses the wisp
    let yard_hit = resolve_attack(&attacker, &defender, 100.0, &yard, &mut rng);
    let wisp_hit = resolve_attack(&attacker, &defender, 100.0, &wisp, &mut rng);
    assert_eq!(yard_hit.zone, HitZone::Graze);
    assert_eq!(wisp_hit.zone, HitZone::Miss);
}
