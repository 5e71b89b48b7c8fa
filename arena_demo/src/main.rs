//! Arena Demo - A command-line walkthrough of arena_core
//!
//! This demo shows:
//! - Loading and validating game content (items, materials, encounters)
//! - Scaling items by level and rarity, crafting with materials
//! - Aggregating a loadout into total stats
//! - Resolving seeded attacks against an encounter's hit bands
//! - Combat rating with the local fallback formula
//!
//! Usage: arena_demo [--content PATH] [--encounter ID] [--seed N] [--attacks N] [--json]

use anyhow::{anyhow, bail, Context, Result};
use arena_core::{
    combat_rating_with_fallback, compute_equipment_stats, compute_item_stats,
    compute_item_stats_for_level, default_content, load_content, resolve_random_attack,
    ContentConfig, EquipmentSlot, EquippedItem, RatingAuthority, RatingError, StatVector,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line options
struct Options {
    content: Option<PathBuf>,
    encounter: String,
    seed: u64,
    attacks: u32,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            content: None,
            encounter: "training_yard".to_string(),
            seed: 42,
            attacks: 5,
            json: false,
        }
    }
}

fn parse_args() -> Result<Options> {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--content" => {
                let path = args.next().ok_or_else(|| anyhow!("--content needs a path"))?;
                options.content = Some(PathBuf::from(path));
            }
            "--encounter" => {
                options.encounter = args.next().ok_or_else(|| anyhow!("--encounter needs an id"))?;
            }
            "--seed" => {
                let value = args.next().ok_or_else(|| anyhow!("--seed needs a number"))?;
                options.seed = value.parse().with_context(|| format!("invalid seed: {}", value))?;
            }
            "--attacks" => {
                let value = args.next().ok_or_else(|| anyhow!("--attacks needs a number"))?;
                options.attacks = value
                    .parse()
                    .with_context(|| format!("invalid attack count: {}", value))?;
            }
            "--json" => options.json = true,
            other => bail!("unknown argument: {}", other),
        }
    }

    Ok(options)
}

/// One piece of the demo loadout
struct LoadoutEntry {
    slot: EquipmentSlot,
    item_id: &'static str,
    level: i32,
    materials: &'static [&'static str],
}

/// The hero's gear. Crafted pieces (with materials) use the plain base
/// template; found pieces are scaled by their rarity.
const HERO_LOADOUT: &[LoadoutEntry] = &[
    LoadoutEntry {
        slot: EquipmentSlot::Weapon,
        item_id: "duelist_rapier",
        level: 12,
        materials: &["tempered_steel", "hawk_eye"],
    },
    LoadoutEntry {
        slot: EquipmentSlot::Offhand,
        item_id: "oak_buckler",
        level: 10,
        materials: &[],
    },
    LoadoutEntry {
        slot: EquipmentSlot::Head,
        item_id: "leather_cap",
        level: 8,
        materials: &["granite_dust"],
    },
    LoadoutEntry {
        slot: EquipmentSlot::Armor,
        item_id: "chain_hauberk",
        level: 11,
        materials: &[],
    },
    LoadoutEntry {
        slot: EquipmentSlot::Feet,
        item_id: "swift_boots",
        level: 9,
        materials: &["feather_weave"],
    },
    LoadoutEntry {
        slot: EquipmentSlot::Accessory1,
        item_id: "ember_ring",
        level: 7,
        materials: &[],
    },
    LoadoutEntry {
        slot: EquipmentSlot::Pet,
        item_id: "wolf_pup",
        level: 5,
        materials: &[],
    },
];

fn build_loadout(content: &ContentConfig) -> Result<Vec<EquippedItem>> {
    HERO_LOADOUT
        .iter()
        .map(|entry| {
            let item = content
                .item(entry.item_id)
                .ok_or_else(|| anyhow!("unknown item: {}", entry.item_id))?;

            let stats = if entry.materials.is_empty() {
                compute_item_stats_for_level(item, entry.level)?
            } else {
                let materials = content.materials_by_id(entry.materials)?;
                compute_item_stats(&item.base_stats, entry.level, &materials)?
            };

            Ok(EquippedItem::new(entry.slot, stats, entry.level))
        })
        .collect()
}

/// No rating service in the demo; always defer to the local formula
struct NoRatingService;

impl RatingAuthority for NoRatingService {
    fn combat_rating(&self, _: f64, _: f64, _: f64) -> Result<f64, RatingError> {
        Err(RatingError::Unavailable("no rating service configured".to_string()))
    }
}

fn format_stats(stats: &StatVector) -> String {
    stats
        .iter()
        .map(|(_, value)| format!("{:>8.2}", value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let options = parse_args()?;

    let content = match &options.content {
        Some(path) => load_content(path).with_context(|| format!("loading {}", path.display()))?,
        None => default_content(),
    };

    let encounter = content
        .encounter(&options.encounter)
        .ok_or_else(|| anyhow!("unknown encounter: {}", options.encounter))?;

    let loadout = build_loadout(&content)?;
    let equipment = compute_equipment_stats(&loadout)?;

    let enemy = StatVector::new(14.0, 6.0, 9.0, 4.0);
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let attacks: Vec<_> = (0..options.attacks)
        .map(|_| resolve_random_attack(&equipment.total_stats, &enemy, &encounter.bands, &mut rng))
        .collect();

    let hit_points = 100.0 + 10.0 * equipment.total_level as f64;
    let rating = combat_rating_with_fallback(
        &NoRatingService,
        equipment.total_stats.offense_power,
        equipment.total_stats.defense_power,
        hit_points,
    );

    if options.json {
        let report = serde_json::json!({
            "encounter": encounter.id,
            "equipment": equipment,
            "attacks": attacks,
            "combat_rating": rating,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Loadout ===");
    println!(
        "{:<12} {:>8} {:>8} {:>8} {:>8}",
        "slot", "off_pow", "off_acc", "def_pow", "def_acc"
    );
    for slot in EquipmentSlot::all() {
        println!("{:<12} {}", slot.as_str(), format_stats(&equipment.slot(*slot)));
    }
    println!("{:<12} {}", "TOTAL", format_stats(&equipment.total_stats));
    println!(
        "{} items equipped, total level {}",
        equipment.equipped_count, equipment.total_level
    );

    println!();
    println!("=== {} (seed {}) ===", encounter.name, options.seed);
    let mut total_dealt = 0;
    for (i, attack) in attacks.iter().enumerate() {
        println!("  #{:<2} {}", i + 1, attack.summary());
        total_dealt += attack.applied_damage;
    }
    println!("  Total dealt: {}", total_dealt);

    println!();
    println!("Combat rating: {:.0} ({:?})", rating.value, rating.source);

    Ok(())
}
