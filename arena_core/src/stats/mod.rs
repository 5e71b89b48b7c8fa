//! Stats engine - Item stat scaling, material validation, equipment aggregation

mod equipment;
mod item;
mod material;
mod stat_vector;

pub use equipment::{compute_equipment_stats, EquipmentStats, EquippedItem};
pub use item::{
    compute_item_stats, compute_item_stats_for_level, scale_base_stats, validate_base_stats,
    ItemDefinition,
};
pub use material::{validate_material_modifiers, MaterialModifier};
pub use stat_vector::StatVector;

/// Stat computation constants
pub mod constants {
    /// Expected component sum of a base stat template
    pub const BASE_STATS_TARGET: f64 = 1.0;

    /// Allowed deviation of a base template's sum from the target
    pub const BASE_STATS_TOLERANCE: f64 = 0.01;

    /// Allowed deviation of a material modifier's sum from zero
    pub const MATERIAL_TOLERANCE: f64 = 0.01;

    /// Maximum number of materials applied to one item
    pub const MAX_MATERIALS: usize = 3;

    /// Maximum number of equipped items (one per slot)
    pub const MAX_EQUIPPED: usize = 8;

    /// Decimal places kept in aggregated equipment totals
    pub const TOTAL_STATS_DECIMALS: u32 = 2;
}
