//! Game content loading - item templates, materials and encounter bands

use super::ConfigError;
use crate::combat::HitBands;
use crate::stats::{validate_base_stats, validate_material_modifiers, ItemDefinition, MaterialModifier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Hit-zone layout for a specific encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bands: HitBands,
}

/// Container for all loaded game content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
    #[serde(default)]
    pub materials: Vec<MaterialModifier>,
    #[serde(default)]
    pub encounters: Vec<EncounterConfig>,
}

impl ContentConfig {
    /// Check every definition before it is accepted as game content
    ///
    /// - item base templates sum to ~1.0 and carry a known rarity
    /// - every material's modifiers sum to ~0.0
    /// - ids are unique within each section
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unique("item", self.items.iter().map(|i| i.id.as_str()))?;
        check_unique("material", self.materials.iter().map(|m| m.id.as_str()))?;
        check_unique("encounter", self.encounters.iter().map(|e| e.id.as_str()))?;

        for item in &self.items {
            validate_base_stats(&item.base_stats)
                .and_then(|_| item.rarity().map(|_| ()))
                .map_err(|source| ConfigError::InvalidItem {
                    id: item.id.clone(),
                    source,
                })?;
        }

        validate_material_modifiers(&self.materials)?;
        Ok(())
    }

    pub fn item(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn material(&self, id: &str) -> Option<&MaterialModifier> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn encounter(&self, id: &str) -> Option<&EncounterConfig> {
        self.encounters.iter().find(|e| e.id == id)
    }

    /// Look up several materials by id, failing on the first unknown one
    pub fn materials_by_id(&self, ids: &[&str]) -> Result<Vec<MaterialModifier>, ConfigError> {
        ids.iter()
            .map(|id| {
                self.material(id).cloned().ok_or_else(|| ConfigError::UnknownId {
                    kind: "material",
                    id: id.to_string(),
                })
            })
            .collect()
    }
}

fn check_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Load and validate content from a TOML file
pub fn load_content(path: &Path) -> Result<ContentConfig, ConfigError> {
    let content: ContentConfig = super::load_toml(path)?;
    content.validate()?;
    tracing::info!(
        path = %path.display(),
        items = content.items.len(),
        materials = content.materials.len(),
        encounters = content.encounters.len(),
        "loaded game content"
    );
    Ok(content)
}

/// Parse and validate content from a TOML string
pub fn parse_content(toml: &str) -> Result<ContentConfig, ConfigError> {
    let content: ContentConfig = super::parse_toml(toml)?;
    content.validate()?;
    Ok(content)
}

/// Get the bundled default content
pub fn default_content() -> ContentConfig {
    let toml = include_str!("../../config/content.toml");
    parse_content(toml).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "bundled content failed to load");
        ContentConfig::default()
    })
}
