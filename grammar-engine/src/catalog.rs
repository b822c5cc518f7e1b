//! Read-only reference catalog of grammar groups and units.
//!
//! The built-in catalog is embedded at compile time and parsed once per
//! process. Nothing in the engine mutates a catalog after it is built.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use crate::{Aspect, Tense, Voice};

static BUILTIN_GROUPS: &str = include_str!("../data/groups.json");
static BUILTIN_UNITS: &str = include_str!("../data/units.json");

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog = Catalog::from_json(BUILTIN_GROUPS, BUILTIN_UNITS)
        .expect("built-in grammar catalog should be valid");
    log::info!(
        "Loaded built-in grammar catalog: {} groups, {} units",
        catalog.groups.len(),
        catalog.units.len()
    );
    catalog
});

#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct Group {
    pub id: u32,
    pub code: String,
    pub vi: String,
    pub en: String,
}

/// Grammatical settings a unit pins when it is selected.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct UnitTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tense: Option<Tense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<Aspect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub near_future: Option<bool>,
}

#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct GrammarUnit {
    pub id: String,
    pub group_id: u32,
    pub vi: String,
    pub en: String,
    #[serde(default)]
    pub tags: UnitTags,
    #[serde(default, rename = "canonKey")]
    pub canon_key: String,
    #[serde(default, rename = "coreRef")]
    pub core_ref: String,
    #[serde(default = "applicable_by_default")]
    pub applicable: bool,
}

fn applicable_by_default() -> bool {
    true
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog JSON")]
    Json(#[from] serde_json::Error),

    #[error("Unit id {0:?} appears more than once")]
    DuplicateUnit(String),

    #[error("Unit {unit:?} refers to unknown group {group_id}")]
    UnknownGroup { unit: String, group_id: u32 },
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    groups: Vec<Group>,
    units: Vec<GrammarUnit>,
    unit_index: FxHashMap<String, usize>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn new(groups: Vec<Group>, units: Vec<GrammarUnit>) -> Result<Self, CatalogError> {
        let mut unit_index = FxHashMap::default();
        for (i, unit) in units.iter().enumerate() {
            if !groups.iter().any(|group| group.id == unit.group_id) {
                return Err(CatalogError::UnknownGroup {
                    unit: unit.id.clone(),
                    group_id: unit.group_id,
                });
            }
            if unit_index.insert(unit.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateUnit(unit.id.clone()));
            }
        }

        Ok(Self {
            groups,
            units,
            unit_index,
        })
    }

    /// Build a catalog from two JSON arrays (groups, then units).
    pub fn from_json(groups_json: &str, units_json: &str) -> Result<Self, CatalogError> {
        let groups: Vec<Group> = serde_json::from_str(groups_json)?;
        let units: Vec<GrammarUnit> = serde_json::from_str(units_json)?;
        Self::new(groups, units)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn units(&self) -> &[GrammarUnit] {
        &self.units
    }

    pub fn find_group(&self, id: u32) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == id)
    }

    pub fn find_unit_by_id(&self, id: &str) -> Option<&GrammarUnit> {
        self.unit_index.get(id).map(|&i| &self.units[i])
    }

    /// Units of a group, in catalog order.
    pub fn find_units_by_group(&self, group_id: u32) -> impl Iterator<Item = &GrammarUnit> {
        self.units
            .iter()
            .filter(move |unit| unit.group_id == group_id)
    }
}
