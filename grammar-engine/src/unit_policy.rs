use crate::catalog::{Catalog, GrammarUnit};
use crate::{Flags, GrammarState, Polarity, Voice};

/// Overlay a unit's tags onto `flags`.
///
/// Tense and aspect are only replaced when the unit names them. Voice and
/// near-future are always replaced (defaulting to active / off), polarity
/// always goes back to affirmative, and the presentation toggles are kept.
pub fn apply_unit(unit: &GrammarUnit, flags: &Flags) -> Flags {
    let tags = &unit.tags;
    Flags {
        tense: tags.tense.unwrap_or(flags.tense),
        aspect: tags.aspect.unwrap_or(flags.aspect),
        voice: tags.voice.unwrap_or(Voice::Active),
        near_future: tags.near_future.unwrap_or(false),
        polarity: Polarity::Affirmative,
        ..*flags
    }
}

pub fn select_unit(state: &GrammarState, unit: &GrammarUnit) -> GrammarState {
    GrammarState {
        flags: apply_unit(unit, &state.flags),
        unit_id: Some(unit.id.clone()),
        ..state.clone()
    }
}

/// Selecting a group selects its first unit. An empty (or unknown) group
/// clears the unit and leaves the flags alone.
pub fn select_group(state: &GrammarState, catalog: &Catalog, group_id: u32) -> GrammarState {
    match catalog.find_units_by_group(group_id).next() {
        Some(unit) => select_unit(state, unit),
        None => {
            log::debug!("group {group_id} has no units");
            GrammarState {
                unit_id: None,
                ..state.clone()
            }
        }
    }
}
