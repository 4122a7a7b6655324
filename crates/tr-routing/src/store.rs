//! The `DestinationStore`: destination preferences keyed by entity.

use rustc_hash::FxHashMap;

use tr_core::text::matches_header;
use tr_core::{normalize_label, EntityId, RouterConfig};

/// Destination preferences of riders and vehicles.
///
/// Keys are stable [`EntityId`]s, never display names, so a preference
/// survives a rename.  Values are stored normalised.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestinationStore {
    preferences: FxHashMap<EntityId, String>,
}

impl DestinationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `destination` for `entity` and return the normalised label.
    pub fn set(&mut self, entity: EntityId, destination: &str) -> &str {
        let label = normalize_label(destination);
        let slot = self.preferences.entry(entity).or_default();
        *slot = label;
        slot
    }

    pub fn get(&self, entity: EntityId) -> Option<&str> {
        self.preferences.get(&entity).map(String::as_str)
    }

    /// Forget the preference of `entity`.  Returns `true` if one was set.
    pub fn clear(&mut self, entity: EntityId) -> bool {
        self.preferences.remove(&entity).is_some()
    }

    /// Copy the preference of `from` onto `to`, or clear `to` if `from` has
    /// none.  Returns `true` if `to` ends up with a preference.
    pub fn transfer(&mut self, from: EntityId, to: EntityId) -> bool {
        match self.preferences.get(&from).cloned() {
            Some(label) => {
                self.preferences.insert(to, label);
                true
            }
            None => {
                self.preferences.remove(&to);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }
}

/// The destination written on a destination sign: the second line, if the
/// first is the destination header.
///
/// Blank destinations are ignored.
pub fn destination_from_sign(lines: &[String; 4], config: &RouterConfig) -> Option<String> {
    if !matches_header(&lines[0], &config.destination_header) {
        return None;
    }
    let label = normalize_label(&lines[1]);
    (!label.is_empty()).then_some(label)
}
