#![forbid(unsafe_code)]

//! Shared enablement flags for wiring predicates.
//!
//! The registry only ever sees zero-argument predicates, so something has to
//! own the mutable enablement state those predicates read. [`SharedFlag`] is
//! that state for a single condition; [`AddonToggles`] keys one flag per
//! addon so a settings channel can flip a flag and then ask the registry for
//! a targeted recompute via
//! [`update_by_owner`](crate::StyleRegistry::update_by_owner).
//!
//! Everything here is single-threaded by design, matching the registry's
//! synchronous, caller-driven execution model.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::key::AddonId;

/// Clonable boolean flag readable from a registry predicate.
///
/// Clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct SharedFlag(Rc<Cell<bool>>);

impl SharedFlag {
    /// Create a flag with the given initial state.
    pub fn new(enabled: bool) -> Self {
        Self(Rc::new(Cell::new(enabled)))
    }

    /// Current state.
    #[inline]
    pub fn get(&self) -> bool {
        self.0.get()
    }

    /// Flip the state shared by all clones of this flag.
    #[inline]
    pub fn set(&self, enabled: bool) {
        self.0.set(enabled);
    }

    /// A predicate closure reading this flag's current state.
    pub fn predicate(&self) -> impl Fn() -> bool + 'static {
        let flag = self.clone();
        move || flag.get()
    }
}

/// One [`SharedFlag`] per addon id.
#[derive(Debug, Clone, Default)]
pub struct AddonToggles {
    flags: HashMap<AddonId, SharedFlag>,
}

impl AddonToggles {
    /// Create an empty toggle set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The flag for `addon`, created disabled on first use.
    ///
    /// The returned clone shares state with every other clone handed out for
    /// the same addon.
    pub fn flag(&mut self, addon: impl Into<AddonId>) -> SharedFlag {
        self.flags.entry(addon.into()).or_default().clone()
    }

    /// Set the enablement of `addon`, creating its flag if absent.
    pub fn set(&mut self, addon: impl Into<AddonId>, enabled: bool) {
        self.flag(addon).set(enabled);
    }

    /// Whether `addon` is currently enabled. Unknown addons are disabled.
    pub fn is_enabled(&self, addon: &str) -> bool {
        self.flags.get(addon).is_some_and(SharedFlag::get)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySink;
    use crate::registry::StyleRegistry;

    #[test]
    fn clones_share_state() {
        let flag = SharedFlag::new(false);
        let clone = flag.clone();

        clone.set(true);
        assert!(flag.get());
    }

    #[test]
    fn predicate_reads_current_state() {
        let flag = SharedFlag::new(false);
        let predicate = flag.predicate();

        assert!(!predicate());
        flag.set(true);
        assert!(predicate());
    }

    #[test]
    fn toggles_default_to_disabled() {
        let mut toggles = AddonToggles::new();
        assert!(!toggles.is_enabled("columns"));

        let flag = toggles.flag("columns");
        assert!(!flag.get());

        toggles.set("columns", true);
        assert!(toggles.is_enabled("columns"));
        assert!(flag.get());
    }

    #[test]
    fn toggles_drive_a_registry() {
        let mut toggles = AddonToggles::new();
        let mut registry = StyleRegistry::new(MemorySink::new());

        let entry = registry.get_or_create("columns/layout", ".palette { width: 50%; }");
        registry.add_dependent(entry, "columns", 1, toggles.flag("columns").predicate());
        assert_eq!(registry.sink().attached_count(), 0);

        toggles.set("columns", true);
        registry.update_by_owner("columns");
        assert_eq!(registry.sink().attached_count(), 1);
    }
}
