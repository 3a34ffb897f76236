#![forbid(unsafe_code)]

//! Registry of conditional stylesheets.
//!
//! `StyleRegistry` maps opaque module keys to lazily materialized style
//! elements and reconciles each element's attachment against its dependents'
//! predicates. It is an explicit object rather than a process-wide global:
//! the composition root constructs one over a [`StyleSink`] and hands it to
//! feature code by reference, so every test can build a fresh registry over a
//! fresh sink.
//!
//! # Usage
//! ```
//! use condstyle::{MemorySink, SharedFlag, StyleRegistry};
//!
//! let mut registry = StyleRegistry::new(MemorySink::new());
//! let columns = SharedFlag::new(false);
//!
//! let entry = registry.get_or_create("columns/layout", ".palette { width: 50%; }");
//! registry.add_dependent(entry, "columns", 1, columns.predicate());
//! assert_eq!(registry.sink().attached_count(), 0);
//!
//! // A settings change flips the flag, then asks for a targeted recompute.
//! columns.set(true);
//! registry.update_by_owner("columns");
//! assert_eq!(registry.sink().attached_count(), 1);
//! ```

use std::collections::HashMap;

use crate::entry::{Backing, ConditionalStyle};
use crate::key::{AddonId, EntryId, ModuleKey};
use crate::sink::StyleSink;

/// Registry mapping module keys to conditional stylesheets.
///
/// All operations are synchronous and run on the caller's thread; the
/// registry owns the sink and the entries exclusively, so no locking is
/// involved.
pub struct StyleRegistry<S: StyleSink> {
    sink: S,
    entries: Vec<ConditionalStyle<S::Element>>,
    lookup: HashMap<ModuleKey, EntryId>,
}

impl<S: StyleSink> StyleRegistry<S> {
    /// Create an empty registry over `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            entries: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Return the entry for `key`, creating it if absent.
    ///
    /// Idempotent on `key`: the CSS text of the first call wins and later
    /// texts are ignored. Entries live for the lifetime of the registry.
    pub fn get_or_create(&mut self, key: impl Into<ModuleKey>, css: impl Into<String>) -> EntryId {
        let key = key.into();
        if let Some(&id) = self.lookup.get(&key) {
            return id;
        }
        let id = EntryId(self.entries.len() as u32);
        self.entries.push(ConditionalStyle::new(css.into()));
        self.lookup.insert(key, id);
        id
    }

    /// Attach `(addon, predicate)` to the entry and recompute it.
    ///
    /// Raises the entry's precedence to `max(current, precedence)`; if the
    /// entry already has a live element, its precedence marker is refreshed
    /// in place. Repeated registration appends; no de-duplication is
    /// performed.
    ///
    /// `predicate` is invoked synchronously here and on every later update of
    /// this entry. It must not panic; a panicking predicate is a fatal
    /// configuration error and propagates to the caller.
    pub fn add_dependent(
        &mut self,
        id: EntryId,
        addon: impl Into<AddonId>,
        precedence: u32,
        predicate: impl Fn() -> bool + 'static,
    ) {
        let sink = &mut self.sink;
        let Some(entry) = self.entries.get_mut(id.index()) else {
            debug_assert!(false, "entry id from a different registry: {id:?}");
            return;
        };

        entry.dependents.push((addon.into(), Box::new(predicate)));

        if precedence > entry.precedence {
            entry.precedence = precedence;
            if let Backing::Live { element } = &entry.backing {
                sink.set_precedence(element, precedence);
            }
        }

        self.update(id);
    }

    /// Recompute the entry's enabled set and reconcile the sink.
    ///
    /// The new set is compared element-wise against the previous one; the
    /// comparison is order-sensitive, so reordered dependents with unchanged
    /// membership still count as a change. When nothing changed this is a
    /// no-op. Otherwise the element is materialized on first enablement,
    /// stamped with its enabled owners, and (re)inserted at the position its
    /// precedence dictates, or detached when no dependent is enabled.
    ///
    /// Returns `true` when sink traffic occurred.
    pub fn update(&mut self, id: EntryId) -> bool {
        let sink = &mut self.sink;
        let Some(entry) = self.entries.get_mut(id.index()) else {
            debug_assert!(false, "entry id from a different registry: {id:?}");
            return false;
        };

        let enabled = entry.enabled_dependents();
        if enabled == entry.previous_enabled {
            return false;
        }

        if enabled.is_empty() {
            entry.previous_enabled = enabled;
            if let Backing::Live { element } = &entry.backing {
                sink.remove(element);
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(entry = id.0, "conditional style detached");
            return true;
        }

        let owners = enabled
            .iter()
            .map(|owner| owner.as_str())
            .collect::<Vec<_>>()
            .join(",");
        entry.previous_enabled = enabled;

        // First enablement consumes the CSS text and materializes the element.
        if let Backing::Pending { css } = &entry.backing {
            let element = sink.create(css, entry.precedence);
            entry.backing = Backing::Live { element };
        }
        if let Backing::Live { element } = &entry.backing {
            sink.set_enabled(element, &owners);
            sink.insert(element, entry.precedence);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(entry = id.0, owners = %owners, "conditional style attached");
        true
    }

    /// Update every entry. Used after bulk state changes affecting many
    /// predicates at once.
    pub fn update_all(&mut self) {
        for index in 0..self.entries.len() {
            self.update(EntryId(index as u32));
        }
    }

    /// Update only entries with at least one dependent owned by `addon`.
    ///
    /// Entries without such a dependent are left untouched even if their
    /// enabled set is stale relative to other external state.
    pub fn update_by_owner(&mut self, addon: &str) {
        for index in 0..self.entries.len() {
            if self.entries[index].depends_on(addon) {
                self.update(EntryId(index as u32));
            }
        }
    }

    /// Whether the entry has a dependent owned by `addon`.
    pub fn depends_on(&self, id: EntryId, addon: &str) -> bool {
        self.entries
            .get(id.index())
            .is_some_and(|entry| entry.depends_on(addon))
    }

    /// The entry's live element, if it has been materialized.
    pub fn element(&self, id: EntryId) -> Option<&S::Element> {
        self.entries.get(id.index()).and_then(ConditionalStyle::element)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sink this registry drives, for host wiring and inspection.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
