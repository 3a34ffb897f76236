#![forbid(unsafe_code)]

//! Conditional stylesheet registry for addon-gated CSS.
//!
//! Independent features ("addons") each contribute a CSS block that should
//! only be active while some condition holds. [`StyleRegistry`] keeps one
//! lazily materialized style element per module key, toggles it in and out of
//! the host document as its dependents' predicates flip, and keeps attached
//! elements ordered by precedence so overrides stay explicit instead of
//! depending on load order.
//!
//! The document itself sits behind the [`StyleSink`] trait: hosts running in
//! a browser plug in a real DOM sink (see the `condstyle-web` crate), while
//! tests and headless hosts use [`MemorySink`].
//!
//! # Example
//! ```
//! use condstyle::{MemorySink, StyleRegistry};
//!
//! let mut registry = StyleRegistry::new(MemorySink::new());
//!
//! let entry = registry.get_or_create("hide-flyout/hide", ".flyout { display: none; }");
//! registry.add_dependent(entry, "hide-flyout", 0, || true);
//!
//! // The predicate holds, so the stylesheet is attached.
//! assert_eq!(registry.sink().attached_count(), 1);
//! ```

mod entry;
pub mod key;
pub mod memory;
pub mod registry;
pub mod sink;
pub mod toggles;

pub use key::{AddonId, EntryId, ModuleKey};
pub use memory::{MemoryElement, MemorySink};
pub use registry::StyleRegistry;
pub use sink::StyleSink;
pub use toggles::{AddonToggles, SharedFlag};
