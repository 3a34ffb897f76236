#![forbid(unsafe_code)]

//! Identifier types for the conditional style registry.
//!
//! `ModuleKey` names a managed stylesheet, `AddonId` names the feature that
//! registered a dependent, and `EntryId` is the opaque handle the registry
//! hands back. Keeping these as distinct newtypes stops the three string-ish
//! roles from being mixed up at call sites.

use std::borrow::Borrow;
use std::fmt;

/// Opaque key identifying one managed stylesheet.
///
/// Callers pick the key and are responsible for its uniqueness;
/// [`StyleRegistry::get_or_create`](crate::StyleRegistry::get_or_create) is
/// idempotent on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleKey(String);

/// Identifier of the addon that registered a dependent.
///
/// Used for targeted recomputation
/// ([`update_by_owner`](crate::StyleRegistry::update_by_owner)) and for the
/// diagnostic enabled-owner stamp on attached elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddonId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            /// Create a new identifier from a string.
            #[inline]
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Get the identifier as a string slice.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(ModuleKey);
string_id!(AddonId);

/// Opaque handle to a registry entry.
///
/// Only obtainable from
/// [`StyleRegistry::get_or_create`](crate::StyleRegistry::get_or_create), so a
/// valid handle always refers to a live entry of the registry that issued it.
/// Entries live for the lifetime of their registry; there is no disposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub(crate) u32);

impl EntryId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_key_from_str() {
        let key: ModuleKey = "editor-stage-left/stage".into();
        assert_eq!(key.as_str(), "editor-stage-left/stage");
    }

    #[test]
    fn addon_id_from_string() {
        let id: AddonId = String::from("columns").into();
        assert_eq!(id.as_str(), "columns");
    }

    #[test]
    fn addon_id_equality() {
        let a = AddonId::new("columns");
        let b = AddonId::new("columns");
        let c = AddonId::new("hide-flyout");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_matches_inner() {
        let key = ModuleKey::new("a/b");
        assert_eq!(key.to_string(), "a/b");
    }
}
