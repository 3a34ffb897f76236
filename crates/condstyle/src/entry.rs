#![forbid(unsafe_code)]

//! One managed stylesheet and its dependents.

use crate::key::AddonId;

pub(crate) type Predicate = Box<dyn Fn() -> bool>;

/// Backing state of an entry's style element.
///
/// The CSS text is held until the first enablement, then consumed to
/// materialize the sink element. The transition is irreversible; afterwards
/// the element is detached and reattached, never recreated.
pub(crate) enum Backing<E> {
    Pending { css: String },
    Live { element: E },
}

/// A single conditional stylesheet: CSS plus the dependents gating it.
pub(crate) struct ConditionalStyle<E> {
    pub(crate) backing: Backing<E>,
    /// Higher precedence attaches later in document order, overriding
    /// earlier elements of equal CSS specificity. Only ever raised.
    pub(crate) precedence: u32,
    /// `(owner, predicate)` pairs in registration order. Registration
    /// appends; no de-duplication.
    pub(crate) dependents: Vec<(AddonId, Predicate)>,
    /// Enabled owner ids computed by the previous update.
    pub(crate) previous_enabled: Vec<AddonId>,
}

impl<E> ConditionalStyle<E> {
    pub(crate) fn new(css: String) -> Self {
        Self {
            backing: Backing::Pending { css },
            precedence: 0,
            dependents: Vec::new(),
            previous_enabled: Vec::new(),
        }
    }

    /// Owner ids whose predicates currently hold, in registration order.
    pub(crate) fn enabled_dependents(&self) -> Vec<AddonId> {
        self.dependents
            .iter()
            .filter(|(_, condition)| condition())
            .map(|(owner, _)| owner.clone())
            .collect()
    }

    /// Whether any dependent is owned by `addon`.
    pub(crate) fn depends_on(&self, addon: &str) -> bool {
        self.dependents.iter().any(|(owner, _)| owner.as_str() == addon)
    }

    pub(crate) fn element(&self) -> Option<&E> {
        match &self.backing {
            Backing::Live { element } => Some(element),
            Backing::Pending { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dependent(owner: &str, enabled: bool) -> (AddonId, Predicate) {
        (AddonId::new(owner), Box::new(move || enabled))
    }

    #[test]
    fn enabled_dependents_follow_registration_order() {
        let mut entry: ConditionalStyle<()> = ConditionalStyle::new(String::new());
        entry.dependents.push(dependent("b", true));
        entry.dependents.push(dependent("a", true));
        entry.dependents.push(dependent("c", false));

        let enabled = entry.enabled_dependents();
        assert_eq!(enabled, vec![AddonId::new("b"), AddonId::new("a")]);
    }

    #[test]
    fn duplicate_registration_is_kept() {
        let mut entry: ConditionalStyle<()> = ConditionalStyle::new(String::new());
        entry.dependents.push(dependent("a", true));
        entry.dependents.push(dependent("a", true));

        assert_eq!(entry.enabled_dependents().len(), 2);
    }

    #[test]
    fn depends_on_matches_any_dependent() {
        let mut entry: ConditionalStyle<()> = ConditionalStyle::new(String::new());
        entry.dependents.push(dependent("a", false));

        assert!(entry.depends_on("a"));
        assert!(!entry.depends_on("b"));
    }

    #[test]
    fn element_is_absent_until_materialized() {
        let mut entry: ConditionalStyle<u32> = ConditionalStyle::new(".x {}".to_string());
        assert!(entry.element().is_none());

        entry.backing = Backing::Live { element: 7 };
        assert_eq!(entry.element(), Some(&7));
    }
}
