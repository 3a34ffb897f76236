#![forbid(unsafe_code)]

//! Ordered style-sink abstraction.
//!
//! The registry never touches a document directly; it drives a [`StyleSink`],
//! which owns an ordered container of attached style elements. This keeps the
//! enablement and ordering logic testable without a DOM: tests use
//! [`MemorySink`](crate::MemorySink), browser hosts use the `condstyle-web`
//! crate.
//!
//! Attached elements are kept ordered by precedence, later elements
//! overriding earlier ones of equal CSS specificity. The registry relies on
//! exactly one ordering rule, implemented by [`StyleSink::insert`].

/// Destination for materialized style elements.
///
/// An implementation owns one shared container; elements created by
/// [`create`](StyleSink::create) start detached and are attached, moved, and
/// detached through [`insert`](StyleSink::insert) and
/// [`remove`](StyleSink::remove). Element handles stay valid for the lifetime
/// of the sink; elements are detached and reattached, never destroyed.
pub trait StyleSink {
    /// Handle to one materialized style element.
    type Element;

    /// Materialize a style element with the given CSS text and precedence
    /// marker. Called at most once per registry entry; the element starts
    /// detached.
    fn create(&mut self, css: &str, precedence: u32) -> Self::Element;

    /// Update the precedence marker of an existing element in place, without
    /// moving it.
    fn set_precedence(&mut self, element: &Self::Element, precedence: u32);

    /// Stamp the comma-joined list of currently enabled owner ids on an
    /// element. Diagnostic only; no other code may rely on it.
    fn set_enabled(&mut self, element: &Self::Element, owners: &str);

    /// (Re)attach `element` immediately before the first attached sibling
    /// whose stored precedence is `>=` `precedence`, or at the end if none
    /// qualifies.
    ///
    /// The sibling scan reads each element's stored precedence marker,
    /// falling back to 0 when the marker is absent or non-numeric. Attaching
    /// an already-attached element moves it; inserting it before itself
    /// leaves it in place (DOM `insertBefore` semantics).
    fn insert(&mut self, element: &Self::Element, precedence: u32);

    /// Detach `element`, keeping the handle valid for later re-insertion.
    /// Detaching an already-detached element is a no-op.
    fn remove(&mut self, element: &Self::Element);
}
