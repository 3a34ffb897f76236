#![forbid(unsafe_code)]

//! In-memory style sink.
//!
//! `MemorySink` implements [`StyleSink`] over plain vectors, mirroring the
//! ordering semantics of a real document container. It additionally counts
//! insert/remove traffic so tests can assert that updates do not churn the
//! document when nothing changed.
//!
//! # Example
//! ```
//! use condstyle::{MemorySink, StyleSink};
//!
//! let mut sink = MemorySink::new();
//! let low = sink.create(".a {}", 0);
//! let high = sink.create(".b {}", 1);
//! sink.insert(&low, 0);
//! sink.insert(&high, 1);
//!
//! assert_eq!(sink.attached(), vec![low, high]);
//! ```

use crate::sink::StyleSink;

/// Handle to an element held by a [`MemorySink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryElement(u32);

#[derive(Debug, Clone)]
struct ElementState {
    css: String,
    precedence: u32,
    enabled_owners: String,
}

/// [`StyleSink`] implementation backed by vectors, for tests and headless
/// hosts.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    elements: Vec<ElementState>,
    /// Attached handles in document order.
    order: Vec<u32>,
    inserts: usize,
    removes: usize,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached elements in document order.
    pub fn attached(&self) -> Vec<MemoryElement> {
        self.order.iter().map(|&id| MemoryElement(id)).collect()
    }

    /// Number of currently attached elements.
    pub fn attached_count(&self) -> usize {
        self.order.len()
    }

    /// Whether `element` is currently attached.
    pub fn is_attached(&self, element: MemoryElement) -> bool {
        self.order.contains(&element.0)
    }

    /// CSS text the element was created with.
    pub fn css(&self, element: MemoryElement) -> &str {
        &self.state(element).css
    }

    /// Current precedence marker of the element.
    pub fn precedence(&self, element: MemoryElement) -> u32 {
        self.state(element).precedence
    }

    /// Current enabled-owner stamp of the element.
    pub fn enabled_owners(&self, element: MemoryElement) -> &str {
        &self.state(element).enabled_owners
    }

    /// Total number of attach/move operations performed.
    pub fn insert_count(&self) -> usize {
        self.inserts
    }

    /// Total number of detach operations performed.
    pub fn remove_count(&self) -> usize {
        self.removes
    }

    fn state(&self, element: MemoryElement) -> &ElementState {
        self.elements
            .get(element.0 as usize)
            .expect("MemoryElement handle from a different sink")
    }
}

impl StyleSink for MemorySink {
    type Element = MemoryElement;

    fn create(&mut self, css: &str, precedence: u32) -> MemoryElement {
        let id = self.elements.len() as u32;
        self.elements.push(ElementState {
            css: css.to_string(),
            precedence,
            enabled_owners: String::new(),
        });
        MemoryElement(id)
    }

    fn set_precedence(&mut self, element: &MemoryElement, precedence: u32) {
        let index = element.0 as usize;
        let state = self
            .elements
            .get_mut(index)
            .expect("MemoryElement handle from a different sink");
        state.precedence = precedence;
    }

    fn set_enabled(&mut self, element: &MemoryElement, owners: &str) {
        let index = element.0 as usize;
        let state = self
            .elements
            .get_mut(index)
            .expect("MemoryElement handle from a different sink");
        state.enabled_owners = owners.to_string();
    }

    fn insert(&mut self, element: &MemoryElement, precedence: u32) {
        self.inserts += 1;
        let target = self
            .order
            .iter()
            .position(|&id| self.elements[id as usize].precedence >= precedence);

        match target {
            // Inserting before itself: stays in place.
            Some(index) if self.order[index] == element.0 => {}
            Some(index) => {
                let before = self.order[index];
                self.order.retain(|&id| id != element.0);
                let at = self
                    .order
                    .iter()
                    .position(|&id| id == before)
                    .expect("reference sibling still attached");
                self.order.insert(at, element.0);
            }
            None => {
                self.order.retain(|&id| id != element.0);
                self.order.push(element.0);
            }
        }
    }

    fn remove(&mut self, element: &MemoryElement) {
        let before = self.order.len();
        self.order.retain(|&id| id != element.0);
        if self.order.len() != before {
            self.removes += 1;
        }
    }
}
