#![forbid(unsafe_code)]

//! DOM-backed style sink for `condstyle`.
//!
//! [`DomSink`] writes `<style>` elements into a hidden container `<div>`
//! mounted as the first child of `<body>`. Children of that container are
//! declared in document order ahead of any `<head>` stylesheet, so at equal
//! CSS specificity they override the page's own rules.
//!
//! Browser-only: the sink is compiled for `wasm32` targets; on other targets
//! this crate is an empty library so native workspace builds stay green.

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSink;
