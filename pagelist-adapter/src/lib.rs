//! Adapter utilities for the `pagelist` crate.
//!
//! The `pagelist` crate is UI-agnostic and owns the pagination and windowing state. This
//! crate provides small, framework-neutral helpers for adapters and tests:
//!
//! - [`MemoryHost`]: an in-memory scroll container implementing `pagelist::Host`
//! - [`VecSource`] / [`PageSource`]: synchronous page sources
//! - [`Controller`]: drives a list with a channel-based request/response loader
#![forbid(unsafe_code)]

mod controller;
mod host;
mod source;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use host::{MemoryHost, MemoryRow, RowHeightFn};
pub use source::{PageSource, VecSource};
