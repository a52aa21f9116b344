//! A headless, paginated virtual list engine.
//!
//! The crate covers the parts of an "infinite scroll" list that carry state:
//! - a page cursor and a load state machine that allows at most one in-flight request,
//! - an append-only buffer of every fetched item,
//! - windowing: mapping a scroll offset to the slice of rows that must be mounted, either
//!   arithmetically (fixed row height) or through a cache of measured row positions,
//! - throttled scroll handling that requests the next page near the bottom.
//!
//! It is UI-agnostic. The embedding UI implements [`Host`] (scroll container, row
//! containers, trailing indicator, post-layout measurement) and answers each
//! [`PageRequest`] with data and a [`PageStatus`].
//!
//! For a reference in-memory host and a channel-driven controller, see the
//! `pagelist-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod host;
mod length;
mod list;
mod loader;
mod options;
mod positions;
mod state;
mod throttle;
mod types;


pub use error::{Error, Result};
pub use host::Host;
pub use length::{Length, ROOT_FONT_SIZE};
pub use list::VirtualList;
pub use loader::PageLoader;
pub use options::{
    DEFAULT_NEAR_BOTTOM, DEFAULT_SLACK, DEFAULT_THROTTLE_MS, ListOptions, RenderItem,
};
pub use positions::PositionCache;
pub use state::ListState;
pub use throttle::Throttle;
pub use types::{Indicator, LoadStatus, Mode, PageRequest, PageStatus, PositionRecord, Window};
