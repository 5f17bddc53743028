//! A headless, searchable pagination engine with bidirectional window expansion.
//!
//! For adapter-level utilities (proximity gating, page selectors, presentation switching), see
//! the `pagewindow-adapter` crate.
//!
//! The engine holds an in-memory dataset, filters it with a live search query, and tracks two
//! presentations of the result at once:
//! - discrete pages (a page selector jumps between them), and
//! - an expanding window that grows one page at a time above and below the current page as the
//!   user scrolls.
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - the dataset and the initial page/page size/query ([`Preload`])
//! - query and page-size changes from its controls
//! - "grow up" / "grow down" requests when a loader sentinel becomes visible
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod filter;
mod page;
mod preload;
mod state;
mod store;
mod types;

#[cfg(test)]
mod tests;

pub use error::WindowError;
pub use filter::{SearchIndex, filter, filter_positions, search_key};
pub use page::{clamp_page, last_page, page_span};
pub use preload::{DEFAULT_PAGE_SIZE, Preload};
pub use state::WindowSnapshot;
pub use store::{OnChangeCallback, WindowStore};
pub use types::{Direction, Record, WindowRange};
