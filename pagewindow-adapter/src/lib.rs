//! Adapter utilities for the `pagewindow` crate.
//!
//! The `pagewindow` crate owns the pagination state and nothing else. This crate provides the
//! small, framework-neutral pieces an adapter needs around it:
//!
//! - Gating bursty "loader is visible" signals to one expansion per direction at a time
//! - A sensor capability trait (plus a ratio-driven implementation)
//! - Paginated vs expanding presentation switching
//! - Page selector links
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod coordinator;
mod presentation;
mod selector;
mod sensor;


pub use controller::Controller;
pub use coordinator::{AnchorCoordinator, GateState, ProximityOutcome};
pub use presentation::{DEFAULT_BREAKPOINT, Presentation};
pub use selector::{PageLink, page_links};
pub use sensor::{ProximitySensor, RatioSensor, VisibleCallback};
