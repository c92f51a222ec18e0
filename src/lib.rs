//! # navtoggle - two-section terminal page driven by navigation triggers
//!
//! A page holds two regions, `VM` and `NES`, and a navigation bar with two triggers,
//! `li-vm` and `li-nes`. Activating a trigger toggles the regions' **presence** (whether
//! they take up layout) and **visibility** (whether a present region is drawn).
//!
//! ## Architecture
//!
//! - [`page`] - typed ids, presentation state, and the [`RenderTree`](page::RenderTree)
//!   capability with its in-memory [`PageTree`](page::PageTree)
//! - [`controller`] - the [`ToggleController`] that owns all toggle semantics
//! - [`input`] - crossterm key/mouse handling on a blocking thread
//! - [`ui`] - ratatui layout and rendering
//! - [`app`] - the event loop tying input, controller and renderer together
//! - [`script`] - headless replay of activation sequences
//! - [`config`] and [`error`] - ambient plumbing

// Core modules
pub mod config;
pub mod error;
pub mod page;

// Toggle semantics
pub mod controller;
pub mod script;

// Terminal host
pub mod app;
pub mod input;
pub mod ui;

pub use error::{NavToggleError, Result};

pub use app::Application;
pub use config::AppConfig;
pub use controller::{PageSnapshot, ToggleController};
pub use page::{PageTree, Presence, RegionId, RegionState, RenderTree, TriggerId, Visibility};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
