//! Input subsystem.
//!
//! [`raw`] polls crossterm and queues primitive events; [`service`] turns them into
//! navigation-level [`InputAction`]s for the application loop.

pub mod raw;
pub mod service;

// Modules outside this crate should prefer importing from `crate::input`
// rather than reaching into submodules.
pub use service::{spawn_input_thread, InputAction, InputService, InputStateMachine};
