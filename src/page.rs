//! Page model: region/trigger identifiers, presentation state, and the render tree.
//!
//! The toggle controller never touches a concrete page. It resolves nodes through the
//! [`RenderTree`] capability trait, which [`PageTree`] implements in memory.

pub mod ids;
pub mod tree;

pub use ids::{Presence, RegionId, RegionState, TriggerId, Visibility};
pub use tree::{PageTree, RegionHandle, RegionNode, RenderTree, TriggerHandle, TriggerNode};
