//! Render tree abstraction and its in-memory implementation.

use crate::config::AppConfig;
use crate::page::ids::{Presence, RegionId, RegionState, TriggerId, Visibility};

/// Handle to a region node, minted by the tree that resolved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionHandle(usize);

/// Handle to a trigger node, minted by the tree that resolved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerHandle(usize);

impl TriggerHandle {
    /// Position of the trigger in document order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Capability the toggle controller needs from the page it drives.
///
/// Handles passed back into a tree must have been produced by that same tree.
pub trait RenderTree {
    /// Resolve a region by its node id
    fn find_region(&self, id: &str) -> Option<RegionHandle>;

    /// Resolve a trigger by its node id
    fn find_trigger(&self, id: &str) -> Option<TriggerHandle>;

    fn visibility(&self, region: RegionHandle) -> Visibility;

    fn set_visibility(&mut self, region: RegionHandle, visibility: Visibility);

    fn presence(&self, region: RegionHandle) -> Presence;

    fn set_presence(&mut self, region: RegionHandle, presence: Presence);
}

/// A region node with its display content.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionNode {
    pub id: String,
    pub title: String,
    pub body: Vec<String>,
    pub state: RegionState,
}

/// A navigation trigger node.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerNode {
    pub id: String,
    pub label: String,
}

/// In-memory page holding regions and triggers in document order.
#[derive(Debug, Clone, Default)]
pub struct PageTree {
    regions: Vec<RegionNode>,
    triggers: Vec<TriggerNode>,
}

impl PageTree {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard two-section page from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut tree = Self::new();
        for (trigger, section) in [(TriggerId::Vm, &config.vm), (TriggerId::Nes, &config.nes)] {
            tree.add_trigger(trigger.node_id(), section.label.clone());
        }
        for (region, section) in [(RegionId::Vm, &config.vm), (RegionId::Nes, &config.nes)] {
            tree.add_region(region.node_id(), section.title.clone(), section.body.clone());
        }
        tree
    }

    /// Append a region node. New nodes start present and visible.
    pub fn add_region(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        body: Vec<String>,
    ) -> RegionHandle {
        self.regions.push(RegionNode {
            id: id.into(),
            title: title.into(),
            body,
            state: RegionState::default(),
        });
        RegionHandle(self.regions.len() - 1)
    }

    /// Append a trigger node to the navigation bar.
    pub fn add_trigger(&mut self, id: impl Into<String>, label: impl Into<String>) -> TriggerHandle {
        self.triggers.push(TriggerNode {
            id: id.into(),
            label: label.into(),
        });
        TriggerHandle(self.triggers.len() - 1)
    }

    pub fn region(&self, handle: RegionHandle) -> &RegionNode {
        &self.regions[handle.0]
    }

    pub fn trigger(&self, handle: TriggerHandle) -> &TriggerNode {
        &self.triggers[handle.0]
    }

    /// Regions in document order
    pub fn regions(&self) -> impl Iterator<Item = (RegionHandle, &RegionNode)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(idx, node)| (RegionHandle(idx), node))
    }

    /// Triggers in document order
    pub fn triggers(&self) -> impl Iterator<Item = (TriggerHandle, &TriggerNode)> {
        self.triggers
            .iter()
            .enumerate()
            .map(|(idx, node)| (TriggerHandle(idx), node))
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    /// Trigger at a document-order position, if any.
    pub fn trigger_at_index(&self, index: usize) -> Option<TriggerHandle> {
        (index < self.triggers.len()).then_some(TriggerHandle(index))
    }

    fn node_mut(&mut self, handle: RegionHandle) -> &mut RegionNode {
        &mut self.regions[handle.0]
    }
}

impl RenderTree for PageTree {
    fn find_region(&self, id: &str) -> Option<RegionHandle> {
        self.regions
            .iter()
            .position(|node| node.id == id)
            .map(RegionHandle)
    }

    fn find_trigger(&self, id: &str) -> Option<TriggerHandle> {
        self.triggers
            .iter()
            .position(|node| node.id == id)
            .map(TriggerHandle)
    }

    fn visibility(&self, region: RegionHandle) -> Visibility {
        self.region(region).state.visibility
    }

    fn set_visibility(&mut self, region: RegionHandle, visibility: Visibility) {
        let node = self.node_mut(region);
        log::trace!("#{} visibility {} -> {}", node.id, node.state.visibility, visibility);
        node.state.visibility = visibility;
    }

    fn presence(&self, region: RegionHandle) -> Presence {
        self.region(region).state.presence
    }

    fn set_presence(&mut self, region: RegionHandle, presence: Presence) {
        let node = self.node_mut(region);
        log::trace!("#{} presence {} -> {}", node.id, node.state.presence, presence);
        node.state.presence = presence;
    }
}
