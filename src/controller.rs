//! Toggle controller for the `VM` and `NES` page regions.
//!
//! Two toggle strategies are applied to a region:
//!
//! - **visibility** ([`show`](ToggleController::show), [`hide`](ToggleController::hide),
//!   [`toggle_hide`](ToggleController::toggle_hide)): the region keeps its layout space;
//! - **presence** ([`mount`](ToggleController::mount), [`unmount`](ToggleController::unmount),
//!   [`toggle_display`](ToggleController::toggle_display)): the region is added to or
//!   removed from layout.
//!
//! Activating `li-vm` mounts `VM`, unmounts `NES`, then flips `VM`'s visibility.
//! Activating `li-nes` hides and unmounts `VM`, then flips `NES`'s presence.

use crate::error::{NavToggleError, Result};
use crate::page::{
    Presence, RegionHandle, RegionId, RegionState, RenderTree, TriggerHandle, TriggerId,
    Visibility,
};

/// State of both regions at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSnapshot {
    pub vm: RegionState,
    pub nes: RegionState,
}

impl PageSnapshot {
    pub fn get(&self, region: RegionId) -> RegionState {
        match region {
            RegionId::Vm => self.vm,
            RegionId::Nes => self.nes,
        }
    }

    /// Regions that are both present and visible.
    pub fn displayed(&self) -> impl Iterator<Item = RegionId> + '_ {
        RegionId::ALL
            .into_iter()
            .filter(move |region| self.get(*region).is_displayed())
    }
}

/// Subscription of one trigger node to its handler.
#[derive(Debug, Clone, Copy)]
struct Binding {
    handle: TriggerHandle,
    trigger: TriggerId,
}

/// Drives region presentation state through an injected [`RenderTree`].
#[derive(Debug)]
pub struct ToggleController<T: RenderTree> {
    tree: T,
    regions: [RegionHandle; 2],
    bindings: Vec<Binding>,
}

impl<T: RenderTree> ToggleController<T> {
    /// Resolve every region and trigger once, bind the triggers, and apply the
    /// initial state: `VM` hidden but present, `NES` absent.
    pub fn attach(tree: T) -> Result<Self> {
        let resolve_region = |region: RegionId| {
            tree.find_region(region.node_id())
                .ok_or_else(|| NavToggleError::missing_region(region.node_id()))
        };
        let regions = [resolve_region(RegionId::Vm)?, resolve_region(RegionId::Nes)?];

        let bindings = TriggerId::ALL
            .into_iter()
            .map(|trigger| {
                tree.find_trigger(trigger.node_id())
                    .map(|handle| Binding { handle, trigger })
                    .ok_or_else(|| NavToggleError::missing_trigger(trigger.node_id()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut controller = Self {
            tree,
            regions,
            bindings,
        };
        controller.hide(RegionId::Vm);
        controller.unmount(RegionId::Nes);
        log::debug!("controller attached: {:?}", controller.snapshot());
        Ok(controller)
    }

    fn handle(&self, region: RegionId) -> RegionHandle {
        self.regions[region.index()]
    }

    pub fn show(&mut self, region: RegionId) {
        let handle = self.handle(region);
        self.tree.set_visibility(handle, Visibility::Visible);
    }

    pub fn hide(&mut self, region: RegionId) {
        let handle = self.handle(region);
        self.tree.set_visibility(handle, Visibility::Hidden);
    }

    /// Hide the region unless it is already hidden, in which case show it.
    pub fn toggle_hide(&mut self, region: RegionId) {
        let handle = self.handle(region);
        let next = self.tree.visibility(handle).flipped();
        self.tree.set_visibility(handle, next);
    }

    /// Put the region back into layout.
    pub fn mount(&mut self, region: RegionId) {
        let handle = self.handle(region);
        self.tree.set_presence(handle, Presence::Present);
    }

    /// Remove the region from layout.
    pub fn unmount(&mut self, region: RegionId) {
        let handle = self.handle(region);
        self.tree.set_presence(handle, Presence::Absent);
    }

    /// Unmount the region if it is present, otherwise mount it.
    pub fn toggle_display(&mut self, region: RegionId) {
        let handle = self.handle(region);
        let next = self.tree.presence(handle).flipped();
        self.tree.set_presence(handle, next);
    }

    /// Run the handler for a trigger.
    pub fn activate(&mut self, trigger: TriggerId) {
        match trigger {
            TriggerId::Vm => {
                self.mount(RegionId::Vm);
                self.unmount(RegionId::Nes);
                self.toggle_hide(RegionId::Vm);
            }
            TriggerId::Nes => {
                self.hide(RegionId::Vm);
                self.unmount(RegionId::Vm);
                self.toggle_display(RegionId::Nes);
            }
        }
        log::debug!("{} activated: {:?}", trigger, self.snapshot());
    }

    /// Run the handler bound to a resolved trigger node. Returns false when the node
    /// has no handler.
    pub fn dispatch(&mut self, handle: TriggerHandle) -> bool {
        let Some(trigger) = self.binding(handle) else {
            log::debug!("no handler bound to trigger #{}", handle.index());
            return false;
        };
        self.activate(trigger);
        true
    }

    /// Run the handler for a trigger given by node id.
    pub fn activate_by_id(&mut self, id: &str) -> Result<()> {
        let trigger = TriggerId::from_node_id(id).ok_or_else(|| NavToggleError::missing_trigger(id))?;
        self.activate(trigger);
        Ok(())
    }

    /// Trigger bound to a node, if any.
    pub fn binding(&self, handle: TriggerHandle) -> Option<TriggerId> {
        self.bindings
            .iter()
            .find(|b| b.handle == handle)
            .map(|b| b.trigger)
    }

    pub fn state(&self, region: RegionId) -> RegionState {
        let handle = self.handle(region);
        RegionState::new(self.tree.presence(handle), self.tree.visibility(handle))
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            vm: self.state(RegionId::Vm),
            nes: self.state(RegionId::Nes),
        }
    }

    /// The single region that is present and visible, if exactly one is.
    pub fn selection(&self) -> Option<RegionId> {
        let snapshot = self.snapshot();
        let mut displayed = snapshot.displayed();
        match (displayed.next(), displayed.next()) {
            (Some(region), None) => Some(region),
            _ => None,
        }
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageTree;

    fn page() -> PageTree {
        let mut tree = PageTree::new();
        tree.add_trigger("li-vm", "VM");
        tree.add_trigger("li-nes", "NES");
        tree.add_region("VM", "Welcome", Vec::new());
        tree.add_region("NES", "NES", Vec::new());
        tree
    }

    fn state(presence: Presence, visibility: Visibility) -> RegionState {
        RegionState::new(presence, visibility)
    }

    #[test]
    fn attach_applies_initial_state() {
        let controller = ToggleController::attach(page()).unwrap();
        assert_eq!(
            controller.state(RegionId::Vm),
            state(Presence::Present, Visibility::Hidden)
        );
        assert_eq!(controller.state(RegionId::Nes).presence, Presence::Absent);
        assert_eq!(controller.selection(), None);
    }

    #[test]
    fn attach_fails_fast_on_missing_nodes() {
        let mut tree = PageTree::new();
        tree.add_trigger("li-vm", "VM");
        tree.add_trigger("li-nes", "NES");
        tree.add_region("VM", "Welcome", Vec::new());
        match ToggleController::attach(tree) {
            Err(NavToggleError::MissingRegion { id }) => assert_eq!(id, "NES"),
            other => panic!("expected MissingRegion, got {:?}", other),
        }

        let mut tree = PageTree::new();
        tree.add_trigger("li-vm", "VM");
        tree.add_region("VM", "Welcome", Vec::new());
        tree.add_region("NES", "NES", Vec::new());
        match ToggleController::attach(tree) {
            Err(NavToggleError::MissingTrigger { id }) => assert_eq!(id, "li-nes"),
            other => panic!("expected MissingTrigger, got {:?}", other),
        }
    }

    #[test]
    fn visibility_helpers_keep_presence() {
        let mut controller = ToggleController::attach(page()).unwrap();
        controller.show(RegionId::Vm);
        assert_eq!(
            controller.state(RegionId::Vm),
            state(Presence::Present, Visibility::Visible)
        );
        controller.toggle_hide(RegionId::Vm);
        assert_eq!(controller.state(RegionId::Vm).visibility, Visibility::Hidden);
        assert_eq!(controller.state(RegionId::Vm).presence, Presence::Present);
    }

    #[test]
    fn presence_helpers_keep_visibility() {
        let mut controller = ToggleController::attach(page()).unwrap();
        controller.toggle_display(RegionId::Vm);
        assert_eq!(
            controller.state(RegionId::Vm),
            state(Presence::Absent, Visibility::Hidden)
        );
        controller.mount(RegionId::Nes);
        controller.unmount(RegionId::Nes);
        controller.toggle_display(RegionId::Nes);
        assert_eq!(
            controller.state(RegionId::Nes),
            state(Presence::Present, Visibility::Visible)
        );
    }

    #[test]
    fn toggles_flip_from_every_starting_state() {
        let mut controller = ToggleController::attach(page()).unwrap();

        // VM starts hidden: not hidden -> hide, otherwise show.
        controller.toggle_hide(RegionId::Vm);
        assert_eq!(controller.state(RegionId::Vm).visibility, Visibility::Visible);
        controller.toggle_hide(RegionId::Vm);
        assert_eq!(controller.state(RegionId::Vm).visibility, Visibility::Hidden);

        // NES starts absent: present -> unmount, otherwise mount.
        controller.toggle_display(RegionId::Nes);
        assert_eq!(controller.state(RegionId::Nes).presence, Presence::Present);
        controller.toggle_display(RegionId::Nes);
        assert_eq!(controller.state(RegionId::Nes).presence, Presence::Absent);

        // Flipping one attribute never touches the other.
        assert_eq!(controller.state(RegionId::Nes).visibility, Visibility::Visible);
        assert_eq!(controller.state(RegionId::Vm).presence, Presence::Present);
    }

    #[test]
    fn nes_twice_clears_the_page() {
        let mut controller = ToggleController::attach(page()).unwrap();
        controller.activate(TriggerId::Nes);
        assert_eq!(controller.selection(), Some(RegionId::Nes));
        controller.activate(TriggerId::Nes);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.vm.presence, Presence::Absent);
        assert_eq!(snapshot.nes.presence, Presence::Absent);
        assert_eq!(controller.selection(), None);
    }

    #[test]
    fn dispatch_follows_bindings() {
        let tree = page();
        let li_nes = tree.find_trigger("li-nes").unwrap();
        let mut controller = ToggleController::attach(tree).unwrap();

        assert_eq!(controller.binding(li_nes), Some(TriggerId::Nes));
        assert!(controller.dispatch(li_nes));
        assert_eq!(controller.selection(), Some(RegionId::Nes));
    }

    #[test]
    fn unbound_trigger_is_ignored() {
        let mut tree = page();
        let extra = tree.add_trigger("li-gba", "GBA");
        let mut controller = ToggleController::attach(tree).unwrap();
        let before = controller.snapshot();

        assert!(!controller.dispatch(extra));
        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn activate_by_unknown_id_errors() {
        let mut controller = ToggleController::attach(page()).unwrap();
        controller.activate_by_id("li-vm").unwrap();
        assert_eq!(controller.selection(), Some(RegionId::Vm));

        let err = controller.activate_by_id("li-gba").unwrap_err();
        assert!(matches!(err, NavToggleError::MissingTrigger { .. }));
    }
}
