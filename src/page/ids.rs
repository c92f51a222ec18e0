//! Typed identifiers and presentation attributes.

use crate::error::{NavToggleError, Result};
use std::fmt;
use std::str::FromStr;

/// The two toggled page regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    Vm,
    Nes,
}

impl RegionId {
    pub const ALL: [RegionId; 2] = [RegionId::Vm, RegionId::Nes];

    /// Stable node id used to look the region up in a render tree.
    pub fn node_id(self) -> &'static str {
        match self {
            RegionId::Vm => "VM",
            RegionId::Nes => "NES",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            RegionId::Vm => 0,
            RegionId::Nes => 1,
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node_id())
    }
}

/// The two navigation triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerId {
    /// `li-vm`
    Vm,
    /// `li-nes`
    Nes,
}

impl TriggerId {
    pub const ALL: [TriggerId; 2] = [TriggerId::Vm, TriggerId::Nes];

    /// Stable node id used to look the trigger up in a render tree.
    pub fn node_id(self) -> &'static str {
        match self {
            TriggerId::Vm => "li-vm",
            TriggerId::Nes => "li-nes",
        }
    }

    /// Region this trigger navigates to.
    pub fn region(self) -> RegionId {
        match self {
            TriggerId::Vm => RegionId::Vm,
            TriggerId::Nes => RegionId::Nes,
        }
    }

    pub fn from_node_id(id: &str) -> Option<Self> {
        TriggerId::ALL.into_iter().find(|t| t.node_id() == id)
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node_id())
    }
}

impl FromStr for TriggerId {
    type Err = NavToggleError;

    /// Accepts `vm`, `li-vm`, `nes` and `li-nes`, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vm" | "li-vm" => Ok(TriggerId::Vm),
            "nes" | "li-nes" => Ok(TriggerId::Nes),
            other => Err(NavToggleError::invalid_argument(format!(
                "unknown trigger '{}' (expected vm or nes)",
                other
            ))),
        }
    }
}

/// Whether a present region is rendered. Hidden regions keep their layout space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        })
    }
}

/// Whether a region occupies layout at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Present,
    Absent,
}

impl Presence {
    pub fn flipped(self) -> Self {
        match self {
            Presence::Present => Presence::Absent,
            Presence::Absent => Presence::Present,
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Presence::Present => "present",
            Presence::Absent => "absent",
        })
    }
}

/// Presentation state of one region. New nodes start present and visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionState {
    pub presence: Presence,
    pub visibility: Visibility,
}

impl RegionState {
    pub fn new(presence: Presence, visibility: Visibility) -> Self {
        Self {
            presence,
            visibility,
        }
    }

    /// Present and visible.
    pub fn is_displayed(&self) -> bool {
        self.presence == Presence::Present && self.visibility == Visibility::Visible
    }
}
