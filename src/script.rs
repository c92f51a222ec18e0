//! Headless mode: replay a sequence of trigger activations without a terminal.

use crate::controller::{PageSnapshot, ToggleController};
use crate::error::{NavToggleError, Result};
use crate::page::{RegionId, RenderTree, TriggerId};

/// Parse a comma- or whitespace-separated list of triggers, e.g. `"vm, nes vm"`.
pub fn parse_sequence(input: &str) -> Result<Vec<TriggerId>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<TriggerId>())
        .collect()
}

/// Attach a controller to `tree`, run every activation in order, and return the final
/// state of both regions.
pub fn run_script<T: RenderTree>(tree: T, triggers: &[TriggerId]) -> Result<PageSnapshot> {
    let mut controller = ToggleController::attach(tree)?;
    for trigger in triggers {
        controller.activate(*trigger);
    }
    Ok(controller.snapshot())
}

/// One line per region: `VM   presence=present visibility=hidden`.
pub fn format_snapshot(snapshot: &PageSnapshot) -> String {
    RegionId::ALL
        .into_iter()
        .map(|region| {
            let state = snapshot.get(region);
            format!(
                "{:<4} presence={:<7} visibility={}\n",
                region.node_id(),
                state.presence.to_string(),
                state.visibility
            )
        })
        .collect()
}

/// Reject an empty sequence with a helpful message.
pub fn require_non_empty(triggers: Vec<TriggerId>) -> Result<Vec<TriggerId>> {
    if triggers.is_empty() {
        return Err(NavToggleError::invalid_argument(
            "script needs at least one trigger (vm or nes)",
        ));
    }
    Ok(triggers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::page::{PageTree, Presence, Visibility};

    #[test]
    fn parses_mixed_separators() {
        assert_eq!(
            parse_sequence("vm, nes li-vm,,LI-NES").unwrap(),
            vec![TriggerId::Vm, TriggerId::Nes, TriggerId::Vm, TriggerId::Nes]
        );
        assert!(parse_sequence("").unwrap().is_empty());
        assert!(parse_sequence("vm,snes").is_err());
    }

    #[test]
    fn empty_sequences_are_rejected() {
        assert!(require_non_empty(Vec::new()).is_err());
        assert_eq!(
            require_non_empty(vec![TriggerId::Nes]).unwrap(),
            vec![TriggerId::Nes]
        );
    }

    #[test]
    fn runs_sequence_against_a_page() {
        let tree = PageTree::from_config(&AppConfig::default());
        let snapshot = run_script(tree, &[TriggerId::Vm, TriggerId::Nes]).unwrap();
        assert_eq!(snapshot.vm.presence, Presence::Absent);
        assert_eq!(snapshot.nes.presence, Presence::Present);
        assert_eq!(snapshot.nes.visibility, Visibility::Visible);
    }

    #[test]
    fn snapshot_format_is_line_per_region() {
        let tree = PageTree::from_config(&AppConfig::default());
        let snapshot = run_script(tree, &[]).unwrap();
        assert_eq!(
            format_snapshot(&snapshot),
            "VM   presence=present visibility=hidden\n\
             NES  presence=absent  visibility=visible\n"
        );
    }
}
