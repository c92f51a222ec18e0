//! High-level input service.
//!
//! Consumes raw events, runs the key-binding state machine, and yields navigation-level
//! `InputAction`s that the application loop consumes.

use crate::error::Result;
use crate::input::raw::{RawInputCollector, RawInputEvent};
use crate::page::TriggerId;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// High-level input actions emitted by the state machine/service.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// Activate a navigation trigger directly (shortcut keys)
    Activate(TriggerId),
    /// Activate whichever trigger has nav focus
    ActivateFocused,
    FocusNext,
    FocusPrevious,
    /// Left click at a terminal cell
    Click {
        column: u16,
        row: u16,
    },
    Resize {
        width: u16,
        height: u16,
    },
    Quit,
    NoAction,
    InvalidInput,
}

/// Maps key presses onto navigation actions.
#[derive(Debug, Default)]
pub struct InputStateMachine;

impl InputStateMachine {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        let plain = !key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => InputAction::Quit,
            (KeyCode::Char('1') | KeyCode::Char('v'), _) if plain => {
                InputAction::Activate(TriggerId::Vm)
            }
            (KeyCode::Char('2') | KeyCode::Char('n'), _) if plain => {
                InputAction::Activate(TriggerId::Nes)
            }
            (KeyCode::Tab | KeyCode::Right, _) => InputAction::FocusNext,
            (KeyCode::Char('l'), _) if plain => InputAction::FocusNext,
            (KeyCode::BackTab | KeyCode::Left, _) => InputAction::FocusPrevious,
            (KeyCode::Char('h'), _) if plain => InputAction::FocusPrevious,
            (KeyCode::Enter, _) => InputAction::ActivateFocused,
            (KeyCode::Char(' '), _) if plain => InputAction::ActivateFocused,
            (KeyCode::Esc, _) => InputAction::Quit,
            (KeyCode::Char('q'), _) if plain => InputAction::Quit,
            _ => InputAction::InvalidInput,
        }
    }
}

/// Service responsible for producing high-level `InputAction`s from terminal events.
#[derive(Debug, Default)]
pub struct InputService {
    state_machine: InputStateMachine,
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll crossterm once and return every action that became available.
    pub fn poll_actions(&mut self, timeout: Option<Duration>) -> Result<Vec<InputAction>> {
        let mut actions = Vec::new();

        if let Some(raw_event) = self.raw_input.poll_event(timeout)? {
            actions.extend(self.process_raw_event(raw_event));

            while let Some(extra_event) = self.raw_input.pop_pending() {
                actions.extend(self.process_raw_event(extra_event));
            }
        }

        Ok(actions)
    }

    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        self.raw_input.process_event(event);
        let mut actions = Vec::new();
        while let Some(raw_event) = self.raw_input.pop_pending() {
            actions.extend(self.process_raw_event(raw_event));
        }
        actions
    }

    fn process_raw_event(&mut self, event: RawInputEvent) -> Option<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => self.state_machine.handle_key_event(key_event),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
            RawInputEvent::Click { column, row } => InputAction::Click { column, row },
        };

        match action {
            InputAction::NoAction | InputAction::InvalidInput => None,
            _ => Some(action),
        }
    }
}

/// Spawn a blocking thread that polls for terminal events and forwards actions to the
/// application loop.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut service = InputService::new();
        while !shutdown.load(Ordering::SeqCst) {
            match service.poll_actions(Some(poll_interval)) {
                Ok(actions) => {
                    for action in actions {
                        if tx.send(action).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    log::error!("input thread error: {}", err);
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEventState, MouseButton, MouseEvent, MouseEventKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn shortcut_keys_activate_triggers() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Char('1'))),
            InputAction::Activate(TriggerId::Vm)
        );
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Char('v'))),
            InputAction::Activate(TriggerId::Vm)
        );
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Char('2'))),
            InputAction::Activate(TriggerId::Nes)
        );
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Char('n'))),
            InputAction::Activate(TriggerId::Nes)
        );
    }

    #[test]
    fn focus_and_quit_bindings() {
        let mut sm = InputStateMachine::new();
        assert_eq!(sm.handle_key_event(key(KeyCode::Tab)), InputAction::FocusNext);
        assert_eq!(sm.handle_key_event(key(KeyCode::Char('l'))), InputAction::FocusNext);
        assert_eq!(
            sm.handle_key_event(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            InputAction::FocusPrevious
        );
        assert_eq!(sm.handle_key_event(key(KeyCode::Left)), InputAction::FocusPrevious);
        assert_eq!(sm.handle_key_event(key(KeyCode::Enter)), InputAction::ActivateFocused);
        assert_eq!(sm.handle_key_event(key(KeyCode::Char(' '))), InputAction::ActivateFocused);
        assert_eq!(sm.handle_key_event(key(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(sm.handle_key_event(key(KeyCode::Esc)), InputAction::Quit);
        assert_eq!(
            sm.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
    }

    #[test]
    fn modified_and_unknown_keys_are_ignored() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_key_event(KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CONTROL)),
            InputAction::InvalidInput
        );
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Char('x'))),
            InputAction::InvalidInput
        );
    }

    #[test]
    fn releases_are_not_presses() {
        let mut sm = InputStateMachine::new();
        let release = KeyEvent {
            code: KeyCode::Char('v'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(sm.handle_key_event(release), InputAction::NoAction);
    }

    #[test]
    fn service_forwards_clicks_and_drops_noise() {
        let mut service = InputService::new();
        let click = service.process_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(click, vec![InputAction::Click { column: 2, row: 0 }]);

        assert!(service
            .process_event(Event::Key(key(KeyCode::Char('x'))))
            .is_empty());
        assert_eq!(
            service.process_event(Event::Resize(100, 30)),
            vec![InputAction::Resize {
                width: 100,
                height: 30
            }]
        );
    }
}
