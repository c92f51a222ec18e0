//! Application orchestration layer
//!
//! Wires the input thread, the toggle controller and the renderer together. Each input
//! action runs to completion before the next one is read, then the page is redrawn.

use crate::config::AppConfig;
use crate::controller::ToggleController;
use crate::error::Result;
use crate::input::{spawn_input_thread, InputAction};
use crate::page::{PageTree, RenderTree, TriggerHandle, TriggerId};
use crate::ui::{PageLayout, UIRenderer, ViewState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc;

/// Application orchestrator
pub struct Application {
    controller: ToggleController<PageTree>,
    ui_renderer: Box<dyn UIRenderer>,
    poll_interval: Duration,
}

impl Application {
    /// Build the page from configuration and attach the controller to it
    pub fn new(config: &AppConfig, ui_renderer: Box<dyn UIRenderer>) -> Result<Self> {
        let controller = ToggleController::attach(PageTree::from_config(config))?;
        Ok(Self {
            controller,
            ui_renderer,
            poll_interval: config.poll_interval(),
        })
    }

    pub fn controller(&self) -> &ToggleController<PageTree> {
        &self.controller
    }

    /// Run the interactive session until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;

        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_thread = spawn_input_thread(tx, Arc::clone(&shutdown), self.poll_interval);

        let result = self.event_loop(rx).await;

        stop_input_thread(input_thread, &shutdown).await;
        self.ui_renderer.cleanup()?;
        log::info!("session finished");
        result
    }

    /// Consume actions until `Quit` or until the sender goes away.
    pub async fn event_loop(&mut self, mut rx: mpsc::UnboundedReceiver<InputAction>) -> Result<()> {
        let (width, height) = self.ui_renderer.get_terminal_size()?;
        let mut view_state = ViewState::new(width, height);
        self.render(&view_state)?;

        while let Some(action) = rx.recv().await {
            if !self.process_action(action, &mut view_state)? {
                break;
            }
            self.render(&view_state)?;
        }
        Ok(())
    }

    /// Execute an action - returns false if should quit
    pub fn process_action(
        &mut self,
        action: InputAction,
        view_state: &mut ViewState,
    ) -> Result<bool> {
        match action {
            InputAction::Quit => return Ok(false),
            InputAction::Activate(trigger) => self.activate(trigger, view_state),
            InputAction::ActivateFocused => {
                match self.controller.tree().trigger_at_index(view_state.focus) {
                    Some(handle) => self.dispatch(handle, view_state),
                    None => view_state.status_line.set_message("Nothing to activate"),
                }
            }
            InputAction::Click { column, row } => {
                let layout = PageLayout::compute(view_state.area(), self.controller.tree());
                if let Some(handle) = layout.trigger_at(column, row) {
                    self.dispatch(handle, view_state);
                }
            }
            InputAction::FocusNext => {
                view_state.focus_next(self.controller.tree().trigger_count());
            }
            InputAction::FocusPrevious => {
                view_state.focus_previous(self.controller.tree().trigger_count());
            }
            InputAction::Resize { width, height } => {
                view_state.update_terminal_size(width, height);
            }
            InputAction::NoAction | InputAction::InvalidInput => {}
        }
        Ok(true)
    }

    fn activate(&mut self, trigger: TriggerId, view_state: &mut ViewState) {
        self.controller.activate(trigger);
        if let Some(handle) = self.controller.tree().find_trigger(trigger.node_id()) {
            view_state.focus = handle.index();
        }
        self.report_selection(view_state);
    }

    fn dispatch(&mut self, handle: TriggerHandle, view_state: &mut ViewState) {
        if self.controller.dispatch(handle) {
            view_state.focus = handle.index();
            self.report_selection(view_state);
        }
    }

    fn report_selection(&self, view_state: &mut ViewState) {
        let message = match self.controller.selection() {
            Some(region) => format!("{} shown", region),
            None => "No section shown".to_string(),
        };
        view_state.status_line.set_message(message);
    }

    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        self.ui_renderer.render(self.controller.tree(), view_state)
    }
}

/// Signal the input thread to stop and wait for it off the async runtime.
async fn stop_input_thread(handle: JoinHandle<()>, shutdown: &AtomicBool) {
    shutdown.store(true, Ordering::SeqCst);
    match tokio::task::spawn_blocking(move || handle.join()).await {
        Ok(Ok(())) => log::debug!("input thread stopped"),
        Ok(Err(_)) => log::warn!("input thread panicked"),
        Err(err) => log::warn!("failed to join input thread: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Presence, RegionId, Visibility};
    use crate::ui::MockUIRenderer;

    fn app() -> Application {
        Application::new(&AppConfig::default(), Box::new(MockUIRenderer::new())).unwrap()
    }

    #[test]
    fn activation_moves_focus_and_reports() {
        let mut app = app();
        let mut view_state = ViewState::new(80, 24);

        assert!(app
            .process_action(InputAction::Activate(TriggerId::Nes), &mut view_state)
            .unwrap());
        assert_eq!(view_state.focus, 1);
        assert_eq!(view_state.status_line.message.as_deref(), Some("NES shown"));

        app.process_action(InputAction::Activate(TriggerId::Nes), &mut view_state)
            .unwrap();
        assert_eq!(
            view_state.status_line.message.as_deref(),
            Some("No section shown")
        );
    }

    #[test]
    fn focused_trigger_activates() {
        let mut app = app();
        let mut view_state = ViewState::new(80, 24);

        app.process_action(InputAction::FocusNext, &mut view_state)
            .unwrap();
        app.process_action(InputAction::ActivateFocused, &mut view_state)
            .unwrap();
        assert_eq!(app.controller().selection(), Some(RegionId::Nes));

        app.process_action(InputAction::FocusPrevious, &mut view_state)
            .unwrap();
        app.process_action(InputAction::ActivateFocused, &mut view_state)
            .unwrap();
        let vm = app.controller().state(RegionId::Vm);
        assert_eq!(vm.presence, Presence::Present);
        assert_eq!(vm.visibility, Visibility::Visible);
        assert_eq!(app.controller().state(RegionId::Nes).presence, Presence::Absent);
    }

    #[test]
    fn clicks_hit_the_nav_bar_only() {
        let mut app = app();
        let mut view_state = ViewState::new(80, 24);
        let before = app.controller().snapshot();

        app.process_action(InputAction::Click { column: 1, row: 5 }, &mut view_state)
            .unwrap();
        app.process_action(InputAction::Click { column: 70, row: 0 }, &mut view_state)
            .unwrap();
        assert_eq!(app.controller().snapshot(), before);

        app.process_action(InputAction::Click { column: 1, row: 0 }, &mut view_state)
            .unwrap();
        assert_eq!(app.controller().selection(), Some(RegionId::Vm));
        assert_eq!(view_state.focus, 0);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = app();
        let mut view_state = ViewState::new(80, 24);
        assert!(!app
            .process_action(InputAction::Quit, &mut view_state)
            .unwrap());
    }

    #[tokio::test]
    async fn event_loop_renders_after_each_action() {
        let mut app = app();
        let (tx, rx) = mpsc::unbounded_channel();

        tx.send(InputAction::Activate(TriggerId::Vm)).unwrap();
        tx.send(InputAction::Resize {
            width: 100,
            height: 30,
        })
        .unwrap();
        tx.send(InputAction::Quit).unwrap();
        tx.send(InputAction::Activate(TriggerId::Nes)).unwrap();

        app.event_loop(rx).await.unwrap();

        // Nothing after Quit is processed.
        assert_eq!(app.controller().selection(), Some(RegionId::Vm));
    }

    #[tokio::test]
    async fn input_thread_stops_on_shutdown() {
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);
        let handle = std::thread::spawn(move || {
            while !flag.load(Ordering::SeqCst) {
                std::thread::sleep(Duration::from_millis(5));
            }
        });

        tokio::time::timeout(
            Duration::from_secs(2),
            stop_input_thread(handle, &shutdown),
        )
        .await
        .expect("input thread did not stop");
        assert!(shutdown.load(Ordering::SeqCst));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn joining_the_input_thread_leaves_the_runtime_free() {
        let shutdown = Arc::new(AtomicBool::new(false));
        let released = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&released);
        let handle = std::thread::spawn(move || {
            while !flag.load(Ordering::SeqCst) {
                std::thread::sleep(Duration::from_millis(5));
            }
        });

        // The thread only exits once a task on this single-threaded runtime runs.
        let release = Arc::clone(&released);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            release.store(true, Ordering::SeqCst);
        });

        tokio::time::timeout(
            Duration::from_secs(2),
            stop_input_thread(handle, &shutdown),
        )
        .await
        .expect("join blocked the runtime");
        assert!(released.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn event_loop_ends_when_sender_drops() {
        let mut app = app();
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(InputAction::Activate(TriggerId::Nes)).unwrap();
        drop(tx);

        app.event_loop(rx).await.unwrap();
        assert_eq!(app.controller().selection(), Some(RegionId::Nes));
    }
}
