//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::settings::Settings;
use crate::onboarding::{CompletionModal, FlowController, ScrollLock, StepId};

use super::screens::{self, ScreenAction, StepScreen};

/// Lines moved per PgUp/PgDn
const SCROLL_STEP: u16 = 5;

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Step index and modal flag
    pub flow: FlowController,

    /// Screen for the active step
    pub screen: Box<dyn StepScreen>,

    /// Completion modal, following `flow.modal_visible()`
    pub modal: CompletionModal,

    /// Page-level scroll lock shared with the modal
    pub scroll_lock: ScrollLock,

    /// Vertical scroll offset of the step body
    pub body_scroll: u16,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App on the first step
    pub fn new(settings: &'a Settings) -> Self {
        let flow = FlowController::new();
        let scroll_lock = ScrollLock::new();
        Self {
            settings,
            screen: screens::for_step(flow.current_step()),
            flow,
            modal: CompletionModal::new(scroll_lock.clone()),
            scroll_lock,
            body_scroll: 0,
            show_help: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn current_step(&self) -> StepId {
        self.flow.current_step()
    }

    /// Apply what a screen asked for
    pub fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::Ignored | ScreenAction::Handled => {}
            ScreenAction::Advance(answer) => match self.flow.submit(answer) {
                Ok(next) => {
                    self.screen = screens::for_step(next);
                    self.body_scroll = 0;
                    self.clear_status();
                }
                Err(e) => self.set_status(e.to_string()),
            },
            ScreenAction::ToggleModal => {
                self.flow.toggle_modal();
                self.sync_modal();
            }
        }
    }

    /// Make the modal follow the controller's visibility flag
    pub fn sync_modal(&mut self) {
        self.modal.sync(self.flow.modal_visible());
    }

    /// The modal's "OK" button
    pub fn acknowledge_modal(&mut self) {
        self.modal.acknowledge(&mut self.flow);
    }

    /// Scroll the body up; no-op while the scroll lock is held
    pub fn scroll_up(&mut self) -> bool {
        if self.scroll_lock.is_locked() {
            return false;
        }
        self.body_scroll = self.body_scroll.saturating_sub(SCROLL_STEP);
        true
    }

    /// Scroll the body down; no-op while the scroll lock is held
    pub fn scroll_down(&mut self) -> bool {
        if self.scroll_lock.is_locked() {
            return false;
        }
        self.body_scroll = self.body_scroll.saturating_add(SCROLL_STEP);
        true
    }

    /// Keep the scroll offset within the rendered content
    pub fn clamp_scroll(&mut self, content_height: usize, viewport_height: u16) {
        let max = content_height.saturating_sub(viewport_height as usize);
        self.body_scroll = self.body_scroll.min(max.min(u16::MAX as usize) as u16);
    }

    /// Toggle the help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
