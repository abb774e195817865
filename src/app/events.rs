// ABOUTME: Event handling system for keyboard and mouse input driving the wizard

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::state::{AppState, ClickAction, FocusTarget};
use crate::overlay::OverlayId;
use crate::wizard::{Advance, FieldUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    Continue,
    Back,
    FocusNext,
    FocusPrevious,
    Focus(FocusTarget),
    // Text editing of the focused input
    InputChar(char),
    Backspace,
    // Dropdown events
    ToggleOverlay(OverlayId),
    HighlightNext,
    HighlightPrevious,
    SelectHighlighted,
    SelectOption(OverlayId, usize),
    CloseOverlay(OverlayId),
    // Library step events
    AddLibrary,
    RemoveLibrary(String),
    // Network step events
    ToggleCheckbox(FocusTarget),
    TogglePasswordVisibility,
    // Mouse events
    MouseClick { x: u16, y: u16 },
}

pub struct EventHandler;

impl EventHandler {
    /// Handle a left-button press: the overlay tracker sees it first, then the
    /// click target under the pointer decides the resulting event
    pub fn handle_mouse_event(event: AppEvent, state: &mut AppState) -> Option<AppEvent> {
        match event {
            AppEvent::MouseClick { x, y } => Self::handle_click_at(x, y, Instant::now(), state),
            _ => None,
        }
    }

    pub fn handle_click_at(x: u16, y: u16, now: Instant, state: &mut AppState) -> Option<AppEvent> {
        let closing = state.engine.pointer_down(x, y, now);
        if !closing.is_empty() {
            debug!(?closing, "click outside open dropdown");
        }

        match state.click_action_at(x, y)? {
            ClickAction::Focus(target) => Some(AppEvent::Focus(target)),
            ClickAction::ToggleDropdown(id) => Some(AppEvent::ToggleOverlay(id)),
            ClickAction::SelectOption(id, idx) => Some(AppEvent::SelectOption(id, idx)),
            ClickAction::ToggleCheckbox(target) => Some(AppEvent::ToggleCheckbox(target)),
            ClickAction::RemoveLibrary(id) => Some(AppEvent::RemoveLibrary(id)),
            ClickAction::AddLibrary => Some(AppEvent::AddLibrary),
            ClickAction::TogglePasswordVisibility => Some(AppEvent::TogglePasswordVisibility),
            ClickAction::Back => Some(AppEvent::Back),
            ClickAction::Continue => Some(AppEvent::Continue),
        }
    }

    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl {
            return match key_event.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(AppEvent::Quit),
                KeyCode::Char('n') => Some(AppEvent::Continue),
                KeyCode::Char('b') => Some(AppEvent::Back),
                KeyCode::Char('p') => Some(AppEvent::TogglePasswordVisibility),
                KeyCode::Char('d') => state.library_id(state.focus).map(AppEvent::RemoveLibrary),
                _ => None,
            };
        }

        // An open dropdown captures navigation keys
        if let Some(id) = state.open_overlay() {
            match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => return Some(AppEvent::HighlightPrevious),
                KeyCode::Down | KeyCode::Char('j') => return Some(AppEvent::HighlightNext),
                KeyCode::Enter | KeyCode::Char(' ') => return Some(AppEvent::SelectHighlighted),
                KeyCode::Esc => return Some(AppEvent::CloseOverlay(id)),
                _ => {}
            }
        }

        let focus = state.focus;
        match key_event.code {
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::FocusPrevious),
            KeyCode::Esc | KeyCode::PageUp => Some(AppEvent::Back),
            KeyCode::PageDown => Some(AppEvent::Continue),
            KeyCode::Enter => match focus {
                FocusTarget::Dropdown(id) => Some(AppEvent::ToggleOverlay(id)),
                FocusTarget::AddLibrary => Some(AppEvent::AddLibrary),
                target if target.is_checkbox() => Some(AppEvent::ToggleCheckbox(target)),
                _ => Some(AppEvent::Continue),
            },
            KeyCode::Char(' ') if !focus.accepts_text() => match focus {
                FocusTarget::Dropdown(id) => Some(AppEvent::ToggleOverlay(id)),
                target if target.is_checkbox() => Some(AppEvent::ToggleCheckbox(target)),
                _ => None,
            },
            KeyCode::Char(c) if focus.accepts_text() => Some(AppEvent::InputChar(c)),
            KeyCode::Backspace if focus.accepts_text() => Some(AppEvent::Backspace),
            KeyCode::Delete => state.library_id(focus).map(AppEvent::RemoveLibrary),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => {
                state.should_quit = true;
            }
            AppEvent::Continue => match state.engine.advance() {
                Ok(Advance::Moved(_)) => state.reset_focus(),
                Ok(Advance::Completed | Advance::AlreadyCompleted) => {}
                // The footer renders the unmet requirement while continue is disabled
                Err(_) => {}
            },
            AppEvent::Back => {
                if state.engine.retreat() {
                    state.reset_focus();
                }
            }
            AppEvent::FocusNext => state.focus_next(),
            AppEvent::FocusPrevious => state.focus_previous(),
            AppEvent::Focus(target) => {
                if state.focus_order().contains(&target) {
                    state.focus = target;
                }
            }
            AppEvent::InputChar(c) => Self::edit_focused(state, |value| value.push(c)),
            AppEvent::Backspace => Self::edit_focused(state, |value| {
                value.pop();
            }),
            AppEvent::ToggleOverlay(id) => state.toggle_overlay(id),
            AppEvent::HighlightNext => state.move_highlight(1),
            AppEvent::HighlightPrevious => state.move_highlight(-1),
            AppEvent::SelectHighlighted => {
                if let Some(id) = state.open_overlay() {
                    let idx = state.highlighted_option;
                    state.select_option(id, idx);
                }
            }
            AppEvent::SelectOption(id, idx) => state.select_option(id, idx),
            AppEvent::CloseOverlay(id) => state.engine.state_mut().overlays_mut().close_now(id),
            AppEvent::AddLibrary => {
                state.engine.add_library();
            }
            AppEvent::RemoveLibrary(id) => {
                state.engine.remove_library(&id);
                state.clamp_focus();
            }
            AppEvent::ToggleCheckbox(target) => {
                let fields = state.engine.fields();
                let update = match target {
                    FocusTarget::AllowRemoteNetwork => {
                        FieldUpdate::AllowRemoteNetwork(!fields.allow_remote_network)
                    }
                    FocusTarget::UseUpnp => FieldUpdate::UseUpnp(!fields.use_upnp),
                    _ => return,
                };
                state.engine.set_field(update);
                state.focus = target;
            }
            AppEvent::TogglePasswordVisibility => {
                state.show_password = !state.show_password;
            }
            AppEvent::MouseClick { .. } => {
                // These are processed by handle_mouse_event
            }
        }
    }

    /// Apply an edit to the text behind the focused input
    fn edit_focused(state: &mut AppState, edit: impl FnOnce(&mut String)) {
        let fields = state.engine.fields();
        match state.focus {
            FocusTarget::ServerName => {
                let mut value = fields.server_name.clone();
                edit(&mut value);
                state.engine.set_field(FieldUpdate::ServerName(value));
            }
            FocusTarget::AdminEmail => {
                let mut value = fields.admin_email.clone();
                edit(&mut value);
                state.engine.set_field(FieldUpdate::AdminEmail(value));
            }
            FocusTarget::AdminName => {
                let mut value = fields.admin_name.clone();
                edit(&mut value);
                state.engine.set_field(FieldUpdate::AdminName(value));
            }
            FocusTarget::AdminPassword => {
                let mut value = fields.admin_password.clone();
                edit(&mut value);
                state.engine.set_field(FieldUpdate::AdminPassword(value));
            }
            FocusTarget::Library(idx) => {
                let Some(lib) = state.engine.state().libraries().get(idx) else {
                    return;
                };
                let id = lib.id.clone();
                let mut name = lib.name.clone();
                edit(&mut name);
                state.engine.rename_library(&id, name);
            }
            _ => {}
        }
    }
}
