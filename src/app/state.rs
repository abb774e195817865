// ABOUTME: Application state for the terminal front end
// Wraps the wizard engine with focus, dropdown highlight and click targets

use std::time::Instant;

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::overlay::OverlayId;
use crate::overlay::anchor::rect_contains;
use crate::wizard::{CompletionPayload, WizardEngine, WizardOptions, WizardStep};

/// Interactive element that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Dropdown(OverlayId),
    ServerName,
    AdminEmail,
    AdminName,
    AdminPassword,
    /// Name input of the library at this index
    Library(usize),
    AddLibrary,
    AllowRemoteNetwork,
    UseUpnp,
    /// Steps without inputs
    Navigation,
}

impl FocusTarget {
    /// Whether typed characters edit this element
    pub fn accepts_text(&self) -> bool {
        matches!(
            self,
            Self::ServerName | Self::AdminEmail | Self::AdminName | Self::AdminPassword | Self::Library(_)
        )
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, Self::AllowRemoteNetwork | Self::UseUpnp)
    }
}

/// What a click on a recorded region does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    Focus(FocusTarget),
    ToggleDropdown(OverlayId),
    SelectOption(OverlayId, usize),
    ToggleCheckbox(FocusTarget),
    RemoveLibrary(String),
    AddLibrary,
    TogglePasswordVisibility,
    Back,
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    pub area: Rect,
    pub action: ClickAction,
}

#[derive(Debug)]
pub struct AppState {
    pub engine: WizardEngine,
    pub focus: FocusTarget,
    /// Highlighted option of the open dropdown
    pub highlighted_option: usize,
    pub show_password: bool,
    /// Clickable regions recorded by the last render, topmost last
    pub click_targets: Vec<ClickTarget>,
    pub completed: Option<CompletionPayload>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(engine: WizardEngine) -> Self {
        let focus = Self::focus_order_for(engine.current_step(), engine.state().libraries().len())[0];
        Self {
            engine,
            focus,
            highlighted_option: 0,
            show_password: false,
            click_targets: Vec::new(),
            completed: None,
            should_quit: false,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.engine.current_step()
    }

    /// Focusable elements of a step, in tab order
    pub fn focus_order_for(step: WizardStep, library_count: usize) -> Vec<FocusTarget> {
        match step {
            WizardStep::ServerSetup => vec![
                FocusTarget::Dropdown(OverlayId::Language),
                FocusTarget::ServerName,
            ],
            WizardStep::AdminAccount => vec![
                FocusTarget::AdminEmail,
                FocusTarget::AdminName,
                FocusTarget::AdminPassword,
            ],
            WizardStep::MusicLibraries => (0..library_count)
                .map(FocusTarget::Library)
                .chain(std::iter::once(FocusTarget::AddLibrary))
                .collect(),
            WizardStep::MetadataSettings => vec![
                FocusTarget::Dropdown(OverlayId::MetadataLanguage),
                FocusTarget::Dropdown(OverlayId::Region),
            ],
            WizardStep::NetworkSettings => vec![
                FocusTarget::AllowRemoteNetwork,
                FocusTarget::UseUpnp,
            ],
            WizardStep::SetupComplete => vec![FocusTarget::Navigation],
        }
    }

    pub fn focus_order(&self) -> Vec<FocusTarget> {
        Self::focus_order_for(self.current_step(), self.engine.state().libraries().len())
    }

    /// Put focus on the first element of the current step
    pub fn reset_focus(&mut self) {
        self.focus = self.focus_order()[0];
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        let len = order.len() as isize;
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.focus = order[next];
    }

    /// Open dropdown shown on the current step, if any
    pub fn open_overlay(&self) -> Option<OverlayId> {
        let step = self.current_step();
        OverlayId::all()
            .iter()
            .copied()
            .find(|id| id.step() == step && self.engine.state().overlays().is_open(*id))
    }

    /// Open or close a dropdown from its own control
    pub fn toggle_overlay(&mut self, id: OverlayId) {
        self.engine.toggle_overlay(id);
        if self.engine.state().overlays().is_open(id) {
            self.highlighted_option = id
                .catalog()
                .position(self.engine.overlay_value(id))
                .unwrap_or(0);
        }
        self.focus = FocusTarget::Dropdown(id);
    }

    pub fn move_highlight(&mut self, delta: isize) {
        let Some(id) = self.open_overlay() else {
            return;
        };
        let len = id.catalog().entries().len() as isize;
        self.highlighted_option = (self.highlighted_option as isize + delta).rem_euclid(len) as usize;
    }

    /// Commit an option of a dropdown by index
    pub fn select_option(&mut self, id: OverlayId, index: usize) {
        if let Some(entry) = id.catalog().entries().get(index) {
            self.engine.select_option(id, entry.code);
        } else {
            self.engine.state_mut().overlays_mut().close_now(id);
        }
        self.focus = FocusTarget::Dropdown(id);
    }

    /// Id of the library behind a focus target
    pub fn library_id(&self, focus: FocusTarget) -> Option<String> {
        match focus {
            FocusTarget::Library(idx) => self.engine.state().libraries().get(idx).map(|lib| lib.id.clone()),
            _ => None,
        }
    }

    /// Keep focus on an existing element after the library list changed
    pub fn clamp_focus(&mut self) {
        if !self.focus_order().contains(&self.focus) {
            let count = self.engine.state().libraries().len();
            self.focus = match self.focus {
                FocusTarget::Library(_) if count > 0 => FocusTarget::Library(count - 1),
                FocusTarget::Library(_) => FocusTarget::AddLibrary,
                _ => self.focus_order()[0],
            };
        }
    }

    /// Action of the topmost click target under a cell
    pub fn click_action_at(&self, column: u16, row: u16) -> Option<ClickAction> {
        self.click_targets
            .iter()
            .rev()
            .find(|target| rect_contains(target.area, column, row))
            .map(|target| target.action.clone())
    }

    pub fn record_click_target(&mut self, area: Rect, action: ClickAction) {
        self.click_targets.push(ClickTarget { area, action });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(WizardEngine::default())
    }
}

pub struct App {
    pub state: AppState,
    completions: mpsc::UnboundedReceiver<CompletionPayload>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let (tx, completions) = mpsc::unbounded_channel();
        let options = WizardOptions::new()
            .defaults(config.locale_defaults())
            .on_complete(move |payload: CompletionPayload| {
                if tx.send(payload).is_err() {
                    warn!("completion receiver dropped, payload discarded");
                }
            });

        Self {
            state: AppState::new(WizardEngine::new(options)),
            completions,
        }
    }

    /// Finish due overlay closes and pick up a delivered payload
    pub fn tick(&mut self, now: Instant) {
        self.state.engine.tick(now);
        self.poll_completion();
    }

    pub fn poll_completion(&mut self) {
        if let Ok(payload) = self.completions.try_recv() {
            info!(server_name = %payload.server_name, "setup finished, leaving wizard");
            self.state.completed = Some(payload);
            self.state.should_quit = true;
        }
    }

    /// Earliest moment the loop must wake up for a deferred overlay close
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.engine.state().overlays().next_deadline()
    }

    /// Hand the payload to the caller once the app has finished
    pub fn take_completion(&mut self) -> Option<CompletionPayload> {
        self.state.completed.take()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
