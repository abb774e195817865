// ABOUTME: Main setup wizard component
// Renders the step-based wizard and records dropdown anchors and click targets

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::state::{AppState, ClickAction, FocusTarget};
use crate::overlay::{OverlayAnchor, OverlayId};
use crate::wizard::catalog::DEMO_FILE_STRUCTURE;
use crate::wizard::WizardStep;

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const VIOLET: Color = Color::Rgb(139, 92, 246);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

const INPUT_HEIGHT: u16 = 3;
const LIBRARY_CARD_HEIGHT: u16 = INPUT_HEIGHT + 6;
const REMOVE_BUTTON_WIDTH: u16 = 7;
const PASSWORD_TOGGLE_WIDTH: u16 = 8;

/// The setup wizard component
pub struct OnboardingComponent;

impl OnboardingComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &mut AppState) {
        state.click_targets.clear();
        state.engine.state_mut().overlays_mut().clear_anchors();

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header with progress
                Constraint::Length(3), // Step title
                Constraint::Min(10),   // Step content
                Constraint::Length(4), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        self.render_step_title(frame, layout[1], state);
        self.render_step_content(frame, layout[2], state);
        self.render_navigation(frame, layout[3], state);
    }

    /// Render the header with step progress
    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("♫ ", Style::default().fg(VIOLET)),
            Span::styled("Aristo", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" Setup", Style::default().fg(SOFT_WHITE)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_progress(frame, header_layout[1], state);
    }

    /// Render one progress segment per step, filled up to the current one
    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let current = state.current_step().number();
        let segment = "━━━━━━";

        let mut spans = Vec::new();
        for step in WizardStep::all() {
            let style = if step.number() <= current {
                Style::default().fg(VIOLET)
            } else {
                Style::default().fg(SUBDUED_BORDER)
            };
            spans.push(Span::styled(segment, style));
            if !step.is_terminal() {
                spans.push(Span::raw(" "));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
    }

    fn render_step_title(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let step = state.current_step();
        let lines = vec![
            Line::from(Span::styled(
                step.title(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(step.description(), Style::default().fg(MUTED_GRAY))),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    /// Render the main step content
    fn render_step_content(&self, frame: &mut Frame, area: Rect, state: &mut AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let inner = Rect {
            x: inner.x.saturating_add(1),
            width: inner.width.saturating_sub(2),
            ..inner
        };

        match state.current_step() {
            WizardStep::ServerSetup => self.render_server_setup(frame, inner, state),
            WizardStep::AdminAccount => self.render_admin_account(frame, inner, state),
            WizardStep::MusicLibraries => self.render_libraries(frame, inner, state),
            WizardStep::MetadataSettings => self.render_metadata(frame, inner, state),
            WizardStep::NetworkSettings => self.render_network(frame, inner, state),
            WizardStep::SetupComplete => self.render_complete(frame, inner, state),
        }
    }

    fn render_server_setup(&self, frame: &mut Frame, area: Rect, state: &mut AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_label(frame, rows[0], OverlayId::Language.label());
        self.render_dropdown_button(frame, rows[1], OverlayId::Language, state);

        self.render_label(frame, rows[3], "Server Name");
        let value = state.engine.fields().server_name.clone();
        self.render_text_input(
            frame,
            rows[4],
            FocusTarget::ServerName,
            &value,
            "Enter your server name",
            state,
        );

        // Lists last so they draw over the inputs below
        self.render_dropdown_list(frame, rows[1], area, OverlayId::Language, state);
    }

    fn render_admin_account(&self, frame: &mut Frame, area: Rect, state: &mut AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        let fields = state.engine.fields().clone();

        self.render_label(frame, rows[0], "Email");
        self.render_text_input(frame, rows[1], FocusTarget::AdminEmail, &fields.admin_email, "Enter email", state);

        self.render_label(frame, rows[2], "Username");
        self.render_text_input(frame, rows[3], FocusTarget::AdminName, &fields.admin_name, "Enter username", state);

        self.render_label(frame, rows[4], "Password");
        self.render_text_input(
            frame,
            rows[5],
            FocusTarget::AdminPassword,
            &fields.admin_password,
            "Enter password",
            state,
        );
    }

    fn render_libraries(&self, frame: &mut Frame, area: Rect, state: &mut AppState) {
        let libraries = state.engine.state().libraries().to_vec();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        let list_area = rows[0];

        let fit = (list_area.height / LIBRARY_CARD_HEIGHT).max(1) as usize;
        let first = match state.focus {
            FocusTarget::Library(idx) if idx >= fit => idx + 1 - fit,
            _ => 0,
        };

        if libraries.is_empty() {
            let hint = Paragraph::new(Line::from(Span::styled(
                "No music libraries yet. Add one to continue.",
                Style::default().fg(MUTED_GRAY),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(hint, list_area);
        }

        let mut y = list_area.y;
        for (idx, library) in libraries.iter().enumerate().skip(first).take(fit) {
            let height = LIBRARY_CARD_HEIGHT.min(list_area.bottom().saturating_sub(y));
            if height < INPUT_HEIGHT + 2 {
                break;
            }
            let card = Rect::new(list_area.x, y, list_area.width, height);
            y = y.saturating_add(height);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER));
            let inner = block.inner(card);
            frame.render_widget(block, card);

            let card_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)])
                .split(inner);
            let name_row = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(10), Constraint::Length(REMOVE_BUTTON_WIDTH)])
                .split(card_rows[0]);

            self.render_text_input(
                frame,
                name_row[0],
                FocusTarget::Library(idx),
                &library.name,
                "Library name",
                state,
            );

            let remove = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(" [✕] ", Style::default().fg(ERROR_RED))),
            ]);
            frame.render_widget(remove, name_row[1]);
            state.record_click_target(name_row[1], ClickAction::RemoveLibrary(library.id.clone()));

            let paths: Vec<Line> = DEMO_FILE_STRUCTURE
                .iter()
                .map(|path| {
                    let selected = library.selected_paths.iter().any(|p| p == path);
                    let (marker, style) = if selected {
                        ("▣ ", Style::default().fg(VIOLET))
                    } else {
                        ("▢ ", Style::default().fg(MUTED_GRAY))
                    };
                    Line::from(vec![Span::styled(marker, style), Span::styled(*path, style)])
                })
                .collect();
            frame.render_widget(Paragraph::new(paths), card_rows[1]);
        }

        let hidden = libraries.len().saturating_sub(first + fit);
        let add_focused = state.focus == FocusTarget::AddLibrary;
        let mut spans = vec![Span::styled(
            "[ + Add Music Library ]",
            if add_focused {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(SOFT_WHITE)
            },
        )];
        if hidden > 0 || first > 0 {
            spans.push(Span::styled(
                format!("   ({} of {} shown)", libraries.len() - hidden - first, libraries.len()),
                Style::default().fg(MUTED_GRAY),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), rows[1]);
        state.record_click_target(rows[1], ClickAction::AddLibrary);
    }

    fn render_metadata(&self, frame: &mut Frame, area: Rect, state: &mut AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_label(frame, rows[0], OverlayId::MetadataLanguage.label());
        self.render_dropdown_button(frame, rows[1], OverlayId::MetadataLanguage, state);

        self.render_label(frame, rows[3], OverlayId::Region.label());
        self.render_dropdown_button(frame, rows[4], OverlayId::Region, state);

        self.render_dropdown_list(frame, rows[1], area, OverlayId::MetadataLanguage, state);
        self.render_dropdown_list(frame, rows[4], area, OverlayId::Region, state);
    }

    fn render_network(&self, frame: &mut Frame, area: Rect, state: &mut AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        let fields = state.engine.fields().clone();
        self.render_checkbox(
            frame,
            rows[0],
            FocusTarget::AllowRemoteNetwork,
            fields.allow_remote_network,
            "Allow Remote Network Connection",
            "If unchecked, will block any remote connections to the server.",
            state,
        );
        self.render_checkbox(
            frame,
            rows[1],
            FocusTarget::UseUpnp,
            fields.use_upnp,
            "Automatically Forward Public Ports via UPnP",
            "This may not work with some router models or network configurations. \
             Changes will not apply until after a server restart.",
            state,
        );
    }

    fn render_complete(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let fields = state.engine.fields();
        let library_count = state.engine.state().libraries().len();

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("✓", Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(vec![
                Span::styled(fields.server_name.clone(), Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled(" is ready to go", Style::default().fg(SOFT_WHITE)),
            ]),
            Line::from(Span::styled(
                format!(
                    "{} music {}",
                    library_count,
                    if library_count == 1 { "library" } else { "libraries" }
                ),
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "You can now log in with your admin account and start managing your media libraries.",
                Style::default().fg(SOFT_WHITE),
            )),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
            area,
        );
    }

    /// Render navigation buttons, the blocking hint and the step counter
    fn render_navigation(&self, frame: &mut Frame, area: Rect, state: &mut AppState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let step = state.current_step();
        let can_continue = state.engine.can_continue();

        let back_label = "[ Back ]";
        let continue_label = format!("[ {} ]", step.continue_label());
        let show_back = step.previous().is_some();

        let gap: u16 = 3;
        let back_width = if show_back { back_label.chars().count() as u16 + gap } else { 0 };
        let continue_width = continue_label.chars().count() as u16;
        let total = back_width + continue_width;
        let mut x = rows[0].x + rows[0].width.saturating_sub(total) / 2;

        if show_back {
            let back_area = Rect::new(x, rows[0].y, back_label.chars().count() as u16, 1).intersection(rows[0]);
            frame.render_widget(
                Paragraph::new(Span::styled(back_label, Style::default().fg(SOFT_WHITE))),
                back_area,
            );
            state.record_click_target(back_area, ClickAction::Back);
            x += back_width;
        }

        let continue_style = if can_continue {
            Style::default().fg(DARK_BG).bg(VIOLET).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_GRAY)
        };
        let continue_area = Rect::new(x, rows[0].y, continue_width, 1).intersection(rows[0]);
        frame.render_widget(Paragraph::new(Span::styled(continue_label, continue_style)), continue_area);
        state.record_click_target(continue_area, ClickAction::Continue);

        let hint = match state.engine.blocking_issue() {
            Some(issue) => Line::from(Span::styled(issue.to_string(), Style::default().fg(ERROR_RED))),
            None => Line::from(vec![
                Span::styled("[", Style::default().fg(SUBDUED_BORDER)),
                Span::styled("Tab", Style::default().fg(GOLD)),
                Span::styled("]", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(" Next field  ", Style::default().fg(MUTED_GRAY)),
                Span::styled("[", Style::default().fg(SUBDUED_BORDER)),
                Span::styled("Esc", Style::default().fg(GOLD)),
                Span::styled("]", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(" Back  ", Style::default().fg(MUTED_GRAY)),
                Span::styled("[", Style::default().fg(SUBDUED_BORDER)),
                Span::styled("Ctrl+C", Style::default().fg(GOLD)),
                Span::styled("]", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(" Quit", Style::default().fg(MUTED_GRAY)),
            ]),
        };
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), rows[1]);

        let counter = Paragraph::new(Span::styled(
            format!("Step {} of {}", step.number(), WizardStep::total()),
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(counter, rows[2]);
    }

    fn render_label(&self, frame: &mut Frame, area: Rect, label: &str) {
        frame.render_widget(
            Paragraph::new(Span::styled(label.to_string(), Style::default().fg(MUTED_GRAY))),
            area,
        );
    }

    fn render_text_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        target: FocusTarget,
        value: &str,
        placeholder: &str,
        state: &mut AppState,
    ) {
        let focused = state.focus == target;
        let masked = target == FocusTarget::AdminPassword && !state.show_password;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { GOLD } else { SUBDUED_BORDER }));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = if value.is_empty() && !focused {
            vec![Span::styled(placeholder.to_string(), Style::default().fg(MUTED_GRAY))]
        } else if masked {
            vec![Span::styled("•".repeat(value.chars().count()), Style::default().fg(SOFT_WHITE))]
        } else {
            vec![Span::styled(value.to_string(), Style::default().fg(SOFT_WHITE))]
        };
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(GOLD)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
        state.record_click_target(area, ClickAction::Focus(target));

        if target == FocusTarget::AdminPassword && inner.width > PASSWORD_TOGGLE_WIDTH {
            let toggle_area = Rect::new(
                inner.right() - PASSWORD_TOGGLE_WIDTH,
                inner.y,
                PASSWORD_TOGGLE_WIDTH,
                1,
            );
            let label = if state.show_password { "[hide]" } else { "[show]" };
            frame.render_widget(
                Paragraph::new(Span::styled(label, Style::default().fg(CORNFLOWER_BLUE)))
                    .alignment(Alignment::Right),
                toggle_area,
            );
            state.record_click_target(toggle_area, ClickAction::TogglePasswordVisibility);
        }
    }

    fn render_checkbox(
        &self,
        frame: &mut Frame,
        area: Rect,
        target: FocusTarget,
        checked: bool,
        label: &str,
        description: &str,
        state: &mut AppState,
    ) {
        let focused = state.focus == target;
        let (mark, mark_style) = if checked {
            ("[✓] ", Style::default().fg(VIOLET).add_modifier(Modifier::BOLD))
        } else {
            ("[ ] ", Style::default().fg(MUTED_GRAY))
        };
        let label_style = if focused {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };

        let lines = vec![
            Line::from(vec![Span::styled(mark, mark_style), Span::styled(label.to_string(), label_style)]),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(description.to_string(), Style::default().fg(MUTED_GRAY)),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
        state.record_click_target(area, ClickAction::ToggleCheckbox(target));
    }

    fn render_dropdown_button(&self, frame: &mut Frame, area: Rect, id: OverlayId, state: &mut AppState) {
        let focused = state.focus == FocusTarget::Dropdown(id);
        let flags = state.engine.state().overlays().flags(id);
        let value = id.catalog().display_name(state.engine.overlay_value(id)).to_string();

        let border = if flags.open && !flags.closing {
            CORNFLOWER_BLUE
        } else if focused {
            GOLD
        } else {
            SUBDUED_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chevron = if flags.open && !flags.closing { "▴" } else { "▾" };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(value, Style::default().fg(SOFT_WHITE))),
            columns[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(chevron, Style::default().fg(MUTED_GRAY))),
            columns[1],
        );

        state.record_click_target(area, ClickAction::ToggleDropdown(id));
        state
            .engine
            .state_mut()
            .overlays_mut()
            .set_anchor(OverlayAnchor::new(id, area));
    }

    /// Render the option list of an open dropdown below its button, clipped
    /// to `bounds`, and widen the anchor to cover it
    fn render_dropdown_list(
        &self,
        frame: &mut Frame,
        button: Rect,
        bounds: Rect,
        id: OverlayId,
        state: &mut AppState,
    ) {
        let flags = state.engine.state().overlays().flags(id);
        if !flags.open {
            return;
        }

        let entries = id.catalog().entries();
        let available = bounds.bottom().saturating_sub(button.bottom());
        let height = (entries.len() as u16 + 2).min(available);
        if height < 3 {
            return;
        }

        let list_area = Rect::new(button.x, button.bottom(), button.width, height);
        frame.render_widget(Clear, list_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if flags.closing { SUBDUED_BORDER } else { CORNFLOWER_BLUE }))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(list_area);
        frame.render_widget(block, list_area);

        let visible = inner.height as usize;
        let highlighted = state.highlighted_option.min(entries.len().saturating_sub(1));
        let first = if highlighted >= visible { highlighted + 1 - visible } else { 0 };
        let current = state.engine.overlay_value(id).to_string();

        for (row, (idx, entry)) in entries.iter().enumerate().skip(first).take(visible).enumerate() {
            let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            let is_highlighted = idx == highlighted;
            let mut style = if entry.code == current {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(SOFT_WHITE)
            };
            if flags.closing {
                style = Style::default().fg(MUTED_GRAY);
            } else if is_highlighted {
                style = style.bg(SUBDUED_BORDER);
            }
            let marker = if entry.code == current { "▌" } else { " " };

            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(VIOLET)),
                    Span::styled(format!(" {}", entry.name), style),
                ]))
                .style(style),
                row_area,
            );
            state.record_click_target(row_area, ClickAction::SelectOption(id, idx));
        }

        state
            .engine
            .state_mut()
            .overlays_mut()
            .set_anchor(OverlayAnchor::new(id, button.union(list_area)));
    }
}

impl Default for OnboardingComponent {
    fn default() -> Self {
        Self::new()
    }
}
