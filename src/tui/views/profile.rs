//! Profile view: shows the signed-in user's record and edits it in place.
//!
//! `e` opens the form, Tab moves between fields, Enter or Ctrl+S saves,
//! Esc cancels. Saving stays local.

use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;

use super::error_line;
use crate::core::api::{ResourceSource, User};
use crate::core::listing::FetchStatus;
use crate::core::profile::{ProfileEvent, ProfileField, ProfileState};
use crate::tui::events::{AppEvent, Notification, NotificationLevel};
use crate::tui::services::Services;
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

pub struct ProfileViewState {
    state: ProfileState,
    source: Arc<dyn ResourceSource<User>>,
    form: [InputBuffer; 3],
    field: usize,
    data_tx: mpsc::UnboundedSender<ProfileEvent>,
    data_rx: mpsc::UnboundedReceiver<ProfileEvent>,
}

impl ProfileViewState {
    pub fn new(services: &Services) -> Self {
        let (data_tx, data_rx) = mpsc::unbounded_channel();
        Self {
            state: ProfileState::new(),
            source: services.profile.clone(),
            form: Default::default(),
            field: 0,
            data_tx,
            data_rx,
        }
    }

    pub fn load(&mut self) {
        if self.state.status() == FetchStatus::Idle {
            self.fetch();
        }
    }

    fn fetch(&mut self) {
        let request = self.state.begin_fetch();
        let source = Arc::clone(&self.source);
        let tx = self.data_tx.clone();
        tokio::spawn(async move {
            let event = match source.fetch().await {
                Ok(user) => ProfileEvent::Loaded { request, user },
                Err(error) => ProfileEvent::Failed { request, error },
            };
            let _ = tx.send(event);
        });
    }

    pub fn poll(&mut self) {
        while let Ok(event) = self.data_rx.try_recv() {
            self.state.apply(event);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.status() == FetchStatus::Loading
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    fn current_field(&self) -> ProfileField {
        ProfileField::ALL[self.field]
    }

    fn start_edit(&mut self) -> bool {
        if !self.state.begin_edit() {
            return false;
        }
        if let Some(draft) = self.state.draft() {
            for (buf, field) in self.form.iter_mut().zip(ProfileField::ALL) {
                buf.set(draft.get(field));
            }
        }
        self.field = 0;
        true
    }

    fn save(&mut self, services: &Services) {
        if self.state.save() {
            log::info!("Profile saved locally");
            let _ = services.event_tx.send(AppEvent::Notification(Notification {
                id: 0,
                message: "Profile updated".to_string(),
                level: NotificationLevel::Success,
                ttl_ticks: 60,
            }));
        }
    }

    // ── Input ──────────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event, services: &Services) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        if self.state.is_editing() {
            match (*modifiers, *code) {
                (KeyModifiers::NONE, KeyCode::Esc) => self.state.cancel_edit(),
                (KeyModifiers::NONE, KeyCode::Enter)
                | (KeyModifiers::CONTROL, KeyCode::Char('s')) => self.save(services),
                (_, KeyCode::Tab | KeyCode::Down) => {
                    self.field = (self.field + 1) % ProfileField::ALL.len();
                }
                (_, KeyCode::BackTab | KeyCode::Up) => {
                    self.field = (self.field + ProfileField::ALL.len() - 1) % ProfileField::ALL.len();
                }
                (mods, code) => {
                    let field = self.current_field();
                    let buf = &mut self.form[self.field];
                    if buf.handle_key(code, mods) {
                        let value = buf.text().to_string();
                        self.state.set_field(field, value);
                    }
                }
            }
            return true;
        }

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('e')) => self.start_edit(),
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                self.fetch();
                true
            }
            _ => false,
        }
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = if self.state.is_editing() { "Edit profile" } else { "Profile" };
        let block = theme::block_focused(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(inner);

        if let Some(message) = self.state.error_message() {
            frame.render_widget(Paragraph::new(error_line(message)), chunks[0]);
        }

        let Some(user) = self.state.profile() else {
            let message = match self.state.status() {
                FetchStatus::Error => "Profile could not be loaded",
                _ => "Loading profile…",
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(message, theme::muted())))
                    .alignment(Alignment::Center),
                chunks[1],
            );
            return;
        };

        let mut lines = vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled("  ◉ ", theme::highlight()),
                Span::styled(user.full_name(), theme::heading()),
            ]),
            Line::from(Span::styled(format!("    {}", user.avatar_url), theme::dim())),
            Line::raw(""),
        ];

        for (idx, field) in ProfileField::ALL.into_iter().enumerate() {
            lines.push(self.field_line(idx, field, user));
        }
        frame.render_widget(Paragraph::new(lines), chunks[1]);

        let hints = if self.state.is_editing() {
            " [Tab] next field  [Enter/Ctrl+S] save  [Esc] cancel"
        } else {
            " [e] edit  [r] refresh"
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(hints, theme::key_hint()))),
            chunks[2],
        );
    }

    fn field_line(&self, idx: usize, field: ProfileField, user: &User) -> Line<'static> {
        let label = Span::styled(format!("  {:<12}", field.label()), theme::muted());

        if !self.state.is_editing() {
            let value = match field {
                ProfileField::FirstName => user.first_name.clone(),
                ProfileField::LastName => user.last_name.clone(),
                ProfileField::Email => user.email.clone(),
            };
            return Line::from(vec![label, Span::styled(value, Style::default().fg(theme::TEXT))]);
        }

        let focused = idx == self.field;
        let (before, after) = self.form[idx].split_at_cursor();
        let value_style = if focused {
            Style::default().fg(theme::TEXT).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme::TEXT_MUTED)
        };
        let mut spans = vec![
            if focused {
                Span::styled(format!("▸ {:<12}", field.label()), theme::highlight())
            } else {
                label
            },
            Span::styled(before.to_string(), value_style),
        ];
        if focused {
            spans.push(Span::styled("▏", theme::highlight()));
        }
        spans.push(Span::styled(after.to_string(), value_style));
        Line::from(spans)
    }
}
