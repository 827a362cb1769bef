//! Sign-in screen shown while the session is unauthenticated.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::core::session::Session;
use crate::tui::layout::centered_rect;
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginField {
    Email,
    Password,
}

pub struct LoginState {
    email: InputBuffer,
    password: InputBuffer,
    field: LoginField,
    error: Option<String>,
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            email: InputBuffer::new(),
            password: InputBuffer::new(),
            field: LoginField::Email,
            error: None,
        }
    }

    /// Route a key into the form. Returns `true` when the session became
    /// authenticated.
    pub fn handle_input(&mut self, event: &Event, session: &mut Session) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        match code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.field = match self.field {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
                false
            }
            KeyCode::Enter => self.submit(session),
            KeyCode::Esc => {
                self.error = None;
                false
            }
            _ => {
                let buf = match self.field {
                    LoginField::Email => &mut self.email,
                    LoginField::Password => &mut self.password,
                };
                if buf.handle_key(*code, *modifiers) {
                    self.error = None;
                }
                false
            }
        }
    }

    fn submit(&mut self, session: &mut Session) -> bool {
        match session.login(self.email.text(), self.password.text()) {
            Ok(()) => {
                self.password.clear();
                self.error = None;
                true
            }
            Err(e) => {
                log::debug!("Login rejected: {e}");
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(50, 50, area);
        let block = theme::block_focused("Sign in").title_alignment(Alignment::Center);
        let inner = block.inner(modal);
        frame.render_widget(Clear, modal);
        frame.render_widget(block, modal);

        let masked = "•".repeat(self.password.text().chars().count());
        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Dashboard", theme::heading())),
            Line::from(Span::styled(" Sign in to continue", theme::muted())),
            Line::raw(""),
            self.field_line("Email", self.email.text(), self.field == LoginField::Email),
            Line::raw(""),
            self.field_line("Password", &masked, self.field == LoginField::Password),
            Line::raw(""),
        ];

        if let Some(ref error) = self.error {
            lines.push(Line::from(Span::styled(format!(" {error}"), theme::error())));
            lines.push(Line::raw(""));
        }

        lines.push(Line::from(vec![
            Span::styled(" Tab", theme::highlight()),
            Span::styled(" switch field  ", theme::key_hint()),
            Span::styled("Enter", theme::highlight()),
            Span::styled(" sign in  ", theme::key_hint()),
            Span::styled("Ctrl+C", theme::highlight()),
            Span::styled(" quit", theme::key_hint()),
        ]));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn field_line(&self, label: &str, value: &str, focused: bool) -> Line<'static> {
        let label_style = if focused { theme::highlight() } else { theme::muted() };
        let caret = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(format!(" {label:<10}"), label_style),
            Span::styled(format!("{value}{caret}"), Style::default().fg(theme::TEXT)),
        ])
    }
}
