//! User directory: server-paged table with client-side search.
//!
//! `h`/`l` page back and forward, `/` searches the current page by name or
//! email, `r` refetches the current page.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::{error_line, render_search_bar, truncate};
use crate::core::api::User;
use crate::core::listing::{FetchStatus, ListController};
use crate::tui::services::Services;
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

pub struct UsersViewState {
    list: ListController<User>,
    selected: usize,
    search: InputBuffer,
    searching: bool,
}

impl UsersViewState {
    pub fn new(services: &Services) -> Self {
        Self {
            list: ListController::new(services.users.clone()),
            selected: 0,
            search: InputBuffer::new(),
            searching: false,
        }
    }

    /// Fetch page 1 the first time the view is shown.
    pub fn load(&mut self) {
        if self.list.mount() {
            log::debug!("Users view mounted");
        }
    }

    pub fn poll(&mut self) {
        if self.list.poll() > 0 {
            self.clamp_selection();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.list.state().is_loading()
    }

    fn clamp_selection(&mut self) {
        let len = self.list.visible_items().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    // ── Input ──────────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        if self.searching {
            return self.handle_search_input(*code, *modifiers);
        }

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                let len = self.list.visible_items().len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.selected = self.selected.saturating_sub(1);
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('h') | KeyCode::Left) => {
                if self.list.previous() {
                    self.selected = 0;
                }
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('l') | KeyCode::Right) => {
                if self.list.next() {
                    self.selected = 0;
                }
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('/')) => {
                self.searching = true;
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                self.list.refresh();
                true
            }
            (KeyModifiers::NONE, KeyCode::Esc) if !self.search.text().is_empty() => {
                self.search.clear();
                self.list.set_query("");
                true
            }
            _ => false,
        }
    }

    fn handle_search_input(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Enter => self.searching = false,
            KeyCode::Esc => {
                self.searching = false;
                self.search.clear();
                self.list.set_query("");
                self.clamp_selection();
            }
            _ => {
                if self.search.handle_key(code, modifiers) {
                    self.list.set_query(self.search.text());
                    self.selected = 0;
                }
            }
        }
        true
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let state = self.list.state();
        let has_error = state.status() == FetchStatus::Error;

        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(if has_error { 1 } else { 0 }),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

        render_search_bar(
            frame,
            chunks[0],
            &self.search,
            self.searching,
            "Search users by name or email...",
        );

        if let Some(message) = state.error_message() {
            frame.render_widget(Paragraph::new(error_line(message)), chunks[1]);
        }

        self.render_table(frame, chunks[2]);
        self.render_pager(frame, chunks[3]);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let state = self.list.state();
        let block = theme::block_focused("Users");

        if state.raw_items().is_empty() {
            let message = match state.status() {
                FetchStatus::Idle | FetchStatus::Loading => "Loading users…",
                FetchStatus::Error => "Users could not be loaded",
                FetchStatus::Loaded => "No users on this page",
            };
            frame.render_widget(
                Paragraph::new(vec![Line::raw(""), Line::from(Span::styled(message, theme::muted()))])
                    .alignment(Alignment::Center)
                    .block(block),
                area,
            );
            return;
        }

        let visible = self.list.visible_items();
        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::raw(""),
                    Line::from(Span::styled(
                        format!("No users found matching \"{}\"", state.query()),
                        theme::muted(),
                    )),
                ])
                .alignment(Alignment::Center)
                .block(block),
                area,
            );
            return;
        }

        let rows: Vec<Row> = visible
            .iter()
            .map(|user| {
                Row::new(vec![
                    Cell::from(truncate(&user.full_name(), 28)),
                    Cell::from(truncate(&user.email, 36)),
                    Cell::from(Span::styled(user.avatar_url.clone(), theme::dim())),
                ])
            })
            .collect();

        let header = Row::new(vec!["Name", "Email", "Avatar"]).style(theme::heading());
        let table = Table::new(
            rows,
            [
                Constraint::Length(28),
                Constraint::Length(36),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(theme::highlight())
        .highlight_symbol("▸ ");

        let mut table_state = TableState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_pager(&self, frame: &mut Frame, area: Rect) {
        let state = self.list.state();
        let pagination = state.pagination();

        let arrow = |enabled: bool, glyph: &'static str| {
            if enabled {
                Span::styled(glyph, theme::highlight())
            } else {
                Span::styled(glyph, theme::dim())
            }
        };

        let mut spans = vec![
            Span::raw(" "),
            arrow(pagination.has_previous(), "◀ [h]"),
            Span::styled(
                format!("  Page {} of {}  ", pagination.page(), pagination.total_pages()),
                Style::default().fg(theme::TEXT),
            ),
            arrow(pagination.has_next(), "[l] ▶"),
            Span::styled(format!("   {} users total", state.total_count()), theme::muted()),
        ];
        if state.is_loading() {
            spans.push(Span::styled("   loading…", Style::default().fg(theme::PRIMARY_LIGHT)));
        }
        spans.push(Span::styled("   [/] search  [r] refresh", theme::key_hint()));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
