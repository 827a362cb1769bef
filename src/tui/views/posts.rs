//! Posts browser: one fetched batch, live title search, card list.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{error_line, render_search_bar, truncate};
use crate::core::api::Post;
use crate::core::listing::{FetchStatus, ListController};
use crate::tui::services::Services;
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

/// Rows per card: title, ids, body, spacer.
const CARD_HEIGHT: u16 = 4;

pub struct PostsViewState {
    list: ListController<Post>,
    selected: usize,
    search: InputBuffer,
    searching: bool,
}

impl PostsViewState {
    pub fn new(services: &Services) -> Self {
        Self {
            list: ListController::new(services.posts.clone()),
            selected: 0,
            search: InputBuffer::new(),
            searching: false,
        }
    }

    pub fn load(&mut self) {
        if self.list.mount() {
            log::debug!("Posts view mounted");
        }
    }

    pub fn poll(&mut self) {
        if self.list.poll() > 0 {
            let len = self.list.visible_items().len();
            self.selected = self.selected.min(len.saturating_sub(1));
        }
    }

    pub fn is_loading(&self) -> bool {
        self.list.state().is_loading()
    }

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
            match code {
                KeyCode::Enter => self.searching = false,
                KeyCode::Esc => {
                    self.searching = false;
                    self.apply_query("");
                }
                _ => {
                    if self.search.handle_key(*code, *modifiers) {
                        let query = self.search.text().to_string();
                        self.list.set_query(query);
                        self.selected = 0;
                    }
                }
            }
            return true;
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
            (KeyModifiers::NONE, KeyCode::Char('/')) => {
                self.searching = true;
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                self.list.refresh();
                true
            }
            (KeyModifiers::NONE, KeyCode::Esc) if !self.search.text().is_empty() => {
                self.apply_query("");
                true
            }
            _ => false,
        }
    }

    fn apply_query(&mut self, query: &str) {
        self.search.set(query);
        self.list.set_query(query);
        self.selected = 0;
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let state = self.list.state();
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

        render_search_bar(
            frame,
            chunks[0],
            &self.search,
            self.searching,
            "Search posts by title...",
        );

        let summary = match state.error_message() {
            Some(message) => error_line(message),
            None => Line::from(Span::styled(
                format!(
                    " Showing {} of {} posts",
                    self.list.visible_items().len(),
                    state.raw_items().len()
                ),
                theme::muted(),
            )),
        };
        frame.render_widget(Paragraph::new(summary), chunks[1]);

        self.render_cards(frame, chunks[2]);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let state = self.list.state();
        let block = theme::block_focused("Posts");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let centered = |text: String| {
            Paragraph::new(vec![Line::raw(""), Line::from(Span::styled(text, theme::muted()))])
                .alignment(Alignment::Center)
        };

        if state.raw_items().is_empty() {
            let message = match state.status() {
                FetchStatus::Idle | FetchStatus::Loading => "Loading posts…",
                FetchStatus::Error => "Posts could not be loaded",
                FetchStatus::Loaded => "No posts yet",
            };
            frame.render_widget(centered(message.to_string()), inner);
            return;
        }

        let visible = self.list.visible_items();
        if visible.is_empty() {
            frame.render_widget(
                centered(format!("No posts found matching \"{}\"", state.query())),
                inner,
            );
            return;
        }

        let per_screen = usize::from((inner.height / CARD_HEIGHT).max(1));
        let offset = scroll_offset(self.selected, per_screen);
        let width = usize::from(inner.width.saturating_sub(2));

        let mut lines = Vec::with_capacity(per_screen * usize::from(CARD_HEIGHT));
        for (idx, post) in visible.iter().enumerate().skip(offset).take(per_screen) {
            let selected = idx == self.selected;
            let marker = if selected { "▸ " } else { "  " };
            let title_style = if selected {
                theme::highlight()
            } else {
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, theme::highlight()),
                Span::styled(truncate(&post.title, width), title_style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  Post ID: {} | User ID: {}", post.id, post.author_id),
                theme::dim(),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", truncate(&post.body.replace('\n', " "), width)),
                theme::muted(),
            )));
            lines.push(Line::raw(""));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// First card index to draw so `selected` stays on screen.
fn scroll_offset(selected: usize, per_screen: usize) -> usize {
    (selected + 1).saturating_sub(per_screen.max(1))
}
