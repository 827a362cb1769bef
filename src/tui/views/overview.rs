//! Dashboard home: quick-action cards for the other views.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::events::Focus;
use crate::tui::theme;

const CARDS: [Focus; 3] = [Focus::Users, Focus::Posts, Focus::Profile];

pub enum OverviewResult {
    Consumed,
    Open(Focus),
}

pub struct OverviewState {
    selected: usize,
}

impl OverviewState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn handle_input(&mut self, event: &Event) -> Option<OverviewResult> {
        let Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match code {
            KeyCode::Char('j') | KeyCode::Char('l') | KeyCode::Down | KeyCode::Right => {
                self.selected = (self.selected + 1).min(CARDS.len() - 1);
                Some(OverviewResult::Consumed)
            }
            KeyCode::Char('k') | KeyCode::Char('h') | KeyCode::Up | KeyCode::Left => {
                self.selected = self.selected.saturating_sub(1);
                Some(OverviewResult::Consumed)
            }
            KeyCode::Enter => Some(OverviewResult::Open(CARDS[self.selected])),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, email: Option<&str>) {
        let rows = Layout::vertical([Constraint::Length(4), Constraint::Length(7), Constraint::Min(0)])
            .split(area);

        let greeting = Line::from(Span::styled(
            format!(" Welcome{}", email.map(|e| format!(", {e}")).unwrap_or_default()),
            theme::heading(),
        ));
        frame.render_widget(
            Paragraph::new(vec![
                Line::raw(""),
                greeting,
                Line::from(Span::styled(
                    " Manage your data and explore the features below.",
                    theme::muted(),
                )),
            ]),
            rows[0],
        );

        let cols = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

        for (idx, focus) in CARDS.iter().enumerate() {
            let selected = idx == self.selected;
            let block = if selected {
                theme::block_focused(focus.label())
            } else {
                theme::block_default(focus.label())
            };
            let title_style = if selected { theme::highlight() } else { theme::heading() };
            let card = Paragraph::new(vec![
                Line::raw(""),
                Line::from(Span::styled(focus.icon(), title_style)),
                Line::from(Span::styled(focus.label(), title_style)),
                Line::from(Span::styled(focus.description(), theme::muted())),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(card, cols[idx]);
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " [h/l] select  [Enter] open",
                theme::key_hint(),
            ))),
            rows[2],
        );
    }
}
