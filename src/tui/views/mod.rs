pub mod login;
pub mod overview;
pub mod posts;
pub mod profile;
pub mod users;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme;
use super::widgets::input_buffer::InputBuffer;

/// Bordered one-line search box; shows a caret while `editing`.
pub(super) fn render_search_bar(
    frame: &mut Frame,
    area: Rect,
    input: &InputBuffer,
    editing: bool,
    placeholder: &str,
) {
    let block = if editing {
        theme::block_focused("Search")
    } else {
        theme::block_default("Search")
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if input.text().is_empty() && !editing {
        Line::from(vec![
            Span::styled(" / ", theme::key_hint()),
            Span::styled(placeholder.to_string(), theme::dim()),
        ])
    } else {
        let (before, after) = input.split_at_cursor();
        let mut spans = vec![
            Span::styled(" ⌕ ", theme::muted()),
            Span::styled(before.to_string(), Style::default().fg(theme::TEXT)),
        ];
        if editing {
            spans.push(Span::styled("▏", theme::highlight()));
        }
        spans.push(Span::styled(after.to_string(), Style::default().fg(theme::TEXT)));
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), inner);
}

/// Inline error banner.
pub(super) fn error_line(message: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" ✗ ", theme::error()),
        Span::styled(message.to_string(), Style::default().fg(theme::ERROR)),
        Span::styled("  [r] retry", theme::key_hint()),
    ])
}

/// Truncate to `max` chars, appending an ellipsis when cut.
pub(super) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
