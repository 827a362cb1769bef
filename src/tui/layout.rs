//! Root layout: app bar, navigation sidebar, main content, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the expanded sidebar (icon + label).
pub const SIDEBAR_EXPANDED_WIDTH: u16 = 18;
/// Width of the collapsed sidebar (icons only).
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 3;
/// Auto-collapse sidebar below this terminal width.
pub const AUTO_COLLAPSE_THRESHOLD: u16 = 60;
/// Hide sidebar entirely below this terminal width.
pub const HIDE_SIDEBAR_THRESHOLD: u16 = 20;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// One-row app bar across the top.
    pub app_bar: Rect,
    /// Sidebar area (None if hidden).
    pub sidebar: Option<Rect>,
    pub main: Rect,
    /// One-row status bar at the bottom.
    pub status: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarVisibility {
    Expanded,
    Collapsed,
    Hidden,
}

impl AppLayout {
    /// Compute layout regions; `user_collapsed` is the Ctrl+B preference.
    pub fn compute(area: Rect, user_collapsed: bool) -> (Self, SidebarVisibility) {
        let visibility = if area.width < HIDE_SIDEBAR_THRESHOLD {
            SidebarVisibility::Hidden
        } else if user_collapsed || area.width < AUTO_COLLAPSE_THRESHOLD {
            SidebarVisibility::Collapsed
        } else {
            SidebarVisibility::Expanded
        };

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

        let (app_bar, content_area, status) = (rows[0], rows[1], rows[2]);

        let sidebar_width = match visibility {
            SidebarVisibility::Hidden => None,
            SidebarVisibility::Collapsed => Some(SIDEBAR_COLLAPSED_WIDTH),
            SidebarVisibility::Expanded => Some(SIDEBAR_EXPANDED_WIDTH),
        };

        let (sidebar, main) = match sidebar_width {
            None => (None, content_area),
            Some(width) => {
                let cols = Layout::horizontal([Constraint::Length(width), Constraint::Min(1)])
                    .split(content_area);
                (Some(cols[0]), cols[1])
            }
        };

        (
            AppLayout {
                app_bar,
                sidebar,
                main,
                status,
            },
            visibility,
        )
    }
}

/// Calculate a centered rect using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
