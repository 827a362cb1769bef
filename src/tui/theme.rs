//! Color theme for the dashboard.
//!
//! Blue primary with an amber accent on a slate background. Views import
//! from here instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Palette ─────────────────────────────────────────────────────────────────

/// Blue: app bar and focused borders.
pub const PRIMARY: Color = Color::Rgb(0x19, 0x76, 0xD2);
/// Light blue: hints and secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x42, 0xA5, 0xF5);
/// Amber: current item.
pub const ACCENT: Color = Color::Rgb(0xFF, 0xB3, 0x00);

/// Base background.
pub const BG_BASE: Color = Color::Rgb(0x10, 0x14, 0x1A);
/// Elevated panels, sidebar.
pub const BG_SURFACE: Color = Color::Rgb(0x1C, 0x22, 0x2B);

pub const TEXT: Color = Color::Rgb(0xE6, 0xE6, 0xE6);
pub const TEXT_MUTED: Color = Color::Rgb(0x8A, 0x8F, 0x98);
pub const TEXT_DIM: Color = Color::Rgb(0x55, 0x5B, 0x63);

pub const ERROR: Color = Color::Rgb(0xE5, 0x39, 0x35);
pub const SUCCESS: Color = Color::Rgb(0x43, 0xA0, 0x47);
pub const INFO: Color = Color::Rgb(0x29, 0xB6, 0xF6);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Section and card titles.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY_LIGHT).add_modifier(Modifier::BOLD)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn error() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Top app bar.
pub fn app_bar() -> Style {
    Style::default().fg(TEXT).bg(PRIMARY)
}

// ── Block builders ──────────────────────────────────────────────────────────

pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PRIMARY))
}

pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
}
