use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, AreaFocus, Focus, Notification, NotificationLevel};
use super::layout::{centered_rect, AppLayout};
use super::services::Services;
use super::sidebar::SidebarState;
use super::theme;
use super::views::login::LoginState;
use super::views::overview::{OverviewResult, OverviewState};
use super::views::posts::PostsViewState;
use super::views::profile::ProfileViewState;
use super::views::users::UsersViewState;
use crate::core::session::Session;

const MAX_NOTIFICATIONS: usize = 3;
const NOTIFICATION_TTL_TICKS: u32 = 100;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Currently focused top-level view.
    pub focus: Focus,
    /// Whether sidebar or main content has input focus.
    pub area_focus: AreaFocus,
    pub sidebar: SidebarState,
    /// Client-side sign-in state; gates every view but the login screen.
    pub session: Session,
    pub login: LoginState,
    pub overview: OverviewState,
    pub users: UsersViewState,
    pub posts: PostsViewState,
    pub profile: ProfileViewState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    notification_counter: u64,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Receiver for backend events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    services: Services,
}

impl AppState {
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        services: Services,
    ) -> Self {
        Self {
            running: true,
            focus: Focus::Users,
            area_focus: AreaFocus::Main,
            sidebar: SidebarState::new(),
            session: Session::new(),
            login: LoginState::new(),
            overview: OverviewState::new(),
            users: UsersViewState::new(&services),
            posts: PostsViewState::new(&services),
            profile: ProfileViewState::new(&services),
            notifications: Vec::new(),
            notification_counter: 0,
            show_help: false,
            event_rx,
            services,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Ctrl+C always quits, even on the login screen
                if is_force_quit(&crossterm_event) {
                    self.running = false;
                    return;
                }

                if !self.session.is_authenticated() {
                    if self.login.handle_input(&crossterm_event, &mut self.session) {
                        self.on_login();
                    }
                    return;
                }

                if self.show_help {
                    if let Some(action) = map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                if self.area_focus == AreaFocus::Sidebar && self.handle_sidebar_input(&crossterm_event) {
                    return;
                }

                if self.dispatch_view_input(&crossterm_event) {
                    return;
                }

                if let Some(action) = map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Notification(notification) => {
                self.push_notification(notification.message, notification.level);
            }
        }
    }

    /// Dispatch input to the currently focused view. Returns true if consumed.
    fn dispatch_view_input(&mut self, event: &Event) -> bool {
        match self.focus {
            Focus::Overview => match self.overview.handle_input(event) {
                Some(OverviewResult::Consumed) => true,
                Some(OverviewResult::Open(focus)) => {
                    self.handle_action(focus.to_action());
                    true
                }
                None => false,
            },
            Focus::Users => self.users.handle_input(event),
            Focus::Posts => self.posts.handle_input(event),
            Focus::Profile => self.profile.handle_input(event, &self.services),
        }
    }

    /// Handle sidebar-specific input. Returns true if consumed.
    fn handle_sidebar_input(&mut self, event: &Event) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        match code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.sidebar.select_next();
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.sidebar.select_prev();
                true
            }
            KeyCode::Enter | KeyCode::Char('l') => {
                let focus = self.sidebar.selected_focus();
                self.handle_action(focus.to_action());
                self.area_focus = AreaFocus::Main;
                true
            }
            KeyCode::Char('h') => {
                self.sidebar.user_collapsed = true;
                self.area_focus = AreaFocus::Main;
                true
            }
            KeyCode::Esc => {
                self.area_focus = AreaFocus::Main;
                true
            }
            _ => false,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::FocusOverview => self.set_focus(Focus::Overview),
            Action::FocusUsers => self.set_focus(Focus::Users),
            Action::FocusPosts => self.set_focus(Focus::Posts),
            Action::FocusProfile => self.set_focus(Focus::Profile),
            Action::TabNext => self.set_focus(self.focus.next()),
            Action::TabPrev => self.set_focus(self.focus.prev()),
            Action::ToggleSidebar => {
                self.sidebar.toggle_collapse();
                if !self.sidebar.user_collapsed {
                    self.area_focus = AreaFocus::Sidebar;
                    self.sidebar.sync_to_focus(self.focus);
                } else {
                    self.area_focus = AreaFocus::Main;
                }
            }
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::Logout => self.logout(),
        }
    }

    /// Set focus, sync sidebar selection and mount the view.
    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.sidebar.sync_to_focus(focus);
        self.area_focus = AreaFocus::Main;
        self.on_focus_changed();
    }

    fn on_focus_changed(&mut self) {
        match self.focus {
            Focus::Overview => {}
            Focus::Users => self.users.load(),
            Focus::Posts => self.posts.load(),
            Focus::Profile => self.profile.load(),
        }
    }

    fn on_login(&mut self) {
        self.set_focus(Focus::Users);
        self.push_notification("Signed in".to_string(), NotificationLevel::Success);
    }

    /// Sign out and drop every view's fetched data.
    fn logout(&mut self) {
        self.session.logout();
        self.users = UsersViewState::new(&self.services);
        self.posts = PostsViewState::new(&self.services);
        self.profile = ProfileViewState::new(&self.services);
        self.overview = OverviewState::new();
        self.login = LoginState::new();
        self.show_help = false;
        self.focus = Focus::Users;
        self.area_focus = AreaFocus::Main;
        self.sidebar.sync_to_focus(self.focus);
        self.push_notification("Signed out".to_string(), NotificationLevel::Info);
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks: NOTIFICATION_TTL_TICKS,
        });

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: age notifications, drain completed fetches.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);

        self.users.poll();
        self.posts.poll();
        self.profile.poll();
    }

    fn is_loading(&self) -> bool {
        self.users.is_loading() || self.posts.is_loading() || self.profile.is_loading()
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(theme::BG_BASE)), area);

        if !self.session.is_authenticated() {
            self.login.render(frame, area);
            return;
        }

        let (layout, visibility) = AppLayout::compute(area, self.sidebar.user_collapsed);

        self.render_app_bar(frame, layout.app_bar);

        if let Some(sidebar_area) = layout.sidebar {
            self.sidebar
                .render(frame, sidebar_area, visibility, self.focus, self.area_focus);
        }

        match self.focus {
            Focus::Overview => self.overview.render(frame, layout.main, self.session.email()),
            Focus::Users => self.users.render(frame, layout.main),
            Focus::Posts => self.posts.render(frame, layout.main),
            Focus::Profile => self.profile.render(frame, layout.main),
        }

        self.render_status_bar(frame, layout.status);
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_app_bar(&self, frame: &mut Frame, area: Rect) {
        let email = self.session.email().unwrap_or_default();
        let title = " ▣ Dashboard";
        let right = format!("{email}  [L] logout ");
        let pad = usize::from(area.width)
            .saturating_sub(title.chars().count() + right.chars().count());

        let line = Line::from(vec![
            Span::styled(title, theme::app_bar().add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(pad), theme::app_bar()),
            Span::styled(right, theme::app_bar()),
        ]);
        frame.render_widget(Paragraph::new(line).style(theme::app_bar()), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let activity = if self.is_loading() {
            Span::styled("loading", Style::default().fg(theme::PRIMARY_LIGHT))
        } else {
            Span::styled("ready", Style::default().fg(theme::TEXT_MUTED))
        };

        let mode_indicator = if self.focus == Focus::Profile && self.profile.is_editing() {
            Span::styled(" EDIT ", theme::brand_badge())
        } else {
            Span::raw("")
        };

        let status = Line::from(vec![
            Span::styled(" DASH ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            Span::styled(
                self.focus.label(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            activity,
            Span::raw(" │ "),
            Span::styled("Tab", theme::key_hint()),
            Span::raw(":nav "),
            Span::styled("Ctrl+B", theme::key_hint()),
            Span::raw(":sidebar "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height.saturating_sub(1));
        let x = area.width.saturating_sub(max_width + 1);
        let notification_area = Rect::new(x, 1, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {prefix} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
            notification_area,
        );
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = [
            ("Global:", ""),
            ("q", "Quit application"),
            ("?", "Toggle this help"),
            ("Tab / Shift+Tab", "Next / previous view"),
            ("1-4", "Jump to view by number"),
            ("Ctrl+B", "Toggle sidebar"),
            ("L", "Log out"),
            ("Ctrl+C", "Force quit"),
            ("", ""),
            ("Users:", ""),
            ("j/k", "Move selection"),
            ("h/l ←/→", "Previous / next page"),
            ("/", "Search name or email"),
            ("r", "Refresh current page"),
            ("", ""),
            ("Posts:", ""),
            ("j/k", "Move selection"),
            ("/", "Search titles"),
            ("Esc", "Clear search"),
            ("r", "Refresh"),
            ("", ""),
            ("Profile:", ""),
            ("e", "Edit profile"),
            ("Tab", "Next field"),
            ("Enter / Ctrl+S", "Save"),
            ("Esc", "Cancel edit"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                " Keybindings",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {key}"),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{key:<18}"),
                        Style::default()
                            .fg(theme::PRIMARY_LIGHT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Press ? or Esc to close",
            theme::muted(),
        )));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

// ── Input mapping ───────────────────────────────────────────────────────

fn is_force_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            ..
        })
    )
}

fn map_help_input(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };
    match code {
        KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}

fn map_input_to_action(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    match (*modifiers, *code) {
        (KeyModifiers::CONTROL, KeyCode::Char('b')) => Some(Action::ToggleSidebar),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ShowHelp),
            KeyCode::Char('L') => Some(Action::Logout),
            KeyCode::Tab => Some(Action::TabNext),
            KeyCode::BackTab => Some(Action::TabPrev),
            KeyCode::Char('1') => Some(Action::FocusOverview),
            KeyCode::Char('2') => Some(Action::FocusUsers),
            KeyCode::Char('3') => Some(Action::FocusPosts),
            KeyCode::Char('4') => Some(Action::FocusProfile),
            _ => None,
        },
        _ => None,
    }
}
