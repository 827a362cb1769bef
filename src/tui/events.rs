/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// Notification to display to the user.
    Notification(Notification),
}

/// High-level actions dispatched by the input mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    FocusOverview,
    FocusUsers,
    FocusPosts,
    FocusProfile,
    TabNext,
    TabPrev,
    ToggleSidebar,

    // Modals
    ShowHelp,
    CloseHelp,

    // Application
    Logout,
    Quit,
}

/// Which dashboard view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Overview,
    Users,
    Posts,
    Profile,
}

impl Focus {
    pub const ALL: [Focus; 4] = [Focus::Overview, Focus::Users, Focus::Posts, Focus::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Overview => "Overview",
            Focus::Users => "Users",
            Focus::Posts => "Posts",
            Focus::Profile => "Profile",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Focus::Overview => "◆",
            Focus::Users => "☺",
            Focus::Posts => "≡",
            Focus::Profile => "⚙",
        }
    }

    /// One-line description for the overview cards.
    pub fn description(self) -> &'static str {
        match self {
            Focus::Overview => "Dashboard home",
            Focus::Users => "View and manage users",
            Focus::Posts => "Browse and search posts",
            Focus::Profile => "View and edit your profile",
        }
    }

    pub fn to_action(self) -> Action {
        match self {
            Focus::Overview => Action::FocusOverview,
            Focus::Users => Action::FocusUsers,
            Focus::Posts => Action::FocusPosts,
            Focus::Profile => Action::FocusProfile,
        }
    }

    pub fn next(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + 1) % Focus::ALL.len()]
    }

    pub fn prev(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + Focus::ALL.len() - 1) % Focus::ALL.len()]
    }
}

/// Whether the sidebar or the main content receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaFocus {
    Sidebar,
    Main,
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
