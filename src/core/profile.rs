//! Profile view state: one fetched user plus a local edit draft.
//!
//! Saving only updates the in-memory profile; nothing is sent upstream.

use tracing::debug;

use crate::core::api::{FetchError, User};
use crate::core::listing::{FetchStatus, RequestId, RequestTracker};

/// Editable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::FirstName => "First name",
            ProfileField::LastName => "Last name",
            ProfileField::Email => "Email",
        }
    }
}

/// In-progress edits, seeded from the loaded profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileDraft {
    fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Email => self.email = value,
        }
    }
}

/// Completion of a profile fetch.
#[derive(Debug)]
pub enum ProfileEvent {
    Loaded { request: RequestId, user: User },
    Failed { request: RequestId, error: FetchError },
}

#[derive(Debug, Default)]
pub struct ProfileState {
    profile: Option<User>,
    draft: Option<ProfileDraft>,
    status: FetchStatus,
    error_message: Option<String>,
    requests: RequestTracker,
}

impl ProfileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) -> RequestId {
        self.status = FetchStatus::Loading;
        self.error_message = None;
        self.requests.issue()
    }

    /// Apply a fetch completion; stale completions are dropped.
    pub fn apply(&mut self, event: ProfileEvent) -> bool {
        match event {
            ProfileEvent::Loaded { request, user } => {
                if !self.requests.is_current(request) {
                    debug!(request = %request, "Discarding stale profile");
                    return false;
                }
                self.profile = Some(user);
                self.draft = None;
                self.status = FetchStatus::Loaded;
            }
            ProfileEvent::Failed { request, error } => {
                if !self.requests.is_current(request) {
                    debug!(request = %request, "Discarding stale profile error");
                    return false;
                }
                self.status = FetchStatus::Error;
                self.error_message = Some(error.to_string());
            }
        }
        true
    }

    /// Start editing. Returns `false` when no profile is loaded yet.
    pub fn begin_edit(&mut self) -> bool {
        match self.profile {
            Some(ref user) => {
                self.draft = Some(ProfileDraft::from_user(user));
                true
            }
            None => false,
        }
    }

    /// Drop the draft; the form reverts to the stored profile.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        if let Some(ref mut draft) = self.draft {
            draft.set(field, value);
        }
    }

    /// Commit the draft into the local profile and leave edit mode.
    pub fn save(&mut self) -> bool {
        let (Some(draft), Some(profile)) = (self.draft.take(), self.profile.as_mut()) else {
            return false;
        };
        profile.first_name = draft.first_name;
        profile.last_name = draft.last_name;
        profile.email = draft.email;
        true
    }

    pub fn profile(&self) -> Option<&User> {
        self.profile.as_ref()
    }

    pub fn draft(&self) -> Option<&ProfileDraft> {
        self.draft.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
