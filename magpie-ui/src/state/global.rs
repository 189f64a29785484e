//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::state::theme::{resolve, PendingMutation, Theme};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Signed-in user, `None` while signed out
    pub user: RwSignal<Option<SessionUser>>,
    /// Whether the session bootstrap has completed
    pub session_loaded: RwSignal<bool>,
    /// Last server-confirmed theme
    pub theme_confirmed: RwSignal<Theme>,
    /// In-flight theme submissions
    pub theme_pending: RwSignal<Vec<PendingMutation>>,
    /// Submission sequence counter
    next_seq: RwSignal<u64>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Signed-in user from the session bootstrap
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl SessionUser {
    /// Display name, falling back to the login name
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        user: create_rw_signal(None),
        session_loaded: create_rw_signal(false),
        theme_confirmed: create_rw_signal(Theme::System),
        theme_pending: create_rw_signal(Vec::new()),
        next_seq: create_rw_signal(0),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Theme to display right now: pending submissions over confirmed state
    pub fn display_theme(&self) -> Theme {
        resolve(&self.theme_pending.get(), self.theme_confirmed.get())
    }

    /// Same derivation without reactive tracking, for event handlers
    pub fn display_theme_untracked(&self) -> Theme {
        resolve(
            &self.theme_pending.get_untracked(),
            self.theme_confirmed.get_untracked(),
        )
    }

    /// Record a theme submission for optimistic display; returns its sequence
    pub fn begin_theme_mutation(&self, theme: Theme) -> u64 {
        let seq = self.next_seq.get_untracked() + 1;
        self.next_seq.set(seq);

        self.theme_pending.update(|pending| {
            pending.push(PendingMutation::theme(theme.as_str(), seq));
        });

        seq
    }

    /// The server confirmed a submission: promote it and drop it from flight
    pub fn confirm_theme_mutation(&self, seq: u64, confirmed: Theme) {
        self.theme_confirmed.set(confirmed);
        self.theme_pending.update(|pending| {
            pending.retain(|m| m.seq != seq);
        });
    }

    /// A submission failed: drop it, the display falls back to confirmed
    pub fn fail_theme_mutation(&self, seq: u64) {
        self.theme_pending.update(|pending| {
            pending.retain(|m| m.seq != seq);
        });
    }

    /// Install the signed-in user and their confirmed theme
    pub fn sign_in(&self, user: SessionUser, theme: Theme) {
        self.user.set(Some(user));
        self.theme_confirmed.set(theme);
        self.theme_pending.set(Vec::new());
    }

    /// Drop the session state
    pub fn sign_out(&self) {
        self.user.set(None);
        self.theme_confirmed.set(Theme::System);
        self.theme_pending.set(Vec::new());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_name() {
        let user = SessionUser {
            id: 1,
            username: "kody".to_string(),
            email: "kody@example.com".to_string(),
            name: Some("Kody Koala".to_string()),
        };
        assert_eq!(user.display_name(), "Kody Koala");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = SessionUser {
            id: 1,
            username: "kody".to_string(),
            email: "kody@example.com".to_string(),
            name: None,
        };
        assert_eq!(user.display_name(), "kody");
    }
}
