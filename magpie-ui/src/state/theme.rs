//! Theme State
//!
//! The closed theme set and the optimistic resolver that decides which theme
//! to display while submissions are in flight.

use serde::{Deserialize, Serialize};

/// Action identifier for theme submissions
pub const THEME_ACTION: &str = "set-theme";

/// Display theme
///
/// Stored and sent over the wire as a lowercase string; everything outside
/// the closed set is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    /// Parse a raw string into a theme
    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "system" => Some(Theme::System),
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Wire and storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Theme::System => "System",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Icon shown on the theme switch
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::System => "🖥️",
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    /// Next theme in the switch cycle
    pub fn next(&self) -> Theme {
        match self {
            Theme::System => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolution status of an in-flight submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStatus {
    Pending,
    Succeeded,
    Failed,
}

/// One in-flight user-initiated submission
///
/// Owned by the submission layer; the resolver only reads a snapshot. The
/// payload stays raw text here and is validated where it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMutation {
    /// Target action identifier
    pub action: String,
    /// Submitted payload
    pub payload: String,
    /// Monotonic submission sequence number
    pub seq: u64,
    /// Resolution status
    pub status: MutationStatus,
}

impl PendingMutation {
    /// A pending theme submission
    pub fn theme(payload: impl Into<String>, seq: u64) -> Self {
        Self {
            action: THEME_ACTION.to_string(),
            payload: payload.into(),
            seq,
            status: MutationStatus::Pending,
        }
    }
}

/// Decide which theme to display right now.
///
/// Among pending theme submissions the most recently issued one wins, judged
/// by sequence number. Payloads outside the closed set are treated as absent.
/// With nothing valid in flight the confirmed value stands.
pub fn resolve(pending: &[PendingMutation], confirmed: Theme) -> Theme {
    pending
        .iter()
        .filter(|m| m.action == THEME_ACTION && m.status == MutationStatus::Pending)
        .filter_map(|m| Theme::parse(&m.payload).map(|theme| (m.seq, theme)))
        .max_by_key(|(seq, _)| *seq)
        .map(|(_, theme)| theme)
        .unwrap_or(confirmed)
}

/// Apply the display theme as a class on the document root
///
/// `system` maps to no class at all, leaving the choice to the CSS
/// `prefers-color-scheme` rules.
pub fn apply_document_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    let root = match root {
        Some(el) => el,
        None => return,
    };

    let classes = root.class_list();
    let _ = classes.remove_2("light", "dark");

    match theme {
        Theme::System => {}
        Theme::Light => {
            let _ = classes.add_1("light");
        }
        Theme::Dark => {
            let _ = classes.add_1("dark");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_empty_returns_confirmed() {
        for confirmed in [Theme::System, Theme::Light, Theme::Dark] {
            assert_eq!(resolve(&[], confirmed), confirmed);
        }
    }

    #[test]
    fn test_resolve_single_pending_wins() {
        let pending = vec![PendingMutation::theme("dark", 1)];
        assert_eq!(resolve(&pending, Theme::Light), Theme::Dark);
    }

    #[test]
    fn test_resolve_last_submitted_wins() {
        let pending = vec![
            PendingMutation::theme("light", 1),
            PendingMutation::theme("dark", 2),
        ];
        assert_eq!(resolve(&pending, Theme::System), Theme::Dark);

        // Sequence numbers decide, not list position
        let reversed = vec![
            PendingMutation::theme("dark", 2),
            PendingMutation::theme("light", 1),
        ];
        assert_eq!(resolve(&reversed, Theme::System), Theme::Dark);
    }

    #[test]
    fn test_resolve_skips_invalid_payload() {
        // The newest submission is garbage; the older valid one still wins
        let pending = vec![
            PendingMutation::theme("light", 1),
            PendingMutation::theme("blue", 2),
        ];
        assert_eq!(resolve(&pending, Theme::System), Theme::Light);
    }

    #[test]
    fn test_resolve_all_invalid_falls_back() {
        let pending = vec![
            PendingMutation::theme("", 1),
            PendingMutation::theme("Dark", 2),
            PendingMutation::theme("blue", 3),
        ];
        assert_eq!(resolve(&pending, Theme::Light), Theme::Light);
    }

    #[test]
    fn test_resolve_ignores_settled_mutations() {
        let mut succeeded = PendingMutation::theme("dark", 1);
        succeeded.status = MutationStatus::Succeeded;

        let mut failed = PendingMutation::theme("light", 2);
        failed.status = MutationStatus::Failed;

        assert_eq!(resolve(&[succeeded, failed], Theme::System), Theme::System);
    }

    #[test]
    fn test_resolve_settled_does_not_shadow_pending() {
        let mut failed = PendingMutation::theme("light", 3);
        failed.status = MutationStatus::Failed;

        let pending = vec![PendingMutation::theme("dark", 2), failed];
        assert_eq!(resolve(&pending, Theme::System), Theme::Dark);
    }

    #[test]
    fn test_resolve_ignores_other_actions() {
        let other = PendingMutation {
            action: "rename-project".to_string(),
            payload: "dark".to_string(),
            seq: 1,
            status: MutationStatus::Pending,
        };
        assert_eq!(resolve(&[other], Theme::Light), Theme::Light);
    }

    #[test]
    fn test_parse_closed_set() {
        assert_eq!(Theme::parse("system"), Some(Theme::System));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));

        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse("auto"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_parse_round_trips_as_str() {
        for theme in [Theme::System, Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn test_next_cycles_through_all() {
        assert_eq!(Theme::System.next(), Theme::Light);
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::System);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
        assert!(serde_json::from_str::<Theme>("\"blue\"").is_err());
    }
}
