//! Navigation State
//!
//! The static sidebar destination list and the highlighter that decides
//! which entry is active for the current path.

/// One navigable destination in the app sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavDestination {
    /// Stable identifier
    pub id: &'static str,
    /// Visible label
    pub label: &'static str,
    /// Path prefix this destination owns
    pub prefix: &'static str,
    /// Sidebar icon
    pub icon: &'static str,
    /// Root destinations activate on an exact path match only
    pub root: bool,
    /// Recomputed on every path change
    pub is_active: bool,
}

/// The app shell destinations
pub fn app_destinations() -> Vec<NavDestination> {
    vec![
        NavDestination {
            id: "dashboard",
            label: "Dashboard",
            prefix: "/app",
            icon: "🏠",
            root: true,
            is_active: false,
        },
        NavDestination {
            id: "projects",
            label: "Projects",
            prefix: "/app/projects",
            icon: "📁",
            root: false,
            is_active: false,
        },
    ]
}

/// Recompute the active flags for the current path.
///
/// Plain prefix matching, except the designated root entry which activates
/// on an exact match only so it does not stay highlighted on nested pages.
pub fn compute_active(destinations: &[NavDestination], current_path: &str) -> Vec<NavDestination> {
    destinations
        .iter()
        .map(|dest| {
            let is_active = if dest.root {
                current_path == dest.prefix
            } else {
                current_path.starts_with(dest.prefix)
            };

            NavDestination {
                is_active,
                ..dest.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_ids(destinations: &[NavDestination]) -> Vec<&'static str> {
        destinations
            .iter()
            .filter(|d| d.is_active)
            .map(|d| d.id)
            .collect()
    }

    #[test]
    fn test_root_active_on_exact_path_only() {
        let result = compute_active(&app_destinations(), "/app");
        assert_eq!(active_ids(&result), vec!["dashboard"]);
    }

    #[test]
    fn test_nested_path_activates_prefix_owner_not_root() {
        let result = compute_active(&app_destinations(), "/app/projects/42");
        assert_eq!(active_ids(&result), vec!["projects"]);
    }

    #[test]
    fn test_projects_page_activates_projects() {
        let result = compute_active(&app_destinations(), "/app/projects");
        assert_eq!(active_ids(&result), vec!["projects"]);
    }

    #[test]
    fn test_unmatched_path_activates_nothing() {
        for path in ["/", "/login", "/settings"] {
            let result = compute_active(&app_destinations(), path);
            assert!(active_ids(&result).is_empty(), "path {path}");
        }
    }

    #[test]
    fn test_idempotent_for_identical_input() {
        let destinations = app_destinations();
        let first = compute_active(&destinations, "/app/projects");
        let second = compute_active(&destinations, "/app/projects");
        assert_eq!(first, second);

        // Feeding the output back in changes nothing either
        let third = compute_active(&first, "/app/projects");
        assert_eq!(first, third);
    }

    #[test]
    fn test_destination_list_shape() {
        let destinations = app_destinations();
        let roots = destinations.iter().filter(|d| d.root).count();
        assert_eq!(roots, 1);

        let mut prefixes: Vec<_> = destinations.iter().map(|d| d.prefix).collect();
        prefixes.dedup();
        assert_eq!(prefixes.len(), destinations.len());
    }
}
