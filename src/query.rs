//! Filter query assembled from toggle state for the search form.
//!
//! Serialized with serde at the submit boundary; the transport that
//! carries it to the server is the host page's concern.

use serde::{Deserialize, Serialize};

use crate::{ControlRegistry, ToggleState};

/// The genre filter selection plus the optional year range, as the search
/// form submits it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub year: Option<(i32, i32)>,
}

impl FilterQuery {
    /// Collect the query from every control in `group`.
    ///
    /// Members at `Include`/`Exclude` contribute their id to the matching
    /// set; neutral members contribute nothing. The group controller is a
    /// meta-control, not a genre, and is skipped.
    pub fn from_group(registry: &ControlRegistry, group: &str) -> Self {
        let mut filter_query = FilterQuery::default();
        for control in registry.group_members(group) {
            if control.is_group_controller {
                continue;
            }
            match control.state() {
                ToggleState::Include => filter_query.include.push(control.id.clone()),
                ToggleState::Exclude => filter_query.exclude.push(control.id.clone()),
                ToggleState::Neutral => {}
            }
        }
        filter_query
    }

    pub fn with_year(mut self, low: i32, high: i32) -> Self {
        self.year = Some((low, high));
        self
    }

    /// True when the query filters nothing.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty() && self.year.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToggleControl;

    fn registry_with_states(states: &[(&str, &str)]) -> ControlRegistry {
        let mut registry = ControlRegistry::new();
        registry.insert(ToggleControl::group_controller("all-genre-box", "genrebox"));
        for (id, stored) in states {
            registry.insert(ToggleControl::new(*id, Some("genrebox")).with_stored(*stored));
        }
        registry
    }

    #[test]
    fn mixed_states_split_into_include_and_exclude() {
        let registry = registry_with_states(&[
            ("genre-action", "1"),
            ("genre-comedy", "0"),
            ("genre-drama", "2"),
            ("genre-horror", "1"),
        ]);

        let query = FilterQuery::from_group(&registry, "genrebox");
        assert_eq!(query.include, vec!["genre-action", "genre-horror"]);
        assert_eq!(query.exclude, vec!["genre-drama"]);
        assert_eq!(query.year, None);
    }

    #[test]
    fn controller_is_not_a_genre() {
        let mut registry = registry_with_states(&[("genre-action", "0")]);
        // controller at Include must not leak into the query
        registry.insert(
            ToggleControl::group_controller("all-genre-box", "genrebox").with_stored("1"),
        );

        let query = FilterQuery::from_group(&registry, "genrebox");
        assert!(query.is_empty());
    }

    #[test]
    fn unparsable_members_read_as_neutral() {
        let registry = registry_with_states(&[("genre-action", "NaN")]);
        assert!(FilterQuery::from_group(&registry, "genrebox").is_empty());
    }

    #[test]
    fn year_range_rides_along() {
        let registry = registry_with_states(&[("genre-action", "1")]);
        let query = FilterQuery::from_group(&registry, "genrebox").with_year(1980, 2010);
        assert_eq!(query.year, Some((1980, 2010)));
        assert!(!query.is_empty());
    }

    #[test]
    fn serializes_for_the_submit_boundary() {
        let registry = registry_with_states(&[("genre-action", "1"), ("genre-drama", "2")]);
        let query = FilterQuery::from_group(&registry, "genrebox");
        let json = serde_json::to_string(&query).unwrap();
        let back: FilterQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(back, query);
    }
}
