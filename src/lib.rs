use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub mod hover;
pub mod query;
pub mod rating;
pub mod slider;

/// Discrete position of a cycling filter control.
///
/// Controls cycle `Neutral -> Include -> Exclude -> Neutral` on each
/// activation; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleState {
    Neutral,
    Include,
    Exclude,
}

impl ToggleState {
    /// Number of states in the cycle.
    pub const COUNT: usize = 3;

    /// The ordered cycle, indexed by stored state value.
    pub const CYCLE: [ToggleState; ToggleState::COUNT] =
        [ToggleState::Neutral, ToggleState::Include, ToggleState::Exclude];

    /// Position of this state in the cycle.
    pub fn index(self) -> usize {
        match self {
            ToggleState::Neutral => 0,
            ToggleState::Include => 1,
            ToggleState::Exclude => 2,
        }
    }

    /// Map a stored index back onto the cycle, wrapping modulo the cycle
    /// length so the result is always in range.
    pub fn from_index(index: usize) -> Self {
        Self::CYCLE[index % Self::COUNT]
    }

    /// The state one activation ahead of this one.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Read a raw stored state value.
    ///
    /// A missing, unparsable, or out-of-range value is read as `Neutral`
    /// rather than an error; the stored field is host-page data and may
    /// hold anything.
    pub fn parse_stored(raw: Option<&str>) -> Self {
        match raw.map(str::trim).and_then(|s| s.parse::<usize>().ok()) {
            Some(idx) if idx < Self::COUNT => Self::CYCLE[idx],
            Some(idx) => {
                warn!("stored toggle state {} out of range, reading as neutral", idx);
                ToggleState::Neutral
            }
            None => ToggleState::Neutral,
        }
    }
}

/// Visual style applied to a control for one toggle state.
///
/// The background colour is the whole style; labels and text colours are
/// left to the host page's stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateStyle {
    pub background: String,
}

impl StateStyle {
    pub fn new(background: impl Into<String>) -> Self {
        StateStyle {
            background: background.into(),
        }
    }
}

/// Mapping from toggle state to visual style, supplied by the host page's
/// theme at construction. Positional: neutral, include, exclude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    styles: [StateStyle; ToggleState::COUNT],
}

impl StyleTable {
    pub fn new(
        neutral: impl Into<String>,
        include: impl Into<String>,
        exclude: impl Into<String>,
    ) -> Self {
        StyleTable {
            styles: [
                StateStyle::new(neutral),
                StateStyle::new(include),
                StateStyle::new(exclude),
            ],
        }
    }

    /// Style for the given state.
    pub fn style_for(&self, state: ToggleState) -> &StateStyle {
        &self.styles[state.index()]
    }
}

/// One filter control and its stored state.
///
/// The stored state is kept as the raw string the host page persists in the
/// control's sibling storage field, so whatever was on the page at render
/// time round-trips unchanged until the first activation rewrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    pub id: String,
    pub group: Option<String>,
    pub is_group_controller: bool,
    stored: Option<String>,
}

impl ToggleControl {
    /// A plain control, optionally belonging to a group.
    pub fn new(id: impl Into<String>, group: Option<&str>) -> Self {
        ToggleControl {
            id: id.into(),
            group: group.map(str::to_string),
            is_group_controller: false,
            stored: None,
        }
    }

    /// The designated controller for `group`: activating it fans its new
    /// state out to every member of the group.
    pub fn group_controller(id: impl Into<String>, group: &str) -> Self {
        ToggleControl {
            id: id.into(),
            group: Some(group.to_string()),
            is_group_controller: true,
            stored: None,
        }
    }

    /// Seed the stored state from the host page's persisted value.
    pub fn with_stored(mut self, raw: impl Into<String>) -> Self {
        self.stored = Some(raw.into());
        self
    }

    /// Current state, sanitized from the stored value.
    pub fn state(&self) -> ToggleState {
        ToggleState::parse_stored(self.stored.as_deref())
    }

    /// Raw stored value, as the host page would read it back.
    pub fn stored_raw(&self) -> Option<&str> {
        self.stored.as_deref()
    }

    fn set_state(&mut self, state: ToggleState) {
        self.stored = Some(state.index().to_string());
    }
}

/// Lookup-by-id and list-by-group over the page's toggle controls.
///
/// Injected into [`MultistateToggle`] in place of global document lookups,
/// so the state machine never touches an element tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlRegistry {
    controls: Vec<ToggleControl>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control. A control re-registered under an existing id
    /// replaces the previous entry.
    pub fn insert(&mut self, control: ToggleControl) {
        if let Some(existing) = self.controls.iter_mut().find(|c| c.id == control.id) {
            *existing = control;
        } else {
            self.controls.push(control);
        }
    }

    pub fn get(&self, id: &str) -> Option<&ToggleControl> {
        self.controls.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ToggleControl> {
        self.controls.iter_mut().find(|c| c.id == id)
    }

    /// All controls tagged with `group`, in registration order.
    pub fn group_members<'a>(
        &'a self,
        group: &'a str,
    ) -> impl Iterator<Item = &'a ToggleControl> + 'a {
        self.controls
            .iter()
            .filter(move |c| c.group.as_deref() == Some(group))
    }

    fn group_members_mut<'a>(
        &'a mut self,
        group: &'a str,
    ) -> impl Iterator<Item = &'a mut ToggleControl> + 'a {
        self.controls
            .iter_mut()
            .filter(move |c| c.group.as_deref() == Some(group))
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

/// Batch fan-out: set every control in `members` to `state`.
///
/// Each write is idempotent (everyone gets the same value), so member order
/// cannot affect the final result.
pub fn fan_out<'a>(members: impl IntoIterator<Item = &'a mut ToggleControl>, state: ToggleState) {
    for control in members {
        control.set_state(state);
    }
}

/// The cycling filter control component.
///
/// Owns the style table and advances control state through a
/// [`ControlRegistry`]; the view layer renders whatever style comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultistateToggle {
    styles: StyleTable,
}

impl MultistateToggle {
    pub fn new(styles: StyleTable) -> Self {
        MultistateToggle { styles }
    }

    /// Cycle `id` to its next state and return the new state with the style
    /// that now applies.
    ///
    /// If the control is its group's controller, every member of the group
    /// (the controller included) is set to the same new state in one batch
    /// fan-out. The triggering control is updated before the fan-out runs.
    ///
    /// Never errors: a missing or unparsable stored state is treated as
    /// neutral before the increment, and an unknown id leaves the registry
    /// untouched and returns the same defaulted result.
    pub fn activate(&self, registry: &mut ControlRegistry, id: &str) -> (ToggleState, &StateStyle) {
        let Some(control) = registry.get_mut(id) else {
            warn!("activate: no control registered with id {:?}", id);
            let fallback = ToggleState::Neutral.next();
            return (fallback, self.styles.style_for(fallback));
        };

        let new_state = control.state().next();
        control.set_state(new_state);
        debug!("control {:?} cycled to {:?}", id, new_state);

        let broadcast_group = control
            .is_group_controller
            .then(|| control.group.clone())
            .flatten();
        if let Some(group) = broadcast_group {
            fan_out(registry.group_members_mut(&group), new_state);
        }

        (new_state, self.styles.style_for(new_state))
    }

    /// Style for the control's current state, without advancing it.
    ///
    /// Used to paint controls on initial page load. An unknown id reads as
    /// neutral.
    pub fn current_style(&self, registry: &ControlRegistry, id: &str) -> &StateStyle {
        let state = registry
            .get(id)
            .map(ToggleControl::state)
            .unwrap_or(ToggleState::Neutral);
        self.styles.style_for(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_styles() -> StyleTable {
        StyleTable::new("#ccc", "#2a2", "#a22")
    }

    fn genre_registry() -> ControlRegistry {
        let mut registry = ControlRegistry::new();
        registry.insert(ToggleControl::group_controller("all-genre-box", "genrebox"));
        registry.insert(ToggleControl::new("genre-action", Some("genrebox")));
        registry.insert(ToggleControl::new("genre-comedy", Some("genrebox")));
        registry.insert(ToggleControl::new("genre-drama", Some("genrebox")));
        registry
    }

    #[test]
    fn cycle_advances_and_closes() {
        let toggle = MultistateToggle::new(test_styles());
        let mut registry = ControlRegistry::new();
        registry.insert(ToggleControl::new("genre-action", Some("genrebox")));

        let (s1, style1) = toggle.activate(&mut registry, "genre-action");
        assert_eq!(s1, ToggleState::Include);
        assert_eq!(style1.background, "#2a2");

        let (s2, style2) = toggle.activate(&mut registry, "genre-action");
        assert_eq!(s2, ToggleState::Exclude);
        assert_eq!(style2.background, "#a22");

        let (s3, style3) = toggle.activate(&mut registry, "genre-action");
        assert_eq!(s3, ToggleState::Neutral);
        assert_eq!(style3.background, "#ccc");
    }

    #[test]
    fn cycle_closure_from_every_state() {
        let toggle = MultistateToggle::new(test_styles());
        for start in ToggleState::CYCLE {
            let mut registry = ControlRegistry::new();
            registry
                .insert(ToggleControl::new("box", None).with_stored(start.index().to_string()));
            for _ in 0..ToggleState::COUNT {
                toggle.activate(&mut registry, "box");
            }
            assert_eq!(registry.get("box").unwrap().state(), start);
        }
    }

    #[test]
    fn controller_fans_out_to_whole_group() {
        let toggle = MultistateToggle::new(test_styles());
        let mut registry = genre_registry();

        // controller at Include, members at mixed states
        registry
            .get_mut("all-genre-box")
            .unwrap()
            .set_state(ToggleState::Include);
        registry
            .get_mut("genre-comedy")
            .unwrap()
            .set_state(ToggleState::Exclude);
        registry
            .get_mut("genre-drama")
            .unwrap()
            .set_state(ToggleState::Include);

        let (new_state, _) = toggle.activate(&mut registry, "all-genre-box");
        assert_eq!(new_state, ToggleState::Exclude);

        for id in ["all-genre-box", "genre-action", "genre-comedy", "genre-drama"] {
            assert_eq!(registry.get(id).unwrap().state(), ToggleState::Exclude);
            assert_eq!(
                toggle.current_style(&registry, id).background,
                "#a22",
                "style mismatch for {}",
                id
            );
        }
    }

    #[test]
    fn non_controller_leaves_siblings_alone() {
        let toggle = MultistateToggle::new(test_styles());
        let mut registry = genre_registry();

        toggle.activate(&mut registry, "genre-action");

        assert_eq!(
            registry.get("genre-action").unwrap().state(),
            ToggleState::Include
        );
        for id in ["all-genre-box", "genre-comedy", "genre-drama"] {
            assert_eq!(registry.get(id).unwrap().state(), ToggleState::Neutral);
        }
    }

    #[test]
    fn unparsable_stored_state_defaults_to_neutral() {
        let toggle = MultistateToggle::new(test_styles());
        let mut registry = ControlRegistry::new();
        registry.insert(ToggleControl::new("box", None).with_stored("NaN"));

        assert_eq!(registry.get("box").unwrap().state(), ToggleState::Neutral);
        let (state, _) = toggle.activate(&mut registry, "box");
        assert_eq!(state, ToggleState::Include);
    }

    #[test]
    fn stored_state_parsing_is_lenient() {
        assert_eq!(ToggleState::parse_stored(Some("7")), ToggleState::Neutral);
        assert_eq!(ToggleState::parse_stored(Some("")), ToggleState::Neutral);
        assert_eq!(ToggleState::parse_stored(Some(" 2 ")), ToggleState::Exclude);
        assert_eq!(ToggleState::parse_stored(None), ToggleState::Neutral);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let toggle = MultistateToggle::new(test_styles());
        let mut registry = genre_registry();
        let before = registry.clone();

        let (state, style) = toggle.activate(&mut registry, "no-such-box");
        assert_eq!(state, ToggleState::Include);
        assert_eq!(style.background, "#2a2");
        assert_eq!(registry, before);
    }

    #[test]
    fn current_style_does_not_mutate() {
        let toggle = MultistateToggle::new(test_styles());
        let mut registry = genre_registry();
        registry
            .get_mut("genre-drama")
            .unwrap()
            .set_state(ToggleState::Exclude);
        let before = registry.clone();

        assert_eq!(
            toggle.current_style(&registry, "genre-drama").background,
            "#a22"
        );
        assert_eq!(
            toggle.current_style(&registry, "genre-action").background,
            "#ccc"
        );
        assert_eq!(registry, before);
    }

    #[test]
    fn activation_persists_state_for_the_host_page() {
        let toggle = MultistateToggle::new(test_styles());
        let mut registry = ControlRegistry::new();
        registry.insert(ToggleControl::new("box", None));

        toggle.activate(&mut registry, "box");
        assert_eq!(registry.get("box").unwrap().stored_raw(), Some("1"));
    }

    #[test]
    fn group_listing_borrows_a_runtime_group_name() {
        let registry = genre_registry();
        let group = String::from("genrebox");
        let ids: Vec<&str> = registry
            .group_members(&group)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(
            ids,
            ["all-genre-box", "genre-action", "genre-comedy", "genre-drama"]
        );
    }

    #[test]
    fn reinserting_a_control_replaces_it() {
        let mut registry = ControlRegistry::new();
        registry.insert(ToggleControl::new("box", None).with_stored("2"));
        registry.insert(ToggleControl::new("box", None));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("box").unwrap().state(), ToggleState::Neutral);
    }
}
