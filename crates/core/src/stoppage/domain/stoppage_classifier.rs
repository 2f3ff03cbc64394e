use crate::shared::constants::{GOAL_CATEGORY, KICKOFF_PATTERN, VAR_CATEGORY};
use crate::shared::event::Event;

use super::stoppage_interval::StoppageFamily;

/// How a category identifier is compared against a configured pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryMatcher {
    /// Whole identifier must equal the pattern.
    Exact(String),
    /// Identifier must contain the pattern (case-sensitive).
    Contains(String),
}

impl CategoryMatcher {
    pub fn matches(&self, category_id: &str) -> bool {
        match self {
            CategoryMatcher::Exact(p) => category_id == p,
            CategoryMatcher::Contains(p) => category_id.contains(p.as_str()),
        }
    }
}

/// Decides which stoppage family an event belongs to from its category.
///
/// Restarts are matched permissively by substring so sub-variants such as
/// `FreeKick_Indirect` are captured. Goals and VAR actions require an exact
/// category; kickoffs match by substring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoppageClassifier {
    restart: Vec<CategoryMatcher>,
    goal: CategoryMatcher,
    kickoff: CategoryMatcher,
    var: CategoryMatcher,
}

impl StoppageClassifier {
    pub fn new<S: AsRef<str>>(restart_patterns: &[S]) -> Self {
        Self {
            restart: restart_patterns
                .iter()
                .map(|p| CategoryMatcher::Contains(p.as_ref().to_string()))
                .collect(),
            goal: CategoryMatcher::Exact(GOAL_CATEGORY.to_string()),
            kickoff: CategoryMatcher::Contains(KICKOFF_PATTERN.to_string()),
            var: CategoryMatcher::Exact(VAR_CATEGORY.to_string()),
        }
    }

    pub fn is_restart_candidate(&self, event: &Event) -> bool {
        self.restart.iter().any(|m| m.matches(&event.category_id))
    }

    pub fn is_goal(&self, event: &Event) -> bool {
        self.goal.matches(&event.category_id)
    }

    pub fn is_kickoff(&self, event: &Event) -> bool {
        self.kickoff.matches(&event.category_id)
    }

    pub fn is_var_action(&self, event: &Event) -> bool {
        self.var.matches(&event.category_id)
    }

    /// Every family the event's category falls into.
    ///
    /// Kickoffs only close goal stoppages and are not reported here. More
    /// than one entry means the event would be counted by several
    /// calculators.
    pub fn families(&self, event: &Event) -> Vec<StoppageFamily> {
        let mut families = Vec::new();
        if self.is_restart_candidate(event) {
            families.push(StoppageFamily::Restart);
        }
        if self.is_goal(event) {
            families.push(StoppageFamily::Goal);
        }
        if self.is_var_action(event) {
            families.push(StoppageFamily::Var);
        }
        families
    }
}

impl Default for StoppageClassifier {
    fn default() -> Self {
        Self::new(crate::shared::constants::DEFAULT_RESTART_PATTERNS)
    }
}
