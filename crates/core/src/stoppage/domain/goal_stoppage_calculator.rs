use crate::shared::event::Event;

use super::stoppage_calculator::StoppageCalculator;
use super::stoppage_classifier::StoppageClassifier;
use super::stoppage_interval::{ReferenceTime, StoppageFamily, StoppageInterval};

/// Goal stoppage: from a goal to the kickoff that restarts play.
///
/// Measured on the match clock. Each goal is paired with the earliest
/// kickoff strictly after it; a goal with no later kickoff is excluded.
///
/// The full kickoff set is searched for every goal, so two goals preceding
/// the same kickoff are both paired with it and its gap is counted twice.
pub struct GoalStoppageCalculator;

impl GoalStoppageCalculator {
    fn next_kickoff<'a>(kickoffs: &[&'a Event], after: f64) -> Option<&'a Event> {
        kickoffs
            .iter()
            .copied()
            .filter(|k| k.match_clock > after)
            // min_by keeps the first of equal elements, so ties go to sequence order.
            .min_by(|a, b| a.match_clock.total_cmp(&b.match_clock))
    }
}

impl StoppageCalculator for GoalStoppageCalculator {
    fn family(&self) -> StoppageFamily {
        StoppageFamily::Goal
    }

    fn calculate<'a>(
        &self,
        events: &'a [Event],
        classifier: &StoppageClassifier,
    ) -> Vec<StoppageInterval<'a>> {
        let kickoffs: Vec<&Event> = events.iter().filter(|e| classifier.is_kickoff(e)).collect();

        let mut goals = 0usize;
        let intervals: Vec<StoppageInterval<'a>> = events
            .iter()
            .filter(|e| classifier.is_goal(e))
            .inspect(|_| goals += 1)
            .filter_map(|goal| {
                let kickoff = Self::next_kickoff(&kickoffs, goal.match_clock)?;
                Some(StoppageInterval {
                    family: StoppageFamily::Goal,
                    reference_time: ReferenceTime::MatchClock(goal.match_clock),
                    duration_secs: kickoff.match_clock - goal.match_clock,
                    source_event: goal,
                })
            })
            .collect();

        let unpaired = goals - intervals.len();
        if unpaired > 0 {
            log::debug!("Goal: {unpaired}/{goals} goals have no subsequent kickoff");
        }
        intervals
    }
}
