use crate::shared::clock::seconds_between;
use crate::shared::constants::DECISION_TIMESTAMP;
use crate::shared::event::Event;

use super::qualifier_extractor::QualifierExtractor;
use super::stoppage_calculator::StoppageCalculator;
use super::stoppage_classifier::StoppageClassifier;
use super::stoppage_interval::{ReferenceTime, StoppageFamily, StoppageInterval};

/// Restart stoppage: from the referee's decision to the restart itself.
///
/// Duration is `wall_clock - DecisionTimestamp`. Restarts without a usable
/// decision timestamp are excluded.
pub struct RestartStoppageCalculator;

impl StoppageCalculator for RestartStoppageCalculator {
    fn family(&self) -> StoppageFamily {
        StoppageFamily::Restart
    }

    fn calculate<'a>(
        &self,
        events: &'a [Event],
        classifier: &StoppageClassifier,
    ) -> Vec<StoppageInterval<'a>> {
        let mut candidates = 0usize;
        let intervals: Vec<StoppageInterval<'a>> = events
            .iter()
            .filter(|e| classifier.is_restart_candidate(e))
            .inspect(|_| candidates += 1)
            .filter_map(|event| {
                let decision_time =
                    QualifierExtractor::extract(event.metadata.as_ref(), DECISION_TIMESTAMP)?;
                Some(StoppageInterval {
                    family: StoppageFamily::Restart,
                    reference_time: ReferenceTime::WallClock(decision_time),
                    duration_secs: seconds_between(event.wall_clock, decision_time),
                    source_event: event,
                })
            })
            .collect();

        let excluded = candidates - intervals.len();
        if excluded > 0 {
            log::debug!("Restart: excluded {excluded}/{candidates} candidates without decision time");
        }
        intervals
    }
}
