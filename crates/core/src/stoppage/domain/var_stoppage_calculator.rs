use crate::shared::clock::seconds_between;
use crate::shared::constants::{VAR_END_TIMESTAMP, VAR_START_TIMESTAMP};
use crate::shared::event::Event;

use super::qualifier_extractor::QualifierExtractor;
use super::stoppage_calculator::StoppageCalculator;
use super::stoppage_classifier::StoppageClassifier;
use super::stoppage_interval::{ReferenceTime, StoppageFamily, StoppageInterval};

/// VAR stoppage: wall-clock span of a video review action.
///
/// Both `TimestampStartAction` and `TimestampEndAction` must be present,
/// otherwise the action is excluded.
pub struct VarStoppageCalculator;

impl StoppageCalculator for VarStoppageCalculator {
    fn family(&self) -> StoppageFamily {
        StoppageFamily::Var
    }

    fn calculate<'a>(
        &self,
        events: &'a [Event],
        classifier: &StoppageClassifier,
    ) -> Vec<StoppageInterval<'a>> {
        let mut actions = 0usize;
        let intervals: Vec<StoppageInterval<'a>> = events
            .iter()
            .filter(|e| classifier.is_var_action(e))
            .inspect(|_| actions += 1)
            .filter_map(|event| {
                let metadata = event.metadata.as_ref();
                let start = QualifierExtractor::extract(metadata, VAR_START_TIMESTAMP)?;
                let end = QualifierExtractor::extract(metadata, VAR_END_TIMESTAMP)?;
                Some(StoppageInterval {
                    family: StoppageFamily::Var,
                    reference_time: ReferenceTime::WallClock(start),
                    duration_secs: seconds_between(end, start),
                    source_event: event,
                })
            })
            .collect();

        let excluded = actions - intervals.len();
        if excluded > 0 {
            log::debug!("VAR: excluded {excluded}/{actions} actions without start/end");
        }
        intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::{at, event, event_with_metadata, rfc3339, var_action};
    use approx::assert_relative_eq;
    use serde_json::json;

    fn calculate(events: &[Event]) -> Vec<StoppageInterval<'_>> {
        VarStoppageCalculator.calculate(events, &StoppageClassifier::default())
    }

    #[test]
    fn test_family() {
        assert_eq!(VarStoppageCalculator.family(), StoppageFamily::Var);
    }

    #[test]
    fn test_duration_is_end_minus_start() {
        let events = vec![var_action(1800.0, 1700.0, 1745.0)];
        let intervals = calculate(&events);
        assert_eq!(intervals.len(), 1);
        assert_relative_eq!(intervals[0].duration_secs, 45.0);
        assert_eq!(intervals[0].reference_time, ReferenceTime::WallClock(at(1700.0)));
    }

    #[test]
    fn test_missing_end_is_excluded() {
        let events = vec![event_with_metadata(
            "VideoAssistantAction",
            1800.0,
            json!({ "TimestampStartAction": rfc3339(1700.0) }),
        )];
        assert!(calculate(&events).is_empty());
    }

    #[test]
    fn test_missing_start_is_excluded() {
        let events = vec![event_with_metadata(
            "VideoAssistantAction",
            1800.0,
            json!({ "TimestampEndAction": rfc3339(1745.0) }),
        )];
        assert!(calculate(&events).is_empty());
    }

    #[test]
    fn test_without_metadata_is_excluded() {
        let events = vec![event("VideoAssistantAction", 1800.0)];
        assert!(calculate(&events).is_empty());
    }

    #[test]
    fn test_only_exact_category_counts() {
        let mut review = var_action(900.0, 880.0, 900.0);
        review.category_id = "VideoAssistantActionCheck".to_string();
        assert!(calculate(&[review]).is_empty());
    }

    #[test]
    fn test_independent_of_event_wall_clock() {
        // Event recorded long after the review; only the qualifiers matter.
        let events = vec![var_action(2500.0, 1000.0, 1030.5)];
        let intervals = calculate(&events);
        assert_relative_eq!(intervals[0].duration_secs, 30.5);
    }

    #[test]
    fn test_multiple_actions() {
        let events = vec![
            var_action(600.0, 590.0, 600.0),
            event("ThrowIn", 700.0),
            var_action(1200.0, 1100.0, 1190.0),
        ];
        let intervals = calculate(&events);
        assert_eq!(intervals.len(), 2);
        assert_relative_eq!(intervals[0].duration_secs, 10.0);
        assert_relative_eq!(intervals[1].duration_secs, 90.0);
    }
}
