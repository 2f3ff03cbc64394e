use std::time::Instant;

use crate::report::domain::half_report::HalfReport;
use crate::report::domain::npt_aggregator::NptAggregator;
use crate::shared::event::Event;
use crate::stoppage::domain::goal_stoppage_calculator::GoalStoppageCalculator;
use crate::stoppage::domain::restart_stoppage_calculator::RestartStoppageCalculator;
use crate::stoppage::domain::stoppage_calculator::StoppageCalculator;
use crate::stoppage::domain::stoppage_classifier::StoppageClassifier;
use crate::stoppage::domain::var_stoppage_calculator::VarStoppageCalculator;

use super::npt_config::NptConfig;

/// Per-stage wall time of one half computation, in milliseconds.
pub type StageTimings = Vec<(&'static str, f64)>;

/// Per-half net playing time: classify → restart/goal/VAR → aggregate.
///
/// `events` must already be ordered by match clock; ordering is neither
/// checked nor repaired. The use case holds no mutable state, so one
/// instance can serve any number of halves from any number of threads.
pub struct ComputeNptUseCase {
    classifier: StoppageClassifier,
    restart: RestartStoppageCalculator,
    goal: GoalStoppageCalculator,
    var: VarStoppageCalculator,
}

impl ComputeNptUseCase {
    pub fn new(config: &NptConfig) -> Self {
        Self {
            classifier: config.classifier(),
            restart: RestartStoppageCalculator,
            goal: GoalStoppageCalculator,
            var: VarStoppageCalculator,
        }
    }

    pub fn execute(&self, events: &[Event]) -> HalfReport {
        self.execute_timed(events).0
    }

    pub fn execute_timed(&self, events: &[Event]) -> (HalfReport, StageTimings) {
        let mut timings = StageTimings::with_capacity(4);

        let start = Instant::now();
        let restart = self.restart.calculate(events, &self.classifier);
        timings.push(("restart", elapsed_ms(start)));

        let start = Instant::now();
        let goal = self.goal.calculate(events, &self.classifier);
        timings.push(("goal", elapsed_ms(start)));

        let start = Instant::now();
        let var = self.var.calculate(events, &self.classifier);
        timings.push(("var", elapsed_ms(start)));

        let start = Instant::now();
        let report = NptAggregator::aggregate(events, &restart, &goal, &var);
        timings.push(("aggregate", elapsed_ms(start)));

        if log::log_enabled!(log::Level::Debug) {
            let overlapping = self.overlapping_events(events);
            if overlapping > 0 {
                log::debug!("{overlapping} event(s) match more than one stoppage family");
            }
        }
        log::info!(
            "Half of {} events: {} restart, {} goal, {} VAR stoppage(s), NPT {:.1}s of {:.1}s",
            events.len(),
            restart.len(),
            goal.len(),
            var.len(),
            report.net_playing_time,
            report.half_duration
        );

        (report, timings)
    }

    /// Events counted by more than one calculator.
    fn overlapping_events(&self, events: &[Event]) -> usize {
        events
            .iter()
            .filter(|e| self.classifier.families(e).len() > 1)
            .count()
    }
}

impl Default for ComputeNptUseCase {
    fn default() -> Self {
        Self::new(&NptConfig::default())
    }
}

/// Computes a single half's report with the given configuration.
pub fn compute_half_npt(events: &[Event], config: &NptConfig) -> HalfReport {
    ComputeNptUseCase::new(config).execute(events)
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::{event, event_with_metadata, restart, rfc3339, var_action};
    use approx::assert_relative_eq;
    use serde_json::json;

    const GOAL: &str = "ShotAtGoal_SuccessfulShot";

    fn sample_half() -> Vec<Event> {
        vec![
            event("KickOff", 0.0),
            restart("ThrowIn", 95.0, 12.0),
            restart("FreeKick_Indirect", 410.0, 28.0),
            event("FreeKick", 600.0),
            event(GOAL, 1000.0),
            event("KickOff", 1010.0),
            restart("CornerKick", 1500.0, 20.0),
            var_action(1900.0, 1850.0, 1895.0),
            event_with_metadata(
                "VideoAssistantAction",
                2100.0,
                json!({ "TimestampStartAction": rfc3339(2050.0) }),
            ),
            event("Substitution", 2400.0),
            event(GOAL, 2700.0),
            event("FinalWhistle", 2760.0),
        ]
    }

    #[test]
    fn test_full_half() {
        let report = ComputeNptUseCase::default().execute(&sample_half());

        assert_relative_eq!(report.half_duration, 2760.0);
        assert_relative_eq!(report.total_restart, 60.0);
        assert_relative_eq!(report.total_goal, 10.0);
        assert_relative_eq!(report.total_var, 45.0);
        assert_relative_eq!(report.total_stoppage, 115.0);
        assert_relative_eq!(report.net_playing_time, 2645.0);

        assert_eq!(report.restart_distribution.count, 3);
        assert_eq!(report.goal_distribution.count, 1);
        assert_eq!(report.var_distribution.count, 1);
    }

    #[test]
    fn test_invariants() {
        let r = ComputeNptUseCase::default().execute(&sample_half());
        assert_eq!(r.total_stoppage, r.total_restart + r.total_goal + r.total_var);
        assert_eq!(r.net_playing_time, r.half_duration - r.total_stoppage);
    }

    #[test]
    fn test_repeated_execution_is_identical() {
        let events = sample_half();
        let use_case = ComputeNptUseCase::default();
        let first = use_case.execute(&events);
        let second = use_case.execute(&events);
        assert_eq!(first, second);
        assert_eq!(
            first.net_playing_time.to_bits(),
            second.net_playing_time.to_bits()
        );
    }

    #[test]
    fn test_no_qualifying_events() {
        let events = vec![event("KickOff", 0.0), event("Pass", 1200.0), event("Substitution", 2700.0)];
        let report = compute_half_npt(&events, &NptConfig::default());
        assert_eq!(report.total_restart, 0.0);
        assert_eq!(report.total_goal, 0.0);
        assert_eq!(report.total_var, 0.0);
        assert_eq!(report.restart_distribution.count, 0);
        assert_eq!(report.goal_distribution.count, 0);
        assert_eq!(report.var_distribution.count, 0);
        assert_relative_eq!(report.net_playing_time, 2700.0);
    }

    #[test]
    fn test_empty_half() {
        let report = ComputeNptUseCase::default().execute(&[]);
        assert_eq!(report.half_duration, 0.0);
        assert_eq!(report.net_playing_time, 0.0);
    }

    #[test]
    fn test_restart_without_decision_time_not_in_distribution() {
        let events = vec![restart("ThrowIn", 100.0, 10.0), event("ThrowIn", 200.0)];
        let report = ComputeNptUseCase::default().execute(&events);
        assert_relative_eq!(report.total_restart, 10.0);
        assert_eq!(report.restart_distribution.count, 1);
    }

    #[test]
    fn test_custom_config_changes_restart_family() {
        let events = vec![restart("DropBall", 100.0, 15.0), restart("ThrowIn", 200.0, 5.0)];
        let config = NptConfig::with_restart_patterns(vec!["DropBall".into()]);
        let report = compute_half_npt(&events, &config);
        assert_relative_eq!(report.total_restart, 15.0);
    }

    #[test]
    fn test_default_patterns_have_no_overlap() {
        assert_eq!(ComputeNptUseCase::default().overlapping_events(&sample_half()), 0);
    }

    #[test]
    fn test_overlapping_pattern_counts_goal_in_both_families() {
        let events = vec![
            event("KickOff", 0.0),
            restart(GOAL, 1000.0, 8.0),
            event("KickOff", 1010.0),
        ];
        let use_case = ComputeNptUseCase::new(&NptConfig::with_restart_patterns(vec!["Shot".into()]));

        assert_eq!(use_case.overlapping_events(&events), 1);
        let report = use_case.execute(&events);
        assert_relative_eq!(report.total_restart, 8.0);
        assert_relative_eq!(report.total_goal, 10.0);
        assert_relative_eq!(report.total_stoppage, 18.0);
    }

    #[test]
    fn test_timings_cover_every_stage() {
        let (_, timings) = ComputeNptUseCase::default().execute_timed(&sample_half());
        let stages: Vec<&str> = timings.iter().map(|(s, _)| *s).collect();
        assert_eq!(stages, vec!["restart", "goal", "var", "aggregate"]);
        assert!(timings.iter().all(|(_, ms)| *ms >= 0.0));
    }

    #[test]
    fn test_use_case_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ComputeNptUseCase>();
    }
}
