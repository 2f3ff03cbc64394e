use crate::shared::event::Event;
use crate::stoppage::domain::stoppage_interval::{durations, StoppageInterval};

use super::duration_distribution::DurationDistribution;
use super::half_report::HalfReport;

/// Reduces the three stoppage families of a half into a `HalfReport`.
pub struct NptAggregator;

impl NptAggregator {
    /// Half duration is the largest match clock in `events` (0 for an
    /// empty half). Family totals are plain sums, 0 when a family is empty.
    pub fn aggregate(
        events: &[Event],
        restart: &[StoppageInterval<'_>],
        goal: &[StoppageInterval<'_>],
        var: &[StoppageInterval<'_>],
    ) -> HalfReport {
        let half_duration = Self::half_duration(events);

        let restart_durations = durations(restart);
        let goal_durations = durations(goal);
        let var_durations = durations(var);

        let total_restart = total(&restart_durations);
        let total_goal = total(&goal_durations);
        let total_var = total(&var_durations);
        let total_stoppage = total_restart + total_goal + total_var;

        HalfReport {
            half_duration,
            total_restart,
            total_goal,
            total_var,
            total_stoppage,
            net_playing_time: half_duration - total_stoppage,
            restart_distribution: DurationDistribution::from_durations(&restart_durations),
            goal_distribution: DurationDistribution::from_durations(&goal_durations),
            var_distribution: DurationDistribution::from_durations(&var_durations),
        }
    }

    pub fn half_duration(events: &[Event]) -> f64 {
        events
            .iter()
            .map(|e| e.match_clock)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }
}

// `Iterator::sum` over f64 starts from -0.0; an empty family must total +0.0.
fn total(durations: &[f64]) -> f64 {
    durations.iter().fold(0.0, |acc, d| acc + d)
}
