use serde::Serialize;

use crate::stoppage::domain::stoppage_interval::StoppageFamily;

use super::duration_distribution::DurationDistribution;

/// Net playing time breakdown for one half. All times are in seconds.
///
/// `total_stoppage` is the sum of the three family totals and
/// `net_playing_time` is `half_duration - total_stoppage`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HalfReport {
    pub half_duration: f64,
    pub total_restart: f64,
    pub total_goal: f64,
    pub total_var: f64,
    pub total_stoppage: f64,
    pub net_playing_time: f64,
    pub restart_distribution: DurationDistribution,
    pub goal_distribution: DurationDistribution,
    pub var_distribution: DurationDistribution,
}

impl HalfReport {
    pub fn total_for(&self, family: StoppageFamily) -> f64 {
        match family {
            StoppageFamily::Restart => self.total_restart,
            StoppageFamily::Goal => self.total_goal,
            StoppageFamily::Var => self.total_var,
        }
    }

    pub fn distribution_for(&self, family: StoppageFamily) -> &DurationDistribution {
        match family {
            StoppageFamily::Restart => &self.restart_distribution,
            StoppageFamily::Goal => &self.goal_distribution,
            StoppageFamily::Var => &self.var_distribution,
        }
    }
}
