use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use crate::report::domain::half_report::HalfReport;
use crate::stoppage::domain::stoppage_interval::StoppageFamily;

/// Observer for a batch of half computations.
///
/// Keeps `BatchNptUseCase` free of any particular output mechanism.
pub trait PipelineLogger: Send {
    /// Report half-level progress.
    fn progress(&mut self, current: usize, total: usize);

    /// Record how long a named stage took for one half.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record the report of one finished half.
    fn half_computed(&mut self, report: &HalfReport);

    fn info(&mut self, message: &str);

    /// Emit an end-of-batch summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn half_computed(&mut self, _report: &HalfReport) {}
    fn info(&mut self, _message: &str) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct FamilyTally {
    stoppages: usize,
    seconds: f64,
}

/// `log`-backed logger that tallies stoppages per family across the batch
/// and reports them, with stage timings, once the batch is done.
///
/// Progress lines are throttled to every `throttle_halves` halves.
pub struct LogPipelineLogger {
    throttle_halves: usize,
    stage_ms: BTreeMap<String, (f64, usize)>,
    families: HashMap<StoppageFamily, FamilyTally>,
    net_playing_time_secs: f64,
    halves: usize,
    start_time: Instant,
}

impl LogPipelineLogger {
    pub fn new(throttle_halves: usize) -> Self {
        Self {
            throttle_halves: throttle_halves.max(1),
            stage_ms: BTreeMap::new(),
            families: HashMap::new(),
            net_playing_time_secs: 0.0,
            halves: 0,
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary, or `None` if no half was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.halves == 0 {
            return None;
        }

        let mut lines = vec![format!(
            "Batch summary ({} halves, {:.1}s total):",
            self.halves,
            self.start_time.elapsed().as_secs_f64()
        )];

        for (stage, (total_ms, runs)) in &self.stage_ms {
            let avg_ms = total_ms / (*runs).max(1) as f64;
            lines.push(format!(
                "  {stage:10}: avg {avg_ms:7.3}ms  total {total_ms:8.1}ms"
            ));
        }

        for family in StoppageFamily::ALL {
            let tally = self.families.get(family).copied().unwrap_or_default();
            let name = family.to_string();
            lines.push(format!(
                "  {name:10}: {:4} stoppages  {:7.2} min",
                tally.stoppages,
                tally.seconds / 60.0
            ));
        }

        let avg_npt_min = self.net_playing_time_secs / self.halves as f64 / 60.0;
        lines.push(format!(
            "  Net playing time: avg {avg_npt_min:.2} min per half"
        ));

        Some(lines.join("\n"))
    }
}

impl Default for LogPipelineLogger {
    fn default() -> Self {
        Self::new(10)
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        if total > 0 && (current % self.throttle_halves == 0 || current == total) {
            log::info!("Computed {current}/{total} halves");
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        let entry = self.stage_ms.entry(stage.to_string()).or_insert((0.0, 0));
        entry.0 += duration_ms;
        entry.1 += 1;
    }

    fn half_computed(&mut self, report: &HalfReport) {
        for family in StoppageFamily::ALL {
            let tally = self.families.entry(*family).or_default();
            tally.stoppages += report.distribution_for(*family).count;
            tally.seconds += report.total_for(*family);
        }
        self.net_playing_time_secs += report.net_playing_time;
        self.halves += 1;
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
