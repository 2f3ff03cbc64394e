use std::thread;

use serde::Serialize;

use crate::report::domain::half_report::HalfReport;
use crate::shared::half_events::{HalfEvents, HalfKey};

use super::compute_npt_use_case::{ComputeNptUseCase, StageTimings};
use super::npt_config::NptConfig;
use super::pipeline_logger::PipelineLogger;

/// Report for one segment of a batch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HalfResult {
    pub key: HalfKey,
    pub report: HalfReport,
}

/// Computes many halves concurrently.
///
/// Layout: `jobs → N workers [ComputeNptUseCase] → main [collect/log]`
///
/// Halves are independent, so workers share one use case without locking.
/// Results are returned in input order.
pub struct BatchNptUseCase {
    use_case: ComputeNptUseCase,
    workers: usize,
    logger: Box<dyn PipelineLogger>,
}

impl BatchNptUseCase {
    pub fn new(config: &NptConfig, workers: usize, logger: Box<dyn PipelineLogger>) -> Self {
        Self {
            use_case: ComputeNptUseCase::new(config),
            workers: workers.max(1),
            logger,
        }
    }

    pub fn execute(&mut self, halves: &[HalfEvents]) -> Vec<HalfResult> {
        let total = halves.len();
        if total == 0 {
            return Vec::new();
        }
        let workers = self.workers.min(total);
        self.logger
            .info(&format!("Computing {total} halves on {workers} worker(s)"));

        let (job_tx, job_rx) = crossbeam_channel::bounded::<usize>(total);
        for index in 0..total {
            if job_tx.send(index).is_err() {
                break;
            }
        }
        drop(job_tx);

        let (result_tx, result_rx) =
            crossbeam_channel::bounded::<(usize, HalfReport, StageTimings)>(workers);

        let use_case = &self.use_case;
        let logger = &mut self.logger;
        let mut slots: Vec<Option<HalfReport>> = vec![None; total];

        thread::scope(|scope| {
            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    for index in job_rx {
                        let (report, timings) = use_case.execute_timed(&halves[index].events);
                        if result_tx.send((index, report, timings)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(result_tx);

            for (completed, (index, report, timings)) in result_rx.iter().enumerate() {
                for (stage, ms) in timings {
                    logger.timing(stage, ms);
                }
                logger.half_computed(&report);
                logger.progress(completed + 1, total);
                slots[index] = Some(report);
            }
        });

        let results: Vec<HalfResult> = halves
            .iter()
            .zip(slots)
            .filter_map(|(half, slot)| {
                slot.map(|report| HalfResult {
                    key: half.key.clone(),
                    report,
                })
            })
            .collect();

        self.logger.summary();
        results
    }
}

/// Worker count matching the machine's available parallelism.
pub fn default_worker_count() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}
