//! Per-category count and timing statistics
//!
//! Statistics are recomputed from the retained results every time a summary
//! is rendered; nothing here outlives a single fold.

use crate::category::Category;
use crate::results::{Outcome, ResultRecord, TestResult};
use std::collections::BTreeMap;
use tracing::debug;

pub mod median;

pub use median::RunningMedian;

/// Aggregate statistics for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatsRow {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Sum of run durations in milliseconds.
    pub total_time: u64,
    pub mean_time: f64,
    pub median_time: f64,
    /// Largest run duration seen.
    pub peak_time: u64,
}

/// Folds results one at a time into a [`StatsRow`].
///
/// Every statistic, the median included, is valid as of the most recent
/// [`push`](StatsAccumulator::push).
#[derive(Debug, Default)]
pub struct StatsAccumulator {
    row: StatsRow,
    durations: RunningMedian,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: &TestResult) {
        let row = &mut self.row;
        match result.outcome() {
            Outcome::Passed => row.passed += 1,
            Outcome::Failed => row.failed += 1,
            Outcome::Skipped => row.skipped += 1,
        }
        row.total += 1;
        row.total_time += result.run_duration;
        row.mean_time = row.total_time as f64 / row.total as f64;
        row.peak_time = row.peak_time.max(result.run_duration);

        self.durations.insert(result.run_duration);
        row.median_time = self.durations.median();
    }

    pub fn finish(self) -> StatsRow {
        self.row
    }
}

/// Fold `results` in order into a fresh [`StatsRow`].
///
/// An empty sequence yields an all-zero row.
pub fn fold<'a, I>(results: I) -> StatsRow
where
    I: IntoIterator<Item = &'a TestResult>,
{
    let mut acc = StatsAccumulator::new();
    for result in results {
        acc.push(result);
    }
    acc.finish()
}

/// Compute one row per category from the retained records.
///
/// Every category is present in the returned map, even when empty.
pub fn fold_categories(records: &[ResultRecord]) -> BTreeMap<Category, StatsRow> {
    Category::ALL
        .iter()
        .map(|category| {
            let row = fold(
                records
                    .iter()
                    .map(|record| &record.result)
                    .filter(|result| category.belongs_to(result)),
            );
            debug!(
                category = category.name(),
                total = row.total,
                failed = row.failed,
                "folded category statistics"
            );
            (*category, row)
        })
        .collect()
}
