use std::collections::BTreeMap;

use crate::core::NUM_PLAYERS;

use super::config::{SimulationConfig, TeamPairing};
use super::report::{CATEGORY_COUNT, Reporter, ScoreCategory};

/// Accumulated samples for one reporting category.
///
/// Meld scores are small non-negative integers, so the ordered frequency
/// table is a lossless view of the whole sample set: exact median and
/// mode come straight from it and no raw sample list is kept. All state
/// is integer valued, which is what makes `merge` exact - partial series
/// built on any partition of the samples combine into bit-identical
/// summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSeries {
    count: u64,
    sum: u64,
    sum_squares: u64,
    min: Option<u32>,
    max: Option<u32>,
    freq: BTreeMap<u32, u64>,
}

impl SampleSeries {
    /// A series with no samples.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample.
    pub fn push(&mut self, value: u32) {
        let v = u64::from(value);
        self.count += 1;
        self.sum += v;
        self.sum_squares += v * v;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
        *self.freq.entry(value).or_insert(0) += 1;
    }

    /// Fold another series into this one.
    ///
    /// Associative and commutative: sums add, extremes reduce, frequency
    /// tables merge by summing counts.
    pub fn merge(&mut self, other: &SampleSeries) {
        self.count += other.count;
        self.sum += other.sum;
        self.sum_squares += other.sum_squares;
        self.min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        for (value, count) in &other.freq {
            *self.freq.entry(*value).or_insert(0) += count;
        }
    }

    /// How many samples have been recorded.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Has nothing been recorded yet?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The sample value at a 0-based index of the sorted sample list,
    /// read off the cumulative frequency table.
    fn value_at_sorted_index(&self, index: u64) -> u32 {
        let mut cumulative = 0;
        for (value, count) in &self.freq {
            cumulative += count;
            if cumulative > index {
                return *value;
            }
        }
        // Unreachable for index < count; callers only index in range.
        self.max.unwrap_or(0)
    }

    /// Compute the summary statistics for this series.
    ///
    /// Returns `None` for an empty series. The standard deviation is the
    /// population form, `sqrt(E[x^2] - E[x]^2)` over all samples, not the
    /// n-1 corrected sample estimator. The histogram groups scores into
    /// `bucket_width` wide buckets; if `outlier_std_devs` is set, values
    /// more than that many standard deviations above the mean are left
    /// out of the histogram only - every other statistic still covers the
    /// full sample set.
    ///
    /// # Panics
    ///
    /// Panics on a zero `bucket_width`; `SimulationConfig::validate`
    /// rejects that before any simulation runs.
    pub fn summarize(&self, bucket_width: u32, outlier_std_devs: Option<f64>) -> Option<StatSummary> {
        if self.count == 0 {
            return None;
        }
        let count = self.count;
        let min = self.min?;
        let max = self.max?;

        let mean = self.sum as f64 / count as f64;
        let variance = (self.sum_squares as f64 / count as f64 - mean * mean).max(0.0);
        let std_dev = variance.sqrt();

        let median = if count % 2 == 1 {
            f64::from(self.value_at_sorted_index(count / 2))
        } else {
            let lower = self.value_at_sorted_index(count / 2 - 1);
            let upper = self.value_at_sorted_index(count / 2);
            f64::from(lower + upper) / 2.0
        };

        // First maximum wins; the table is in ascending value order so
        // ties break toward the smallest value.
        let mut mode = min;
        let mut mode_count = 0;
        for (value, freq_count) in &self.freq {
            if *freq_count > mode_count {
                mode_count = *freq_count;
                mode = *value;
            }
        }

        let cutoff = outlier_std_devs.map(|k| mean + k * std_dev);
        let histogram = self.histogram(bucket_width, cutoff);

        Some(StatSummary {
            count,
            min,
            max,
            mean,
            median,
            mode,
            std_dev,
            histogram,
        })
    }

    /// Build the bucketed histogram, dropping values above `cutoff` when
    /// one is given.
    fn histogram(&self, bucket_width: u32, cutoff: Option<f64>) -> Histogram {
        let kept: Vec<(u32, u64)> = self
            .freq
            .iter()
            .filter(|(value, _)| cutoff.is_none_or(|cut| f64::from(**value) <= cut))
            .map(|(value, count)| (*value, *count))
            .collect();

        let Some(first_bucket) = kept.first().map(|(v, _)| v / bucket_width) else {
            return Histogram {
                bucket_width,
                buckets: Vec::new(),
            };
        };
        // kept is in ascending order, so last() has the top bucket.
        let last_bucket = kept.last().map_or(first_bucket, |(v, _)| v / bucket_width);

        let mut buckets: Vec<HistogramBucket> = (first_bucket..=last_bucket)
            .map(|b| HistogramBucket {
                start: b * bucket_width,
                count: 0,
            })
            .collect();
        for (value, count) in kept {
            buckets[(value / bucket_width - first_bucket) as usize].count += count;
        }
        Histogram {
            bucket_width,
            buckets,
        }
    }
}

/// One histogram bucket covering `[start, start + width)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramBucket {
    /// The lowest score falling in this bucket.
    pub start: u32,
    /// How many samples fell in this bucket.
    pub count: u64,
}

/// Fixed-width score histogram.
///
/// Buckets are contiguous over the covered range, including empty ones.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bucket_width: u32,
    buckets: Vec<HistogramBucket>,
}

impl Histogram {
    /// The configured bucket width.
    pub fn bucket_width(&self) -> u32 {
        self.bucket_width
    }

    /// The buckets in ascending score order.
    pub fn buckets(&self) -> &[HistogramBucket] {
        &self.buckets
    }

    /// Total samples across all buckets. With outlier filtering on, this
    /// can be less than the series count.
    pub fn total_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Finalized summary statistics for one category.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StatSummary {
    /// Number of samples.
    pub count: u64,
    /// Smallest observed score.
    pub min: u32,
    /// Largest observed score.
    pub max: u32,
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value; the average of the two middles for even counts.
    pub median: f64,
    /// Most frequent value, ties broken toward the smallest.
    pub mode: u32,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Bucketed score distribution, possibly outlier filtered.
    pub histogram: Histogram,
}

/// Per-category accumulation for a whole run.
///
/// Owns one `SampleSeries` per reporting category. Aggregators built on
/// disjoint batches of iterations merge into the same state one
/// aggregator would have built over all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsAggregator {
    series: [SampleSeries; CATEGORY_COUNT],
}

impl StatsAggregator {
    /// A fresh aggregator with all categories empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample under one category.
    pub fn record(&mut self, category: ScoreCategory, value: u32) {
        self.series[category.index()].push(value);
    }

    /// Record one full deal: four player scores, the team sums, and the
    /// overall sum.
    pub fn record_deal(&mut self, player_scores: [u32; NUM_PLAYERS], pairing: &TeamPairing) {
        for (player, score) in player_scores.iter().enumerate() {
            self.record(ScoreCategory::Player(player), *score);
        }
        let [team_0, team_1] = pairing.team_scores(player_scores);
        self.record(ScoreCategory::Team(0), team_0);
        self.record(ScoreCategory::Team(1), team_1);
        self.record(ScoreCategory::Overall, player_scores.iter().sum());
    }

    /// The accumulated series for one category.
    pub fn series(&self, category: ScoreCategory) -> &SampleSeries {
        &self.series[category.index()]
    }

    /// Fold another aggregator's state into this one, category by
    /// category. Order of merging never changes the result.
    pub fn merge(&mut self, other: &StatsAggregator) {
        for category in ScoreCategory::ALL {
            self.series[category.index()].merge(other.series(category));
        }
    }

    /// Summarize every non-empty category in reporting order.
    pub fn summaries(&self, config: &SimulationConfig) -> Vec<(ScoreCategory, StatSummary)> {
        ScoreCategory::ALL
            .iter()
            .filter_map(|category| {
                self.series(*category)
                    .summarize(config.bucket_width, config.outlier_cutoff())
                    .map(|summary| (*category, summary))
            })
            .collect()
    }

    /// Hand every category's summary to a reporter.
    pub fn report_to(&self, config: &SimulationConfig, reporter: &mut dyn Reporter) {
        for (category, summary) in self.summaries(config) {
            reporter.report(category, &summary);
        }
    }
}
