use serde::Serialize;

/// Descriptive statistics over one stoppage family's durations (seconds).
///
/// Quantiles use linear interpolation between closest ranks and `std` is
/// the sample standard deviation. With no values every statistic except
/// `count` is NaN; with a single value `std` is NaN.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationDistribution {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl DurationDistribution {
    pub fn empty() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        }
    }

    pub fn from_durations(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::empty();
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;

        let std = if count < 2 {
            f64::NAN
        } else {
            let sum_sq: f64 = values
                .iter()
                .map(|v| {
                    let diff = v - mean;
                    diff * diff
                })
                .sum();
            (sum_sq / (count - 1) as f64).sqrt()
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl PartialEq for DurationDistribution {
    /// NaN statistics compare equal to each other so that two reports
    /// computed from the same input are equal.
    fn eq(&self, other: &Self) -> bool {
        fn same(a: f64, b: f64) -> bool {
            a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
        }
        self.count == other.count
            && same(self.mean, other.mean)
            && same(self.std, other.std)
            && same(self.min, other.min)
            && same(self.q25, other.q25)
            && same(self.median, other.median)
            && same(self.q75, other.q75)
            && same(self.max, other.max)
    }
}

/// `sorted` must be non-empty and ascending.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
