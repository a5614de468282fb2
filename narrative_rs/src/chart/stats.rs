//! Descriptive statistics behind the box plots, plus category helpers
//! shared by every categorical x axis.

use std::cmp::Ordering;
use std::collections::HashMap;

use narrative_leptos::types::BoxStats;

/// Whisker reach, in IQRs beyond the box.
pub const WHISKER_IQR: f64 = 1.5;

/// Notch half-width factor: `median ± 1.57 * IQR / sqrt(n)`.
pub const NOTCH_FACTOR: f64 = 1.57;

/// How q1 and q3 are derived from a sorted sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuartileMethod {
    /// Interpolate at `p * n - 0.5`.
    #[default]
    Linear,
    /// Median of each half, excluding the median itself when `n` is odd.
    Exclusive,
    /// Median of each half, including the median itself when `n` is odd.
    Inclusive,
}

fn interpolate(sorted: &[f64], p: f64) -> f64 {
    let pos = p * sorted.len() as f64 - 0.5;
    if pos <= 0.0 {
        return sorted[0];
    }
    let last = sorted.len() - 1;
    if pos >= last as f64 {
        return sorted[last];
    }
    let lo = pos.floor() as usize;
    let frac = pos - lo as f64;
    sorted[lo] * (1.0 - frac) + sorted[lo + 1] * frac
}

fn median(sorted: &[f64]) -> f64 {
    interpolate(sorted, 0.5)
}

/// `(q1, median, q3)` of a non-empty ascending sample.
pub fn quartiles(sorted: &[f64], method: QuartileMethod) -> (f64, f64, f64) {
    let n = sorted.len();
    let med = median(sorted);
    if n == 1 {
        return (sorted[0], med, sorted[0]);
    }
    match method {
        QuartileMethod::Linear => (interpolate(sorted, 0.25), med, interpolate(sorted, 0.75)),
        QuartileMethod::Exclusive | QuartileMethod::Inclusive => {
            let half = n / 2;
            let (lower, upper) = if n % 2 == 0 {
                (&sorted[..half], &sorted[half..])
            } else if method == QuartileMethod::Exclusive {
                (&sorted[..half], &sorted[half + 1..])
            } else {
                (&sorted[..=half], &sorted[half..])
            };
            (median(lower), med, median(upper))
        }
    }
}

/// Box statistics for one group; `None` when the group has no values.
pub fn box_stats(values: &[f64], method: QuartileMethod, notched: bool) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = sorted.len();
    let (q1, med, q3) = quartiles(&sorted, method);
    let iqr = q3 - q1;
    let (lo_fence, hi_fence) = (q1 - WHISKER_IQR * iqr, q3 + WHISKER_IQR * iqr);

    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|v| *v >= lo_fence)
        .unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= hi_fence)
        .unwrap_or(q3);

    let notch = notched.then(|| {
        let half = NOTCH_FACTOR * iqr / (n as f64).sqrt();
        (med - half, med + half)
    });

    Some(BoxStats {
        n,
        mean: sorted.iter().sum::<f64>() / n as f64,
        q1,
        median: med,
        q3,
        lower_whisker,
        upper_whisker,
        notch,
    })
}

/// True when `value` falls outside the whiskers of `stats`.
pub fn is_outlier(stats: &BoxStats, value: f64) -> bool {
    value < stats.lower_whisker || value > stats.upper_whisker
}

/// Distinct keys in first-appearance order, with O(1) lookup.
#[derive(Debug, Default, Clone)]
pub struct CategoryIndex {
    keys: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl CategoryIndex {
    /// Index of `key`, inserting it at the end if unseen.
    pub fn intern(&mut self, key: &str) -> usize {
        if let Some(&idx) = self.lookup.get(key) {
            return idx;
        }
        let idx = self.keys.len();
        self.keys.push(key.to_string());
        self.lookup.insert(key.to_string(), idx);
        idx
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Axis order as a permutation of insertion indices: numeric ascending
    /// when every key parses as a number, otherwise first appearance.
    pub fn axis_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.keys.len()).collect();
        let numeric: Option<Vec<f64>> = self
            .keys
            .iter()
            .map(|k| k.trim().parse::<f64>().ok())
            .collect();
        if let Some(nums) = numeric {
            order.sort_by(|&a, &b| nums[a].partial_cmp(&nums[b]).unwrap_or(Ordering::Equal));
        }
        order
    }
}

/// Labels that receive a tick: all of them up to `max`, otherwise every
/// `ceil(n / max)`-th label starting at the first.
pub fn select_ticks(categories: &[String], max: Option<usize>) -> Vec<String> {
    match max {
        Some(max) if max > 0 && categories.len() > max => {
            let step = categories.len().div_ceil(max);
            categories.iter().step_by(step).cloned().collect()
        }
        _ => categories.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn exclusive_quartiles_drop_the_median() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let (q1, med, q3) = quartiles(&values, QuartileMethod::Exclusive);
        assert!(close(q1, 2.0));
        assert!(close(med, 4.0));
        assert!(close(q3, 6.0));
    }

    #[test]
    fn inclusive_quartiles_keep_the_median() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let (q1, _, q3) = quartiles(&values, QuartileMethod::Inclusive);
        assert!(close(q1, 2.5));
        assert!(close(q3, 5.5));
    }

    #[test]
    fn even_sample_splits_evenly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        for method in [QuartileMethod::Exclusive, QuartileMethod::Inclusive] {
            let (q1, med, q3) = quartiles(&sorted, method);
            assert!(close(q1, 1.5));
            assert!(close(med, 2.5));
            assert!(close(q3, 3.5));
        }
    }

    #[test]
    fn linear_quartiles_interpolate() {
        let (q1, med, q3) = quartiles(&[1.0, 2.0, 3.0, 4.0], QuartileMethod::Linear);
        assert!(close(q1, 1.5));
        assert!(close(med, 2.5));
        assert!(close(q3, 3.5));

        let (q1, _, q3) = quartiles(&[10.0, 20.0, 30.0], QuartileMethod::Linear);
        assert!(close(q1, 12.5));
        assert!(close(q3, 27.5));
    }

    #[test]
    fn single_value_collapses_the_box() {
        let stats = box_stats(&[0.4], QuartileMethod::Exclusive, true).expect("stats");
        assert_eq!(stats.n, 1);
        assert!(close(stats.q1, 0.4) && close(stats.q3, 0.4));
        assert_eq!(stats.notch, Some((0.4, 0.4)));
    }

    #[test]
    fn whiskers_stop_at_the_fences() {
        let values = [0.30, 0.32, 0.35, 0.38, 0.40, 0.42, 0.45, 0.95];
        let stats = box_stats(&values, QuartileMethod::Exclusive, false).expect("stats");
        assert!(close(stats.upper_whisker, 0.45));
        assert!(close(stats.lower_whisker, 0.30));
        assert!(is_outlier(&stats, 0.95));
        assert!(!is_outlier(&stats, 0.30));
        assert_eq!(stats.notch, None);
    }

    #[test]
    fn notch_uses_iqr_and_count() {
        let stats =
            box_stats(&[1.0, 2.0, 3.0, 4.0], QuartileMethod::Exclusive, true).expect("stats");
        let (lo, hi) = stats.notch.expect("notch");
        let half = 1.57 * 2.0 / 2.0;
        assert!(close(lo, 2.5 - half));
        assert!(close(hi, 2.5 + half));
        assert!(close(stats.mean, 2.5));
    }

    #[test]
    fn empty_group_has_no_stats() {
        assert!(box_stats(&[], QuartileMethod::Linear, true).is_none());
    }

    #[test]
    fn numeric_keys_sort_ascending() {
        let mut index = CategoryIndex::default();
        for key in ["2011", "2009", "2010", "2009"] {
            index.intern(key);
        }
        assert_eq!(index.len(), 3);
        let ordered: Vec<&str> = index
            .axis_order()
            .into_iter()
            .map(|i| index.keys()[i].as_str())
            .collect();
        assert_eq!(ordered, ["2009", "2010", "2011"]);
    }

    #[test]
    fn mixed_keys_keep_first_appearance() {
        let mut index = CategoryIndex::default();
        for key in ["2014", "Never", "2015"] {
            index.intern(key);
        }
        assert_eq!(index.axis_order(), vec![0, 1, 2]);
    }

    #[test]
    fn ticks_are_capped() {
        let years: Vec<String> = (2009..=2019).map(|y| y.to_string()).collect();
        assert_eq!(select_ticks(&years, Some(15)), years);

        let many: Vec<String> = (0..40).map(|i| i.to_string()).collect();
        let ticks = select_ticks(&many, Some(15));
        assert_eq!(ticks.len(), 14);
        assert_eq!(ticks[0], "0");
        assert_eq!(ticks[1], "3");

        assert_eq!(select_ticks(&many, None).len(), 40);
    }
}
