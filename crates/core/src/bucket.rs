//! Time-bucketing engine producing trend series.
//!
//! Records group into calendar buckets keyed by a human-readable month-year
//! label (sales) or by the record's explicit period label (performance).
//! Distinct keys are collected in first-seen scan order; month-keyed series
//! are then sorted chronologically so an unsorted upstream record list
//! cannot produce an out-of-order series. Period labels are opaque strings
//! and keep their first-seen order. The series is finally truncated to the
//! most recent `MAX_TREND_BUCKETS` buckets; earlier buckets are dropped,
//! not merged.

use rust_decimal::Decimal;
use serde::Serialize;
use time::macros::format_description;
use time::Date;

use crate::normalize::{Evaluation, Sale};
use crate::numeric::{ratio, round_to_i64};

/// Upper bound on trend series length.
pub const MAX_TREND_BUCKETS: usize = 6;

/// One point of a trend series, unique per label within a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: Decimal,
}

struct Bucket {
    label: String,
    /// `(year, month)` for calendar buckets; `None` for opaque period labels.
    sort_key: Option<(i32, u8)>,
    sum: Decimal,
    count: u32,
}

/// Monthly revenue series for sales. Records without a resolvable date are
/// excluded from the series (they still count in scalar totals).
pub fn sales_trend(sales: &[Sale]) -> Vec<TrendPoint> {
    let mut buckets: Vec<Bucket> = Vec::new();
    for sale in sales {
        let Some(date) = sale.occurred_at else {
            continue;
        };
        let Some(label) = month_label(date) else {
            continue;
        };
        let sort_key = Some((date.year(), u8::from(date.month())));
        accumulate(&mut buckets, label, sort_key, sale.revenue());
    }
    finish(buckets, |bucket| bucket.sum)
}

/// Per-period average score series for evaluations. The period label is
/// used verbatim as the bucket key; records without one are excluded.
pub fn performance_trend(evaluations: &[Evaluation]) -> Vec<TrendPoint> {
    let mut buckets: Vec<Bucket> = Vec::new();
    for evaluation in evaluations {
        let Some(label) = evaluation.period.clone() else {
            continue;
        };
        accumulate(&mut buckets, label, None, evaluation.score);
    }
    finish(buckets, |bucket| {
        Decimal::from(round_to_i64(ratio(bucket.sum, Decimal::from(bucket.count))))
    })
}

/// Locale-style month-year label, e.g. "Jan 2025".
fn month_label(date: Date) -> Option<String> {
    date.format(format_description!("[month repr:short] [year]"))
        .ok()
}

fn accumulate(
    buckets: &mut Vec<Bucket>,
    label: String,
    sort_key: Option<(i32, u8)>,
    value: Decimal,
) {
    if let Some(bucket) = buckets.iter_mut().find(|b| b.label == label) {
        bucket.sum += value;
        bucket.count += 1;
        return;
    }
    buckets.push(Bucket {
        label,
        sort_key,
        sum: value,
        count: 1,
    });
}

/// Sort calendar buckets chronologically, keep the last `MAX_TREND_BUCKETS`,
/// and project each bucket to its point value.
fn finish(mut buckets: Vec<Bucket>, value: impl Fn(&Bucket) -> Decimal) -> Vec<TrendPoint> {
    if buckets.iter().all(|b| b.sort_key.is_some()) {
        buckets.sort_by_key(|b| b.sort_key);
    }
    let start = buckets.len().saturating_sub(MAX_TREND_BUCKETS);
    buckets[start..]
        .iter()
        .map(|bucket| TrendPoint {
            label: bucket.label.clone(),
            value: value(bucket),
        })
        .collect()
}
