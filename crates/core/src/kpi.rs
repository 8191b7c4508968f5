//! KPI composition: dispatch on category, normalize, aggregate, bucket.
//!
//! Everything here is pure and deterministic: the same record list always
//! produces the same `WorkflowKpis`, and nothing is persisted. Raw records
//! arrive as `serde_json::Value` straight from the record source.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::aggregate::{
    performance_stats, sales_stats, training_stats, PerformanceStats, SalesStats, TrainingStats,
};
use crate::bucket::{performance_trend, sales_trend, TrendPoint};
use crate::category::Category;
use crate::normalize::{Evaluation, Sale, Session};
use crate::predict::{training_prediction, Prediction};
use crate::trend::trend_delta;
use crate::workflow::Workflow;

/// Message reported for workflows with an unknown category code.
pub const UNSUPPORTED_MESSAGE: &str = "category not supported";

/// Scalar KPIs for one workflow, shaped per category. `Unsupported` is a
/// defined fallback result, never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarStats {
    Sales(SalesStats),
    Performance(PerformanceStats),
    Training(TrainingStats),
    Unsupported { message: String },
}

/// The composed KPI result for one workflow: ephemeral, derived, always
/// recomputed from the current record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowKpis {
    pub category: Category,
    pub scalar_stats: ScalarStats,
    pub trend_series: Vec<TrendPoint>,
    pub trend_delta: Decimal,
}

/// Compute the full KPI result for a workflow over its fetched records.
///
/// Sales and performance workflows get a bucketed trend series and delta.
/// Training workflows get scalar stats only (no bucketing rule exists for
/// sessions). Unsupported categories get the fallback result.
pub fn compute_workflow_kpis(workflow: &Workflow, records: &[Value]) -> WorkflowKpis {
    let category = workflow.category();
    match category {
        Category::Vente => {
            let sales: Vec<Sale> = records.iter().map(Sale::from_raw).collect();
            let trend_series = sales_trend(&sales);
            WorkflowKpis {
                category,
                scalar_stats: ScalarStats::Sales(sales_stats(&sales)),
                trend_delta: trend_delta(&trend_series),
                trend_series,
            }
        }
        Category::PerfoEmp => {
            let evaluations: Vec<Evaluation> = records.iter().map(Evaluation::from_raw).collect();
            let trend_series = performance_trend(&evaluations);
            WorkflowKpis {
                category,
                scalar_stats: ScalarStats::Performance(performance_stats(&evaluations)),
                trend_delta: trend_delta(&trend_series),
                trend_series,
            }
        }
        Category::Formation => {
            let sessions: Vec<Session> = records.iter().map(Session::from_raw).collect();
            WorkflowKpis {
                category,
                scalar_stats: ScalarStats::Training(training_stats(&sessions)),
                trend_series: Vec::new(),
                trend_delta: Decimal::ZERO,
            }
        }
        Category::Unsupported => WorkflowKpis {
            category,
            scalar_stats: ScalarStats::Unsupported {
                message: UNSUPPORTED_MESSAGE.to_string(),
            },
            trend_series: Vec::new(),
            trend_delta: Decimal::ZERO,
        },
    }
}

/// System-wide training analysis over all training records.
pub fn compute_training_analysis(records: &[Value]) -> TrainingStats {
    let sessions: Vec<Session> = records.iter().map(Session::from_raw).collect();
    training_stats(&sessions)
}

/// System-wide participation prediction over all training records.
pub fn compute_training_prediction(records: &[Value]) -> Prediction {
    let sessions: Vec<Session> = records.iter().map(Session::from_raw).collect();
    training_prediction(&sessions)
}
