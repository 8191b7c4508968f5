//! Cadran KPI aggregation core -- category dispatch, record normalization,
//! scalar aggregation, time bucketing, trend delta, and the participation
//! prediction heuristic.
//!
//! Everything in this crate is synchronous, single-pass, and side-effect
//! free: the caller fetches raw records (as `serde_json::Value`) from the
//! external record source and hands them to the compute functions. The
//! async boundary lives in `cadran-source` / `cadran-engine`.

pub mod aggregate;
pub mod bucket;
pub mod category;
pub mod kpi;
pub mod normalize;
pub mod numeric;
pub mod predict;
pub mod trend;
pub mod workflow;

pub use aggregate::{PerformanceStats, SalesStats, TrainingStats};
pub use bucket::{TrendPoint, MAX_TREND_BUCKETS};
pub use category::Category;
pub use kpi::{
    compute_training_analysis, compute_training_prediction, compute_workflow_kpis, ScalarStats,
    WorkflowKpis, UNSUPPORTED_MESSAGE,
};
pub use predict::Prediction;
pub use trend::trend_delta;
pub use workflow::Workflow;
