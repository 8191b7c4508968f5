//! Async orchestration over the record source boundary.
//!
//! Each operation is one fetch (the only suspension point) followed by a
//! synchronous, CPU-bound pass through `cadran-core`. There is no retry,
//! timeout, or cancellation logic: an operation either completes or the
//! enclosing fetch fails, and the failure propagates unchanged as a
//! `SourceError`.

use std::sync::Arc;

use tokio::task::JoinSet;

use cadran_core::{
    compute_training_analysis, compute_training_prediction, compute_workflow_kpis, Category,
    Prediction, TrainingStats, WorkflowKpis,
};
use cadran_source::{AuthContext, RecordSource, SourceError};

/// Fetch a workflow and its records, then compute its KPI result.
///
/// Unsupported categories skip the record fetch entirely; the dispatcher
/// produces the fallback result without touching the store.
pub async fn workflow_kpis<S: RecordSource + ?Sized>(
    source: &S,
    ctx: &AuthContext,
    workflow_id: &str,
) -> Result<WorkflowKpis, SourceError> {
    let workflow = source.fetch_workflow(ctx, workflow_id).await?;
    let category = workflow.category();
    let records = if category == Category::Unsupported {
        Vec::new()
    } else {
        source
            .fetch_records_for_workflow(ctx, &workflow.id, category)
            .await?
    };
    Ok(compute_workflow_kpis(&workflow, &records))
}

/// System-wide training analysis over all training records.
pub async fn training_analysis<S: RecordSource + ?Sized>(
    source: &S,
    ctx: &AuthContext,
) -> Result<TrainingStats, SourceError> {
    let records = source.fetch_all_training_records(ctx).await?;
    Ok(compute_training_analysis(&records))
}

/// System-wide participation prediction over all training records.
pub async fn training_prediction<S: RecordSource + ?Sized>(
    source: &S,
    ctx: &AuthContext,
) -> Result<Prediction, SourceError> {
    let records = source.fetch_all_training_records(ctx).await?;
    Ok(compute_training_prediction(&records))
}

/// Aggregate several workflows independently in parallel.
///
/// Workflows share no mutable state, so each runs as its own task. Results
/// come back in input order; the first failure fails the whole batch.
pub async fn dashboard_kpis<S: RecordSource + 'static>(
    source: &Arc<S>,
    ctx: &AuthContext,
    workflow_ids: &[String],
) -> Result<Vec<WorkflowKpis>, SourceError> {
    let mut tasks = JoinSet::new();
    for (index, workflow_id) in workflow_ids.iter().enumerate() {
        let source = Arc::clone(source);
        let ctx = ctx.clone();
        let workflow_id = workflow_id.clone();
        tasks.spawn(async move {
            let result = workflow_kpis(source.as_ref(), &ctx, &workflow_id).await;
            (index, result)
        });
    }

    let mut results: Vec<Option<WorkflowKpis>> = workflow_ids.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = joined.map_err(|e| SourceError::Unavailable(e.to_string()))?;
        results[index] = Some(result?);
    }
    Ok(results.into_iter().flatten().collect())
}
