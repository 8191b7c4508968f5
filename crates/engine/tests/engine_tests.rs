//! End-to-end engine tests against in-memory and failing sources.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::json;

use cadran_core::{Category, Prediction, ScalarStats, Workflow};
use cadran_engine::{dashboard_kpis, training_analysis, training_prediction, workflow_kpis};
use cadran_source::{AuthContext, RecordSource, SourceError, StaticRecordSource};

fn workflow(id: &str, code: &str) -> Workflow {
    Workflow {
        id: id.to_string(),
        name: format!("workflow {}", id),
        category_code: code.to_string(),
        active: true,
        owner_id: Some("u-1".to_string()),
    }
}

fn ctx() -> AuthContext {
    AuthContext::new("u-1").with_token("t-abc")
}

#[tokio::test]
async fn computes_sales_kpis_end_to_end() {
    let source = StaticRecordSource::new()
        .with_workflow(workflow("wf-sales", "VENTE"))
        .with_records(
            "wf-sales",
            vec![
                json!({ "qte": 2, "produitId": { "pu": 100 }, "dateVente": "2025-01-10" }),
                json!({ "quantite": 3, "prixUnitaire": 50, "dateVente": "2025-02-10" }),
            ],
        );

    let kpis = workflow_kpis(&source, &ctx(), "wf-sales").await.unwrap();
    assert_eq!(kpis.category, Category::Vente);
    let ScalarStats::Sales(stats) = &kpis.scalar_stats else {
        panic!("expected sales stats");
    };
    assert_eq!(stats.total_revenue, Decimal::from(350));
    assert_eq!(kpis.trend_series.len(), 2);
}

#[tokio::test]
async fn missing_workflow_propagates_not_found() {
    let source = StaticRecordSource::new();
    let err = workflow_kpis(&source, &ctx(), "wf-missing")
        .await
        .unwrap_err();
    assert!(matches!(err, SourceError::WorkflowNotFound { ref id } if id == "wf-missing"));
}

/// Fails workflow fetches, or only record fetches, depending on `mode`.
struct FailingSource {
    fail_workflow_fetch: bool,
}

#[async_trait]
impl RecordSource for FailingSource {
    async fn fetch_workflow(&self, _ctx: &AuthContext, id: &str) -> Result<Workflow, SourceError> {
        if self.fail_workflow_fetch {
            return Err(SourceError::Unavailable("store offline".to_string()));
        }
        Ok(workflow(id, "VENTE"))
    }

    async fn fetch_records_for_workflow(
        &self,
        _ctx: &AuthContext,
        _workflow_id: &str,
        _category: Category,
    ) -> Result<Vec<serde_json::Value>, SourceError> {
        Err(SourceError::Unavailable("query failed".to_string()))
    }

    async fn fetch_all_training_records(
        &self,
        _ctx: &AuthContext,
    ) -> Result<Vec<serde_json::Value>, SourceError> {
        Err(SourceError::Unavailable("store offline".to_string()))
    }
}

#[tokio::test]
async fn fetch_failures_propagate_unchanged() {
    let source = FailingSource {
        fail_workflow_fetch: true,
    };
    let err = workflow_kpis(&source, &ctx(), "wf-1").await.unwrap_err();
    assert_eq!(err.to_string(), "data unavailable: store offline");

    let source = FailingSource {
        fail_workflow_fetch: false,
    };
    let err = workflow_kpis(&source, &ctx(), "wf-1").await.unwrap_err();
    assert_eq!(err.to_string(), "data unavailable: query failed");
}

/// A source whose record fetch always fails: proves unsupported workflows
/// never touch the record store.
struct UnsupportedOnlySource;

#[async_trait]
impl RecordSource for UnsupportedOnlySource {
    async fn fetch_workflow(&self, _ctx: &AuthContext, id: &str) -> Result<Workflow, SourceError> {
        Ok(workflow(id, "UNKNOWN"))
    }

    async fn fetch_records_for_workflow(
        &self,
        _ctx: &AuthContext,
        _workflow_id: &str,
        _category: Category,
    ) -> Result<Vec<serde_json::Value>, SourceError> {
        panic!("record fetch must be skipped for unsupported categories");
    }

    async fn fetch_all_training_records(
        &self,
        _ctx: &AuthContext,
    ) -> Result<Vec<serde_json::Value>, SourceError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn unsupported_category_skips_record_fetch() {
    let kpis = workflow_kpis(&UnsupportedOnlySource, &ctx(), "wf-odd")
        .await
        .unwrap();
    assert_eq!(kpis.category, Category::Unsupported);
    assert!(matches!(
        kpis.scalar_stats,
        ScalarStats::Unsupported { .. }
    ));
}

#[tokio::test]
async fn training_analysis_and_prediction_are_system_wide() {
    let source = StaticRecordSource::new().with_training_records(vec![
        json!({ "participantsPrevus": 100, "participantsReels": 80, "tauxReussite": 90 }),
        json!({ "participantsPrevus": 50, "participantsReels": 20, "tauxReussite": 70 }),
    ]);

    let stats = training_analysis(&source, &ctx()).await.unwrap();
    assert_eq!(stats.total_formations, 2);
    assert_eq!(stats.participants_prevus_total, 150);
    assert_eq!(stats.participants_reels_total, 100);

    let prediction = training_prediction(&source, &ctx()).await.unwrap();
    assert_eq!(
        prediction,
        Prediction::Forecast {
            taux_participation_prevu: 60,
            interpretation: "risk of low participation".to_string(),
        }
    );
}

#[tokio::test]
async fn dashboard_aggregates_workflows_in_input_order() {
    let source = Arc::new(
        StaticRecordSource::new()
            .with_workflow(workflow("wf-a", "VENTE"))
            .with_workflow(workflow("wf-b", "PERFO_EMP"))
            .with_workflow(workflow("wf-c", "UNKNOWN"))
            .with_records(
                "wf-a",
                vec![json!({ "qte": 1, "prixUnitaire": 10, "dateVente": "2025-01-01" })],
            )
            .with_records("wf-b", vec![json!({ "score": 85, "periode": "T1" })]),
    );

    let ids = vec![
        "wf-b".to_string(),
        "wf-c".to_string(),
        "wf-a".to_string(),
    ];
    let results = dashboard_kpis(&source, &ctx(), &ids).await.unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].category, Category::PerfoEmp);
    assert_eq!(results[1].category, Category::Unsupported);
    assert_eq!(results[2].category, Category::Vente);
}

#[tokio::test]
async fn dashboard_fails_on_first_missing_workflow() {
    let source = Arc::new(StaticRecordSource::new().with_workflow(workflow("wf-a", "VENTE")));
    let ids = vec!["wf-a".to_string(), "wf-missing".to_string()];
    let err = dashboard_kpis(&source, &ctx(), &ids).await.unwrap_err();
    assert!(matches!(err, SourceError::WorkflowNotFound { .. }));
}
