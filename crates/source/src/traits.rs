use async_trait::async_trait;

use cadran_core::{Category, Workflow};

use crate::error::SourceError;

/// Caller identity passed explicitly at the collaborator boundary.
///
/// The source system read session state implicitly inside its fetch calls;
/// here credentials travel with the request instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: String,
    pub token: Option<String>,
}

impl AuthContext {
    pub fn new(user_id: impl Into<String>) -> AuthContext {
        AuthContext {
            user_id: user_id.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> AuthContext {
        self.token = Some(token.into());
        self
    }
}

/// Asynchronous source of workflows and their raw domain records.
///
/// Record shape varies per category and vintage; records cross this
/// boundary as `serde_json::Value` and are normalized by `cadran-core`.
/// Each fetch is a single call with no retry or timeout; a failure
/// propagates to the caller as `SourceError`.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch one workflow by id.
    async fn fetch_workflow(&self, ctx: &AuthContext, id: &str) -> Result<Workflow, SourceError>;

    /// Fetch the raw records linked to a workflow, shaped per category.
    async fn fetch_records_for_workflow(
        &self,
        ctx: &AuthContext,
        workflow_id: &str,
        category: Category,
    ) -> Result<Vec<serde_json::Value>, SourceError>;

    /// Fetch every training record system-wide, unscoped by workflow.
    /// Feeds the training analysis and the prediction heuristic.
    async fn fetch_all_training_records(
        &self,
        ctx: &AuthContext,
    ) -> Result<Vec<serde_json::Value>, SourceError>;
}
