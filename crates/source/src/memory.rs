//! In-memory record source backed by fixed data.
//!
//! Useful for tests and for the CLI, where workflows and records are
//! loaded from local JSON files ahead of time.

use std::collections::HashMap;

use async_trait::async_trait;

use cadran_core::{Category, Workflow};

use crate::error::SourceError;
use crate::traits::{AuthContext, RecordSource};

/// A record source that returns a fixed set of workflows and records.
#[derive(Debug, Default)]
pub struct StaticRecordSource {
    workflows: HashMap<String, Workflow>,
    records: HashMap<String, Vec<serde_json::Value>>,
    training_records: Vec<serde_json::Value>,
}

impl StaticRecordSource {
    pub fn new() -> StaticRecordSource {
        StaticRecordSource::default()
    }

    /// Register a workflow, keyed by its id.
    pub fn with_workflow(mut self, workflow: Workflow) -> StaticRecordSource {
        self.workflows.insert(workflow.id.clone(), workflow);
        self
    }

    /// Attach raw records to a workflow id.
    pub fn with_records(
        mut self,
        workflow_id: impl Into<String>,
        records: Vec<serde_json::Value>,
    ) -> StaticRecordSource {
        self.records.insert(workflow_id.into(), records);
        self
    }

    /// Set the system-wide training record list.
    pub fn with_training_records(
        mut self,
        records: Vec<serde_json::Value>,
    ) -> StaticRecordSource {
        self.training_records = records;
        self
    }
}

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn fetch_workflow(&self, _ctx: &AuthContext, id: &str) -> Result<Workflow, SourceError> {
        self.workflows
            .get(id)
            .cloned()
            .ok_or_else(|| SourceError::WorkflowNotFound { id: id.to_string() })
    }

    async fn fetch_records_for_workflow(
        &self,
        _ctx: &AuthContext,
        workflow_id: &str,
        _category: Category,
    ) -> Result<Vec<serde_json::Value>, SourceError> {
        Ok(self.records.get(workflow_id).cloned().unwrap_or_default())
    }

    async fn fetch_all_training_records(
        &self,
        _ctx: &AuthContext,
    ) -> Result<Vec<serde_json::Value>, SourceError> {
        Ok(self.training_records.clone())
    }
}
