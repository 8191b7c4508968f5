//! Workflow record as fetched from the external workflow source.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A named, user-owned unit of work tagged with a category. The workflow is
/// the aggregation boundary for its linked records; it is never mutated by
/// the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub category_code: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub owner_id: Option<String>,
}

impl Workflow {
    /// Resolve the workflow's category. Unknown codes dispatch to
    /// `Category::Unsupported`.
    pub fn category(&self) -> Category {
        Category::from_code(&self.category_code)
    }
}
