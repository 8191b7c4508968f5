//! Closed category set driving aggregation dispatch.
//!
//! A workflow carries a free-form category code; the engine only knows how
//! to aggregate the three supported domains. Every other code routes to
//! `Unsupported`, which produces a defined fallback result rather than an
//! error.

use serde::{Deserialize, Serialize};

/// Business category of a workflow and its records.
///
/// Dispatch is stateless: the category is read once per request from the
/// workflow's code and selects which aggregator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Sales records (quantity x unit price).
    #[serde(rename = "VENTE")]
    Vente,
    /// Employee performance evaluations (score 0-100, period label).
    #[serde(rename = "PERFO_EMP")]
    PerfoEmp,
    /// Training sessions (planned/actual participants, success rate).
    #[serde(rename = "FORMATION")]
    Formation,
    /// Any unknown or missing category code.
    #[serde(rename = "UNSUPPORTED")]
    Unsupported,
}

impl Category {
    /// Map a raw category code to a variant. Unknown codes fall through to
    /// `Unsupported`; they must never surface as an error.
    pub fn from_code(code: &str) -> Category {
        match code {
            "VENTE" => Category::Vente,
            "PERFO_EMP" => Category::PerfoEmp,
            "FORMATION" => Category::Formation,
            _ => Category::Unsupported,
        }
    }

    /// The canonical code string for this category.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Vente => "VENTE",
            Category::PerfoEmp => "PERFO_EMP",
            Category::Formation => "FORMATION",
            Category::Unsupported => "UNSUPPORTED",
        }
    }
}
