//! Participation prediction heuristic for the training category.
//!
//! Deliberately simple: average historical `actual / planned` ratios, then
//! threshold the average. Averaging first and thresholding second is
//! load-bearing; the reverse order changes results.
//!
//! Known asymmetry, kept on purpose: the divisor counts every qualifying
//! record (both participant fields present), while zero-planned records are
//! skipped by the numerator and contribute 0 to the running sum. See
//! DESIGN.md.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::normalize::Session;
use crate::numeric::{ratio, round_to_i64};

/// Interpretation label when the expected ratio clears the threshold.
pub const FAVORABLE_LABEL: &str = "favorable participation expected";
/// Interpretation label below the threshold.
pub const AT_RISK_LABEL: &str = "risk of low participation";
/// Message carried by the empty-input result.
pub const INSUFFICIENT_DATA_MESSAGE: &str = "insufficient data";

/// Outcome of the prediction heuristic. `InsufficientData` is a defined
/// empty-result state, distinct from a 0% forecast; it is never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Prediction {
    Forecast {
        #[serde(rename = "tauxParticipationPrevu")]
        taux_participation_prevu: i64,
        interpretation: String,
    },
    InsufficientData {
        message: String,
    },
}

impl Prediction {
    pub fn insufficient_data() -> Prediction {
        Prediction::InsufficientData {
            message: INSUFFICIENT_DATA_MESSAGE.to_string(),
        }
    }
}

/// Predict the expected participation ratio from historical sessions.
///
/// A session qualifies when both participant counts are present (field
/// existence, not value). The average divides by the qualifying count even
/// though zero-planned sessions are skipped when summing ratios.
pub fn training_prediction(sessions: &[Session]) -> Prediction {
    let qualifying: Vec<&Session> = sessions
        .iter()
        .filter(|s| s.planned.is_some() && s.actual.is_some())
        .collect();
    if qualifying.is_empty() {
        return Prediction::insufficient_data();
    }

    let mut sum = Decimal::ZERO;
    for session in &qualifying {
        let planned = session.planned.unwrap_or(0);
        let actual = session.actual.unwrap_or(0);
        if planned == 0 {
            continue;
        }
        sum += ratio(Decimal::from(actual), Decimal::from(planned));
    }
    let average = ratio(sum, Decimal::from(qualifying.len()));

    let interpretation = if average >= Decimal::new(70, 2) {
        FAVORABLE_LABEL
    } else {
        AT_RISK_LABEL
    };
    Prediction::Forecast {
        taux_participation_prevu: round_to_i64(average * Decimal::ONE_HUNDRED),
        interpretation: interpretation.to_string(),
    }
}
