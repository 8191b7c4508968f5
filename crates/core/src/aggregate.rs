//! Category-specific scalar KPI reducers.
//!
//! Each reducer is a single pass over normalized records producing a
//! serializable stats struct. All averaging and ratio paths are total:
//! empty sets and zero denominators yield 0 (see `numeric`).

use rust_decimal::Decimal;
use serde::Serialize;

use crate::normalize::{Evaluation, Sale, Session};
use crate::numeric::{ratio, round_dp, round_to_i64};

/// A score at or above this counts as a top performer.
const TOP_PERFORMER_THRESHOLD: i64 = 80;

/// Scalar KPIs for a sales workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesStats {
    pub total_revenue: Decimal,
    pub total_quantity: Decimal,
    pub count: usize,
}

/// Scalar KPIs for a performance workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStats {
    pub average_score: i64,
    pub top_performer_count: usize,
}

/// Scalar KPIs for training sessions. Field names follow the consumer
/// contract (`totalFormations`, `participantsPrevusTotal`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStats {
    pub total_formations: usize,
    pub participants_prevus_total: i64,
    pub participants_reels_total: i64,
    pub taux_reussite_moyen: Decimal,
    pub taux_participation: i64,
}

/// Reduce sales to revenue/quantity totals.
pub fn sales_stats(sales: &[Sale]) -> SalesStats {
    let mut total_revenue = Decimal::ZERO;
    let mut total_quantity = Decimal::ZERO;
    for sale in sales {
        total_revenue += sale.revenue();
        total_quantity += sale.quantity;
    }
    SalesStats {
        total_revenue,
        total_quantity,
        count: sales.len(),
    }
}

/// Reduce evaluations to an average score and top-performer count.
pub fn performance_stats(evaluations: &[Evaluation]) -> PerformanceStats {
    let sum: Decimal = evaluations.iter().map(|e| e.score).sum();
    let divisor = Decimal::from(evaluations.len().max(1));
    let top_performer_count = evaluations
        .iter()
        .filter(|e| e.score >= Decimal::from(TOP_PERFORMER_THRESHOLD))
        .count();
    PerformanceStats {
        average_score: round_to_i64(ratio(sum, divisor)),
        top_performer_count,
    }
}

/// Reduce training sessions to participation and success-rate totals.
///
/// `taux_participation` compares totals, not per-session ratios; it is 0
/// when no participants were planned.
pub fn training_stats(sessions: &[Session]) -> TrainingStats {
    let participants_prevus_total: i64 = sessions.iter().filter_map(|s| s.planned).sum();
    let participants_reels_total: i64 = sessions.iter().filter_map(|s| s.actual).sum();

    let taux_reussite_moyen = if sessions.is_empty() {
        Decimal::ZERO
    } else {
        let sum: Decimal = sessions.iter().map(|s| s.success_rate).sum();
        round_dp(ratio(sum, Decimal::from(sessions.len())), 2)
    };

    let taux_participation = round_to_i64(
        ratio(
            Decimal::from(participants_reels_total),
            Decimal::from(participants_prevus_total),
        ) * Decimal::ONE_HUNDRED,
    );

    TrainingStats {
        total_formations: sessions.len(),
        participants_prevus_total,
        participants_reels_total,
        taux_reussite_moyen,
        taux_participation,
    }
}
