//! Directional delta over a truncated trend series.

use rust_decimal::Decimal;

use crate::bucket::TrendPoint;

/// Difference between the last two points of the series; zero when the
/// series has fewer than two points. A positive sign reads as favorable in
/// presentation and carries no other semantics.
pub fn trend_delta(series: &[TrendPoint]) -> Decimal {
    let [.., second_to_last, last] = series else {
        return Decimal::ZERO;
    };
    last.value - second_to_last.value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn point(label: &str, value: &str) -> TrendPoint {
        TrendPoint {
            label: label.to_string(),
            value: Decimal::from_str(value).unwrap(),
        }
    }

    #[test]
    fn delta_is_last_minus_second_to_last() {
        let series = vec![point("Jan", "100"), point("Feb", "80"), point("Mar", "95")];
        assert_eq!(trend_delta(&series), Decimal::from_str("15").unwrap());
    }

    #[test]
    fn delta_can_be_negative() {
        let series = vec![point("Jan", "100"), point("Feb", "80")];
        assert_eq!(trend_delta(&series), Decimal::from_str("-20").unwrap());
    }

    #[test]
    fn single_point_yields_zero() {
        let series = vec![point("Jan", "100")];
        assert_eq!(trend_delta(&series), Decimal::ZERO);
    }

    #[test]
    fn empty_series_yields_zero() {
        assert_eq!(trend_delta(&[]), Decimal::ZERO);
    }
}
