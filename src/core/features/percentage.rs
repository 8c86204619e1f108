//! Percentage calculator.
//!
//! The three operations keep the wire semantics of the calculator UI:
//! `percentage_of` answers "what is P% of V", `percentage_change` treats
//! `percentage` as the old value and `value` as the new one, and
//! `percentage_difference` answers "V is what percent of P". A zero
//! denominator flows through as an IEEE non-finite value.

use crate::shared::types::PercentageOp;

pub fn calculate_percentage(value: f64, percentage: f64, op: PercentageOp) -> f64 {
    match op {
        PercentageOp::PercentageOf => (percentage / 100.0) * value,
        PercentageOp::PercentageChange => ((value - percentage) / percentage) * 100.0,
        PercentageOp::PercentageDifference => (value / percentage) * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_of_one_hundred() {
        assert_eq!(
            calculate_percentage(100.0, 10.0, PercentageOp::PercentageOf),
            10.0
        );
    }

    #[test]
    fn change_from_old_to_new_value() {
        // 100 -> 110 is a 10% increase
        assert_eq!(
            calculate_percentage(110.0, 100.0, PercentageOp::PercentageChange),
            10.0
        );
        // 100 -> 90 is a 10% decrease
        assert_eq!(
            calculate_percentage(90.0, 100.0, PercentageOp::PercentageChange),
            -10.0
        );
    }

    #[test]
    fn difference_as_share_of_the_reference() {
        assert_eq!(
            calculate_percentage(10.0, 50.0, PercentageOp::PercentageDifference),
            20.0
        );
    }

    #[test]
    fn zero_reference_yields_non_finite() {
        assert!(
            !calculate_percentage(5.0, 0.0, PercentageOp::PercentageChange).is_finite()
        );
    }
}
