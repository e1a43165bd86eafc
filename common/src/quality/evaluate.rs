//! Derived values and range classification for a set of measurements.
//!
//! Two values are computed rather than stored:
//! - the sum of the five haloacetic acids (HAA5), with a partial-sum policy:
//!   absent acids contribute zero, and the sum is absent only when all five
//!   are,
//! - residual combined chlorine (`clor_total - clor_lliure`), computed only
//!   when both readings are present. The result may be negative; a negative
//!   residual is reported as-is, not clamped or rejected.
//!
//! Classification is inclusive at both bounds: a value sitting exactly on
//! `min` or `max` is within range.

use crate::model::sample::Measurements;
use crate::quality::thresholds::{ThresholdTable, SUMA_HALOACETICS};

/// Where a value sits relative to its parameter's acceptable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCheck {
    WithinRange,
    BelowMin,
    AboveMax,
    /// No threshold is defined for the parameter.
    NoThreshold,
}

impl RangeCheck {
    pub fn is_out_of_range(self) -> bool {
        matches!(self, RangeCheck::BelowMin | RangeCheck::AboveMax)
    }
}

/// One evaluated value: a parameter key, the measured or derived value, and
/// its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub key: &'static str,
    pub value: f64,
    pub check: RangeCheck,
}

/// Key reported for the derived residual combined chlorine.
const CLOR_COMBINAT_RESIDUAL: &str = "clor_combinat_residual";

/// Sum of the five haloacetic acid readings.
///
/// Returns `None` only when all five are absent; otherwise absent acids
/// count as zero. This is a deliberate partial-sum policy: a lab that only
/// measured three of the five acids still gets a meaningful (lower-bound)
/// HAA5 figure.
pub fn haloacetic_sum(m: &Measurements) -> Option<f64> {
    let acids = [
        m.acid_monocloroacetic,
        m.acid_dicloroacetic,
        m.acid_tricloroacetic,
        m.acid_monobromoacetic,
        m.acid_dibromoacetic,
    ];
    if acids.iter().all(Option::is_none) {
        return None;
    }
    Some(acids.iter().flatten().sum())
}

/// Residual combined chlorine: total minus free, only when both are present.
pub fn residual_combined_chlorine(m: &Measurements) -> Option<f64> {
    match (m.clor_total, m.clor_lliure) {
        (Some(total), Some(free)) => Some(total - free),
        _ => None,
    }
}

impl ThresholdTable {
    /// Classifies a value against the threshold for `key`.
    ///
    /// Bounds are inclusive. When the threshold's minimum is zero only the
    /// maximum is enforced, so the parameter cannot classify as `BelowMin`.
    pub fn classify(&self, key: &str, value: f64) -> RangeCheck {
        let Some(threshold) = self.get(key) else {
            return RangeCheck::NoThreshold;
        };
        if threshold.is_window() && value < threshold.min {
            RangeCheck::BelowMin
        } else if value > threshold.max {
            RangeCheck::AboveMax
        } else {
            RangeCheck::WithinRange
        }
    }
}

/// Evaluates every present measurement plus the two derived values.
///
/// Absent measurements are skipped entirely: they never classify, and in
/// particular never count as out of range.
pub fn evaluate(m: &Measurements, table: &ThresholdTable) -> Vec<Evaluation> {
    let mut out = Vec::new();
    for (key, value) in m.iter() {
        if let Some(value) = value {
            out.push(Evaluation {
                key,
                value,
                check: table.classify(key, value),
            });
        }
    }
    if let Some(sum) = haloacetic_sum(m) {
        out.push(Evaluation {
            key: SUMA_HALOACETICS,
            value: sum,
            check: table.classify(SUMA_HALOACETICS, sum),
        });
    }
    if let Some(residual) = residual_combined_chlorine(m) {
        out.push(Evaluation {
            key: CLOR_COMBINAT_RESIDUAL,
            value: residual,
            check: table.classify(CLOR_COMBINAT_RESIDUAL, residual),
        });
    }
    out
}

/// True when any evaluated parameter, derived values included, falls outside
/// its acceptable range. Drives the warning banner on the public browser.
pub fn has_out_of_range(m: &Measurements, table: &ThresholdTable) -> bool {
    evaluate(m, table)
        .iter()
        .any(|e| e.check.is_out_of_range())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ThresholdTable {
        ThresholdTable::default()
    }

    // --- Haloacetic sum -----------------------------------------------------

    #[test]
    fn haloacetic_sum_absent_when_all_five_absent() {
        assert_eq!(haloacetic_sum(&Measurements::default()), None);
    }

    #[test]
    fn haloacetic_sum_treats_absent_acids_as_zero() {
        // Only two of the five acids measured: the sum is still reported.
        let m = Measurements {
            acid_dicloroacetic: Some(12.5),
            acid_tricloroacetic: Some(7.5),
            ..Default::default()
        };
        assert_eq!(haloacetic_sum(&m), Some(20.0));
    }

    #[test]
    fn haloacetic_sum_adds_all_five_when_present() {
        let m = Measurements {
            acid_monocloroacetic: Some(1.0),
            acid_dicloroacetic: Some(2.0),
            acid_tricloroacetic: Some(3.0),
            acid_monobromoacetic: Some(4.0),
            acid_dibromoacetic: Some(5.0),
            ..Default::default()
        };
        assert_eq!(haloacetic_sum(&m), Some(15.0));
    }

    // --- Residual combined chlorine -----------------------------------------

    #[test]
    fn residual_chlorine_needs_both_readings() {
        let only_total = Measurements {
            clor_total: Some(0.8),
            ..Default::default()
        };
        let only_free = Measurements {
            clor_lliure: Some(0.5),
            ..Default::default()
        };
        assert_eq!(residual_combined_chlorine(&only_total), None);
        assert_eq!(residual_combined_chlorine(&only_free), None);
    }

    #[test]
    fn residual_chlorine_is_total_minus_free() {
        let m = Measurements {
            clor_total: Some(1.2),
            clor_lliure: Some(0.5),
            ..Default::default()
        };
        let residual = residual_combined_chlorine(&m).unwrap();
        assert!((residual - 0.7).abs() < 1e-9);
    }

    #[test]
    fn negative_residual_chlorine_is_preserved() {
        // Free chlorine above total looks inconsistent but is reported
        // as measured, not rejected.
        let m = Measurements {
            clor_total: Some(0.8),
            clor_lliure: Some(1.0),
            ..Default::default()
        };
        let residual = residual_combined_chlorine(&m).unwrap();
        assert!((residual - (-0.2)).abs() < 1e-9);
    }

    // --- Classification -----------------------------------------------------

    #[test]
    fn classify_is_inclusive_at_both_bounds() {
        let t = table();
        assert_eq!(t.classify("ph", 6.5), RangeCheck::WithinRange);
        assert_eq!(t.classify("ph", 9.5), RangeCheck::WithinRange);
        assert_eq!(t.classify(SUMA_HALOACETICS, 60.0), RangeCheck::WithinRange);
    }

    #[test]
    fn classify_window_parameter_below_min() {
        assert_eq!(table().classify("ph", 6.4), RangeCheck::BelowMin);
        assert_eq!(table().classify("clor_lliure", 0.1), RangeCheck::BelowMin);
    }

    #[test]
    fn classify_window_parameter_above_max() {
        assert_eq!(table().classify("ph", 9.6), RangeCheck::AboveMax);
    }

    #[test]
    fn classify_ceiling_only_never_reports_below_min() {
        // Turbidity has min == 0: only the ceiling is enforced.
        assert_eq!(table().classify("terbolesa", 0.0), RangeCheck::WithinRange);
        assert_eq!(table().classify("terbolesa", 4.1), RangeCheck::AboveMax);
    }

    #[test]
    fn classify_without_threshold() {
        assert_eq!(
            table().classify("temperatura", 18.0),
            RangeCheck::NoThreshold
        );
    }

    // --- Whole-sample evaluation --------------------------------------------

    #[test]
    fn evaluate_skips_absent_measurements() {
        let m = Measurements {
            ph: Some(7.0),
            ..Default::default()
        };
        let evaluations = evaluate(&m, &table());
        assert_eq!(evaluations.len(), 1);
        assert_eq!(evaluations[0].key, "ph");
        assert_eq!(evaluations[0].check, RangeCheck::WithinRange);
    }

    #[test]
    fn evaluate_includes_derived_values() {
        let m = Measurements {
            clor_total: Some(1.0),
            clor_lliure: Some(0.4),
            acid_dicloroacetic: Some(70.0),
            ..Default::default()
        };
        let evaluations = evaluate(&m, &table());
        let keys: Vec<&str> = evaluations.iter().map(|e| e.key).collect();
        assert!(keys.contains(&SUMA_HALOACETICS));
        assert!(keys.contains(&"clor_combinat_residual"));
        // The residual has no threshold entry and must not classify.
        let residual = evaluations
            .iter()
            .find(|e| e.key == "clor_combinat_residual")
            .unwrap();
        assert_eq!(residual.check, RangeCheck::NoThreshold);
    }

    #[test]
    fn out_of_range_driven_by_derived_haloacetic_sum() {
        // 40 + 30 = 70 μg/L exceeds the 60 μg/L HAA5 ceiling even though
        // no single stored field does.
        let m = Measurements {
            acid_dicloroacetic: Some(40.0),
            acid_tricloroacetic: Some(30.0),
            ..Default::default()
        };
        assert!(has_out_of_range(&m, &table()));
    }

    #[test]
    fn in_range_sample_has_no_warning() {
        let m = Measurements {
            ph: Some(7.0),
            clor_lliure: Some(0.5),
            clor_total: Some(0.8),
            terbolesa: Some(0.6),
            ..Default::default()
        };
        assert!(!has_out_of_range(&m, &table()));
    }

    #[test]
    fn absent_values_never_count_as_out_of_range() {
        assert!(!has_out_of_range(&Measurements::default(), &table()));
    }
}
