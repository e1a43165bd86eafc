//! Acceptable ranges per parameter, after EU Directive 2020/2184 and the
//! Spanish drinking-water regulation (RD 140/2003).
//!
//! Two shapes of threshold exist:
//! - **window** parameters (`min > 0`): both bounds enforced (pH, chlorine),
//! - **ceiling-only** parameters (`min == 0`): only the maximum is enforced
//!   (turbidity, color, the haloacetic sum).
//!
//! The table is defined in code, built once at startup and never mutated.

/// Key of the derived sum of the five haloacetic acids (HAA5).
pub const SUMA_HALOACETICS: &str = "suma_haloacetics";

/// Acceptable range and display metadata for one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Threshold {
    pub key: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
}

impl Threshold {
    /// A window parameter enforces its lower bound; a ceiling-only
    /// parameter (min of zero) does not.
    pub fn is_window(&self) -> bool {
        self.min > 0.0
    }
}

/// Immutable lookup table from parameter key to its acceptable range.
#[derive(Debug, Clone)]
pub struct ThresholdTable {
    entries: Vec<Threshold>,
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            entries: vec![
                Threshold {
                    key: SUMA_HALOACETICS,
                    name: "Suma 5 Haloacètics",
                    unit: "μg/L",
                    min: 0.0,
                    max: 60.0,
                },
                Threshold {
                    key: "ph",
                    name: "pH",
                    unit: "pH",
                    min: 6.5,
                    max: 9.5,
                },
                Threshold {
                    key: "clor_lliure",
                    name: "Clor Lliure",
                    unit: "mg/L",
                    min: 0.2,
                    max: 1.0,
                },
                Threshold {
                    key: "clor_total",
                    name: "Clor Total",
                    unit: "mg/L",
                    min: 0.2,
                    max: 2.0,
                },
                Threshold {
                    key: "terbolesa",
                    name: "Terbolesa",
                    unit: "NTU",
                    min: 0.0,
                    max: 4.0,
                },
                Threshold {
                    key: "conductivitat_20c",
                    name: "Conductivitat a 20°C",
                    unit: "μS/cm",
                    min: 0.0,
                    max: 2500.0,
                },
                Threshold {
                    key: "color",
                    name: "Color",
                    unit: "mg/L Pt-Co",
                    min: 0.0,
                    max: 15.0,
                },
                Threshold {
                    key: "olor",
                    name: "Olor",
                    unit: "índex dilució",
                    min: 0.0,
                    max: 3.0,
                },
                Threshold {
                    key: "sabor",
                    name: "Sabor",
                    unit: "índex dilució",
                    min: 0.0,
                    max: 3.0,
                },
            ],
        }
    }
}

impl ThresholdTable {
    pub fn get(&self, key: &str) -> Option<&Threshold> {
        self.entries.iter().find(|t| t.key == key)
    }

    pub fn entries(&self) -> &[Threshold] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_the_nine_regulated_parameters() {
        let table = ThresholdTable::default();
        assert_eq!(table.entries().len(), 9);
        for key in [
            SUMA_HALOACETICS,
            "ph",
            "clor_lliure",
            "clor_total",
            "terbolesa",
            "conductivitat_20c",
            "color",
            "olor",
            "sabor",
        ] {
            assert!(table.get(key).is_some(), "missing threshold for {key}");
        }
    }

    #[test]
    fn ph_and_chlorine_are_window_parameters() {
        let table = ThresholdTable::default();
        assert!(table.get("ph").unwrap().is_window());
        assert!(table.get("clor_lliure").unwrap().is_window());
        assert!(table.get("clor_total").unwrap().is_window());
    }

    #[test]
    fn haloacetic_sum_is_ceiling_only() {
        let table = ThresholdTable::default();
        assert!(!table.get(SUMA_HALOACETICS).unwrap().is_window());
    }

    #[test]
    fn unknown_key_has_no_threshold() {
        assert!(ThresholdTable::default().get("temperatura").is_none());
    }
}
