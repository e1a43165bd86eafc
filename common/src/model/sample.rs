//! Wire model for water samples.
//!
//! A sample is one measurement event at a sampling point: a calendar date, a
//! location, and whichever subset of the nineteen measured parameters the
//! submitter filled in. The measurement block is shared between the stored
//! record (`Sample`) and the submission payload (`SampleSubmission`) via
//! `#[serde(flatten)]`, so both serialize to the flat JSON object the API
//! exposes.
//!
//! Parameter names keep the Catalan vocabulary of the sampling campaign
//! (`clor_lliure`, `terbolesa`, ...): they double as JSON keys, database
//! column names and threshold-table keys, so renaming one place would break
//! the other two.

use serde::{Deserialize, Serialize};

/// The optional numeric measurements a sample may carry.
///
/// Every field is independently nullable; a sample reports any non-empty
/// subset. Use [`Measurements::iter`] to walk them generically instead of
/// spelling out the field list again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub temperatura: Option<f64>,
    pub clor_lliure: Option<f64>,
    pub clor_total: Option<f64>,
    pub recompte_escherichia_coli: Option<f64>,
    pub recompte_enterococ: Option<f64>,
    pub recompte_microorganismes_aerobis_22c: Option<f64>,
    pub recompte_coliformes_totals: Option<f64>,
    pub conductivitat_20c: Option<f64>,
    pub ph: Option<f64>,
    pub terbolesa: Option<f64>,
    pub color: Option<f64>,
    pub olor: Option<f64>,
    pub sabor: Option<f64>,
    pub acid_monocloroacetic: Option<f64>,
    pub acid_dicloroacetic: Option<f64>,
    pub acid_tricloroacetic: Option<f64>,
    pub acid_monobromoacetic: Option<f64>,
    pub acid_dibromoacetic: Option<f64>,
}

impl Measurements {
    /// Measurement keys in canonical column order.
    pub const KEYS: [&'static str; 18] = [
        "temperatura",
        "clor_lliure",
        "clor_total",
        "recompte_escherichia_coli",
        "recompte_enterococ",
        "recompte_microorganismes_aerobis_22c",
        "recompte_coliformes_totals",
        "conductivitat_20c",
        "ph",
        "terbolesa",
        "color",
        "olor",
        "sabor",
        "acid_monocloroacetic",
        "acid_dicloroacetic",
        "acid_tricloroacetic",
        "acid_monobromoacetic",
        "acid_dibromoacetic",
    ];

    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "temperatura" => self.temperatura,
            "clor_lliure" => self.clor_lliure,
            "clor_total" => self.clor_total,
            "recompte_escherichia_coli" => self.recompte_escherichia_coli,
            "recompte_enterococ" => self.recompte_enterococ,
            "recompte_microorganismes_aerobis_22c" => self.recompte_microorganismes_aerobis_22c,
            "recompte_coliformes_totals" => self.recompte_coliformes_totals,
            "conductivitat_20c" => self.conductivitat_20c,
            "ph" => self.ph,
            "terbolesa" => self.terbolesa,
            "color" => self.color,
            "olor" => self.olor,
            "sabor" => self.sabor,
            "acid_monocloroacetic" => self.acid_monocloroacetic,
            "acid_dicloroacetic" => self.acid_dicloroacetic,
            "acid_tricloroacetic" => self.acid_tricloroacetic,
            "acid_monobromoacetic" => self.acid_monobromoacetic,
            "acid_dibromoacetic" => self.acid_dibromoacetic,
            _ => None,
        }
    }

    /// Sets a measurement by key. Returns false for an unknown key.
    pub fn set(&mut self, key: &str, value: f64) -> bool {
        let slot = match key {
            "temperatura" => &mut self.temperatura,
            "clor_lliure" => &mut self.clor_lliure,
            "clor_total" => &mut self.clor_total,
            "recompte_escherichia_coli" => &mut self.recompte_escherichia_coli,
            "recompte_enterococ" => &mut self.recompte_enterococ,
            "recompte_microorganismes_aerobis_22c" => &mut self.recompte_microorganismes_aerobis_22c,
            "recompte_coliformes_totals" => &mut self.recompte_coliformes_totals,
            "conductivitat_20c" => &mut self.conductivitat_20c,
            "ph" => &mut self.ph,
            "terbolesa" => &mut self.terbolesa,
            "color" => &mut self.color,
            "olor" => &mut self.olor,
            "sabor" => &mut self.sabor,
            "acid_monocloroacetic" => &mut self.acid_monocloroacetic,
            "acid_dicloroacetic" => &mut self.acid_dicloroacetic,
            "acid_tricloroacetic" => &mut self.acid_tricloroacetic,
            "acid_monobromoacetic" => &mut self.acid_monobromoacetic,
            "acid_dibromoacetic" => &mut self.acid_dibromoacetic,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Iterates `(key, value)` pairs in canonical order, absent values included.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<f64>)> + '_ {
        Self::KEYS.iter().map(move |key| (*key, self.get(key)))
    }

    /// True when every measurement field is absent.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_none())
    }
}

/// A persisted water sample as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: i64,
    pub sampling_date: String,
    pub location: String,
    #[serde(flatten)]
    pub measurements: Measurements,
    pub validated: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for submitting a new sample.
///
/// Carries everything except the store-assigned identity, timestamps and the
/// validation flag. A new sample always starts unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSubmission {
    pub sampling_date: String,
    pub location: String,
    #[serde(flatten)]
    pub measurements: Measurements,
}

/// Allow-listed partial update for a sample.
///
/// Every field is optional; only the fields present in the payload are
/// applied. Unknown keys are rejected at deserialization instead of being
/// silently dropped, so a typo in a field name surfaces as a 400 rather than
/// a no-op edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleUpdate {
    pub sampling_date: Option<String>,
    pub location: Option<String>,
    pub temperatura: Option<f64>,
    pub clor_lliure: Option<f64>,
    pub clor_total: Option<f64>,
    pub recompte_escherichia_coli: Option<f64>,
    pub recompte_enterococ: Option<f64>,
    pub recompte_microorganismes_aerobis_22c: Option<f64>,
    pub recompte_coliformes_totals: Option<f64>,
    pub conductivitat_20c: Option<f64>,
    pub ph: Option<f64>,
    pub terbolesa: Option<f64>,
    pub color: Option<f64>,
    pub olor: Option<f64>,
    pub sabor: Option<f64>,
    pub acid_monocloroacetic: Option<f64>,
    pub acid_dicloroacetic: Option<f64>,
    pub acid_tricloroacetic: Option<f64>,
    pub acid_monobromoacetic: Option<f64>,
    pub acid_dibromoacetic: Option<f64>,
    pub validated: Option<bool>,
}

impl SampleUpdate {
    /// Columns an edit may touch, paired with whether each one is set.
    ///
    /// Text-valued fields and the validation flag are reported alongside the
    /// numeric measurements so callers can build one dynamic UPDATE from a
    /// single list.
    pub fn fields(&self) -> Vec<(&'static str, UpdateValue)> {
        let mut out = Vec::new();
        if let Some(v) = &self.sampling_date {
            out.push(("sampling_date", UpdateValue::Text(v.clone())));
        }
        if let Some(v) = &self.location {
            out.push(("location", UpdateValue::Text(v.clone())));
        }
        let numeric: [(&'static str, Option<f64>); 18] = [
            ("temperatura", self.temperatura),
            ("clor_lliure", self.clor_lliure),
            ("clor_total", self.clor_total),
            ("recompte_escherichia_coli", self.recompte_escherichia_coli),
            ("recompte_enterococ", self.recompte_enterococ),
            (
                "recompte_microorganismes_aerobis_22c",
                self.recompte_microorganismes_aerobis_22c,
            ),
            ("recompte_coliformes_totals", self.recompte_coliformes_totals),
            ("conductivitat_20c", self.conductivitat_20c),
            ("ph", self.ph),
            ("terbolesa", self.terbolesa),
            ("color", self.color),
            ("olor", self.olor),
            ("sabor", self.sabor),
            ("acid_monocloroacetic", self.acid_monocloroacetic),
            ("acid_dicloroacetic", self.acid_dicloroacetic),
            ("acid_tricloroacetic", self.acid_tricloroacetic),
            ("acid_monobromoacetic", self.acid_monobromoacetic),
            ("acid_dibromoacetic", self.acid_dibromoacetic),
        ];
        for (key, value) in numeric {
            if let Some(v) = value {
                out.push((key, UpdateValue::Number(v)));
            }
        }
        if let Some(v) = self.validated {
            out.push(("validated", UpdateValue::Flag(v)));
        }
        out
    }

    /// True when no field is set; such an edit is rejected upstream.
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

/// A single value inside a partial update.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateValue {
    Text(String),
    Number(f64),
    Flag(bool),
}
