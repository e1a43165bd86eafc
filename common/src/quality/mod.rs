//! Water-quality evaluation rules.
//!
//! This module owns the static threshold table and the read-time evaluation
//! of a sample against it: derived values (haloacetic sum, residual combined
//! chlorine) and per-parameter range classification. It is pure data logic,
//! with no store access and no clock, so the same code runs natively in the
//! backend and compiled to wasm in the dashboard, guaranteeing both sides
//! color a value the same way.

mod evaluate;
mod thresholds;

pub use evaluate::{
    evaluate, haloacetic_sum, has_out_of_range, residual_combined_chlorine, Evaluation,
    RangeCheck,
};
pub use thresholds::{Threshold, ThresholdTable, SUMA_HALOACETICS};
