//! Domain layer: Core diagnostic types and logic.
//!
//! This module contains pure Rust types with no I/O.
//! All outcome types are serializable and enforce their invariants by construction.

mod outcome;
mod pressure;
mod record;
pub mod trace;

pub use outcome::{DiagnosticResult, ReasonCode};
pub use pressure::{PressureCheck, PRESSURE_FIELD, PRESSURE_LIMIT_KPA};
pub use record::{coerce_f64, CoercionError, InputRecord};
pub use trace::RequirementId;
