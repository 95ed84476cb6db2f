//! Ports layer: Trait definitions for diagnostic checks.
//!
//! Following Hexagonal Architecture, the application runs any check through
//! this seam without knowing which fields it reads or which limits it applies.

mod check;

pub use check::DiagnosticCheck;
