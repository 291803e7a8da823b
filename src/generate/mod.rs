//! Generation pass — orchestration, applicability validation, and
//! diagnostics.
//!
//! The entry point is [`GenerationPass`]: built once per invocation
//! from parsed sources (or pre-extracted descriptors), run once, and
//! discarded. The diagnostic accumulator lives inside the pass, so
//! every pass starts clean.

mod diagnostics;
mod pass;

pub use diagnostics::{Diagnostic, Severity, codes};
pub use pass::{GenerationOutput, GenerationPass};

pub use crate::emit::SourceUnit;
