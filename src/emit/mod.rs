//! Emission — assembling generated source units.
//!
//! Everything here produces text for the host compiler to parse; no
//! formatting pass is applied beyond stable, line-oriented layout.

pub mod dispatch;
pub mod reflection;
mod unit;

pub use unit::{SourceUnit, wrap_fragment};
