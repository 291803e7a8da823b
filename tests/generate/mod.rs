//! Generation pass tests: end-to-end scenarios, the applicability
//! gate, dispatch synthesis, and reflection units.

pub mod tests_applicability;
pub mod tests_dispatch;
pub mod tests_end_to_end;
pub mod tests_reflection;
