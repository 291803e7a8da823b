//! Helpers for running a generation pass and inspecting its output.

use supernodes::{GenerationOutput, GenerationPass, SourceUnit};

/// Run one pass over the given sources.
pub fn run_pass(sources: &[&str]) -> GenerationOutput {
    GenerationPass::from_sources(sources.iter().copied()).run()
}

/// Find a generated unit by hint name, panicking with the available
/// names on a miss.
pub fn unit<'a>(output: &'a GenerationOutput, hint_name: &str) -> &'a SourceUnit {
    output
        .units
        .iter()
        .find(|u| u.hint_name == hint_name)
        .unwrap_or_else(|| {
            panic!(
                "no unit named {hint_name}; generated: {:?}",
                output
                    .units
                    .iter()
                    .map(|u| u.hint_name.as_str())
                    .collect::<Vec<_>>()
            )
        })
}

pub fn has_unit(output: &GenerationOutput, hint_name: &str) -> bool {
    output.units.iter().any(|u| u.hint_name == hint_name)
}

/// Assert a pass finished without recording any diagnostics.
pub fn assert_no_diagnostics(output: &GenerationOutput) {
    assert!(
        output.diagnostics.is_empty(),
        "expected no diagnostics, got {}:\n{}",
        output.diagnostics.len(),
        output
            .diagnostics
            .iter()
            .map(|d| format!("  [{}] {}", d.code.as_deref().unwrap_or("-"), d.message))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
