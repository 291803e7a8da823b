//! The generation pass — per-target orchestration over the resolved
//! mixin table.
//!
//! Each target's composition is a pure function of its descriptor, the
//! mixin table, and compilation-wide constants, so targets are
//! evaluated in parallel. The diagnostic sink is the only shared state;
//! it is created fresh per pass and written through a mutex. Output
//! order is deterministic regardless of scheduling: units follow
//! target declaration order and diagnostics are sorted by source
//! position.

use parking_lot::Mutex;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::diagnostics::Diagnostic;
use crate::compose::TypeParamMapping;
use crate::compose::rewrite::rewrite_power_up;
use crate::compose::substitute::merge_members;
use crate::emit::dispatch::dispatch_unit;
use crate::emit::reflection::reflection_unit;
use crate::emit::{SourceUnit, wrap_fragment};
use crate::model::{PowerUp, PropOrField, SuperBase};
use crate::parser::{AstNode, CompilationUnit, parse};
use crate::repo::{Target, find_power_ups, find_targets};
use crate::semantic::SymbolTable;

/// Everything one pass hands back to the host: generated source units
/// and the diagnostics recorded along the way.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    pub units: Vec<SourceUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

/// One generation pass over a compilation's mixins and targets.
pub struct GenerationPass {
    power_ups: FxHashMap<String, PowerUp>,
    targets: Vec<Target>,
    sink: Mutex<Vec<Diagnostic>>,
}

impl GenerationPass {
    /// Build a pass from descriptors the caller already extracted.
    pub fn new(power_ups: FxHashMap<String, PowerUp>, targets: Vec<Target>) -> Self {
        Self {
            power_ups,
            targets,
            sink: Mutex::new(Vec::new()),
        }
    }

    /// Parse the given sources, build the symbol table, and classify
    /// mixins and targets.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = &'a str>) -> Self {
        let units: Vec<CompilationUnit> = sources
            .into_iter()
            .map(parse)
            .filter_map(|p| CompilationUnit::cast(p.syntax()))
            .collect();
        let table = SymbolTable::from_units(&units);
        let power_ups = find_power_ups(&units, &table);
        let targets = find_targets(&units, &table);
        debug!(
            power_ups = power_ups.len(),
            targets = targets.len(),
            "pass prepared"
        );
        Self::new(power_ups, targets)
    }

    /// Run the pass to completion.
    pub fn run(self) -> GenerationOutput {
        let units: Vec<SourceUnit> = self
            .targets
            .par_iter()
            .map(|target| self.compose_target(target))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        let mut diagnostics = self.sink.into_inner();
        diagnostics.sort_by_key(|d| (d.file, d.range.start(), d.code.clone()));
        GenerationOutput { units, diagnostics }
    }

    fn report(&self, diagnostic: Diagnostic) {
        self.sink.lock().push(diagnostic);
    }

    /// Compose one target: the dispatch unit (nodes only), one
    /// rewritten fragment per applicable mixin, and the reflection unit
    /// over the merged member set.
    ///
    /// Failures stay local to one (target, mixin) pair; a broken
    /// application never suppresses the target's other output.
    fn compose_target(&self, target: &Target) -> Vec<SourceUnit> {
        let base = target.base();
        let mut units = Vec::new();

        if let Target::Node(node) = target {
            if !node.has_dispatch_stub {
                self.report(Diagnostic::missing_dispatch_stub(node));
            }
            // emitted even without the stub; dropping the unit would
            // cascade into unrelated compile errors
            units.push(dispatch_unit(node, &self.power_ups));
        }

        let mut contributed: Vec<PropOrField> = Vec::new();
        for (full_name, type_arguments) in &base.power_up_hooks_by_full_name {
            let Some(power_up) = self.power_ups.get(full_name) else {
                warn!(%full_name, target = %base.full_name(), "applied power-up is not declared");
                continue;
            };
            if !is_applicable(power_up, base) {
                self.report(Diagnostic::power_up_not_applicable(power_up, base));
                continue;
            }
            let mapping = match TypeParamMapping::for_power_up(power_up, type_arguments) {
                Ok(mapping) => mapping,
                Err(error) => {
                    // the host front end rejects this earlier; skip the
                    // single application
                    warn!(%full_name, %error, "skipping power-up application");
                    continue;
                }
            };
            match rewrite_power_up(power_up, &base.name, &mapping) {
                Ok(fragment) => {
                    units.push(SourceUnit {
                        hint_name: format!("{}_{}.g.cs", base.filename_prefix(), power_up.name),
                        text: wrap_fragment(
                            &power_up.usings,
                            &base.namespace,
                            &base.containing_types,
                            &fragment,
                        ),
                    });
                    contributed.extend(power_up.props_and_fields.iter().map(|p| mapping.apply(p)));
                }
                Err(error) => {
                    warn!(%full_name, %error, "power-up fragment rewrite failed");
                }
            }
        }

        let merged = merge_members(&base.props_and_fields, contributed);
        units.push(reflection_unit(base, &merged));
        units
    }
}

/// A mixin applies only to targets whose base-class chain contains its
/// declared base class.
fn is_applicable(power_up: &PowerUp, target: &SuperBase) -> bool {
    target
        .base_classes
        .iter()
        .any(|class| class == &power_up.base_class)
}
