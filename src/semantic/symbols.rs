//! Symbol table — the host-supplied type facts the engine trusts.
//!
//! Built by pure name-joining over parsed compilation units: base-list
//! entries are resolved against declared type names (same namespace
//! first, then using-directive namespaces), and chains are flattened
//! transitively. Nothing is verified; unresolved names are kept
//! verbatim so downstream stages can still render them.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::trace;

use crate::parser::{AstNode, ClassDecl, CompilationUnit};
use crate::semantic::inspect;

/// The implicit root of every base-class chain.
pub const OBJECT: &str = "global::System.Object";

/// Declaration kind recorded for each known type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Record,
    Interface,
    Struct,
}

/// Facts for one known type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFacts {
    pub full_name: String,
    pub namespace: String,
    pub kind: TypeKind,
    /// Transitive base-class chain, fully qualified, nearest first.
    pub base_chain: Vec<String>,
    /// Interfaces visible on the type (declared plus inherited).
    pub interfaces: Vec<String>,
}

/// Raw per-declaration record before chains are flattened.
#[derive(Debug, Clone)]
struct RawDecl {
    namespace: String,
    kind: TypeKind,
    base_texts: Vec<String>,
    usings: Vec<String>,
}

/// Name-keyed table of type facts.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    types: FxHashMap<String, TypeFacts>,
    by_simple: FxHashMap<SmolStr, Vec<String>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the table from parsed units, resolving base lists by
    /// name and flattening chains.
    pub fn from_units<'a>(units: impl IntoIterator<Item = &'a CompilationUnit>) -> Self {
        let mut raw: FxHashMap<String, RawDecl> = FxHashMap::default();
        let mut table = Self::new();

        for unit in units {
            let usings = inspect::usings(unit);
            for class in unit.classes() {
                let Some(name) = class.name() else { continue };
                let namespace = inspect::containing_namespace(&class);
                let full_name = join_namespace(&namespace, &name);
                let base_texts = base_texts(&class);
                trace!(%full_name, bases = base_texts.len(), "recording declaration");
                raw.insert(
                    full_name.clone(),
                    RawDecl {
                        namespace,
                        kind: decl_kind(&class),
                        base_texts,
                        usings: usings.clone(),
                    },
                );
            }
        }

        // Resolve direct bases, then flatten transitively.
        for (full_name, decl) in &raw {
            let mut chain = Vec::new();
            let mut interfaces = Vec::new();
            let mut current = Some(full_name.clone());
            let mut guard = 0;
            while let Some(name) = current.take() {
                guard += 1;
                if guard > 64 {
                    break; // defensive bound on malformed cycles
                }
                let Some(d) = raw.get(&name) else { break };
                let mut next_base = None;
                for text in &d.base_texts {
                    let resolved = resolve_in(&raw, text, &d.namespace, &d.usings);
                    if is_interface_name(&raw, &resolved) {
                        // keep generic argument text as written
                        let with_args = match text.find('<') {
                            Some(idx) => format!("{resolved}{}", &text[idx..]),
                            None => resolved,
                        };
                        if !interfaces.contains(&with_args) {
                            interfaces.push(with_args);
                        }
                    } else if next_base.is_none() {
                        next_base = Some(resolved);
                    }
                }
                if let Some(base) = next_base {
                    if chain.contains(&base) {
                        break;
                    }
                    chain.push(base.clone());
                    current = Some(base);
                }
            }
            // every chain is rooted at Object
            if chain.last().map(String::as_str) != Some(OBJECT) {
                chain.push(OBJECT.to_string());
            }
            table.insert(TypeFacts {
                full_name: full_name.clone(),
                namespace: decl.namespace.clone(),
                kind: decl.kind,
                base_chain: chain,
                interfaces,
            });
        }

        table
    }

    /// Record one type's facts, replacing any previous entry.
    pub fn insert(&mut self, facts: TypeFacts) {
        let simple = simple_name(&facts.full_name);
        let entry = self.by_simple.entry(SmolStr::new(simple)).or_default();
        if !entry.contains(&facts.full_name) {
            entry.push(facts.full_name.clone());
        }
        self.types.insert(facts.full_name.clone(), facts);
    }

    pub fn get(&self, full_name: &str) -> Option<&TypeFacts> {
        self.types.get(full_name)
    }

    /// Transitive base-class chain for a type, empty when unknown.
    pub fn base_chain(&self, full_name: &str) -> &[String] {
        self.get(full_name).map(|f| f.base_chain.as_slice()).unwrap_or(&[])
    }

    /// Resolve a possibly-unqualified type name seen in `namespace`
    /// with `usings` in scope. Falls back to the name as written.
    pub fn resolve(&self, name: &str, namespace: &str, usings: &[String]) -> String {
        let bare = strip_generics(name);
        if self.types.contains_key(bare) {
            return bare.to_string();
        }
        let in_ns = join_namespace(namespace, bare);
        if self.types.contains_key(&in_ns) {
            return in_ns;
        }
        for using in usings {
            let using = using.strip_prefix("static ").unwrap_or(using);
            let candidate = join_namespace(using, bare);
            if self.types.contains_key(&candidate) {
                return candidate;
            }
        }
        if let Some(fulls) = self.by_simple.get(bare) {
            if fulls.len() == 1 {
                return fulls[0].clone();
            }
        }
        bare.to_string()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn join_namespace(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

fn simple_name(full: &str) -> &str {
    full.rsplit('.').next().unwrap_or(full)
}

/// `Box<T>` → `Box`; resolution keys on the bare name.
fn strip_generics(name: &str) -> &str {
    name.split('<').next().unwrap_or(name).trim()
}

fn decl_kind(class: &ClassDecl) -> TypeKind {
    use crate::parser::SyntaxKind;
    match class.decl_keyword().map(|t| t.kind()) {
        Some(SyntaxKind::RECORD_KW) => TypeKind::Record,
        Some(SyntaxKind::INTERFACE_KW) => TypeKind::Interface,
        Some(SyntaxKind::STRUCT_KW) => TypeKind::Struct,
        _ => TypeKind::Class,
    }
}

fn base_texts(class: &ClassDecl) -> Vec<String> {
    class
        .base_list()
        .map(|l| {
            l.base_types()
                .filter_map(|b| b.type_ref())
                .map(|t| t.display())
                .collect()
        })
        .unwrap_or_default()
}

fn resolve_in(
    raw: &FxHashMap<String, RawDecl>,
    text: &str,
    namespace: &str,
    usings: &[String],
) -> String {
    let bare = strip_generics(text);
    if raw.contains_key(bare) {
        return bare.to_string();
    }
    let in_ns = join_namespace(namespace, bare);
    if raw.contains_key(&in_ns) {
        return in_ns;
    }
    for using in usings {
        let using = using.strip_prefix("static ").unwrap_or(using);
        let candidate = join_namespace(using, bare);
        if raw.contains_key(&candidate) {
            return candidate;
        }
    }
    bare.to_string()
}

/// Interface judgement: a declared interface, or conventionally
/// `I`-prefixed when the name is unknown.
fn is_interface_name(raw: &FxHashMap<String, RawDecl>, resolved: &str) -> bool {
    if let Some(decl) = raw.get(resolved) {
        return decl.kind == TypeKind::Interface;
    }
    let simple = simple_name(resolved);
    let mut chars = simple.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('I'), Some(c)) if c.is_ascii_uppercase()
    )
}
