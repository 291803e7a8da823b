//! Diagnostics — user-facing conditions recorded during a generation
//! pass.
//!
//! Two conditions surface to users: a target missing its partial
//! dispatch stub, and a mixin whose required base class is absent from
//! the target's chain. Both are recoverable; generation continues for
//! everything else.

use std::sync::Arc;

use crate::base::{FileId, TextRange};
use crate::model::{PowerUp, SuperBase, SuperNode};
use crate::repo::DISPATCH_STUB;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Standard diagnostic codes.
pub mod codes {
    /// Target declares no partial dispatch stub.
    pub const MISSING_DISPATCH_STUB: &str = "SN0001";
    /// Mixin's required base class is absent from the target's chain.
    pub const POWER_UP_NOT_APPLICABLE: &str = "SN0002";
}

/// A diagnostic message anchored at the target's declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
    /// Unit and range of the target declaration the condition is
    /// about.
    pub file: FileId,
    pub range: TextRange,
    /// Optional supporting notes.
    pub related: Vec<Arc<str>>,
}

impl Diagnostic {
    pub fn error(file: FileId, range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Error,
            code: None,
            message: message.into(),
            file,
            range,
            related: Vec::new(),
        }
    }

    pub fn warning(file: FileId, range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            code: None,
            message: message.into(),
            file,
            range,
            related: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_related(mut self, info: impl Into<Arc<str>>) -> Self {
        self.related.push(info.into());
        self
    }

    /// The SN0001 condition: the target never declared the stub the
    /// generated dispatch method implements.
    pub fn missing_dispatch_stub(node: &SuperNode) -> Self {
        Self::error(
            node.base.file,
            node.base.range,
            format!(
                "{} is missing the partial dispatch stub 'public partial void {DISPATCH_STUB}(int what);'",
                node.base.full_name()
            ),
        )
        .with_code(codes::MISSING_DISPATCH_STUB)
    }

    /// The SN0002 condition: the mixin's required base class is not in
    /// the target's base-class chain.
    pub fn power_up_not_applicable(power_up: &PowerUp, target: &SuperBase) -> Self {
        Self::error(
            target.file,
            target.range,
            format!(
                "power-up {} cannot be applied to {}: its base-class chain does not contain {}",
                power_up.full_name,
                target.full_name(),
                power_up.base_class
            ),
        )
        .with_code(codes::POWER_UP_NOT_APPLICABLE)
        .with_related(format!("required base class: {}", power_up.base_class))
    }
}
