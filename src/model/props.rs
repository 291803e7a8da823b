//! Member descriptors: properties, fields, and their attributes.

use smol_str::SmolStr;

/// A classified fragment of a textual type or name expression.
///
/// References that mention a declared type parameter are kept as part
/// sequences so substitution can splice in concrete arguments without
/// re-parsing; everything else stays a literal run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DisplayPart {
    /// Literal text reproduced verbatim.
    Text(SmolStr),
    /// A type-parameter name to be replaced at application time.
    TypeParameter(SmolStr),
}

impl DisplayPart {
    pub fn text(s: impl Into<SmolStr>) -> Self {
        Self::Text(s.into())
    }

    pub fn type_parameter(s: impl Into<SmolStr>) -> Self {
        Self::TypeParameter(s.into())
    }
}

/// Description of one attribute applied to a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescription {
    /// Simple name, e.g. `Export`.
    pub name: SmolStr,
    /// Fully qualified type, e.g. `global::Godot.ExportAttribute`.
    pub full_type: String,
    /// Positional constructor-argument expressions, source text
    /// reproduced verbatim and in order.
    pub argument_expressions: Vec<String>,
}

/// A property or field declared on a mixin or a target.
///
/// `reference` differs from `name` only for explicit interface
/// implementations, where access goes through the qualified form.
/// When `name_parts`/`type_parts` are empty the textual `reference`/
/// `ty` are already fully concrete and substitution leaves them
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropOrField {
    /// Declared identifier.
    pub name: SmolStr,
    /// Possibly-qualified expression used to access the member.
    pub reference: String,
    /// Textual type expression.
    pub ty: String,
    /// Attributes applied to the member, order not significant.
    pub attributes: Vec<AttributeDescription>,
    pub is_field: bool,
    pub is_mutable: bool,
    pub is_readable: bool,
    /// Part sequence for `reference`, empty when concrete.
    pub name_parts: Vec<DisplayPart>,
    /// Part sequence for `ty`, empty when concrete.
    pub type_parts: Vec<DisplayPart>,
}

impl PropOrField {
    /// Whether any part still names a type parameter.
    pub fn mentions_type_parameter(&self) -> bool {
        self.name_parts
            .iter()
            .chain(self.type_parts.iter())
            .any(|p| matches!(p, DisplayPart::TypeParameter(_)))
    }
}
