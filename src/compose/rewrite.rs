//! Mixin rewriter — turns a mixin's source fragment into a `partial`
//! class fragment bound to one target.
//!
//! The pass is state-free and works over a fresh reparse of the
//! mixin's stored source:
//!
//! 1. the marker attribute is dropped from the declaration's attribute
//!    lists (a list left empty disappears entirely);
//! 2. the declared type is renamed to the target and its
//!    type-parameter list dropped;
//! 3. modifiers normalize to exactly `partial`;
//! 4. constructors are dropped;
//! 5. ignore-marked members are dropped;
//! 6. the base clause is rebuilt interface-only;
//! 7. member tokens go through a lexical substitution pass: identifier
//!    tokens matching a declared type parameter become the mapped
//!    argument, and identifiers (or generic names) matching the
//!    mixin's own class name become the target's name. Everything
//!    else, trivia included, passes through byte-for-byte.
//!
//! The substitution is purely lexical over identifier tokens — no
//! scope analysis. Mixin authors must not name locals or parameters
//! after a type parameter or after the mixin itself.

use super::substitute::{TypeParamMapping, substitute_text};
use super::ComposeError;
use crate::model::PowerUp;
use crate::parser::{
    AstNode, Attribute, ClassDecl, CompilationUnit, Member, SyntaxKind, SyntaxNode, SyntaxToken,
    parse,
};
use crate::repo::POWER_UP_MARKER;
use crate::semantic::inspect::IGNORE_MARKER;

/// Rewrite `power_up`'s fragment for a target named `target_name`.
///
/// Returns the partial-class fragment text; the caller wraps it in
/// usings, namespace, and nesting declarations.
pub fn rewrite_power_up(
    power_up: &PowerUp,
    target_name: &str,
    mapping: &TypeParamMapping,
) -> Result<String, ComposeError> {
    let parsed = parse(&power_up.source);
    let class = CompilationUnit::cast(parsed.syntax())
        .and_then(|unit| unit.classes().next())
        .ok_or_else(|| ComposeError::UnparsableSource(power_up.full_name.clone()))?;

    let params: Vec<String> = power_up
        .type_parameters
        .iter()
        .map(|p| p.to_string())
        .collect();
    let cx = RewriteContext {
        mixin_name: power_up.name.as_str(),
        target_name,
        mapping,
    };

    let mut out = String::new();

    // class-level attributes, marker removed
    for list in class.attribute_lists() {
        if let Some(rebuilt) = rebuild_attribute_list(list.syntax(), &cx) {
            out.push_str(&rebuilt);
            out.push('\n');
        }
    }

    // synthesized header: modifiers normalized to exactly `partial`,
    // generics substituted away, base clause interface-only
    out.push_str("partial class ");
    out.push_str(target_name);
    if !power_up.interfaces.is_empty() {
        let interfaces: Vec<String> = power_up
            .interfaces
            .iter()
            .map(|i| substitute_text(i, &params, mapping))
            .collect();
        out.push_str(" : ");
        out.push_str(&interfaces.join(", "));
    }
    out.push(' ');

    emit_body(&class, &cx, &mut out);

    Ok(out)
}

struct RewriteContext<'a> {
    mixin_name: &'a str,
    target_name: &'a str,
    mapping: &'a TypeParamMapping,
}

/// Emit the class body from the opening brace on, dropping
/// constructors and ignore-marked members with their leading trivia.
fn emit_body(class: &ClassDecl, cx: &RewriteContext<'_>, out: &mut String) {
    let mut in_body = false;
    let mut pending = String::new();

    for element in class.syntax().children_with_tokens() {
        match element {
            rowan::NodeOrToken::Token(t) => {
                if !in_body {
                    if t.kind() == SyntaxKind::L_BRACE {
                        in_body = true;
                        out.push('{');
                    }
                    continue;
                }
                if t.kind() == SyntaxKind::R_BRACE {
                    out.push_str(&pending);
                    pending.clear();
                    out.push('}');
                    break;
                }
                pending.push_str(t.text());
            }
            rowan::NodeOrToken::Node(n) => {
                if !in_body {
                    continue;
                }
                match Member::cast(n.clone()) {
                    Some(member) if should_drop(&member) => {
                        pending.clear();
                    }
                    _ => {
                        out.push_str(&pending);
                        pending.clear();
                        out.push_str(&rewrite_tokens(&n, cx));
                    }
                }
            }
        }
    }
}

fn should_drop(member: &Member) -> bool {
    matches!(member, Member::Ctor(_)) || member.has_attribute(IGNORE_MARKER)
}

/// Rebuild one attribute list without the mixin marker. `None` when
/// nothing remains.
fn rebuild_attribute_list(list: &SyntaxNode, cx: &RewriteContext<'_>) -> Option<String> {
    let kept: Vec<String> = list
        .children()
        .filter_map(Attribute::cast)
        .filter(|a| !a.is_named(POWER_UP_MARKER))
        .map(|a| rewrite_tokens(a.syntax(), cx))
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(format!("[{}]", kept.join(", ")))
    }
}

/// The lexical substitution pass over one subtree's tokens.
fn rewrite_tokens(node: &SyntaxNode, cx: &RewriteContext<'_>) -> String {
    let tokens: Vec<SyntaxToken> = node
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .collect();

    let mut out = String::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token.kind() == SyntaxKind::IDENT {
            if let Some(argument) = cx.mapping.argument_for(token.text()) {
                out.push_str(argument);
                i += 1;
                continue;
            }
            if token.text() == cx.mixin_name {
                out.push_str(cx.target_name);
                // a generic self-reference swallows its argument list
                if let Some(end) = generic_args_end(&tokens, i + 1) {
                    i = end + 1;
                    continue;
                }
                i += 1;
                continue;
            }
        }
        out.push_str(token.text());
        i += 1;
    }
    out
}

/// If the tokens starting at `from` (after trivia) form an
/// angle-bracketed run of type-shaped tokens, return the index of the
/// closing `>`.
///
/// The restriction to type-shaped tokens keeps comparison expressions
/// like `Mixin < x` out of the match.
fn generic_args_end(tokens: &[SyntaxToken], from: usize) -> Option<usize> {
    let mut i = from;
    while i < tokens.len() && tokens[i].kind().is_trivia() {
        i += 1;
    }
    if i >= tokens.len() || tokens[i].kind() != SyntaxKind::LT {
        return None;
    }
    let mut depth = 0u32;
    while i < tokens.len() {
        match tokens[i].kind() {
            SyntaxKind::LT => depth += 1,
            SyntaxKind::GT => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            SyntaxKind::IDENT
            | SyntaxKind::COMMA
            | SyntaxKind::DOT
            | SyntaxKind::QUESTION
            | SyntaxKind::L_BRACKET
            | SyntaxKind::R_BRACKET => {}
            k if k.is_trivia() => {}
            _ => return None,
        }
        i += 1;
    }
    None
}
