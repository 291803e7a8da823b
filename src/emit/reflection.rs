//! Reflection table generator.
//!
//! Emits one source unit per target describing the merged member set:
//! the name-keyed metadata table, the generic type-dispatch method, and
//! the get/set-by-name accessors. All dispatch is exact-name match with
//! cases in ascending name order; the loosely-typed `dynamic` boundary
//! is confined to the accessors and never reaches the table's type
//! descriptors.

use crate::model::{PropOrField, SuperBase};

use super::unit::{SourceUnit, wrap_fragment};

const DICT: &str = "System.Collections.Generic.Dictionary";
const RO_DICT: &str = "System.Collections.Generic.IReadOnlyDictionary";

/// Build the reflection source unit for one target over its merged,
/// substituted member set.
///
/// Members are keyed and dispatched by declared name; the set-by-name
/// switch only lists mutable members, so writes to read-only members
/// fall through to the same unknown-name error path.
pub fn reflection_unit(base: &SuperBase, members: &[PropOrField]) -> SourceUnit {
    let mut sorted: Vec<&PropOrField> = members.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let target = base.name_without_generics.as_str();
    let mut fragment = String::new();

    fragment.push_str(&format!("partial class {} {{\n", base.name));
    emit_metadata_table(&sorted, &mut fragment);
    fragment.push('\n');
    emit_receive_member_type(&sorted, target, &mut fragment);
    fragment.push('\n');
    emit_get_member_value(&sorted, target, &mut fragment);
    fragment.push('\n');
    emit_set_member_value(&sorted, target, &mut fragment);
    fragment.push_str("}\n");

    SourceUnit {
        hint_name: format!("{}_Reflection.g.cs", base.filename_prefix()),
        text: wrap_fragment(&base.usings, &base.namespace, &base.containing_types, &fragment),
    }
}

fn emit_metadata_table(members: &[&PropOrField], out: &mut String) {
    out.push_str(&format!(
        "    public static {RO_DICT}<string, MemberMetadata> MembersByName {{ get; }}\n"
    ));
    out.push_str(&format!("        = new {DICT}<string, MemberMetadata>() {{\n"));
    for member in members {
        out.push_str(&format!("            [\"{}\"] = new MemberMetadata(\n", member.name));
        out.push_str(&format!("                name: \"{}\",\n", member.name));
        out.push_str(&format!("                type: typeof({}),\n", member.ty));
        out.push_str(&format!("                isField: {},\n", member.is_field));
        out.push_str(&format!("                isMutable: {},\n", member.is_mutable));
        out.push_str(&format!("                isReadable: {},\n", member.is_readable));
        if member.attributes.is_empty() {
            out.push_str(&format!(
                "                attributes: new {DICT}<string, AttributeMetadata>()\n"
            ));
        } else {
            out.push_str(&format!(
                "                attributes: new {DICT}<string, AttributeMetadata>() {{\n"
            ));
            for attr in &member.attributes {
                let arguments = if attr.argument_expressions.is_empty() {
                    "new object[] { }".to_string()
                } else {
                    format!("new object[] {{ {} }}", attr.argument_expressions.join(", "))
                };
                out.push_str(&format!(
                    "                    [\"{}\"] = new AttributeMetadata(\"{}\", {arguments}),\n",
                    attr.full_type, attr.name
                ));
            }
            out.push_str("                }\n");
        }
        out.push_str("            ),\n");
    }
    out.push_str("        };\n");
}

/// The generic dispatch: callers hand in a receiver with one generic
/// operation and get it invoked at the member's static type. This is
/// how generated code hands back a compile-time type argument without
/// runtime type objects.
fn emit_receive_member_type(members: &[&PropOrField], target: &str, out: &mut String) {
    out.push_str(
        "    public TResult ReceiveMemberType<TResult>(string memberName, IMemberTypeReceiver<TResult> receiver) {\n",
    );
    out.push_str("        switch (memberName) {\n");
    for member in members {
        out.push_str(&format!("            case \"{}\":\n", member.name));
        out.push_str(&format!(
            "                return receiver.Receive<{}>();\n",
            member.ty
        ));
    }
    emit_unknown_member_default(target, out);
    out.push_str("        }\n");
    out.push_str("    }\n");
}

fn emit_get_member_value(members: &[&PropOrField], target: &str, out: &mut String) {
    out.push_str("    public dynamic GetMemberValue(string memberName) {\n");
    out.push_str("        switch (memberName) {\n");
    for member in members.iter().filter(|m| m.is_readable) {
        out.push_str(&format!("            case \"{}\":\n", member.name));
        out.push_str(&format!(
            "                return {};\n",
            access_expression(member)
        ));
    }
    emit_unknown_member_default(target, out);
    out.push_str("        }\n");
    out.push_str("    }\n");
}

fn emit_set_member_value(members: &[&PropOrField], target: &str, out: &mut String) {
    out.push_str("    public void SetMemberValue(string memberName, dynamic value) {\n");
    out.push_str("        switch (memberName) {\n");
    for member in members.iter().filter(|m| m.is_mutable) {
        out.push_str(&format!("            case \"{}\":\n", member.name));
        out.push_str(&format!(
            "                {} = value;\n",
            access_expression(member)
        ));
        out.push_str("                break;\n");
    }
    emit_unknown_member_default(target, out);
    out.push_str("        }\n");
    out.push_str("    }\n");
}

fn emit_unknown_member_default(target: &str, out: &mut String) {
    out.push_str("            default:\n");
    out.push_str(&format!(
        "                throw new System.ArgumentException($\"No member named '{{memberName}}' on {target}.\");\n"
    ));
}

/// How the accessors reach the member: the bare name for ordinary
/// members, a cast through the interface for explicit implementations.
fn access_expression(member: &PropOrField) -> String {
    if member.reference == member.name.as_str() {
        return member.reference.clone();
    }
    match member.reference.rfind('.') {
        Some(dot) => format!(
            "(({})this).{}",
            &member.reference[..dot],
            &member.reference[dot + 1..]
        ),
        None => member.reference.clone(),
    }
}
