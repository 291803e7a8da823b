//! Declaration-structure tests over the typed AST layer.

use supernodes::parser::{AstNode, CompilationUnit, Member, parse};

fn unit(source: &str) -> CompilationUnit {
    let parsed = parse(source);
    assert!(
        parsed.ok(),
        "parse errors in fixture: {:?}",
        parsed.errors
    );
    CompilationUnit::cast(parsed.syntax()).unwrap()
}

#[test]
fn block_and_file_scoped_namespaces_both_parse() {
    let block = unit("namespace A.B { class C { } }");
    assert_eq!(block.classes().count(), 1);

    let scoped = unit("namespace A.B;\nclass C { }\nclass D { }");
    assert_eq!(scoped.classes().count(), 2);
    assert!(scoped.file_scoped_namespace().is_some());
}

#[test]
fn attribute_names_match_with_or_without_suffix() {
    let unit = unit("[PowerUpAttribute] class Mixin { }");
    let class = unit.classes().next().unwrap();
    assert!(class.has_attribute("PowerUp"));
    assert!(class.has_attribute("PowerUpAttribute"));
    assert!(!class.has_attribute("SuperNode"));
}

#[test]
fn members_are_classified_by_shape() {
    let unit = unit(
        r#"
class C {
    public int counted;
    public string Label { get; set; }
    public void Run() { }
    public C() { }
}
"#,
    );
    let class = unit.classes().next().unwrap();
    let members: Vec<Member> = class.members().collect();
    assert!(matches!(members[0], Member::Field(_)));
    assert!(matches!(members[1], Member::Property(_)));
    assert!(matches!(members[2], Member::Method(_)));
    assert!(matches!(members[3], Member::Ctor(_)));
}

#[test]
fn partial_stub_requires_partial_and_no_body() {
    let unit = unit(
        r#"
partial class Host {
    public partial void Notify(int what);
    public void Other(int what) { }
}
"#,
    );
    let class = unit.classes().next().unwrap();
    assert!(class.has_partial_method_stub("Notify"));
    assert!(!class.has_partial_method_stub("Other"));
    assert!(!class.has_partial_method_stub("Absent"));
}

#[test]
fn property_accessor_flags() {
    let unit = unit(
        r#"
class C {
    public int ReadWrite { get; set; }
    public int ReadOnly { get; }
    public int SetOnly { set { } }
    public int Computed => 42;
}
"#,
    );
    let class = unit.classes().next().unwrap();
    let props: Vec<_> = class.properties().collect();
    assert!(props[0].is_readable() && props[0].is_mutable());
    assert!(props[1].is_readable() && !props[1].is_mutable());
    assert!(!props[2].is_readable() && props[2].is_mutable());
    assert!(props[3].is_readable() && !props[3].is_mutable());
}

#[test]
fn explicit_interface_member_keeps_qualified_reference() {
    let unit = unit(
        r#"
class C {
    string IHolder<TA, TB>.Value { get; set; }
}
"#,
    );
    let class = unit.classes().next().unwrap();
    let prop = class.properties().next().unwrap();
    assert_eq!(prop.name().as_deref(), Some("Value"));
    let name = prop.member_name().unwrap();
    assert!(name.is_qualified());
    assert_eq!(name.reference(), "IHolder<TA,TB>.Value");
}

#[test]
fn typeof_arguments_expose_type_references() {
    let unit = unit(r#"[SuperNode("Setup", typeof(Box<int, string>))] class T { }"#);
    let class = unit.classes().next().unwrap();
    let attr = class.find_attribute("SuperNode").unwrap();
    let args: Vec<_> = attr.args().collect();
    assert_eq!(args[0].string_value().as_deref(), Some("Setup"));
    let type_ref = args[1].typeof_expr().unwrap().type_ref().unwrap();
    assert_eq!(type_ref.head_name().as_deref(), Some("Box"));
    assert_eq!(type_ref.type_arg_texts(), vec!["int", "string"]);
}

#[test]
fn malformed_member_recovers_to_next_declaration() {
    let parsed = parse(
        r#"
class C {
    public int @@@ garbage;
    public int Kept;
}
"#,
    );
    assert!(!parsed.ok());
    let unit = CompilationUnit::cast(parsed.syntax()).unwrap();
    let class = unit.classes().next().unwrap();
    assert!(class.fields().any(|f| f.name().as_deref() == Some("Kept")));
}
