//! Type-parameter substitution over descriptors built from real
//! declarations.

use rstest::rstest;
use smol_str::SmolStr;
use supernodes::compose::TypeParamMapping;
use supernodes::parser::{AstNode, CompilationUnit, parse};
use supernodes::repo::build_power_up;
use supernodes::semantic::SymbolTable;
use supernodes::PowerUp;

fn power_up_from(source: &str) -> PowerUp {
    let unit = CompilationUnit::cast(parse(source).syntax()).unwrap();
    let table = SymbolTable::from_units([&unit]);
    let class = unit.classes().next().unwrap();
    build_power_up(&class, &unit, &table).unwrap()
}

#[rstest]
#[case(&["T"], &["int"], "T", "int")]
#[case(&["T"], &["int"], "List<T>", "List<int>")]
#[case(&["TK", "TV"], &["string", "bool"], "Map<TK,TV>", "Map<string,bool>")]
#[case(&["T"], &["int"], "Text", "Text")] // no match inside identifiers
fn substitutes_into_declared_types(
    #[case] params: &[&str],
    #[case] args: &[&str],
    #[case] declared: &str,
    #[case] expected: &str,
) {
    let source = format!(
        "[PowerUp] class M<{}> {{ public {declared} value; }}",
        params.join(", ")
    );
    let power_up = power_up_from(&source);
    let params: Vec<SmolStr> = params.iter().map(|p| SmolStr::new(*p)).collect();
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let mapping = TypeParamMapping::new(&params, &args).unwrap();
    let derived = mapping.apply(&power_up.props_and_fields[0]);
    assert_eq!(derived.ty, expected);
}

#[test]
fn explicit_interface_reference_regains_concrete_arguments() {
    let power_up = power_up_from(
        r#"
[PowerUp]
class Holder<TA, TB> : IHolder<TA, TB> {
    string IHolder<TA, TB>.Value { get; set; }
}
"#,
    );
    let member = &power_up.props_and_fields[0];
    assert_eq!(member.reference, "IHolder<TA,TB>.Value");
    assert!(member.mentions_type_parameter());

    let mapping = TypeParamMapping::for_power_up(
        &power_up,
        &["string".to_string(), "bool".to_string()],
    )
    .unwrap();
    let derived = mapping.apply(member);
    assert_eq!(derived.reference, "IHolder<string,bool>.Value");
    assert!(!derived.mentions_type_parameter());
}

#[test]
fn concrete_members_pass_through_untouched() {
    let power_up = power_up_from("[PowerUp] class M<T> { public string label; }");
    let mapping = TypeParamMapping::for_power_up(&power_up, &["int".to_string()]).unwrap();
    let member = &power_up.props_and_fields[0];
    assert!(member.type_parts.is_empty());
    assert_eq!(mapping.apply(member), *member);
}

#[test]
fn arity_mismatch_fails_the_application() {
    let power_up = power_up_from("[PowerUp] class M<TA, TB> { }");
    assert!(TypeParamMapping::for_power_up(&power_up, &["int".to_string()]).is_err());
    assert!(TypeParamMapping::for_power_up(&power_up, &[]).is_err());
}
