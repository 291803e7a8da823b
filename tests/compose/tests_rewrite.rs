//! Mixin-rewriting tests over descriptors built from real sources.

use smol_str::SmolStr;
use supernodes::compose::TypeParamMapping;
use supernodes::compose::rewrite::rewrite_power_up;
use supernodes::parser::{AstNode, CompilationUnit, parse};
use supernodes::repo::find_power_ups;
use supernodes::semantic::SymbolTable;
use supernodes::PowerUp;

fn power_up_from(source: &str) -> PowerUp {
    let unit = CompilationUnit::cast(parse(source).syntax()).unwrap();
    let table = SymbolTable::from_units([&unit]);
    let power_ups = find_power_ups([&unit], &table);
    power_ups.into_values().next().unwrap()
}

#[test]
fn member_trivia_survives_the_rewrite() {
    let power_up = power_up_from(
        r#"[PowerUp]
class Noisy {
    // keeps its comment
    public int  spaced ;

    /* and this one */
    public void OnNoisy(int what) {
        spaced += 1; // trailing note
    }
}"#,
    );
    let rewritten = rewrite_power_up(&power_up, "Host", &TypeParamMapping::default()).unwrap();
    assert!(rewritten.contains("// keeps its comment\n    public int  spaced ;"));
    assert!(rewritten.contains("/* and this one */"));
    assert!(rewritten.contains("spaced += 1; // trailing note"));
}

#[test]
fn generic_interface_list_is_substituted() {
    let source = r#"
namespace M {
    interface IHolder<TA, TB> { }
    [PowerUp]
    class Holder<TA, TB> : IHolder<TA, TB> {
        public TA first;
    }
}
"#;
    let unit = CompilationUnit::cast(parse(source).syntax()).unwrap();
    let table = SymbolTable::from_units([&unit]);
    let power_ups = find_power_ups([&unit], &table);
    let power_up = power_ups.get("M.Holder").unwrap();
    let mapping = TypeParamMapping::new(
        &[SmolStr::new("TA"), SmolStr::new("TB")],
        &["string".to_string(), "bool".to_string()],
    )
    .unwrap();
    let rewritten = rewrite_power_up(power_up, "Pair", &mapping).unwrap();
    assert!(rewritten.starts_with("partial class Pair : M.IHolder<string,bool> {"));
    assert!(rewritten.contains("public string first;"));
}

#[test]
fn generic_self_reference_collapses_to_target_name() {
    let power_up = power_up_from(
        r#"[PowerUp]
class Registry<T> {
    public void OnRegistry(int what) {
        Registry<T>.Count += 1;
        var other = Registry<List<T>>.Count;
    }
}"#,
    );
    let mapping = TypeParamMapping::new(&[SmolStr::new("T")], &["int".to_string()]).unwrap();
    let rewritten = rewrite_power_up(&power_up, "Tracker", &mapping).unwrap();
    assert!(rewritten.contains("Tracker.Count += 1;"));
    assert!(rewritten.contains("var other = Tracker.Count;"));
    assert!(!rewritten.contains("Registry"));
}

#[test]
fn method_type_parameter_use_is_substituted() {
    let power_up = power_up_from(
        r#"[PowerUp]
class Caster<T> {
    public T As(object value) => (T)value;
}"#,
    );
    let mapping =
        TypeParamMapping::new(&[SmolStr::new("T")], &["string".to_string()]).unwrap();
    let rewritten = rewrite_power_up(&power_up, "Strings", &mapping).unwrap();
    assert!(rewritten.contains("public string As(object value) => (string)value;"));
}
