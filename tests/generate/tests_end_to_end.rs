//! Whole-pipeline scenarios: sources in, generated units out.

use once_cell::sync::Lazy;
use supernodes::GenerationOutput;

use crate::helpers::pass_helpers::{assert_no_diagnostics, run_pass, unit};
use crate::helpers::source_fixtures::{
    GENERIC_BOX_MIXIN, GREETER_MIXIN, INT_BOX_TARGET, PAGE_WITH_GREETER,
};

static GREETER_OUTPUT: Lazy<GenerationOutput> =
    Lazy::new(|| run_pass(&[GREETER_MIXIN, PAGE_WITH_GREETER]));

static INT_BOX_OUTPUT: Lazy<GenerationOutput> =
    Lazy::new(|| run_pass(&[GENERIC_BOX_MIXIN, INT_BOX_TARGET]));

#[test]
fn greeter_applied_to_page_produces_three_units_and_no_diagnostics() {
    assert_no_diagnostics(&GREETER_OUTPUT);
    let names: Vec<&str> = GREETER_OUTPUT
        .units
        .iter()
        .map(|u| u.hint_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "App.Page.g.cs",
            "App.Page_Greeter.g.cs",
            "App.Page_Reflection.g.cs"
        ]
    );
}

#[test]
fn greeter_fragment_is_a_partial_page_with_the_field() {
    let merged = unit(&GREETER_OUTPUT, "App.Page_Greeter.g.cs");
    assert!(merged.text.contains("namespace App {"));
    assert!(merged.text.contains("partial class Page {"));
    assert!(merged.text.contains("public string greeting = \"hello\";"));
    assert!(!merged.text.contains("PowerUp"));
    assert!(!merged.text.contains("class Greeter"));
}

#[test]
fn greeter_reflection_table_has_exactly_one_field_entry() {
    let reflection = unit(&GREETER_OUTPUT, "App.Page_Reflection.g.cs");
    assert_eq!(reflection.text.matches("new MemberMetadata(").count(), 1);
    assert!(reflection.text.contains("[\"greeting\"] = new MemberMetadata("));
    assert!(reflection.text.contains("isField: true,"));
    assert!(reflection.text.contains("isMutable: true,"));
    assert!(reflection.text.contains("type: typeof(string),"));
}

#[test]
fn generic_box_applied_to_int_box_leaves_no_residual_parameter() {
    assert_no_diagnostics(&INT_BOX_OUTPUT);
    let merged = unit(&INT_BOX_OUTPUT, "App.IntBox_Box.g.cs");
    assert!(merged.text.contains("partial class IntBox {"));
    assert!(merged.text.contains("public int value;"));
    assert!(!merged.text.contains("T value"));
    assert!(!merged.text.contains("<T>"));

    let reflection = unit(&INT_BOX_OUTPUT, "App.IntBox_Reflection.g.cs");
    assert!(reflection.text.contains("type: typeof(int),"));
    assert!(reflection.text.contains("return receiver.Receive<int>();"));
}

#[test]
fn mixin_usings_are_carried_into_the_fragment_unit() {
    let output = run_pass(&[
        r#"
using System.Collections.Generic;
namespace App {
    [PowerUp]
    public class Lister {
        public List<int> items = new();
    }
}
"#,
        r#"
namespace App {
    [SuperNode(typeof(Lister))]
    public partial class Board {
        public partial void Notify(int what);
    }
}
"#,
    ]);
    assert_no_diagnostics(&output);
    let merged = unit(&output, "App.Board_Lister.g.cs");
    assert!(merged.text.contains("using System.Collections.Generic;"));
}

#[test]
fn nested_target_regenerates_its_wrapper_chain() {
    let output = run_pass(&[r#"
namespace App {
    public partial class Outer {
        [SuperObject]
        public partial class Inner {
            public int Depth;
        }
    }
}
"#]);
    assert_no_diagnostics(&output);
    let reflection = unit(&output, "App.Inner_Reflection.g.cs");
    assert!(reflection.text.contains("public partial class Outer {"));
    assert!(reflection.text.contains("partial class Inner {"));
}

#[test]
fn super_object_gets_no_dispatch_unit() {
    let output = run_pass(&[r#"
namespace App {
    [SuperObject]
    public partial class Model {
        public string Title { get; set; }
    }
}
"#]);
    assert_no_diagnostics(&output);
    let names: Vec<&str> = output.units.iter().map(|u| u.hint_name.as_str()).collect();
    assert_eq!(names, vec!["App.Model_Reflection.g.cs"]);
}
