//! The applicability gate: a mixin only merges into targets whose
//! base-class chain contains its declared base class.

use supernodes::LineIndex;
use supernodes::generate::codes;

use crate::helpers::pass_helpers::{assert_no_diagnostics, has_unit, run_pass};

const SIZER_REQUIRING_BASE: &str = r#"
namespace App {
    [PowerUp]
    public class Sizer : Base {
        public float Size;
    }
}
"#;

#[test]
fn target_without_the_required_base_is_refused() {
    let output = run_pass(&[
        "namespace App { class Base { } class Other { } }",
        SIZER_REQUIRING_BASE,
        r#"
namespace App {
    [SuperNode(typeof(Sizer))]
    partial class Page : Other {
        public partial void Notify(int what);
    }
}
"#,
    ]);
    assert_eq!(output.diagnostics.len(), 1);
    let diag = &output.diagnostics[0];
    assert_eq!(diag.code.as_deref(), Some(codes::POWER_UP_NOT_APPLICABLE));
    assert!(diag.message.contains("App.Sizer"));
    assert!(diag.message.contains("App.Page"));
    assert!(diag.message.contains("App.Base"));
    assert!(!has_unit(&output, "App.Page_Sizer.g.cs"));
}

#[test]
fn direct_base_match_is_accepted() {
    let output = run_pass(&[
        "namespace App { class Base : Other { } class Other { } }",
        SIZER_REQUIRING_BASE,
        r#"
namespace App {
    [SuperNode(typeof(Sizer))]
    partial class Page : Base {
        public partial void Notify(int what);
    }
}
"#,
    ]);
    assert_no_diagnostics(&output);
    assert!(has_unit(&output, "App.Page_Sizer.g.cs"));
}

#[test]
fn transitive_base_match_is_accepted() {
    let output = run_pass(&[
        "namespace App { class Intermediate : Base { } class Base { } }",
        SIZER_REQUIRING_BASE,
        r#"
namespace App {
    [SuperNode(typeof(Sizer))]
    partial class Page : Intermediate {
        public partial void Notify(int what);
    }
}
"#,
    ]);
    assert_no_diagnostics(&output);
    assert!(has_unit(&output, "App.Page_Sizer.g.cs"));
}

#[test]
fn object_rooted_mixins_apply_to_any_target() {
    let output = run_pass(&[
        r#"
namespace App {
    [PowerUp]
    class Tagger {
        public string Tag;
    }
    [SuperNode(typeof(Tagger))]
    partial class Anything {
        public partial void Notify(int what);
    }
}
"#,
    ]);
    assert_no_diagnostics(&output);
    assert!(has_unit(&output, "App.Anything_Tagger.g.cs"));
}

#[test]
fn missing_dispatch_stub_is_reported_but_generation_continues() {
    let source = r#"
namespace App {
    [PowerUp]
    class Tagger {
        public string Tag;
    }
    [SuperNode(typeof(Tagger))]
    partial class Page {
    }
}
"#;
    let output = run_pass(&[source]);
    assert_eq!(output.diagnostics.len(), 1);
    let diag = &output.diagnostics[0];
    assert_eq!(diag.code.as_deref(), Some(codes::MISSING_DISPATCH_STUB));
    // the range renders back to the target's declaration, which opens
    // with its attribute list
    let position = LineIndex::new(source).line_col(diag.range.start());
    assert_eq!(position.line, 6);
    // the stub diagnostic does not suppress any unit
    assert!(has_unit(&output, "App.Page.g.cs"));
    assert!(has_unit(&output, "App.Page_Tagger.g.cs"));
    assert!(has_unit(&output, "App.Page_Reflection.g.cs"));
}
