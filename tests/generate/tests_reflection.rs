//! Reflection units over merged member sets.

use crate::helpers::pass_helpers::{assert_no_diagnostics, run_pass, unit};
use crate::helpers::source_fixtures::{NODE_HIERARCHY, SIZER_MIXIN};

#[test]
fn target_and_mixin_members_merge_in_ascending_name_order() {
    let output = run_pass(&[
        r#"
namespace App {
    [PowerUp]
    class Extras {
        public int d;
        public int c;
    }
    [SuperNode(typeof(Extras))]
    partial class Holder {
        public partial void Notify(int what);
        public int b;
        public int a;
    }
}
"#,
    ]);
    assert_no_diagnostics(&output);
    let reflection = unit(&output, "App.Holder_Reflection.g.cs");
    let positions: Vec<usize> = ["\"a\"", "\"b\"", "\"c\"", "\"d\""]
        .iter()
        .map(|n| {
            reflection
                .text
                .find(&format!("[{n}] = new MemberMetadata("))
                .unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn set_dispatch_lists_only_mutable_members() {
    let output = run_pass(&[r#"
namespace App {
    [SuperObject]
    partial class Frozen {
        public readonly int locked;
        public int open;
    }
}
"#]);
    let reflection = unit(&output, "App.Frozen_Reflection.g.cs");
    let set_body = &reflection.text[reflection.text.find("SetMemberValue").unwrap()..];
    assert!(set_body.contains("case \"open\":"));
    assert!(!set_body.contains("case \"locked\":"));
    // reads and type dispatch still cover the read-only member
    let receive_body = &reflection.text[reflection.text.find("ReceiveMemberType").unwrap()..];
    assert!(receive_body.contains("case \"locked\":"));
}

#[test]
fn mixin_member_attributes_survive_into_the_table() {
    let output = run_pass(&[
        NODE_HIERARCHY,
        SIZER_MIXIN,
        r#"
namespace App {
    [SuperNode(typeof(Sizer))]
    partial class Panel : Control {
        public partial void Notify(int what);
    }
}
"#,
    ]);
    assert_no_diagnostics(&output);
    let reflection = unit(&output, "App.Panel_Reflection.g.cs");
    assert!(reflection.text.contains("[\"Size\"] = new MemberMetadata("));
    assert!(reflection.text.contains(
        "[\"ExportAttribute\"] = new AttributeMetadata(\"Export\", new object[] { })"
    ));
}

#[test]
fn substituted_generic_members_dispatch_at_their_concrete_type() {
    let output = run_pass(&[r#"
namespace App {
    [PowerUp]
    class Pair<TK, TV> {
        public TK key;
        public TV value;
    }
    [SuperNode(typeof(Pair<string, bool>))]
    partial class Entry {
        public partial void Notify(int what);
    }
}
"#]);
    assert_no_diagnostics(&output);
    let reflection = unit(&output, "App.Entry_Reflection.g.cs");
    assert!(reflection.text.contains("type: typeof(string),"));
    assert!(reflection.text.contains("type: typeof(bool),"));
    assert!(reflection.text.contains("return receiver.Receive<string>();"));
    assert!(reflection.text.contains("return receiver.Receive<bool>();"));
}

#[test]
fn unknown_member_error_names_the_target() {
    let output = run_pass(&[r#"
namespace App {
    [SuperObject]
    partial class Widget {
        public int W;
    }
}
"#]);
    let reflection = unit(&output, "App.Widget_Reflection.g.cs");
    assert_eq!(
        reflection
            .text
            .matches("throw new System.ArgumentException($\"No member named '{memberName}' on Widget.\");")
            .count(),
        3
    );
}
