//! Dispatch-method synthesis: hook ordering, entry-point skipping, and
//! the notification-handler switch.

use rstest::rstest;

use crate::helpers::pass_helpers::{run_pass, unit};
use crate::helpers::source_fixtures::STATE_ONLY_MIXIN;

const MIXIN_X: &str = r#"
namespace App {
    [PowerUp]
    public class MixinX {
        public void OnMixinX(int what) { }
    }
}
"#;

fn host_with_hooks(hook_args: &str) -> String {
    format!(
        r#"
namespace App {{
    [SuperNode({hook_args})]
    public partial class Host {{
        public partial void Notify(int what);
    }}
}}
"#
    )
}

/// Positions of each expected statement in the dispatch unit, which
/// must be strictly increasing.
fn statement_positions(text: &str, statements: &[&str]) -> Vec<usize> {
    statements
        .iter()
        .map(|s| {
            text.find(s)
                .unwrap_or_else(|| panic!("missing statement {s:?} in:\n{text}"))
        })
        .collect()
}

#[rstest]
#[case(
    r#""MethodA", typeof(MixinX), "MethodB""#,
    &["MethodA(what);", "OnMixinX(what);", "MethodB(what);"]
)]
#[case(
    r#""MethodB", "MethodA", typeof(MixinX)"#,
    &["MethodB(what);", "MethodA(what);", "OnMixinX(what);"]
)]
#[case(
    r#"typeof(MixinX), "MethodA", "MethodB""#,
    &["OnMixinX(what);", "MethodA(what);", "MethodB(what);"]
)]
fn hook_declaration_order_is_call_order(#[case] hook_args: &str, #[case] expected: &[&str]) {
    let host = host_with_hooks(hook_args);
    let output = run_pass(&[MIXIN_X, host.as_str()]);
    let dispatch = unit(&output, "App.Host.g.cs");
    let positions = statement_positions(&dispatch.text, expected);
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "statements out of order in:\n{}",
        dispatch.text
    );
}

#[test]
fn state_only_mixin_contributes_no_invocation() {
    let host = host_with_hooks(r#""First", typeof(Marker), "Last""#);
    let output = run_pass(&[STATE_ONLY_MIXIN, host.as_str()]);
    let dispatch = unit(&output, "App.Host.g.cs");
    assert!(!dispatch.text.contains("OnMarker"));
    let positions = statement_positions(&dispatch.text, &["First(what);", "Last(what);"]);
    assert!(positions[0] < positions[1]);
    // the state still merges
    let merged = unit(&output, "App.Host_Marker.g.cs");
    assert!(merged.text.contains("public bool marked;"));
}

#[test]
fn recognized_handlers_get_switch_cases_in_declaration_order() {
    let output = run_pass(&[r#"
namespace App {
    [SuperNode]
    public partial class Host {
        public partial void Notify(int what);
        public void OnReady() { }
        public void OnProcess() { }
        public void Helper() { }
        public void OnNotification(int what) { }
    }
}
"#]);
    let dispatch = unit(&output, "App.Host.g.cs");
    assert!(dispatch.text.contains("switch (what) {"));
    let positions = statement_positions(
        &dispatch.text,
        &[
            "case 13: OnReady(); break;",
            "case 17: OnProcess(); break;",
            "OnNotification(what);",
        ],
    );
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(!dispatch.text.contains("Helper"));
}

#[test]
fn implementing_declaration_matches_the_stub() {
    let host = host_with_hooks(r#""Setup""#);
    let output = run_pass(&[host.as_str()]);
    let dispatch = unit(&output, "App.Host.g.cs");
    assert!(dispatch.text.contains("public partial void Notify(int what) {"));
    assert!(dispatch.text.contains("Setup(what);"));
}
