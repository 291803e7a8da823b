//! Losslessness tests: the CST must reproduce the input byte-for-byte.
//!
//! The rewriter re-emits member text token by token, so any dropped
//! trivia would corrupt generated fragments.

use rstest::rstest;
use supernodes::parser::parse;

#[rstest]
#[case("class A { }")]
#[case("  class A  {\n\tint  x ;\n}\n")]
#[case("// leading comment\nclass A { /* inner */ int x; }")]
#[case("namespace N {\n    [PowerUp]\n    class M<T> : Base, IFace {\n        public T value = default;\n    }\n}")]
#[case("class C {\n    public int Compute(int a) { return a < 3 && a > 1 ? a : 0; }\n}")]
fn round_trips_exactly(#[case] source: &str) {
    let parsed = parse(source);
    assert_eq!(parsed.syntax().text().to_string(), source);
}

#[test]
fn round_trips_even_with_syntax_errors() {
    let source = "class { int ; }} stray";
    let parsed = parse(source);
    assert!(!parsed.ok());
    assert_eq!(parsed.syntax().text().to_string(), source);
}
