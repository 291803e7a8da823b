//! Common source fixtures for tests.

// Minimal mixin + target pair
pub const GREETER_MIXIN: &str = r#"
namespace App {
    [PowerUp]
    public class Greeter {
        public string greeting = "hello";
    }
}
"#;

pub const PAGE_WITH_GREETER: &str = r#"
namespace App {
    [SuperNode(typeof(Greeter))]
    public partial class Page {
        public partial void Notify(int what);
    }
}
"#;

// Generic mixin + concrete application
pub const GENERIC_BOX_MIXIN: &str = r#"
namespace App {
    [PowerUp]
    public class Box<T> {
        public T value;
    }
}
"#;

pub const INT_BOX_TARGET: &str = r#"
namespace App {
    [SuperNode(typeof(Box<int>))]
    public partial class IntBox {
        public partial void Notify(int what);
    }
}
"#;

// Mixin with a lifecycle entry point, handlers on the target
pub const SIZER_MIXIN: &str = r#"
namespace App {
    [PowerUp]
    public class Sizer : Node2D {
        [Export]
        public float Size { get; set; }

        public void OnSizer(int what) { }
    }
}
"#;

pub const NODE_HIERARCHY: &str = r#"
namespace App {
    public class Node2D { }
    public class Control : Node2D { }
}
"#;

// A mixin contributing state only, no On<Name> method
pub const STATE_ONLY_MIXIN: &str = r#"
namespace App {
    [PowerUp]
    public class Marker {
        public bool marked;
    }
}
"#;
