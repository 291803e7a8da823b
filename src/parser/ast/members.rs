use super::*;

// ============================================================================
// Member dispatch
// ============================================================================

/// A class-body member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    Field(FieldDecl),
    Property(PropertyDecl),
    Method(MethodDecl),
    Ctor(CtorDecl),
    NestedClass(ClassDecl),
}

impl Member {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::FIELD_DECL => FieldDecl::cast(node).map(Member::Field),
            SyntaxKind::PROPERTY_DECL => PropertyDecl::cast(node).map(Member::Property),
            SyntaxKind::METHOD_DECL => MethodDecl::cast(node).map(Member::Method),
            SyntaxKind::CTOR_DECL => CtorDecl::cast(node).map(Member::Ctor),
            SyntaxKind::CLASS_DECL => ClassDecl::cast(node).map(Member::NestedClass),
            _ => None,
        }
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Member::Field(m) => m.syntax(),
            Member::Property(m) => m.syntax(),
            Member::Method(m) => m.syntax(),
            Member::Ctor(m) => m.syntax(),
            Member::NestedClass(m) => m.syntax(),
        }
    }

    /// Check the member for a marker attribute by simple name.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.syntax()
            .children()
            .filter_map(AttributeList::cast)
            .flat_map(|l| {
                l.syntax()
                    .children()
                    .filter_map(Attribute::cast)
                    .collect::<Vec<_>>()
            })
            .any(|a| a.is_named(name))
    }
}

// ============================================================================
// Fields
// ============================================================================

ast_node!(FieldDecl, FIELD_DECL);

impl FieldDecl {
    first_child_method!(type_ref, TypeRef);
    first_child_method!(member_name, MemberName);
    first_child_method!(initializer, Initializer);

    has_token_method!(is_readonly, READONLY_KW, "public readonly int x;");
    has_token_method!(is_static, STATIC_KW);
    has_token_method!(is_const, CONST_KW);

    pub fn name(&self) -> Option<String> {
        self.member_name().and_then(|n| n.simple_name())
    }
}

// ============================================================================
// Properties
// ============================================================================

ast_node!(PropertyDecl, PROPERTY_DECL);

impl PropertyDecl {
    first_child_method!(type_ref, TypeRef);
    first_child_method!(member_name, MemberName);
    first_child_method!(accessor_list, AccessorList);
    first_child_method!(expr_body, ExprBody);

    has_token_method!(is_static, STATIC_KW);

    pub fn name(&self) -> Option<String> {
        self.member_name().and_then(|n| n.simple_name())
    }

    /// Readable: has a `get` accessor, or is expression-bodied.
    pub fn is_readable(&self) -> bool {
        if self.expr_body().is_some() {
            return true;
        }
        self.accessors().any(|a| a.is_getter())
    }

    /// Mutable: has a `set` or `init` accessor.
    pub fn is_mutable(&self) -> bool {
        self.accessors().any(|a| a.is_setter())
    }

    pub fn accessors(&self) -> impl Iterator<Item = Accessor> + '_ {
        self.accessor_list().into_iter().flat_map(|l| {
            l.syntax()
                .children()
                .filter_map(Accessor::cast)
                .collect::<Vec<_>>()
        })
    }
}

ast_node!(AccessorList, ACCESSOR_LIST);

ast_node!(Accessor, ACCESSOR);

impl Accessor {
    has_token_method!(is_getter, GET_KW);

    pub fn is_setter(&self) -> bool {
        has_token(&self.0, SyntaxKind::SET_KW) || has_token(&self.0, SyntaxKind::INIT_KW)
    }
}

// ============================================================================
// Methods and constructors
// ============================================================================

ast_node!(MethodDecl, METHOD_DECL);

impl MethodDecl {
    first_child_method!(type_ref, TypeRef);
    first_child_method!(member_name, MemberName);
    first_child_method!(param_list, ParamList);
    first_child_method!(block, Block);
    first_child_method!(expr_body, ExprBody);

    has_token_method!(is_partial, PARTIAL_KW, "public partial void Notify(int what);");
    has_token_method!(is_static, STATIC_KW);
    has_token_method!(is_override, OVERRIDE_KW);

    pub fn name(&self) -> Option<String> {
        self.member_name().and_then(|n| n.simple_name())
    }

    pub fn has_body(&self) -> bool {
        self.block().is_some() || self.expr_body().is_some()
    }
}

ast_node!(CtorDecl, CTOR_DECL);

impl CtorDecl {
    first_child_method!(param_list, ParamList);
    first_child_method!(block, Block);
}

ast_node!(ParamList, PARAM_LIST);

ast_node!(Block, BLOCK);

ast_node!(ExprBody, EXPR_BODY);

ast_node!(Initializer, INITIALIZER);

// ============================================================================
// Member names
// ============================================================================

ast_node!(MemberName, MEMBER_NAME);

impl MemberName {
    /// The declared identifier: the last segment of the (possibly
    /// qualified) name.
    pub fn simple_name(&self) -> Option<String> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| t.kind() == SyntaxKind::IDENT)
            .last()
            .map(|t| t.text().to_string())
    }

    /// Whether the name is interface-qualified (`IFoo<T>.Member`).
    pub fn is_qualified(&self) -> bool {
        has_token(&self.0, SyntaxKind::DOT)
    }

    /// The reference expression used to access the member, trivia
    /// stripped: equals `simple_name` for ordinary members, the full
    /// qualified text for explicit interface implementations.
    pub fn reference(&self) -> String {
        let mut out = String::new();
        for e in self.0.descendants_with_tokens() {
            if let Some(t) = e.into_token() {
                if !t.kind().is_trivia() {
                    out.push_str(t.text());
                }
            }
        }
        out
    }
}
