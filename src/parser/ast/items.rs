use super::*;

// ============================================================================
// Compilation unit
// ============================================================================

ast_node!(CompilationUnit, COMPILATION_UNIT);

impl CompilationUnit {
    children_method!(usings, UsingDirective);
    children_method!(namespaces, NamespaceDecl);

    /// Type declarations appearing directly in the unit (outside any
    /// block namespace).
    children_method!(top_level_classes, ClassDecl);

    /// All type declarations in the unit, any nesting depth.
    pub fn classes(&self) -> impl Iterator<Item = ClassDecl> + '_ {
        self.0.descendants().filter_map(ClassDecl::cast)
    }

    /// The file-scoped namespace, if the unit uses that form.
    pub fn file_scoped_namespace(&self) -> Option<NamespaceDecl> {
        self.namespaces().find(|ns| ns.is_file_scoped())
    }
}

// ============================================================================
// Using directive
// ============================================================================

ast_node!(UsingDirective, USING_DIRECTIVE);

impl UsingDirective {
    first_child_method!(name, QualifiedName);
    has_token_method!(is_static, STATIC_KW, "using static Foo.Bar;");
}

// ============================================================================
// Namespace
// ============================================================================

ast_node!(NamespaceDecl, NAMESPACE_DECL);

impl NamespaceDecl {
    first_child_method!(name, QualifiedName);
    children_method!(classes, ClassDecl);
    children_method!(usings, UsingDirective);

    /// File-scoped namespaces have no brace-delimited body.
    pub fn is_file_scoped(&self) -> bool {
        !has_token(&self.0, SyntaxKind::L_BRACE)
    }
}

// ============================================================================
// Qualified names
// ============================================================================

ast_node!(QualifiedName, QUALIFIED_NAME);

impl QualifiedName {
    /// The final identifier segment.
    pub fn last_segment(&self) -> Option<String> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| t.kind() == SyntaxKind::IDENT)
            .last()
            .map(|t| t.text().to_string())
    }

    /// The dotted text with trivia stripped.
    pub fn dotted(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dotted())
    }
}

// ============================================================================
// Attributes
// ============================================================================

ast_node!(AttributeList, ATTRIBUTE_LIST);

impl AttributeList {
    children_method!(attributes, Attribute);
}

ast_node!(Attribute, ATTRIBUTE);

impl Attribute {
    first_child_method!(name, QualifiedName);
    first_child_method!(arg_list, AttributeArgList);

    /// The attribute's simple name: the last segment, with any
    /// conventional `Attribute` suffix kept as written.
    pub fn simple_name(&self) -> Option<String> {
        self.name().and_then(|n| n.last_segment())
    }

    /// Match by simple name, tolerating the `Attribute` suffix either
    /// way (`[PowerUp]` matches `PowerUpAttribute` and vice versa).
    pub fn is_named(&self, name: &str) -> bool {
        match self.simple_name() {
            Some(simple) => {
                simple == name
                    || simple.strip_suffix("Attribute") == Some(name)
                    || name.strip_suffix("Attribute") == Some(simple.as_str())
            }
            None => false,
        }
    }

    pub fn args(&self) -> impl Iterator<Item = AttributeArg> + '_ {
        self.arg_list().into_iter().flat_map(|l| {
            l.syntax()
                .children()
                .filter_map(AttributeArg::cast)
                .collect::<Vec<_>>()
        })
    }
}

ast_node!(AttributeArgList, ATTRIBUTE_ARG_LIST);

ast_node!(AttributeArg, ATTRIBUTE_ARG);

impl AttributeArg {
    first_child_method!(typeof_expr, TypeofExpr);

    /// If the argument is a single string literal, its unquoted value.
    pub fn string_value(&self) -> Option<String> {
        let mut tokens = self
            .0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia());
        let first = tokens.next()?;
        if first.kind() == SyntaxKind::STRING && tokens.next().is_none() {
            Some(strip_string_quotes(first.text()))
        } else {
            None
        }
    }

    /// The argument's source text with surrounding trivia trimmed,
    /// exactly as it should be reproduced in generated tables.
    pub fn expression_text(&self) -> String {
        self.text().trim().to_string()
    }
}

ast_node!(TypeofExpr, TYPEOF_EXPR);

impl TypeofExpr {
    first_child_method!(type_ref, TypeRef);
}

// ============================================================================
// Generics
// ============================================================================

ast_node!(TypeParamList, TYPE_PARAM_LIST);

impl TypeParamList {
    children_method!(type_params, TypeParam);
}

ast_node!(TypeParam, TYPE_PARAM);

impl TypeParam {
    pub fn name(&self) -> Option<String> {
        find_token(&self.0, SyntaxKind::IDENT).map(|t| t.text().to_string())
    }
}

ast_node!(TypeArgList, TYPE_ARG_LIST);

impl TypeArgList {
    children_method!(type_refs, TypeRef);
}

ast_node!(ConstraintClause, CONSTRAINT_CLAUSE);

// ============================================================================
// Inheritance
// ============================================================================

ast_node!(BaseList, BASE_LIST);

impl BaseList {
    children_method!(base_types, BaseType);
}

ast_node!(BaseType, BASE_TYPE);

impl BaseType {
    first_child_method!(type_ref, TypeRef);
}

// ============================================================================
// Type references
// ============================================================================

ast_node!(TypeRef, TYPE_REF);

impl TypeRef {
    /// The type text with trivia stripped, e.g. `List<int>` or
    /// `global::System.Object`.
    pub fn display(&self) -> String {
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

    /// The leading identifier, e.g. `List` for `List<int>`.
    pub fn head_name(&self) -> Option<String> {
        find_token(&self.0, SyntaxKind::IDENT).map(|t| t.text().to_string())
    }

    first_child_method!(type_arg_list, TypeArgList);

    /// Concrete type-argument texts in declaration order, empty when
    /// the reference is not generic.
    pub fn type_arg_texts(&self) -> Vec<String> {
        self.type_arg_list()
            .map(|l| l.type_refs().map(|t| t.display()).collect())
            .unwrap_or_default()
    }
}

// ============================================================================
// Type declarations
// ============================================================================

ast_node!(ClassDecl, CLASS_DECL);

impl ClassDecl {
    children_method!(attribute_lists, AttributeList);
    first_child_method!(type_param_list, TypeParamList);
    first_child_method!(base_list, BaseList);

    /// The declared identifier token.
    pub fn name_token(&self) -> Option<SyntaxToken> {
        find_token(&self.0, SyntaxKind::IDENT)
    }

    pub fn name(&self) -> Option<String> {
        self.name_token().map(|t| t.text().to_string())
    }

    /// Name including the generic parameter list as written, e.g.
    /// `Box<T>`.
    pub fn name_with_generics(&self) -> Option<String> {
        let name = self.name()?;
        match self.type_param_list() {
            Some(list) => {
                let params: Vec<_> = list.type_params().filter_map(|p| p.name()).collect();
                Some(format!("{}<{}>", name, params.join(", ")))
            }
            None => Some(name),
        }
    }

    /// Declared generic parameter names in order, empty for
    /// non-generic declarations.
    pub fn type_param_names(&self) -> Vec<String> {
        self.type_param_list()
            .map(|l| l.type_params().filter_map(|p| p.name()).collect())
            .unwrap_or_default()
    }

    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.attribute_lists().flat_map(|l| {
            l.syntax()
                .children()
                .filter_map(Attribute::cast)
                .collect::<Vec<_>>()
        })
    }

    pub fn find_attribute(&self, name: &str) -> Option<Attribute> {
        self.attributes().find(|a| a.is_named(name))
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.find_attribute(name).is_some()
    }

    has_token_method!(is_partial, PARTIAL_KW, "public partial class Page");
    has_token_method!(is_static, STATIC_KW);
    has_token_method!(is_interface, INTERFACE_KW);

    /// The declaration keyword token (`class`, `record`, `interface`,
    /// `struct`).
    pub fn decl_keyword(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind().is_type_decl_keyword())
    }

    /// Accessibility modifier as written, defaulting to `internal`.
    pub fn accessibility(&self) -> &'static str {
        for t in self
            .0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
        {
            match t.kind() {
                SyntaxKind::PUBLIC_KW => return "public",
                SyntaxKind::PRIVATE_KW => return "private",
                SyntaxKind::PROTECTED_KW => return "protected",
                SyntaxKind::INTERNAL_KW => return "internal",
                _ => {}
            }
        }
        "internal"
    }

    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.0.children().filter_map(Member::cast)
    }

    children_method!(fields, FieldDecl);
    children_method!(properties, PropertyDecl);
    children_method!(methods, MethodDecl);
    children_method!(ctors, CtorDecl);

    pub fn find_method(&self, name: &str) -> Option<MethodDecl> {
        self.methods().find(|m| m.name().as_deref() == Some(name))
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.find_method(name).is_some()
    }

    /// Check for a partial method declaration with no body, the shape
    /// the generated dispatch implementation pairs with.
    pub fn has_partial_method_stub(&self, name: &str) -> bool {
        self.methods()
            .any(|m| m.name().as_deref() == Some(name) && m.is_partial() && !m.has_body())
    }

    /// Type declarations nested directly inside this one.
    children_method!(nested_classes, ClassDecl);
}
