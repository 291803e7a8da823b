//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax
//! tree. The grammar is the focused C# declaration subset the engine
//! inspects and rewrites: using directives, namespaces, type
//! declarations with attributes/modifiers/generics/base lists, and
//! member declarations. Statement interiors stay token runs.

/// All syntax kinds (tokens and nodes) in the declaration subset
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (units, declarations, members).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,              // identifier
    INTEGER,            // 42
    DECIMAL,            // 3.14
    STRING,             // "hello" or $"hello {x}"
    CHAR_LIT,           // 'a'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_PAREN,            // (
    R_PAREN,            // )
    SEMICOLON,          // ;
    COLON,              // :
    COLON_COLON,        // ::
    COMMA,              // ,
    DOT,                // .
    QUESTION_DOT,       // ?.
    EQ,                 // =
    EQ_EQ,              // ==
    BANG_EQ,            // !=
    LT,                 // <
    GT,                 // >
    LT_EQ,              // <=
    GT_EQ,              // >=
    ARROW,              // ->
    FAT_ARROW,          // =>
    PLUS,               // +
    PLUS_PLUS,          // ++
    MINUS,              // -
    MINUS_MINUS,        // --
    STAR,               // *
    SLASH,              // /
    PERCENT,            // %
    CARET,              // ^
    TILDE,              // ~
    QUESTION,           // ?
    QUESTION_QUESTION,  // ??
    BANG,               // !
    PIPE,               // |
    AMP,                // &
    AMP_AMP,            // &&
    PIPE_PIPE,          // ||
    AT,                 // @

    // =========================================================================
    // KEYWORDS - declaration structure
    // =========================================================================
    USING_KW,
    NAMESPACE_KW,
    CLASS_KW,
    RECORD_KW,
    INTERFACE_KW,
    STRUCT_KW,

    // Modifiers
    PUBLIC_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    INTERNAL_KW,
    STATIC_KW,
    READONLY_KW,
    CONST_KW,
    PARTIAL_KW,
    OVERRIDE_KW,
    VIRTUAL_KW,
    ABSTRACT_KW,
    SEALED_KW,
    NEW_KW,
    ASYNC_KW,

    // Accessors
    GET_KW,
    SET_KW,
    INIT_KW,

    // Generic constraints
    WHERE_KW,

    // Expressions the engine recognizes structurally
    TYPEOF_KW,

    // =========================================================================
    // COMPOSITE NODES (non-terminals in the grammar)
    // =========================================================================
    // Root
    COMPILATION_UNIT,

    // Top-level
    USING_DIRECTIVE,
    NAMESPACE_DECL,
    CLASS_DECL,

    // Attributes
    ATTRIBUTE_LIST,
    ATTRIBUTE,
    ATTRIBUTE_ARG_LIST,
    ATTRIBUTE_ARG,
    TYPEOF_EXPR,

    // Generics
    TYPE_PARAM_LIST,
    TYPE_PARAM,
    TYPE_ARG_LIST,
    CONSTRAINT_CLAUSE,

    // Inheritance
    BASE_LIST,
    BASE_TYPE,

    // Names and types
    QUALIFIED_NAME,
    TYPE_REF,
    MEMBER_NAME,

    // Members
    FIELD_DECL,
    PROPERTY_DECL,
    ACCESSOR_LIST,
    ACCESSOR,
    METHOD_DECL,
    CTOR_DECL,
    PARAM_LIST,
    BLOCK,
    EXPR_BODY,
    INITIALIZER,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::USING_KW as u16) && (self as u16) <= (Self::TYPEOF_KW as u16)
    }

    /// Check if this is a declaration modifier keyword
    pub fn is_modifier(self) -> bool {
        (self as u16) >= (Self::PUBLIC_KW as u16) && (self as u16) <= (Self::ASYNC_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::AT as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IDENT | Self::INTEGER | Self::DECIMAL | Self::STRING | Self::CHAR_LIT
        )
    }

    /// Keywords that introduce a type declaration
    pub fn is_type_decl_keyword(self) -> bool {
        matches!(
            self,
            Self::CLASS_KW | Self::RECORD_KW | Self::INTERFACE_KW | Self::STRUCT_KW
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CsLanguage {}

impl rowan::Language for CsLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<CsLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<CsLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<CsLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<CsLanguage>;
