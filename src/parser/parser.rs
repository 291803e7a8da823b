//! Recursive descent parser for the C# declaration subset
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.
//!
//! Only declaration structure is parsed: using directives, namespaces,
//! type declarations, attribute lists, generics, base lists, and member
//! signatures. Parameter lists, method bodies, and initializers are
//! consumed as balanced token runs — the rewriter works on identifier
//! tokens and never needs statement structure.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse a compilation unit into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_compilation_unit();
    parser.finish()
}

/// Recovery set for top-level declarations
const DECL_RECOVERY: &[SyntaxKind] = &[
    SyntaxKind::USING_KW,
    SyntaxKind::NAMESPACE_KW,
    SyntaxKind::CLASS_KW,
    SyntaxKind::RECORD_KW,
    SyntaxKind::INTERFACE_KW,
    SyntaxKind::STRUCT_KW,
    SyntaxKind::L_BRACKET,
    SyntaxKind::R_BRACE,
];

/// Recovery set for class members
const MEMBER_RECOVERY: &[SyntaxKind] = &[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE];

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Look ahead n non-trivia tokens (n = 0 is the current token)
    fn nth(&self, n: usize) -> SyntaxKind {
        let mut idx = self.pos;
        let mut count = 0;
        while idx < self.tokens.len() {
            if !self.tokens[idx].kind.is_trivia() {
                if count == n {
                    return self.tokens[idx].kind;
                }
                count += 1;
            }
            idx += 1;
        }
        SyntaxKind::ERROR
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn bump_any(&mut self) {
        self.bump();
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(TextSize::new(0)));
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.builder.start_node(SyntaxKind::ERROR.into());
        let mut consumed = false;
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump_any();
            consumed = true;
        }
        // If we didn't consume anything and we're not at EOF, consume one token
        // to prevent infinite loops
        if !consumed && !self.at_eof() && !self.at_any(recovery) {
            self.bump_any();
        }
        self.builder.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn checkpoint(&self) -> Checkpoint {
        self.builder.checkpoint()
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// CompilationUnit = (UsingDirective | NamespaceDecl | ClassDecl)*
    fn parse_compilation_unit(&mut self) {
        self.start_node(SyntaxKind::COMPILATION_UNIT);

        while !self.at_eof() {
            let pos_before = self.pos;
            self.skip_trivia();
            if self.at_eof() {
                break;
            }
            match self.current_kind() {
                SyntaxKind::USING_KW => self.parse_using_directive(),
                SyntaxKind::NAMESPACE_KW => self.parse_namespace_decl(),
                k if k == SyntaxKind::L_BRACKET || k.is_modifier() || k.is_type_decl_keyword() => {
                    self.parse_class_decl()
                }
                _ => self.error_recover("expected declaration", DECL_RECOVERY),
            }
            // Safety: if we didn't make progress, force-skip a token
            if self.pos == pos_before && !self.at_eof() {
                self.error(format!("stuck on token: {:?}", self.current_kind()));
                self.bump_any();
            }
        }

        self.finish_node();
    }

    /// UsingDirective = 'using' 'static'? QualifiedName ';'
    fn parse_using_directive(&mut self) {
        self.start_node(SyntaxKind::USING_DIRECTIVE);
        self.bump(); // using
        self.skip_trivia();
        if self.at(SyntaxKind::STATIC_KW) {
            self.bump();
            self.skip_trivia();
        }
        self.parse_qualified_name();
        self.expect(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// NamespaceDecl = 'namespace' QualifiedName ('{' ClassDecl* '}' | ';')
    ///
    /// The file-scoped form ends at the semicolon; subsequent type
    /// declarations stay siblings in the compilation unit.
    fn parse_namespace_decl(&mut self) {
        self.start_node(SyntaxKind::NAMESPACE_DECL);
        self.bump(); // namespace
        self.skip_trivia();
        self.parse_qualified_name();
        self.skip_trivia();
        if self.at(SyntaxKind::L_BRACE) {
            self.bump();
            loop {
                let pos_before = self.pos;
                self.skip_trivia();
                if self.at_eof() || self.at(SyntaxKind::R_BRACE) {
                    break;
                }
                match self.current_kind() {
                    SyntaxKind::USING_KW => self.parse_using_directive(),
                    k if k == SyntaxKind::L_BRACKET
                        || k.is_modifier()
                        || k.is_type_decl_keyword() =>
                    {
                        self.parse_class_decl()
                    }
                    _ => self.error_recover("expected type declaration", DECL_RECOVERY),
                }
                if self.pos == pos_before && !self.at_eof() {
                    self.bump_any();
                }
            }
            self.expect(SyntaxKind::R_BRACE);
        } else {
            self.expect(SyntaxKind::SEMICOLON);
        }
        self.finish_node();
    }

    /// QualifiedName = IDENT (('.' | '::') IDENT)*
    fn parse_qualified_name(&mut self) {
        self.start_node(SyntaxKind::QUALIFIED_NAME);
        self.expect(SyntaxKind::IDENT);
        while self.at(SyntaxKind::DOT) || self.at(SyntaxKind::COLON_COLON) {
            self.bump();
            self.expect(SyntaxKind::IDENT);
        }
        self.finish_node();
    }

    /// ClassDecl = AttributeList* Modifier* ('class'|'record'|'interface'|'struct')
    ///             IDENT TypeParamList? ParamList? BaseList? ConstraintClause*
    ///             ('{' Member* '}' | ';')
    fn parse_class_decl(&mut self) {
        let checkpoint = self.checkpoint();
        while self.at(SyntaxKind::L_BRACKET) {
            self.parse_attribute_list();
            self.skip_trivia();
        }
        while self.current_kind().is_modifier() {
            self.bump();
            self.skip_trivia();
        }
        self.parse_class_decl_tail(checkpoint);
    }

    /// The class declaration from its keyword on; attribute lists and
    /// modifiers already consumed after `checkpoint`.
    fn parse_class_decl_tail(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::CLASS_DECL);

        if self.current_kind().is_type_decl_keyword() {
            self.bump();
        } else {
            self.error("expected 'class', 'record', 'interface' or 'struct'");
        }
        self.skip_trivia();
        let class_name = self.current_text().to_string();
        self.expect(SyntaxKind::IDENT);
        if self.at(SyntaxKind::LT) {
            self.parse_type_param_list();
        }
        self.skip_trivia();
        // record primary constructor
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_param_list();
            self.skip_trivia();
        }
        if self.at(SyntaxKind::COLON) {
            self.parse_base_list();
            self.skip_trivia();
        }
        while self.at(SyntaxKind::WHERE_KW) {
            self.parse_constraint_clause();
            self.skip_trivia();
        }
        if self.at(SyntaxKind::L_BRACE) {
            self.bump();
            loop {
                let pos_before = self.pos;
                self.skip_trivia();
                if self.at_eof() || self.at(SyntaxKind::R_BRACE) {
                    break;
                }
                self.parse_member(&class_name);
                if self.pos == pos_before && !self.at_eof() {
                    self.bump_any();
                }
            }
            self.expect(SyntaxKind::R_BRACE);
        } else {
            self.eat(SyntaxKind::SEMICOLON);
        }

        self.finish_node();
    }

    /// AttributeList = '[' Attribute (',' Attribute)* ']'
    fn parse_attribute_list(&mut self) {
        self.start_node(SyntaxKind::ATTRIBUTE_LIST);
        self.expect(SyntaxKind::L_BRACKET);
        self.skip_trivia();
        self.parse_attribute();
        self.skip_trivia();
        while self.at(SyntaxKind::COMMA) {
            self.bump();
            self.skip_trivia();
            self.parse_attribute();
            self.skip_trivia();
        }
        self.expect(SyntaxKind::R_BRACKET);
        self.finish_node();
    }

    /// Attribute = QualifiedName AttributeArgList?
    fn parse_attribute(&mut self) {
        self.start_node(SyntaxKind::ATTRIBUTE);
        self.parse_qualified_name();
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_attribute_arg_list();
        }
        self.finish_node();
    }

    /// AttributeArgList = '(' (AttributeArg (',' AttributeArg)*)? ')'
    fn parse_attribute_arg_list(&mut self) {
        self.start_node(SyntaxKind::ATTRIBUTE_ARG_LIST);
        self.bump(); // (
        self.skip_trivia();
        if !self.at(SyntaxKind::R_PAREN) {
            self.parse_attribute_arg();
            self.skip_trivia();
            while self.at(SyntaxKind::COMMA) {
                self.bump();
                self.skip_trivia();
                self.parse_attribute_arg();
                self.skip_trivia();
            }
        }
        self.expect(SyntaxKind::R_PAREN);
        self.finish_node();
    }

    /// AttributeArg = TypeofExpr | <balanced token run>
    ///
    /// Arguments the engine does not recognize structurally are kept as
    /// raw token runs; the repositories decide what to do with them.
    fn parse_attribute_arg(&mut self) {
        self.start_node(SyntaxKind::ATTRIBUTE_ARG);
        if self.at(SyntaxKind::TYPEOF_KW) {
            self.parse_typeof_expr();
        } else {
            let mut paren_depth = 0u32;
            let mut bracket_depth = 0u32;
            while !self.at_eof() {
                match self.current_kind() {
                    SyntaxKind::COMMA if paren_depth == 0 && bracket_depth == 0 => break,
                    SyntaxKind::R_PAREN if paren_depth == 0 => break,
                    SyntaxKind::L_PAREN => paren_depth += 1,
                    SyntaxKind::R_PAREN => paren_depth -= 1,
                    SyntaxKind::L_BRACKET => bracket_depth += 1,
                    SyntaxKind::R_BRACKET if bracket_depth == 0 => break,
                    SyntaxKind::R_BRACKET => bracket_depth -= 1,
                    _ => {}
                }
                self.bump_any();
            }
        }
        self.finish_node();
    }

    /// TypeofExpr = 'typeof' '(' TypeRef ')'
    fn parse_typeof_expr(&mut self) {
        self.start_node(SyntaxKind::TYPEOF_EXPR);
        self.bump(); // typeof
        self.skip_trivia();
        self.expect(SyntaxKind::L_PAREN);
        self.skip_trivia();
        self.parse_type_ref();
        self.skip_trivia();
        self.expect(SyntaxKind::R_PAREN);
        self.finish_node();
    }

    /// TypeParamList = '<' TypeParam (',' TypeParam)* '>'
    fn parse_type_param_list(&mut self) {
        self.start_node(SyntaxKind::TYPE_PARAM_LIST);
        self.bump(); // <
        self.skip_trivia();
        loop {
            self.start_node(SyntaxKind::TYPE_PARAM);
            self.expect(SyntaxKind::IDENT);
            self.finish_node();
            self.skip_trivia();
            if self.at(SyntaxKind::COMMA) {
                self.bump();
                self.skip_trivia();
            } else {
                break;
            }
        }
        self.expect(SyntaxKind::GT);
        self.finish_node();
    }

    /// BaseList = ':' BaseType (',' BaseType)*
    fn parse_base_list(&mut self) {
        self.start_node(SyntaxKind::BASE_LIST);
        self.bump(); // :
        self.skip_trivia();
        self.parse_base_type();
        self.skip_trivia();
        while self.at(SyntaxKind::COMMA) {
            self.bump();
            self.skip_trivia();
            self.parse_base_type();
            self.skip_trivia();
        }
        self.finish_node();
    }

    fn parse_base_type(&mut self) {
        self.start_node(SyntaxKind::BASE_TYPE);
        self.parse_type_ref();
        // record base with primary-constructor arguments
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_param_list();
        }
        self.finish_node();
    }

    /// ConstraintClause = 'where' <tokens until '{' | ';' | 'where'>
    fn parse_constraint_clause(&mut self) {
        self.start_node(SyntaxKind::CONSTRAINT_CLAUSE);
        self.bump(); // where
        let mut paren_depth = 0u32;
        let mut angle_depth = 0u32;
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::L_BRACE | SyntaxKind::SEMICOLON | SyntaxKind::WHERE_KW
                    if paren_depth == 0 && angle_depth == 0 =>
                {
                    break;
                }
                SyntaxKind::L_PAREN => paren_depth += 1,
                SyntaxKind::R_PAREN => paren_depth = paren_depth.saturating_sub(1),
                SyntaxKind::LT => angle_depth += 1,
                SyntaxKind::GT => angle_depth = angle_depth.saturating_sub(1),
                _ => {}
            }
            self.bump_any();
        }
        self.finish_node();
    }

    /// TypeRef = IDENT TypeArgList? (('.' | '::') IDENT TypeArgList?)*
    ///           ('[' ','* ']')* '?'?
    fn parse_type_ref(&mut self) {
        self.start_node(SyntaxKind::TYPE_REF);
        self.expect(SyntaxKind::IDENT);
        if self.at(SyntaxKind::LT) {
            self.parse_type_arg_list();
        }
        while self.at(SyntaxKind::DOT) || self.at(SyntaxKind::COLON_COLON) {
            self.bump();
            self.expect(SyntaxKind::IDENT);
            if self.at(SyntaxKind::LT) {
                self.parse_type_arg_list();
            }
        }
        while self.at(SyntaxKind::L_BRACKET) {
            self.bump();
            while self.at(SyntaxKind::COMMA) {
                self.bump();
            }
            self.expect(SyntaxKind::R_BRACKET);
        }
        if self.at(SyntaxKind::QUESTION) {
            self.bump();
        }
        self.finish_node();
    }

    /// TypeArgList = '<' TypeRef (',' TypeRef)* '>'
    fn parse_type_arg_list(&mut self) {
        self.start_node(SyntaxKind::TYPE_ARG_LIST);
        self.bump(); // <
        self.skip_trivia();
        self.parse_type_ref();
        self.skip_trivia();
        while self.at(SyntaxKind::COMMA) {
            self.bump();
            self.skip_trivia();
            self.parse_type_ref();
            self.skip_trivia();
        }
        self.expect(SyntaxKind::GT);
        self.finish_node();
    }

    /// Member = AttributeList* Modifier* (CtorDecl | FieldDecl | PropertyDecl | MethodDecl)
    ///
    /// The member kind is only known after the type and name have been
    /// parsed, so the node is retrofitted over a checkpoint.
    fn parse_member(&mut self, class_name: &str) {
        let checkpoint = self.checkpoint();

        while self.at(SyntaxKind::L_BRACKET) {
            self.parse_attribute_list();
            self.skip_trivia();
        }
        while self.current_kind().is_modifier() {
            self.bump();
            self.skip_trivia();
        }

        // Nested type declaration
        if self.current_kind().is_type_decl_keyword() {
            self.parse_class_decl_tail(checkpoint);
            return;
        }

        // Constructor: the bare class name followed by a parameter list
        if self.at(SyntaxKind::IDENT)
            && self.current_text() == class_name
            && self.nth(1) == SyntaxKind::L_PAREN
        {
            self.start_node_at(checkpoint, SyntaxKind::CTOR_DECL);
            self.bump(); // name
            self.skip_trivia();
            self.parse_param_list();
            self.skip_trivia();
            // ctor initializer `: base(...)` / `: this(...)`
            if self.at(SyntaxKind::COLON) {
                while !self.at_eof() && !self.at(SyntaxKind::L_BRACE) {
                    self.bump_any();
                }
            }
            if self.at(SyntaxKind::L_BRACE) {
                self.parse_block();
            } else {
                self.error("expected constructor body");
            }
            self.finish_node();
            return;
        }

        if !self.at(SyntaxKind::IDENT) {
            self.error_recover("expected member declaration", MEMBER_RECOVERY);
            self.eat(SyntaxKind::SEMICOLON);
            return;
        }

        self.parse_type_ref();
        self.skip_trivia();
        self.parse_member_name();
        self.skip_trivia();

        match self.current_kind() {
            SyntaxKind::L_PAREN => {
                self.start_node_at(checkpoint, SyntaxKind::METHOD_DECL);
                self.parse_param_list();
                self.skip_trivia();
                while self.at(SyntaxKind::WHERE_KW) {
                    self.parse_constraint_clause();
                    self.skip_trivia();
                }
                match self.current_kind() {
                    SyntaxKind::L_BRACE => self.parse_block(),
                    SyntaxKind::FAT_ARROW => self.parse_expr_body(),
                    // partial stub or abstract declaration
                    _ => {
                        self.expect(SyntaxKind::SEMICOLON);
                    }
                }
                self.finish_node();
            }
            SyntaxKind::L_BRACE => {
                self.start_node_at(checkpoint, SyntaxKind::PROPERTY_DECL);
                self.parse_accessor_list();
                self.skip_trivia();
                if self.at(SyntaxKind::EQ) {
                    self.bump();
                    self.parse_initializer();
                    self.expect(SyntaxKind::SEMICOLON);
                }
                self.finish_node();
            }
            SyntaxKind::FAT_ARROW => {
                // expression-bodied property: readable, not mutable
                self.start_node_at(checkpoint, SyntaxKind::PROPERTY_DECL);
                self.parse_expr_body();
                self.finish_node();
            }
            SyntaxKind::EQ => {
                self.start_node_at(checkpoint, SyntaxKind::FIELD_DECL);
                self.bump();
                self.parse_initializer();
                self.expect(SyntaxKind::SEMICOLON);
                self.finish_node();
            }
            SyntaxKind::SEMICOLON => {
                self.start_node_at(checkpoint, SyntaxKind::FIELD_DECL);
                self.bump();
                self.finish_node();
            }
            _ => {
                self.start_node_at(checkpoint, SyntaxKind::ERROR);
                self.error("expected '(', '{', '=>', '=' or ';' after member name");
                while !self.at_eof() && !self.at_any(MEMBER_RECOVERY) {
                    self.bump_any();
                }
                self.eat(SyntaxKind::SEMICOLON);
                self.finish_node();
            }
        }
    }

    /// MemberName = IDENT TypeArgList? (('.') IDENT TypeArgList?)*
    ///
    /// Qualified forms cover explicit interface implementations like
    /// `IFoo<TA>.Member`; a trailing TypeArgList on the final segment is
    /// the member's own generic parameter list.
    fn parse_member_name(&mut self) {
        self.start_node(SyntaxKind::MEMBER_NAME);
        self.expect(SyntaxKind::IDENT);
        if self.at(SyntaxKind::LT) {
            self.parse_type_arg_list();
        }
        while self.at(SyntaxKind::DOT) {
            self.bump();
            self.expect(SyntaxKind::IDENT);
            if self.at(SyntaxKind::LT) {
                self.parse_type_arg_list();
            }
        }
        self.finish_node();
    }

    /// ParamList = '(' <balanced tokens> ')'
    fn parse_param_list(&mut self) {
        self.start_node(SyntaxKind::PARAM_LIST);
        self.expect(SyntaxKind::L_PAREN);
        let mut depth = 1u32;
        while !self.at_eof() && depth > 0 {
            match self.current_kind() {
                SyntaxKind::L_PAREN => depth += 1,
                SyntaxKind::R_PAREN => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        break;
                    }
                }
                _ => {}
            }
            self.bump_any();
        }
        if depth > 0 {
            self.error("unterminated parameter list");
        }
        self.finish_node();
    }

    /// Block = '{' <balanced tokens> '}'
    fn parse_block(&mut self) {
        self.start_node(SyntaxKind::BLOCK);
        self.expect(SyntaxKind::L_BRACE);
        let mut depth = 1u32;
        while !self.at_eof() && depth > 0 {
            match self.current_kind() {
                SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_BRACE => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        break;
                    }
                }
                _ => {}
            }
            self.bump_any();
        }
        if depth > 0 {
            self.error("unterminated block");
        }
        self.finish_node();
    }

    /// ExprBody = '=>' <balanced tokens> ';'
    fn parse_expr_body(&mut self) {
        self.start_node(SyntaxKind::EXPR_BODY);
        self.bump(); // =>
        self.parse_initializer_tokens();
        self.expect(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// Initializer = <balanced tokens up to ';'>
    fn parse_initializer(&mut self) {
        self.start_node(SyntaxKind::INITIALIZER);
        self.parse_initializer_tokens();
        self.finish_node();
    }

    fn parse_initializer_tokens(&mut self) {
        let mut paren_depth = 0u32;
        let mut bracket_depth = 0u32;
        let mut brace_depth = 0u32;
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::SEMICOLON
                    if paren_depth == 0 && bracket_depth == 0 && brace_depth == 0 =>
                {
                    break;
                }
                SyntaxKind::L_PAREN => paren_depth += 1,
                SyntaxKind::R_PAREN => paren_depth = paren_depth.saturating_sub(1),
                SyntaxKind::L_BRACKET => bracket_depth += 1,
                SyntaxKind::R_BRACKET => bracket_depth = bracket_depth.saturating_sub(1),
                SyntaxKind::L_BRACE => brace_depth += 1,
                SyntaxKind::R_BRACE => brace_depth = brace_depth.saturating_sub(1),
                _ => {}
            }
            self.bump_any();
        }
    }

    /// AccessorList = '{' Accessor* '}'
    fn parse_accessor_list(&mut self) {
        self.start_node(SyntaxKind::ACCESSOR_LIST);
        self.expect(SyntaxKind::L_BRACE);
        loop {
            let pos_before = self.pos;
            self.skip_trivia();
            if self.at_eof() || self.at(SyntaxKind::R_BRACE) {
                break;
            }
            self.parse_accessor();
            if self.pos == pos_before && !self.at_eof() {
                self.bump_any();
            }
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    /// Accessor = AttributeList* Modifier* ('get'|'set'|'init') (';' | Block | ExprBody)
    fn parse_accessor(&mut self) {
        self.start_node(SyntaxKind::ACCESSOR);
        while self.at(SyntaxKind::L_BRACKET) {
            self.parse_attribute_list();
            self.skip_trivia();
        }
        while self.current_kind().is_modifier() {
            self.bump();
            self.skip_trivia();
        }
        match self.current_kind() {
            SyntaxKind::GET_KW | SyntaxKind::SET_KW | SyntaxKind::INIT_KW => {
                self.bump();
                self.skip_trivia();
                match self.current_kind() {
                    SyntaxKind::SEMICOLON => self.bump(),
                    SyntaxKind::L_BRACE => self.parse_block(),
                    SyntaxKind::FAT_ARROW => self.parse_expr_body(),
                    _ => self.error("expected ';', '{' or '=>' after accessor keyword"),
                }
            }
            _ => {
                self.error("expected 'get', 'set' or 'init'");
                while !self.at_eof()
                    && !self.at_any(&[
                        SyntaxKind::R_BRACE,
                        SyntaxKind::GET_KW,
                        SyntaxKind::SET_KW,
                        SyntaxKind::INIT_KW,
                    ])
                {
                    self.bump_any();
                }
            }
        }
        self.finish_node();
    }
}
