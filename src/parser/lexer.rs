//! Logos-based lexer for the C# declaration subset
//!
//! Fast tokenization using the logos crate.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"")] // Don't skip anything, we want all tokens
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // =========================================================================
    // KEYWORDS (must come before the Ident regex in priority)
    // =========================================================================
    #[token("using")]
    UsingKw,
    #[token("namespace")]
    NamespaceKw,
    #[token("class")]
    ClassKw,
    #[token("record")]
    RecordKw,
    #[token("interface")]
    InterfaceKw,
    #[token("struct")]
    StructKw,
    #[token("public")]
    PublicKw,
    #[token("private")]
    PrivateKw,
    #[token("protected")]
    ProtectedKw,
    #[token("internal")]
    InternalKw,
    #[token("static")]
    StaticKw,
    #[token("readonly")]
    ReadonlyKw,
    #[token("const")]
    ConstKw,
    #[token("partial")]
    PartialKw,
    #[token("override")]
    OverrideKw,
    #[token("virtual")]
    VirtualKw,
    #[token("abstract")]
    AbstractKw,
    #[token("sealed")]
    SealedKw,
    #[token("new")]
    NewKw,
    #[token("async")]
    AsyncKw,
    #[token("get")]
    GetKw,
    #[token("set")]
    SetKw,
    #[token("init")]
    InitKw,
    #[token("where")]
    WhereKw,
    #[token("typeof")]
    TypeofKw,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*[uUlLfFdDmM]*")]
    Integer,

    #[regex(r"[0-9]*\.[0-9]+([eE][+-]?[0-9]+)?[fFdDmM]?")]
    Decimal,

    #[regex(r#"\$?"([^"\\]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\]|\\.)'")]
    CharLit,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("::")]
    ColonColon,

    #[token("?.")]
    QuestionDot,

    #[token("??")]
    QuestionQuestion,

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("->")]
    Arrow,

    #[token("=>")]
    FatArrow,

    #[token("++")]
    PlusPlus,

    #[token("--")]
    MinusMinus,

    #[token("&&")]
    AmpAmp,

    #[token("||")]
    PipePipe,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("?")]
    Question,
    #[token("!")]
    Bang,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,
    #[token("@")]
    At,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::BlockComment => SyntaxKind::BLOCK_COMMENT,
            LogosToken::UsingKw => SyntaxKind::USING_KW,
            LogosToken::NamespaceKw => SyntaxKind::NAMESPACE_KW,
            LogosToken::ClassKw => SyntaxKind::CLASS_KW,
            LogosToken::RecordKw => SyntaxKind::RECORD_KW,
            LogosToken::InterfaceKw => SyntaxKind::INTERFACE_KW,
            LogosToken::StructKw => SyntaxKind::STRUCT_KW,
            LogosToken::PublicKw => SyntaxKind::PUBLIC_KW,
            LogosToken::PrivateKw => SyntaxKind::PRIVATE_KW,
            LogosToken::ProtectedKw => SyntaxKind::PROTECTED_KW,
            LogosToken::InternalKw => SyntaxKind::INTERNAL_KW,
            LogosToken::StaticKw => SyntaxKind::STATIC_KW,
            LogosToken::ReadonlyKw => SyntaxKind::READONLY_KW,
            LogosToken::ConstKw => SyntaxKind::CONST_KW,
            LogosToken::PartialKw => SyntaxKind::PARTIAL_KW,
            LogosToken::OverrideKw => SyntaxKind::OVERRIDE_KW,
            LogosToken::VirtualKw => SyntaxKind::VIRTUAL_KW,
            LogosToken::AbstractKw => SyntaxKind::ABSTRACT_KW,
            LogosToken::SealedKw => SyntaxKind::SEALED_KW,
            LogosToken::NewKw => SyntaxKind::NEW_KW,
            LogosToken::AsyncKw => SyntaxKind::ASYNC_KW,
            LogosToken::GetKw => SyntaxKind::GET_KW,
            LogosToken::SetKw => SyntaxKind::SET_KW,
            LogosToken::InitKw => SyntaxKind::INIT_KW,
            LogosToken::WhereKw => SyntaxKind::WHERE_KW,
            LogosToken::TypeofKw => SyntaxKind::TYPEOF_KW,
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::Integer => SyntaxKind::INTEGER,
            LogosToken::Decimal => SyntaxKind::DECIMAL,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::CharLit => SyntaxKind::CHAR_LIT,
            LogosToken::ColonColon => SyntaxKind::COLON_COLON,
            LogosToken::QuestionDot => SyntaxKind::QUESTION_DOT,
            LogosToken::QuestionQuestion => SyntaxKind::QUESTION_QUESTION,
            LogosToken::EqEq => SyntaxKind::EQ_EQ,
            LogosToken::BangEq => SyntaxKind::BANG_EQ,
            LogosToken::LtEq => SyntaxKind::LT_EQ,
            LogosToken::GtEq => SyntaxKind::GT_EQ,
            LogosToken::Arrow => SyntaxKind::ARROW,
            LogosToken::FatArrow => SyntaxKind::FAT_ARROW,
            LogosToken::PlusPlus => SyntaxKind::PLUS_PLUS,
            LogosToken::MinusMinus => SyntaxKind::MINUS_MINUS,
            LogosToken::AmpAmp => SyntaxKind::AMP_AMP,
            LogosToken::PipePipe => SyntaxKind::PIPE_PIPE,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::LBracket => SyntaxKind::L_BRACKET,
            LogosToken::RBracket => SyntaxKind::R_BRACKET,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::Lt => SyntaxKind::LT,
            LogosToken::Gt => SyntaxKind::GT,
            LogosToken::Plus => SyntaxKind::PLUS,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::Star => SyntaxKind::STAR,
            LogosToken::Slash => SyntaxKind::SLASH,
            LogosToken::Percent => SyntaxKind::PERCENT,
            LogosToken::Caret => SyntaxKind::CARET,
            LogosToken::Tilde => SyntaxKind::TILDE,
            LogosToken::Question => SyntaxKind::QUESTION,
            LogosToken::Bang => SyntaxKind::BANG,
            LogosToken::Pipe => SyntaxKind::PIPE,
            LogosToken::Amp => SyntaxKind::AMP,
            LogosToken::At => SyntaxKind::AT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        tokenize(input)
            .into_iter()
            .filter(|t| !t.kind.is_trivia())
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lexes_class_declaration_header() {
        assert_eq!(
            kinds("public partial class Page : Node"),
            vec![
                SyntaxKind::PUBLIC_KW,
                SyntaxKind::PARTIAL_KW,
                SyntaxKind::CLASS_KW,
                SyntaxKind::IDENT,
                SyntaxKind::COLON,
                SyntaxKind::IDENT,
            ]
        );
    }

    #[test]
    fn lexes_attribute_with_typeof() {
        assert_eq!(
            kinds(r#"[SuperNode("OnReady", typeof(Sizer))]"#),
            vec![
                SyntaxKind::L_BRACKET,
                SyntaxKind::IDENT,
                SyntaxKind::L_PAREN,
                SyntaxKind::STRING,
                SyntaxKind::COMMA,
                SyntaxKind::TYPEOF_KW,
                SyntaxKind::L_PAREN,
                SyntaxKind::IDENT,
                SyntaxKind::R_PAREN,
                SyntaxKind::R_PAREN,
                SyntaxKind::R_BRACKET,
            ]
        );
    }

    #[test]
    fn offsets_cover_entire_input() {
        let input = "class A { int x; }";
        let tokens = tokenize(input);
        let total: u32 = tokens.iter().map(|t| t.text.len() as u32).sum();
        assert_eq!(total, input.len() as u32);
        assert_eq!(u32::from(tokens[0].offset), 0);
    }

    #[test]
    fn interpolated_string_is_one_token() {
        let tokens = tokenize(r#"$"No member named '{name}'.""#);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, SyntaxKind::STRING);
    }
}
