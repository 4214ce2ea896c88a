//! Token definitions for the lexer
//!
//! This module defines token types and the Token struct.

use cexpr_common::{SourceLocation, SourceSpan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenType {
    // Literals
    IntLiteral(i64),

    // Identifiers
    Identifier(String),

    // Boolean literals
    True, False,

    // Type keywords
    Void, Bool, Char, Short, Int, Long, Signed, Unsigned,
    Struct, Union, Enum,

    // Qualifiers and storage classes
    Const, Volatile,
    Auto, Static, Extern, Register, Typedef,

    Sizeof,

    // Operators
    Plus,           // +
    Minus,          // -
    Star,           // *
    Slash,          // /
    Percent,        // %
    Ampersand,      // &
    Pipe,           // |
    Caret,          // ^
    Tilde,          // ~
    Bang,           // !
    Equal,          // =
    Less,           // <
    Greater,        // >
    Question,       // ?
    Colon,          // :

    // Compound operators
    PlusPlus,       // ++
    MinusMinus,     // --
    LeftShift,      // <<
    RightShift,     // >>
    LessEqual,      // <=
    GreaterEqual,   // >=
    EqualEqual,     // ==
    BangEqual,      // !=
    AmpersandAmpersand, // &&
    PipePipe,       // ||

    // Assignment operators
    PlusEqual,      // +=
    MinusEqual,     // -=
    StarEqual,      // *=
    SlashEqual,     // /=
    PercentEqual,   // %=
    AmpersandEqual, // &=
    PipeEqual,      // |=
    CaretEqual,     // ^=
    LeftShiftEqual, // <<=
    RightShiftEqual, // >>=

    // Delimiters
    LeftParen,      // (
    RightParen,     // )
    LeftBrace,      // {
    RightBrace,     // }
    LeftBracket,    // [
    RightBracket,   // ]
    Semicolon,      // ;
    Comma,          // ,
    Dot,            // .
    Arrow,          // ->

    EndOfFile,
}

impl TokenType {
    /// Keywords that name (part of) a type
    pub fn is_type_keyword(&self) -> bool {
        matches!(self,
            TokenType::Void | TokenType::Bool | TokenType::Char | TokenType::Short |
            TokenType::Int | TokenType::Long | TokenType::Signed | TokenType::Unsigned |
            TokenType::Struct | TokenType::Union | TokenType::Enum
        )
    }

    pub fn is_type_qualifier(&self) -> bool {
        matches!(self, TokenType::Const | TokenType::Volatile)
    }

    pub fn is_storage_class(&self) -> bool {
        matches!(self,
            TokenType::Auto | TokenType::Static | TokenType::Extern |
            TokenType::Register | TokenType::Typedef
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenType::IntLiteral(n) => return write!(f, "{n}"),
            TokenType::Identifier(s) => return write!(f, "{s}"),

            TokenType::True => "true",
            TokenType::False => "false",
            TokenType::Void => "void",
            TokenType::Bool => "_Bool",
            TokenType::Char => "char",
            TokenType::Short => "short",
            TokenType::Int => "int",
            TokenType::Long => "long",
            TokenType::Signed => "signed",
            TokenType::Unsigned => "unsigned",
            TokenType::Struct => "struct",
            TokenType::Union => "union",
            TokenType::Enum => "enum",
            TokenType::Const => "const",
            TokenType::Volatile => "volatile",
            TokenType::Auto => "auto",
            TokenType::Static => "static",
            TokenType::Extern => "extern",
            TokenType::Register => "register",
            TokenType::Typedef => "typedef",
            TokenType::Sizeof => "sizeof",

            TokenType::Plus => "+",
            TokenType::Minus => "-",
            TokenType::Star => "*",
            TokenType::Slash => "/",
            TokenType::Percent => "%",
            TokenType::Ampersand => "&",
            TokenType::Pipe => "|",
            TokenType::Caret => "^",
            TokenType::Tilde => "~",
            TokenType::Bang => "!",
            TokenType::Equal => "=",
            TokenType::Less => "<",
            TokenType::Greater => ">",
            TokenType::Question => "?",
            TokenType::Colon => ":",

            TokenType::PlusPlus => "++",
            TokenType::MinusMinus => "--",
            TokenType::LeftShift => "<<",
            TokenType::RightShift => ">>",
            TokenType::LessEqual => "<=",
            TokenType::GreaterEqual => ">=",
            TokenType::EqualEqual => "==",
            TokenType::BangEqual => "!=",
            TokenType::AmpersandAmpersand => "&&",
            TokenType::PipePipe => "||",

            TokenType::PlusEqual => "+=",
            TokenType::MinusEqual => "-=",
            TokenType::StarEqual => "*=",
            TokenType::SlashEqual => "/=",
            TokenType::PercentEqual => "%=",
            TokenType::AmpersandEqual => "&=",
            TokenType::PipeEqual => "|=",
            TokenType::CaretEqual => "^=",
            TokenType::LeftShiftEqual => "<<=",
            TokenType::RightShiftEqual => ">>=",

            TokenType::LeftParen => "(",
            TokenType::RightParen => ")",
            TokenType::LeftBrace => "{",
            TokenType::RightBrace => "}",
            TokenType::LeftBracket => "[",
            TokenType::RightBracket => "]",
            TokenType::Semicolon => ";",
            TokenType::Comma => ",",
            TokenType::Dot => ".",
            TokenType::Arrow => "->",

            TokenType::EndOfFile => "end of input",
        };
        f.write_str(text)
    }
}

/// A token with its raw source text and location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub text: String,
    pub span: SourceSpan,
}

impl Token {
    pub fn new(token_type: TokenType, text: String, span: SourceSpan) -> Self {
        Self { token_type, text, span }
    }

    pub fn eof(location: SourceLocation) -> Self {
        Self {
            token_type: TokenType::EndOfFile,
            text: String::new(),
            span: SourceSpan::from_location(location),
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.token_type, TokenType::EndOfFile)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' at {}", self.token_type, self.span.start)
    }
}
