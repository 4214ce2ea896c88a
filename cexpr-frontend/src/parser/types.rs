//! Type-name parsing
//!
//! Only the part of the declaration grammar that can appear inside a cast:
//! specifiers and an abstract declarator. Like the expression levels, it
//! never fails outright; problems are recorded and a stand-in type returned.

use log::{trace, warn};
use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::errors::ParseError;
use crate::parser::Parser;
use crate::types::Type;

impl<'a> Parser<'a> {
    /// Check if the current position starts a type name
    pub fn is_type_start(&self) -> bool {
        match self.peek_type() {
            token if token.is_type_keyword() || token.is_type_qualifier() => true,
            TokenType::Identifier(name) => self.symbols.is_type_name(name),
            _ => false,
        }
    }

    /// Check if the current position starts a declaration. Used to tell a
    /// cast from a parenthesized expression; never consumes input.
    pub fn is_declaration_start(&self) -> bool {
        self.is_type_start() || self.peek_type().is_storage_class()
    }

    /// Parse a type name (used in cast expressions)
    pub fn parse_type_name(&mut self) -> Type {
        trace!("parse_type_name at {}", self.current_location());
        let base_type = self.parse_type_specifier();
        self.parse_abstract_declarator(base_type)
    }

    fn skip_type_qualifiers(&mut self) {
        while self.peek_type().is_type_qualifier() {
            let token = self.advance();
            warn!("Ignoring type qualifier '{}' at {}", token.token_type, token.span.start);
        }
    }

    /// Parse the specifier part of a type name
    fn parse_type_specifier(&mut self) -> Type {
        loop {
            self.skip_type_qualifiers();
            if !self.peek_type().is_storage_class() {
                break;
            }
            let token = self.advance();
            self.report(ParseError::InvalidType {
                message: format!("storage class '{}' in type name", token.token_type),
                location: token.span.start,
            });
        }

        let location = self.current_location();
        let base_type = match self.peek_type().clone() {
            TokenType::Void => { self.advance(); Type::Void }
            TokenType::Bool => { self.advance(); Type::Bool }
            TokenType::Char => { self.advance(); Type::Char }
            TokenType::Short => {
                self.advance();
                self.match_token(&TokenType::Int);
                Type::Short
            }
            TokenType::Int => { self.advance(); Type::Int }
            TokenType::Long => {
                self.advance();
                self.skip_long_suffix();
                Type::Long
            }
            TokenType::Signed => {
                self.advance();
                // "signed" on its own is int
                match self.peek_type() {
                    TokenType::Char => { self.advance(); Type::SignedChar }
                    TokenType::Short => {
                        self.advance();
                        self.match_token(&TokenType::Int);
                        Type::Short
                    }
                    TokenType::Long => {
                        self.advance();
                        self.skip_long_suffix();
                        Type::Long
                    }
                    _ => {
                        self.match_token(&TokenType::Int);
                        Type::Int
                    }
                }
            }
            TokenType::Unsigned => {
                self.advance();
                match self.peek_type() {
                    TokenType::Char => { self.advance(); Type::UnsignedChar }
                    TokenType::Short => {
                        self.advance();
                        self.match_token(&TokenType::Int);
                        Type::UnsignedShort
                    }
                    TokenType::Long => {
                        self.advance();
                        self.skip_long_suffix();
                        Type::UnsignedLong
                    }
                    _ => {
                        self.match_token(&TokenType::Int);
                        Type::UnsignedInt
                    }
                }
            }
            keyword @ (TokenType::Struct | TokenType::Union | TokenType::Enum) => {
                self.advance();
                self.parse_tagged_type(keyword)
            }
            TokenType::Identifier(name) if self.symbols.is_type_name(&name) => {
                self.advance();
                Type::Typedef(name)
            }
            found => {
                self.report(ParseError::InvalidType {
                    message: format!("expected type specifier, found '{}'", found),
                    location,
                });
                // Leave `)` for the cast to close
                if !self.check(&TokenType::RightParen) {
                    self.advance();
                }
                Type::Int
            }
        };

        self.skip_type_qualifiers();
        base_type
    }

    /// `long`, `long long`, `long int` and `long long int` all map to `long`
    fn skip_long_suffix(&mut self) {
        self.match_token(&TokenType::Long);
        self.match_token(&TokenType::Int);
    }

    /// Parse the tag after `struct`, `union` or `enum`
    fn parse_tagged_type(&mut self, keyword: TokenType) -> Type {
        let tag = if let TokenType::Identifier(name) = self.peek_type() {
            let name = name.clone();
            self.advance();
            name
        } else {
            let location = self.current_location();
            let found = self.peek_type().clone();
            self.report(ParseError::InvalidType {
                message: format!("expected tag after '{}', found '{}'", keyword, found),
                location,
            });
            return Type::Int;
        };

        match keyword {
            TokenType::Struct => Type::Struct(tag),
            TokenType::Union => Type::Union(tag),
            _ => Type::Enum(tag),
        }
    }

    /// Parse an abstract declarator: pointers, then array suffixes
    fn parse_abstract_declarator(&mut self, base_type: Type) -> Type {
        let mut current_type = base_type;
        while self.match_token(&TokenType::Star) {
            current_type = Type::pointer_to(current_type);
            self.skip_type_qualifiers();
        }

        while self.match_token(&TokenType::LeftBracket) {
            let size = if self.check(&TokenType::RightBracket) {
                None // Incomplete array type
            } else {
                let size_expr = self.parse_assignment_expression();
                match size_expr.kind {
                    ExpressionKind::IntLiteral(size) if size >= 0 => Some(size as u64),
                    _ => {
                        self.report(ParseError::InvalidType {
                            message: "array size must be an integer constant".to_string(),
                            location: size_expr.span.start,
                        });
                        None
                    }
                }
            };

            self.expect(TokenType::RightBracket, "array type");

            current_type = Type::Array {
                element_type: Box::new(current_type),
                size,
            };
        }

        current_type
    }
}
