//! Operator, delimiter and comment scanning for the lexer

use crate::lexer::{Lexer, TokenType};
use cexpr_common::CompilerError;

impl Lexer {
    /// Consume `second` if it follows, choosing between the two token types
    fn one_or_two(&mut self, second: char, double: TokenType, single: TokenType) -> TokenType {
        if self.current_char() == Some(second) {
            self.advance();
            double
        } else {
            single
        }
    }

    /// Tokenize an operator or delimiter starting at the current character
    pub fn tokenize_operator(&mut self) -> Result<TokenType, CompilerError> {
        let location = self.current_location();
        let Some(ch) = self.advance() else {
            return Ok(TokenType::EndOfFile);
        };

        let token_type = match ch {
            '+' => match self.current_char() {
                Some('+') => { self.advance(); TokenType::PlusPlus }
                Some('=') => { self.advance(); TokenType::PlusEqual }
                _ => TokenType::Plus,
            },
            '-' => match self.current_char() {
                Some('-') => { self.advance(); TokenType::MinusMinus }
                Some('=') => { self.advance(); TokenType::MinusEqual }
                Some('>') => { self.advance(); TokenType::Arrow }
                _ => TokenType::Minus,
            },
            '&' => match self.current_char() {
                Some('&') => { self.advance(); TokenType::AmpersandAmpersand }
                Some('=') => { self.advance(); TokenType::AmpersandEqual }
                _ => TokenType::Ampersand,
            },
            '|' => match self.current_char() {
                Some('|') => { self.advance(); TokenType::PipePipe }
                Some('=') => { self.advance(); TokenType::PipeEqual }
                _ => TokenType::Pipe,
            },
            '<' => match self.current_char() {
                Some('<') => {
                    self.advance();
                    self.one_or_two('=', TokenType::LeftShiftEqual, TokenType::LeftShift)
                }
                Some('=') => { self.advance(); TokenType::LessEqual }
                _ => TokenType::Less,
            },
            '>' => match self.current_char() {
                Some('>') => {
                    self.advance();
                    self.one_or_two('=', TokenType::RightShiftEqual, TokenType::RightShift)
                }
                Some('=') => { self.advance(); TokenType::GreaterEqual }
                _ => TokenType::Greater,
            },
            '*' => self.one_or_two('=', TokenType::StarEqual, TokenType::Star),
            '/' => self.one_or_two('=', TokenType::SlashEqual, TokenType::Slash),
            '%' => self.one_or_two('=', TokenType::PercentEqual, TokenType::Percent),
            '^' => self.one_or_two('=', TokenType::CaretEqual, TokenType::Caret),
            '!' => self.one_or_two('=', TokenType::BangEqual, TokenType::Bang),
            '=' => self.one_or_two('=', TokenType::EqualEqual, TokenType::Equal),

            '~' => TokenType::Tilde,
            '?' => TokenType::Question,
            ':' => TokenType::Colon,
            '(' => TokenType::LeftParen,
            ')' => TokenType::RightParen,
            '{' => TokenType::LeftBrace,
            '}' => TokenType::RightBrace,
            '[' => TokenType::LeftBracket,
            ']' => TokenType::RightBracket,
            ';' => TokenType::Semicolon,
            ',' => TokenType::Comma,
            '.' => TokenType::Dot,

            other => {
                return Err(CompilerError::lexer_error(
                    format!("Unexpected character: {}", other),
                    location,
                ));
            }
        };

        Ok(token_type)
    }

    /// Skip a `//` comment up to (not including) the newline
    pub fn skip_line_comment(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skip a `/* */` comment
    pub fn skip_block_comment(&mut self) -> Result<(), CompilerError> {
        let location = self.current_location();
        self.advance(); // Skip '/'
        self.advance(); // Skip '*'

        while let Some(ch) = self.current_char() {
            if ch == '*' && self.peek_char(1) == Some('/') {
                self.advance();
                self.advance();
                return Ok(());
            }
            self.advance();
        }

        Err(CompilerError::lexer_error(
            "Unterminated block comment".to_string(),
            location,
        ))
    }
}
