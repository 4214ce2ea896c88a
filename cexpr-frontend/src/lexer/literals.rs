//! Integer literal scanning
//!
//! Decimal, hexadecimal (`0x`) and octal (leading `0`) forms are accepted,
//! followed by any mix of `u`/`l` suffixes.

use crate::lexer::{Lexer, TokenType};
use cexpr_common::CompilerError;

impl Lexer {
    /// Tokenize an integer literal
    pub fn tokenize_integer(&mut self) -> Result<TokenType, CompilerError> {
        let start = self.current_location();

        let (radix, prefix) = match (self.current_char(), self.peek_char(1)) {
            (Some('0'), Some('x' | 'X')) => {
                self.advance(); // '0'
                self.advance(); // 'x'
                (16, "0x")
            }
            (Some('0'), Some(ch)) if ch.is_ascii_digit() => (8, "0"),
            _ => (10, ""),
        };

        let mut digits = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_digit(radix) {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        while matches!(self.current_char(), Some('u' | 'U' | 'l' | 'L')) {
            self.advance();
        }

        // `12ab`, `0x`, `09` and friends
        let trailing = self.current_char().filter(|ch| ch.is_alphanumeric() || *ch == '_');
        if digits.is_empty() || trailing.is_some() {
            let mut literal = format!("{}{}", prefix, digits);
            literal.extend(trailing);
            return Err(CompilerError::lexer_error(
                format!("Invalid integer literal: {}", literal),
                start,
            ));
        }

        let value = i64::from_str_radix(&digits, radix).map_err(|_| {
            CompilerError::lexer_error(
                format!("Integer literal out of range: {}{}", prefix, digits),
                start,
            )
        })?;

        Ok(TokenType::IntLiteral(value))
    }
}
