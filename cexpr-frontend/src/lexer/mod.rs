//! Lexer
//!
//! Tokenizes C-like source text into a stream of tokens.
//! Whitespace and comments are skipped; every token keeps its raw text.

pub mod token;
pub mod literals;
pub mod operators;

pub use token::{Token, TokenType};

use cexpr_common::{CompilerError, SourceLocation, SourceSpan};
use cexpr_common::source_loc::SourceTracker;
use std::collections::HashMap;

pub struct Lexer {
    pub(crate) input: Vec<char>,
    pub(crate) position: usize,
    pub(crate) tracker: SourceTracker,
    keywords: HashMap<&'static str, TokenType>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self::with_filename(input, "<input>")
    }

    /// Create a lexer whose locations carry `filename`
    pub fn with_filename(input: &str, filename: &str) -> Self {
        let keywords = [
            ("true", TokenType::True),
            ("false", TokenType::False),
            ("void", TokenType::Void),
            ("_Bool", TokenType::Bool),
            ("char", TokenType::Char),
            ("short", TokenType::Short),
            ("int", TokenType::Int),
            ("long", TokenType::Long),
            ("signed", TokenType::Signed),
            ("unsigned", TokenType::Unsigned),
            ("struct", TokenType::Struct),
            ("union", TokenType::Union),
            ("enum", TokenType::Enum),
            ("const", TokenType::Const),
            ("volatile", TokenType::Volatile),
            ("auto", TokenType::Auto),
            ("static", TokenType::Static),
            ("extern", TokenType::Extern),
            ("register", TokenType::Register),
            ("typedef", TokenType::Typedef),
            ("sizeof", TokenType::Sizeof),
        ];

        Self {
            input: input.chars().collect(),
            position: 0,
            tracker: SourceTracker::new(filename),
            keywords: keywords.into_iter().collect(),
        }
    }

    pub(crate) fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    pub(crate) fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.position += 1;
        self.tracker.advance(ch);
        Some(ch)
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.tracker.location()
    }

    /// Skip whitespace (including newlines) and comments
    fn skip_trivia(&mut self) -> Result<(), CompilerError> {
        loop {
            match (self.current_char(), self.peek_char(1)) {
                (Some(ch), _) if ch.is_whitespace() => {
                    self.advance();
                }
                (Some('/'), Some('/')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn tokenize_identifier(&mut self) -> TokenType {
        let mut identifier = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match self.keywords.get(identifier.as_str()) {
            Some(keyword) => keyword.clone(),
            None => TokenType::Identifier(identifier),
        }
    }

    /// Get next token
    pub fn next_token(&mut self) -> Result<Token, CompilerError> {
        self.skip_trivia()?;

        let start_location = self.current_location();
        let start_position = self.position;

        let token_type = match self.current_char() {
            None => return Ok(Token::eof(start_location)),

            Some(ch) if ch.is_alphabetic() || ch == '_' => self.tokenize_identifier(),

            Some(ch) if ch.is_ascii_digit() => self.tokenize_integer()?,

            Some(_) => self.tokenize_operator()?,
        };

        let text: String = self.input[start_position..self.position].iter().collect();
        let span = SourceSpan::new(start_location, self.current_location());

        Ok(Token::new(token_type, text, span))
    }

    /// Tokenize the entire input. The result always ends with one `EndOfFile`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompilerError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        log::trace!("lexed {} tokens", tokens.len());
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_types(input: &str) -> Vec<TokenType> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token_type)
            .collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let types = token_types("int true false struct point _private var123");
        assert_eq!(
            types,
            vec![
                TokenType::Int,
                TokenType::True,
                TokenType::False,
                TokenType::Struct,
                TokenType::Identifier("point".to_string()),
                TokenType::Identifier("_private".to_string()),
                TokenType::Identifier("var123".to_string()),
                TokenType::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_operators() {
        let types = token_types("+ - * / == != <= >= && || ++ -- -> += -= *= /= ? : . <<=");
        let expected = vec![
            TokenType::Plus, TokenType::Minus, TokenType::Star, TokenType::Slash,
            TokenType::EqualEqual, TokenType::BangEqual, TokenType::LessEqual,
            TokenType::GreaterEqual, TokenType::AmpersandAmpersand, TokenType::PipePipe,
            TokenType::PlusPlus, TokenType::MinusMinus, TokenType::Arrow,
            TokenType::PlusEqual, TokenType::MinusEqual, TokenType::StarEqual,
            TokenType::SlashEqual, TokenType::Question, TokenType::Colon, TokenType::Dot,
            TokenType::LeftShiftEqual, TokenType::EndOfFile,
        ];
        assert_eq!(types, expected);
    }

    #[test]
    fn test_comments_and_newlines_are_skipped() {
        let types = token_types("a // trailing\n/* block\n comment */ + b");
        assert_eq!(
            types,
            vec![
                TokenType::Identifier("a".to_string()),
                TokenType::Plus,
                TokenType::Identifier("b".to_string()),
                TokenType::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_raw_text_and_locations() {
        let tokens = Lexer::with_filename("x ->\n  field", "expr.c").tokenize().unwrap();

        assert_eq!(tokens[1].text, "->");
        assert_eq!(tokens[2].text, "field");
        assert_eq!(tokens[2].span.start, SourceLocation::new("expr.c", 2, 3));
        assert_eq!(tokens[2].span.end, SourceLocation::new("expr.c", 2, 8));
        assert!(tokens[3].is_eof());
        assert_eq!(tokens[3].text, "");
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = Lexer::new("a /* never closed").tokenize().unwrap_err();
        assert!(matches!(err, CompilerError::LexError { .. }));
    }

    #[test]
    fn test_unexpected_character() {
        let err = Lexer::new("a @ b").tokenize().unwrap_err();
        match err {
            CompilerError::LexError { location, message } => {
                assert_eq!(location.column, 3);
                assert!(message.contains('@'));
            }
            other => panic!("Expected lexer error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_just_eof() {
        let tokens = Lexer::new("   \n\t ").tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }
}
