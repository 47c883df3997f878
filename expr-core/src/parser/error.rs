use crate::lexer::prelude::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseErrorType {
    ExpectedExpression,
    ExpectedRightParen,
}

/// Syntax diagnostic with the token it was raised at; the token supplies
/// the line and the `at '<lexeme>'` / `at end` context.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub token: Token,
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            ParseErrorType::ExpectedExpression => ("Expect expression.", vec![]),
            ParseErrorType::ExpectedRightParen => ("Expect ')' after expression.", vec![]),
        }
    }

    pub fn report(&self) -> String {
        let (message, _) = self.details();

        let location = match self.token.kind {
            TokenKind::Eof => " at end".to_string(),
            _ => format!(" at '{}'", self.token.lexeme),
        };

        format!("[line {}] Error{}: {}", self.token.line, location, message)
    }
}
