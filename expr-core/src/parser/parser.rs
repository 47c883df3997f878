use super::ast::{Expr, LiteralValue};
use super::error::{ParseError, ParseErrorType};
use crate::lexer::prelude::{Literal, Token, TokenKind};

/// Recursive descent over the precedence levels of the expression grammar.
/// Consumes an already-scanned token sequence; the sequence must end with
/// an `Eof` token, which `lexer::scan` guarantees.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Produces the single expression tree, or the first syntax error.
    /// Failure inside a grammar rule unwinds through `?`; callers only
    /// ever observe the returned `Result`.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        self.expression()
    }

    // expression -> equality
    fn expression(&mut self) -> Result<Expr, ParseError> {
        self.equality()
    }

    // equality -> comparison (("!=" | "==") comparison)*
    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;

        while self.match_kinds(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;

            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    // comparison -> term ((">" | ">=" | "<" | "<=") term)*
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;

        while self.match_kinds(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.term()?;

            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    // term -> factor (("-" | "+") factor)*
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;

        while self.match_kinds(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;

            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    // factor -> unary (("/" | "*") unary)*
    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;

        while self.match_kinds(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;

            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    // unary -> ("!" | "-") unary | primary
    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kinds(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.unary()?;

            return Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }

        self.primary()
    }

    // primary -> NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kinds(&[TokenKind::False]) {
            return Ok(Expr::Literal { value: LiteralValue::Bool(false) });
        }

        if self.match_kinds(&[TokenKind::True]) {
            return Ok(Expr::Literal { value: LiteralValue::Bool(true) });
        }

        if self.match_kinds(&[TokenKind::Nil]) {
            return Ok(Expr::Literal { value: LiteralValue::Nil });
        }

        if self.match_kinds(&[TokenKind::Number, TokenKind::String]) {
            let token = self.previous().clone();

            let value = match token.literal {
                Some(Literal::Number(number)) => LiteralValue::Number(number),
                Some(Literal::Text(text)) => LiteralValue::Text(text),
                None => return parse_error(ParseErrorType::ExpectedExpression, token),
            };

            return Ok(Expr::Literal { value });
        }

        if self.match_kinds(&[TokenKind::LeftParen]) {
            let expression = self.expression()?;
            self.consume(TokenKind::RightParen, ParseErrorType::ExpectedRightParen)?;

            return Ok(Expr::Grouping { expression: Box::new(expression) });
        }

        parse_error(ParseErrorType::ExpectedExpression, self.peek().clone())
    }

    fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(*kind) {
                self.advance();
                return true;
            }
        }

        false
    }

    fn consume(&mut self, kind: TokenKind, error: ParseErrorType) -> Result<Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance().clone());
        }

        parse_error(error, self.peek().clone())
    }

    fn check(&self, kind: TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }

        self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }

        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    /// Statement-boundary recovery: skips tokens until just past a `;` or
    /// up to a keyword that starts a statement. The expression grammar has
    /// no boundaries to resynchronize to, so nothing calls this yet; it is
    /// the extension point for a statement layer.
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            if self.peek().kind.starts_statement() {
                return;
            }

            self.advance();
        }
    }
}

pub fn parse_error<T>(error: ParseErrorType, token: Token) -> Result<T, ParseError> {
    Err(ParseError { error, token })
}
