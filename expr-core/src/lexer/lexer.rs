use super::error::{LexicalError, LexicalErrorType};
use super::token::{str_to_keyword, Literal, Token, TokenKind};
use crate::utils::prelude::SrcSpan;

pub type LexResult = std::result::Result<Token, LexicalError>;

/// Scans a stream of `(byte offset, char)` pairs into tokens with one
/// character of lookahead. Lines are 1-based and counted over every
/// newline seen, including newlines inside string literals.
#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
    position: u32,
    next_position: u32,
    ch: Option<char>,
    next_ch: Option<char>,
    line: usize,
    reached_eof: bool,
    input: T,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
    pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
            next_ch: None,
            line: 1,
            reached_eof: false,
            input,
        };

        lexer.next_char();
        lexer.next_char();

        lexer
    }

    pub fn next_token(&mut self) -> LexResult {
        let token = match self.ch {
            Some(ch) => match ch {
                '(' => self.eat_one_char(TokenKind::LeftParen),
                ')' => self.eat_one_char(TokenKind::RightParen),
                '{' => self.eat_one_char(TokenKind::LeftBrace),
                '}' => self.eat_one_char(TokenKind::RightBrace),
                ',' => self.eat_one_char(TokenKind::Comma),
                '.' => self.eat_one_char(TokenKind::Dot),
                '-' => self.eat_one_char(TokenKind::Minus),
                '+' => self.eat_one_char(TokenKind::Plus),
                ';' => self.eat_one_char(TokenKind::Semicolon),
                '*' => self.eat_one_char(TokenKind::Star),
                '/' => {
                    if self.next_ch == Some('/') {
                        self.skip_comment();
                        return self.next_token();
                    }

                    self.eat_one_char(TokenKind::Slash)
                },
                '!' => self.eat_operator('=', TokenKind::BangEqual, TokenKind::Bang),
                '=' => self.eat_operator('=', TokenKind::EqualEqual, TokenKind::Equal),
                '>' => self.eat_operator('=', TokenKind::GreaterEqual, TokenKind::Greater),
                '<' => self.eat_operator('=', TokenKind::LessEqual, TokenKind::Less),
                '"' => return self.lex_string(),
                '0'..='9' => self.lex_number(),
                'a'..='z' | 'A'..='Z' | '_' => self.lex_ident(),
                ' ' | '\t' | '\r' => {
                    self.next_char();
                    return self.next_token();
                },
                '\n' => {
                    self.next_char();
                    self.line += 1;
                    return self.next_token();
                },
                c => {
                    let start = self.position;
                    self.next_char();
                    let end = self.position;

                    return Err(LexicalError {
                        error: LexicalErrorType::UnexpectedCharacter { ch: c },
                        location: SrcSpan { start, end },
                        line: self.line,
                    });
                }
            },
            None => {
                self.reached_eof = true;

                Token::new(
                    TokenKind::Eof,
                    String::new(),
                    None,
                    self.line,
                    SrcSpan { start: self.position, end: self.position },
                )
            }
        };

        Ok(token)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.ch;

        let next = match self.input.next() {
            Some((pos, ch)) => {
                self.position = self.next_position;
                self.next_position = pos;

                Some(ch)
            },
            None => {
                self.position = self.next_position;
                self.next_position += 1;

                None
            }
        };

        self.ch = self.next_ch;
        self.next_ch = next;

        ch
    }

    fn eat_one_char(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        let mut lexeme = String::new();

        if let Some(ch) = self.next_char() {
            lexeme.push(ch);
        }

        let end = self.position;

        Token::new(kind, lexeme, None, self.line, SrcSpan { start, end })
    }

    // `!` `=` `>` `<` join a following `=` into the two-character operator
    // and fall back to the one-character form otherwise.
    fn eat_operator(&mut self, expected: char, two: TokenKind, one: TokenKind) -> Token {
        let start = self.position;
        let mut lexeme = String::new();

        if let Some(ch) = self.next_char() {
            lexeme.push(ch);
        }

        let kind = if self.ch == Some(expected) {
            if let Some(ch) = self.next_char() {
                lexeme.push(ch);
            }

            two
        } else {
            one
        };

        let end = self.position;

        Token::new(kind, lexeme, None, self.line, SrcSpan { start, end })
    }

    fn skip_comment(&mut self) {
        // consume `//` and everything up to (not including) the newline
        self.next_char();
        self.next_char();

        while !matches!(self.ch, Some('\n') | None) {
            self.next_char();
        }
    }

    fn lex_string(&mut self) -> LexResult {
        let start = self.position;
        let mut lexeme = String::new();
        let mut value = String::new();

        if let Some(quote) = self.next_char() {
            lexeme.push(quote);
        }

        loop {
            match self.ch {
                Some('"') => {
                    if let Some(quote) = self.next_char() {
                        lexeme.push(quote);
                    }

                    let end = self.position;

                    return Ok(Token::new(
                        TokenKind::String,
                        lexeme,
                        Some(Literal::Text(value)),
                        self.line,
                        SrcSpan { start, end },
                    ));
                },
                Some(ch) => {
                    if ch == '\n' {
                        self.line += 1;
                    }

                    value.push(ch);

                    if let Some(ch) = self.next_char() {
                        lexeme.push(ch);
                    }
                },
                // input ended before the closing quote; no token is emitted
                None => {
                    return Err(LexicalError {
                        error: LexicalErrorType::UnterminatedString,
                        location: SrcSpan { start, end: self.position },
                        line: self.line,
                    });
                }
            }
        }
    }

    fn lex_number(&mut self) -> Token {
        let start = self.position;
        let mut value = String::new();

        while matches!(self.ch, Some(ch) if ch.is_ascii_digit()) {
            if let Some(ch) = self.next_char() {
                value.push(ch);
            }
        }

        // a dot is part of the number only when a digit follows it;
        // a trailing dot is left for the next token
        if self.ch == Some('.') && matches!(self.next_ch, Some(ch) if ch.is_ascii_digit()) {
            if let Some(dot) = self.next_char() {
                value.push(dot);
            }

            while matches!(self.ch, Some(ch) if ch.is_ascii_digit()) {
                if let Some(ch) = self.next_char() {
                    value.push(ch);
                }
            }
        }

        let end = self.position;

        let number = match value.parse::<f64>() {
            Ok(number) => number,
            Err(_) => unreachable!("digit runs always parse as f64"),
        };

        Token::new(
            TokenKind::Number,
            value,
            Some(Literal::Number(number)),
            self.line,
            SrcSpan { start, end },
        )
    }

    fn lex_ident(&mut self) -> Token {
        let start = self.position;
        let mut ident = String::new();

        while matches!(self.ch, Some(ch) if ch.is_ascii_alphabetic() || ch == '_') {
            if let Some(ch) = self.next_char() {
                ident.push(ch);
            }
        }

        let end = self.position;

        let kind = match str_to_keyword(&ident) {
            Some(keyword) => keyword,
            None => TokenKind::Identifier,
        };

        Token::new(kind, ident, None, self.line, SrcSpan { start, end })
    }
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
    type Item = LexResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reached_eof {
            return None;
        }

        Some(self.next_token())
    }
}

/// Drains the lexer, splitting tokens from diagnostics. Scanning runs to
/// completion: errors never abort it and the token sequence always ends
/// with exactly one `Eof`.
pub fn scan_tokens<T: Iterator<Item = (u32, char)>>(
    mut lexer: Lexer<T>
) -> (Vec<Token>, Vec<LexicalError>) {
    let mut tokens = vec![];
    let mut errors = vec![];

    loop {
        match lexer.next_token() {
            Ok(token) => {
                let at_end = token.kind == TokenKind::Eof;
                tokens.push(token);

                if at_end {
                    break;
                }
            },
            Err(error) => errors.push(error),
        }
    }

    (tokens, errors)
}

pub fn scan(src: &str) -> (Vec<Token>, Vec<LexicalError>) {
    scan_tokens(Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c))))
}
