use super::prelude::{scan, LexicalErrorType, Literal, TokenKind};

fn kinds(src: &str) -> Vec<TokenKind> {
    let (tokens, errors) = scan(src);
    assert!(errors.is_empty(), "unexpected lexical errors: {errors:?}");

    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_arithmetic_tokens() {
    let (tokens, errors) = scan("1+2*3");
    assert!(errors.is_empty());

    let expected = vec![
        TokenKind::Number,
        TokenKind::Plus,
        TokenKind::Number,
        TokenKind::Star,
        TokenKind::Number,
        TokenKind::Eof,
    ];

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<TokenKind>>(),
        expected
    );

    assert_eq!(tokens[0].literal, Some(Literal::Number(1.0)));
    assert_eq!(tokens[2].literal, Some(Literal::Number(2.0)));
    assert_eq!(tokens[4].literal, Some(Literal::Number(3.0)));
    assert_eq!(tokens[1].literal, None);
    assert_eq!(tokens[0].lexeme, "1");
}

#[test]
fn test_two_char_operators() {
    assert_eq!(
        kinds("!= == >= <= ! = > <"),
        vec![
            TokenKind::BangEqual,
            TokenKind::EqualEqual,
            TokenKind::GreaterEqual,
            TokenKind::LessEqual,
            TokenKind::Bang,
            TokenKind::Equal,
            TokenKind::Greater,
            TokenKind::Less,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_two_char_operator_fallback() {
    // `=` followed by something other than `=` falls back to the
    // one-character form
    assert_eq!(
        kinds("=1"),
        vec![TokenKind::Equal, TokenKind::Number, TokenKind::Eof]
    );
    assert_eq!(
        kinds("!("),
        vec![TokenKind::Bang, TokenKind::LeftParen, TokenKind::Eof]
    );
}

#[test]
fn test_single_char_tokens() {
    assert_eq!(
        kinds("(){},.-+;*/"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_line_comment() {
    let (tokens, errors) = scan("1 // the rest is ignored\n2");
    assert!(errors.is_empty());

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<TokenKind>>(),
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_comment_at_end_of_input() {
    assert_eq!(kinds("// nothing else"), vec![TokenKind::Eof]);
}

#[test]
fn test_line_tracking() {
    let (tokens, errors) = scan("1\n 2\r\n3");
    assert!(errors.is_empty());

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[2].line, 3);
    assert_eq!(tokens[3].line, 3); // Eof
}

#[test]
fn test_string_literal() {
    let (tokens, errors) = scan("\"hi\nthere\"");
    assert!(errors.is_empty());

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, Some(Literal::Text("hi\nthere".to_string())));
    assert_eq!(tokens[0].lexeme, "\"hi\nthere\"");
    // a newline inside the literal still advances the line counter
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn test_unterminated_string() {
    let (tokens, errors) = scan("\"abc");

    // no token for the broken string, scanning still reaches Eof
    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<TokenKind>>(),
        vec![TokenKind::Eof]
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error, LexicalErrorType::UnterminatedString);
    assert_eq!(errors[0].line, 1);
}

#[test]
fn test_unterminated_string_line() {
    let (_, errors) = scan("1\n\"abc");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, 2);
}

#[test]
fn test_number_trailing_dot() {
    // the dot is not consumed without a digit behind it
    let (tokens, errors) = scan("123.");
    assert!(errors.is_empty());

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<TokenKind>>(),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
    );
    assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
}

#[test]
fn test_decimal_number() {
    let (tokens, errors) = scan("3.25");
    assert!(errors.is_empty());

    assert_eq!(tokens[0].literal, Some(Literal::Number(3.25)));
    assert_eq!(tokens[0].lexeme, "3.25");
}

#[test]
fn test_identifiers_and_keywords() {
    assert_eq!(
        kinds("foo _bar true false nil and while"),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Nil,
            TokenKind::And,
            TokenKind::While,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unexpected_characters_accumulate() {
    let (tokens, errors) = scan("@ 1 #");

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<TokenKind>>(),
        vec![TokenKind::Number, TokenKind::Eof]
    );
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].error, LexicalErrorType::UnexpectedCharacter { ch: '@' });
    assert_eq!(errors[1].error, LexicalErrorType::UnexpectedCharacter { ch: '#' });
}

#[test]
fn test_token_display() {
    let (tokens, _) = scan("1 +");

    assert_eq!(format!("{}", tokens[0]), "Number 1 1");
    assert_eq!(format!("{}", tokens[1]), "Plus + nil");
}

#[test]
fn test_lexical_error_report() {
    let (_, errors) = scan("\"abc");

    assert_eq!(errors[0].report(), "[line 1] Error: Unterminated string.");
}
