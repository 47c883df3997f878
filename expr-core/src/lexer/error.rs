use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LexicalErrorType {
    UnexpectedCharacter { ch: char },
    UnterminatedString,
}

/// Non-fatal scanning diagnostic. Scanning continues past it; the caller
/// decides whether the accumulated set suppresses later stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan,
    pub line: usize,
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnexpectedCharacter { ch } => {
                ("Unexpected character.", vec![format!("`{ch}` is not part of the grammar")])
            },
            LexicalErrorType::UnterminatedString => {
                ("Unterminated string.", vec![])
            },
        }
    }

    pub fn report(&self) -> String {
        let (message, _) = self.details();
        format!("[line {}] Error: {}", self.line, message)
    }
}
