use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::{
    eval::error::RuntimeError,
    lexer::prelude::{LexicalError, TokenKind},
    parser::prelude::ParseError,
    utils::prelude::SrcSpan,
};
use super::diagnostic::{Diagnostic, Label, Level, Location};

/// Static errors (lexical and syntactic) and runtime errors are separate
/// tiers and map to separate exit code classes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to scan source code")]
    Lex {
        path: PathBuf,
        src: String,
        errors: Vec<LexicalError>
    },
    #[error("failed to parse source code")]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError
    },
    #[error("failed to evaluate expression")]
    Runtime {
        path: PathBuf,
        src: String,
        error: RuntimeError
    },
    #[error("IO operation failed")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Lex { .. } | Error::Parse { .. } => 65,
            Error::Runtime { .. } => 70,
            Error::StdIo { .. } => 74,
        }
    }

    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buf);
            writeln!(buf).expect("write new line diagnostic");
        }
    }

    /// One plain `[line <n>] Error<where>: <message>` report per diagnostic.
    pub fn reports(&self) -> Vec<String> {
        match self {
            Error::Lex { errors, .. } => errors.iter()
                .map(|error| error.report())
                .collect(),
            Error::Parse { error, .. } => vec![error.report()],
            Error::Runtime { error, .. } => vec![error.report()],
            Error::StdIo { err } => vec![format!("Standard IO error: {err}")],
        }
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Lex { path, src, errors } => {
                errors.iter()
                    .map(|error| {
                        let (label, extra) = error.details();

                        Diagnostic {
                            title: "Lexical error".into(),
                            text: extra.join("\n"),
                            level: Level::Error,
                            location: Some(Location {
                                src,
                                path: path.clone(),
                                label: Label {
                                    text: Some(label.to_string()),
                                    span: error.location,
                                },
                            }),
                        }
                    })
                    .collect()
            },
            Error::Parse { path, src, error } => {
                let (label, extra) = error.details();
                let text = extra.join("\n");

                let adjusted_location = if error.token.kind == TokenKind::Eof {
                    SrcSpan {
                        start: src.len() as u32,
                        end: src.len() as u32,
                    }
                } else {
                    error.token.location
                };

                vec![Diagnostic {
                    title: "Syntax error".into(),
                    text,
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: adjusted_location,
                        },
                    }),
                }]
            },
            Error::Runtime { path, src, error } => {
                let (label, extra) = error.details();
                let text = extra.join("\n");

                vec![Diagnostic {
                    title: "Runtime error".into(),
                    text,
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: error.token.location,
                        },
                    }),
                }]
            },
            Error::StdIo { err } => {
                vec![Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{err}"),
                    level: Level::Error,
                    location: None,
                }]
            }
        }
    }
}
